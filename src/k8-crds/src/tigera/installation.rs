use k8_manifest::schema::Attribute;
use k8_manifest::schema::AttributeType;
use k8_manifest::schema::Constraint;
use k8_manifest::schema::STRING_LIST;
use k8_manifest::types::Crd;
use k8_manifest::types::CrdNames;
use k8_manifest::types::Scope;
use k8_manifest::ResourceDefinition;

use super::ENABLED_DISABLED;
use super::GROUP;
use super::TOLERATION;
use super::V1;

const PROVIDERS: &[&str] = &[
    "",
    "EKS",
    "GKE",
    "AKS",
    "OpenShift",
    "DockerEnterprise",
    "RKE2",
    "TKG",
];

const ENCAPSULATIONS: &[&str] = &[
    "IPIPCrossSubnet",
    "IPIP",
    "VXLAN",
    "VXLANCrossSubnet",
    "None",
];

const KEY_ALGORITHMS: &[&str] = &[
    "",
    "RSAWithSize2048",
    "RSAWithSize4096",
    "RSAWithSize8192",
    "ECDSAWithCurve256",
    "ECDSAWithCurve384",
    "ECDSAWithCurve521",
];

const SIGNATURE_ALGORITHMS: &[&str] = &[
    "",
    "SHA256WithRSA",
    "SHA384WithRSA",
    "SHA512WithRSA",
    "ECDSAWithSHA256",
    "ECDSAWithSHA384",
    "ECDSAWithSHA512",
];

const IMAGE_PULL_SECRET: &[Attribute] = &[Attribute::optional(
    "name",
    AttributeType::String,
    "Name of the referent.",
)];

const IPAM: &[Attribute] = &[Attribute::required(
    "type",
    AttributeType::String,
    "Specifies the IPAM plugin that will be used in the Calico or Calico Enterprise installation.",
)
.with(&[Constraint::one_of(&[
    "Calico",
    "HostLocal",
    "AmazonVPC",
    "AzureVNET",
])])];

const CNI: &[Attribute] = &[
    Attribute::required(
        "type",
        AttributeType::String,
        "Specifies the CNI plugin that will be used in the Calico or Calico Enterprise installation.",
    )
    .with(&[Constraint::one_of(&["Calico", "GKE", "AmazonVPC", "AzureVNET"])]),
    Attribute::optional(
        "ipam",
        AttributeType::Object(IPAM),
        "IPAM specifies the pod IP address management that will be used in the Calico or Calico Enterprise installation.",
    ),
];

const IP_POOL: &[Attribute] = &[
    Attribute::required(
        "cidr",
        AttributeType::String,
        "CIDR contains the address range for the IP Pool in classless inter-domain routing format.",
    ),
    Attribute::optional(
        "encapsulation",
        AttributeType::String,
        "Encapsulation specifies the encapsulation type that will be used with the IP Pool.",
    )
    .with(&[Constraint::one_of(ENCAPSULATIONS)]),
    Attribute::optional(
        "natOutgoing",
        AttributeType::String,
        "NATOutgoing specifies if NAT will be enabled or disabled for outgoing traffic.",
    )
    .with(&[Constraint::one_of(ENABLED_DISABLED)]),
    Attribute::optional(
        "nodeSelector",
        AttributeType::String,
        "NodeSelector specifies the node selector that will be set for the IP Pool.",
    ),
    Attribute::optional(
        "blockSize",
        AttributeType::Int64,
        "BlockSize specifies the CIDR prefex length to use when allocating per-node IP blocks from the main IP pool CIDR.",
    ),
    Attribute::optional(
        "disableBGPExport",
        AttributeType::Bool,
        "DisableBGPExport specifies whether routes from this IP pool's CIDR are exported over BGP.",
    ),
];

const NODE_ADDRESS_AUTODETECTION: &[Attribute] = &[
    Attribute::optional(
        "firstFound",
        AttributeType::Bool,
        "FirstFound uses default interface matching parameters to select an interface, performing best-effort filtering based on well-known interface names.",
    ),
    Attribute::optional(
        "kubernetes",
        AttributeType::String,
        "Kubernetes configures Calico to detect node addresses based on the Kubernetes API.",
    )
    .with(&[Constraint::one_of(&["NodeInternalIP"])]),
    Attribute::optional(
        "interface",
        AttributeType::String,
        "Interface enables IP auto-detection based on interfaces that match the given regex.",
    ),
    Attribute::optional(
        "skipInterface",
        AttributeType::String,
        "SkipInterface enables IP auto-detection based on interfaces that do not match the given regex.",
    ),
    Attribute::optional(
        "canReach",
        AttributeType::String,
        "CanReach enables IP auto-detection based on which source address on the node is used to reach the specified IP or domain.",
    ),
    Attribute::optional(
        "cidrs",
        STRING_LIST,
        "CIDRS enables IP auto-detection based on which addresses on the nodes are within one of the provided CIDRs.",
    ),
];

const CALICO_NETWORK: &[Attribute] = &[
    Attribute::optional(
        "linuxDataplane",
        AttributeType::String,
        "LinuxDataplane is used to select the dataplane used for Linux nodes.",
    )
    .with(&[Constraint::one_of(&["Iptables", "BPF", "VPP"])]),
    Attribute::optional(
        "bgp",
        AttributeType::String,
        "BGP configures whether or not to enable Calico's BGP capabilities.",
    )
    .with(&[Constraint::one_of(ENABLED_DISABLED)]),
    Attribute::optional(
        "ipPools",
        AttributeType::List(&AttributeType::Object(IP_POOL)),
        "IPPools contains a list of IP pools to create if none exist.",
    ),
    Attribute::optional(
        "mtu",
        AttributeType::Int64,
        "MTU specifies the maximum transmission unit to use on the pod network.",
    ),
    Attribute::optional(
        "nodeAddressAutodetectionV4",
        AttributeType::Object(NODE_ADDRESS_AUTODETECTION),
        "NodeAddressAutodetectionV4 specifies an approach to automatically detect node IPv4 addresses.",
    ),
    Attribute::optional(
        "nodeAddressAutodetectionV6",
        AttributeType::Object(NODE_ADDRESS_AUTODETECTION),
        "NodeAddressAutodetectionV6 specifies an approach to automatically detect node IPv6 addresses.",
    ),
    Attribute::optional(
        "hostPorts",
        AttributeType::String,
        "HostPorts configures whether or not Calico will support Kubernetes HostPorts.",
    )
    .with(&[Constraint::one_of(ENABLED_DISABLED)]),
    Attribute::optional(
        "multiInterfaceMode",
        AttributeType::String,
        "MultiInterfaceMode configures what will configure multiple interface per pod.",
    )
    .with(&[Constraint::one_of(&["None", "Multus"])]),
    Attribute::optional(
        "containerIPForwarding",
        AttributeType::String,
        "ContainerIPForwarding configures whether ip forwarding will be enabled for containers in the CNI configuration.",
    )
    .with(&[Constraint::one_of(ENABLED_DISABLED)]),
];

const CNI_LOGGING: &[Attribute] = &[
    Attribute::optional(
        "logSeverity",
        AttributeType::String,
        "LogSeverity sets the log severity of the CNI plugin.",
    )
    .with(&[Constraint::one_of(&["Error", "Warning", "Info", "Debug"])]),
    Attribute::optional(
        "logFileMaxSize",
        AttributeType::String,
        "LogFileMaxSize is the maximum size the CNI log file may grow to before it is rotated.",
    ),
    Attribute::optional(
        "logFileMaxAgeDays",
        AttributeType::Int64,
        "LogFileMaxAgeDays is the number of days to retain rotated CNI log files.",
    )
    .with(&[Constraint::at_least(0)]),
    Attribute::optional(
        "logFileMaxCount",
        AttributeType::Int64,
        "LogFileMaxCount is the number of rotated CNI log files to keep.",
    )
    .with(&[Constraint::at_least(0)]),
];

const LOGGING: &[Attribute] = &[Attribute::optional(
    "cni",
    AttributeType::Object(CNI_LOGGING),
    "Customized logging specification for calico-cni plugin.",
)];

const CERTIFICATE_MANAGEMENT: &[Attribute] = &[
    Attribute::required(
        "caCert",
        AttributeType::String,
        "Certificate of the authority that signs the CertificateSigningRequests in PEM format, base64 encoded.",
    )
    .with(&[Constraint::Base64]),
    Attribute::required(
        "signerName",
        AttributeType::String,
        "When a CSR is issued to the certificates.k8s.io API, the signerName is added to the request in order to accommodate for clusters with multiple signers.",
    ),
    Attribute::optional(
        "keyAlgorithm",
        AttributeType::String,
        "Specify the algorithm used by pods to generate a key pair that is associated with the X.509 certificate request.",
    )
    .with(&[Constraint::one_of(KEY_ALGORITHMS)]),
    Attribute::optional(
        "signatureAlgorithm",
        AttributeType::String,
        "Specify the algorithm used for the signature of the X.509 certificate request.",
    )
    .with(&[Constraint::one_of(SIGNATURE_ALGORITHMS)]),
];

const SPEC: &[Attribute] = &[
    Attribute::optional(
        "variant",
        AttributeType::String,
        "Variant is the product to install - one of Calico or TigeraSecureEnterprise.",
    )
    .with(&[Constraint::one_of(&["Calico", "TigeraSecureEnterprise"])]),
    Attribute::optional(
        "registry",
        AttributeType::String,
        "Registry is the default Docker registry used for component Docker images.",
    ),
    Attribute::optional(
        "imagePath",
        AttributeType::String,
        "ImagePath allows for the path part of an image to be specified.",
    ),
    Attribute::optional(
        "imagePrefix",
        AttributeType::String,
        "ImagePrefix allows for the prefix part of an image to be specified.",
    ),
    Attribute::optional(
        "imagePullSecrets",
        AttributeType::List(&AttributeType::Object(IMAGE_PULL_SECRET)),
        "ImagePullSecrets is an array of references to container registry pull secrets to use.",
    ),
    Attribute::optional(
        "kubernetesProvider",
        AttributeType::String,
        "KubernetesProvider specifies a particular provider of the Kubernetes platform and enables provider-specific configuration.",
    )
    .with(&[Constraint::one_of(PROVIDERS)]),
    Attribute::optional(
        "cni",
        AttributeType::Object(CNI),
        "CNI specifies the CNI that will be used by this installation.",
    ),
    Attribute::optional(
        "calicoNetwork",
        AttributeType::Object(CALICO_NETWORK),
        "CalicoNetwork specifies networking configuration options for Calico.",
    ),
    Attribute::optional(
        "controlPlaneNodeSelector",
        AttributeType::Map,
        "ControlPlaneNodeSelector is used to select control plane nodes on which to run Calico components.",
    ),
    Attribute::optional(
        "controlPlaneTolerations",
        AttributeType::List(&AttributeType::Object(TOLERATION)),
        "ControlPlaneTolerations specify tolerations which are then globally applied to all resources created by the operator.",
    ),
    Attribute::optional(
        "controlPlaneReplicas",
        AttributeType::Int64,
        "ControlPlaneReplicas defines how many replicas of the control plane core components will be deployed.",
    ),
    Attribute::optional(
        "nodeMetricsPort",
        AttributeType::Int64,
        "NodeMetricsPort specifies which port calico/node serves prometheus metrics on.",
    ),
    Attribute::optional(
        "typhaMetricsPort",
        AttributeType::Int64,
        "TyphaMetricsPort specifies which port calico/typha serves prometheus metrics on.",
    ),
    Attribute::optional(
        "flexVolumePath",
        AttributeType::String,
        "FlexVolumePath optionally specifies a custom path for FlexVolume.",
    ),
    Attribute::optional(
        "kubeletVolumePluginPath",
        AttributeType::String,
        "KubeletVolumePluginPath optionally specifies enablement of Calico CSI plugin.",
    ),
    Attribute::optional(
        "nonPrivileged",
        AttributeType::String,
        "NonPrivileged configures Calico to be run in non-privileged containers as non-root users where possible.",
    )
    .with(&[Constraint::one_of(ENABLED_DISABLED)]),
    Attribute::optional(
        "fipsMode",
        AttributeType::String,
        "FIPSMode uses images and features only that are using FIPS 140-2 validated cryptographic modules and standards.",
    )
    .with(&[Constraint::one_of(ENABLED_DISABLED)]),
    Attribute::optional(
        "serviceCIDRs",
        STRING_LIST,
        "Kubernetes Service CIDRs. Specifying this is required when using Calico for Windows.",
    )
    .named("service_cidrs"),
    Attribute::optional(
        "logging",
        AttributeType::Object(LOGGING),
        "Logging Configuration for Components",
    ),
    Attribute::optional(
        "certificateManagement",
        AttributeType::Object(CERTIFICATE_MANAGEMENT),
        "CertificateManagement configures pods to submit a CertificateSigningRequest to the certificates.k8s.io/v1 API in order to obtain TLS certificates.",
    ),
];

pub static INSTALLATION: ResourceDefinition = ResourceDefinition::new(
    Crd {
        group: GROUP,
        version: V1,
        names: CrdNames {
            kind: "Installation",
            plural: "installations",
            singular: "installation",
        },
        scope: Scope::Cluster,
    },
    "Installation configures an installation of Calico or Calico Enterprise. At most one instance of this resource is supported. It must be named 'default'.",
    Attribute::optional(
        "spec",
        AttributeType::Object(SPEC),
        "Specification of the desired state for the Calico or Calico Enterprise installation.",
    ),
);

use k8_manifest::schema::Attribute;
use k8_manifest::schema::AttributeType;
use k8_manifest::schema::Constraint;
use k8_manifest::types::Crd;
use k8_manifest::types::CrdNames;
use k8_manifest::types::Scope;
use k8_manifest::ResourceDefinition;

use super::GROUP;
use super::OVERRIDE_METADATA;
use super::TOLERATIONS;
use super::V1;

const POD_SPEC: &[Attribute] = &[
    Attribute::optional(
        "nodeSelector",
        AttributeType::Map,
        "NodeSelector is the API server pod's scheduling constraints.",
    ),
    TOLERATIONS,
];

const POD_TEMPLATE: &[Attribute] = &[
    OVERRIDE_METADATA,
    Attribute::optional(
        "spec",
        AttributeType::Object(POD_SPEC),
        "Spec is the API server Deployment's PodSpec.",
    ),
];

const DEPLOYMENT_SPEC: &[Attribute] = &[
    Attribute::optional(
        "minReadySeconds",
        AttributeType::Int64,
        "MinReadySeconds is the minimum number of seconds for which a newly created Deployment pod should be ready without any of its container crashing.",
    )
    .with(&[Constraint::between(0, 2_147_483_647)]),
    Attribute::optional(
        "template",
        AttributeType::Object(POD_TEMPLATE),
        "Template describes the API server Deployment pod that will be created.",
    ),
];

const DEPLOYMENT: &[Attribute] = &[
    OVERRIDE_METADATA,
    Attribute::optional(
        "spec",
        AttributeType::Object(DEPLOYMENT_SPEC),
        "Spec is the specification of the API server Deployment.",
    ),
];

const SPEC: &[Attribute] = &[Attribute::optional(
    "apiServerDeployment",
    AttributeType::Object(DEPLOYMENT),
    "APIServerDeployment configures the calico-apiserver (or tigera-apiserver in Enterprise) Deployment.",
)];

pub static API_SERVER: ResourceDefinition = ResourceDefinition::new(
    Crd {
        group: GROUP,
        version: V1,
        names: CrdNames {
            kind: "APIServer",
            plural: "apiservers",
            singular: "apiserver",
        },
        scope: Scope::Cluster,
    },
    "APIServer installs the Tigera API server and related resources. At most one instance of this resource is supported. It must be named 'default' or 'tigera-secure'.",
    Attribute::optional(
        "spec",
        AttributeType::Object(SPEC),
        "Specification of the desired state for the Tigera API server.",
    ),
);

use k8_manifest::schema::Attribute;
use k8_manifest::schema::AttributeType;
use k8_manifest::schema::Constraint;
use k8_manifest::schema::STRING_LIST;
use k8_manifest::types::Crd;
use k8_manifest::types::CrdNames;
use k8_manifest::types::Scope;
use k8_manifest::ResourceDefinition;

use super::GROUP;
use super::GROUP_ATTRIBUTE;
use super::HOSTNAME_PATTERN;
use super::KIND_ATTRIBUTE;
use super::KIND_PATTERN;
use super::NAMESPACE_ATTRIBUTE;
use super::NAME_ATTRIBUTE;
use super::SECTION_NAME_PATTERN;
use super::V1BETA1;

const PROTOCOL_PATTERN: &str = r"^[a-zA-Z0-9]([-a-zA-Z0-9]*[a-zA-Z0-9])?$|[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*/[A-Za-z0-9]+$";

const ADDRESS_TYPE_PATTERN: &str = r"^Hostname|IPAddress|NamedAddress|[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*/[A-Za-z0-9/\-._~%!$&'()*+,;=:]+$";

const CERTIFICATE_REF: &[Attribute] = &[
    GROUP_ATTRIBUTE,
    KIND_ATTRIBUTE,
    NAME_ATTRIBUTE,
    NAMESPACE_ATTRIBUTE,
];

const TLS_CONFIG: &[Attribute] = &[
    Attribute::optional(
        "mode",
        AttributeType::String,
        "Mode defines the TLS behavior for the TLS session initiated by the client.",
    )
    .with(&[Constraint::one_of(&["Terminate", "Passthrough"])]),
    Attribute::optional(
        "certificateRefs",
        AttributeType::List(&AttributeType::Object(CERTIFICATE_REF)),
        "CertificateRefs contains a series of references to Kubernetes objects that contains TLS certificates and private keys.",
    )
    .with(&[Constraint::max_size(64)]),
    Attribute::optional(
        "options",
        AttributeType::Map,
        "Options are a list of key/value pairs to enable extended TLS configuration for each implementation.",
    )
    .with(&[Constraint::max_size(16)]),
];

const LABEL_SELECTOR_REQUIREMENT: &[Attribute] = &[
    Attribute::required(
        "key",
        AttributeType::String,
        "key is the label key that the selector applies to.",
    ),
    Attribute::required(
        "operator",
        AttributeType::String,
        "operator represents a key's relationship to a set of values.",
    )
    .with(&[Constraint::one_of(&["In", "NotIn", "Exists", "DoesNotExist"])]),
    Attribute::optional(
        "values",
        STRING_LIST,
        "values is an array of string values. Must be empty for the operators Exists and DoesNotExist.",
    ),
];

const LABEL_SELECTOR: &[Attribute] = &[
    Attribute::optional(
        "matchExpressions",
        AttributeType::List(&AttributeType::Object(LABEL_SELECTOR_REQUIREMENT)),
        "matchExpressions is a list of label selector requirements. The requirements are ANDed.",
    ),
    Attribute::optional(
        "matchLabels",
        AttributeType::Map,
        "matchLabels is a map of {key,value} pairs.",
    ),
];

const ROUTE_NAMESPACES: &[Attribute] = &[
    Attribute::optional(
        "from",
        AttributeType::String,
        "From indicates where Routes will be selected for this Gateway.",
    )
    .with(&[Constraint::one_of(&["All", "Selector", "Same"])]),
    Attribute::optional(
        "selector",
        AttributeType::Object(LABEL_SELECTOR),
        "Selector must be specified when From is set to 'Selector'.",
    ),
];

const ROUTE_GROUP_KIND: &[Attribute] = &[
    GROUP_ATTRIBUTE,
    Attribute::required("kind", AttributeType::String, "Kind is the kind of the Route.")
        .with(&[Constraint::length(1, 63), Constraint::matches(KIND_PATTERN)]),
];

const ALLOWED_ROUTES: &[Attribute] = &[
    Attribute::optional(
        "namespaces",
        AttributeType::Object(ROUTE_NAMESPACES),
        "Namespaces indicates namespaces from which Routes may be attached to this Listener.",
    ),
    Attribute::optional(
        "kinds",
        AttributeType::List(&AttributeType::Object(ROUTE_GROUP_KIND)),
        "Kinds specifies the groups and kinds of Routes that are allowed to bind to this Gateway Listener.",
    )
    .with(&[Constraint::max_size(8)]),
];

const LISTENER: &[Attribute] = &[
    Attribute::required(
        "name",
        AttributeType::String,
        "Name is the name of the Listener. This name MUST be unique within a Gateway.",
    )
    .with(&[
        Constraint::length(1, 253),
        Constraint::matches(SECTION_NAME_PATTERN),
    ]),
    Attribute::optional(
        "hostname",
        AttributeType::String,
        "Hostname specifies the virtual hostname to match for protocol types that define this concept.",
    )
    .with(&[
        Constraint::length(1, 253),
        Constraint::matches(HOSTNAME_PATTERN),
    ]),
    Attribute::required(
        "port",
        AttributeType::Int64,
        "Port is the network port. Multiple listeners may use the same port, subject to the Listener compatibility rules.",
    )
    .with(&[Constraint::between(1, 65535)]),
    Attribute::required(
        "protocol",
        AttributeType::String,
        "Protocol specifies the network protocol this listener expects to receive.",
    )
    .with(&[
        Constraint::length(1, 255),
        Constraint::matches(PROTOCOL_PATTERN),
    ]),
    Attribute::optional(
        "tls",
        AttributeType::Object(TLS_CONFIG),
        "TLS is the TLS configuration for the Listener.",
    ),
    Attribute::optional(
        "allowedRoutes",
        AttributeType::Object(ALLOWED_ROUTES),
        "AllowedRoutes defines the types of routes that MAY be attached to a Listener and the trusted namespaces where those Route resources MAY be present.",
    ),
];

const ADDRESS: &[Attribute] = &[
    Attribute::optional(
        "type",
        AttributeType::String,
        "Type of the address.",
    )
    .with(&[
        Constraint::length(1, 253),
        Constraint::matches(ADDRESS_TYPE_PATTERN),
    ]),
    Attribute::required(
        "value",
        AttributeType::String,
        "Value of the address. The validity of the values will depend on the type and support by the controller.",
    )
    .with(&[Constraint::length(1, 253)]),
];

const SPEC: &[Attribute] = &[
    Attribute::required(
        "gatewayClassName",
        AttributeType::String,
        "GatewayClassName used for this Gateway. This is the name of a GatewayClass resource.",
    )
    .with(&[Constraint::length(1, 253)]),
    Attribute::required(
        "listeners",
        AttributeType::List(&AttributeType::Object(LISTENER)),
        "Listeners associated with this Gateway. Listeners define logical endpoints that are bound on this Gateway's addresses.",
    )
    .with(&[Constraint::size(1, 64)]),
    Attribute::optional(
        "addresses",
        AttributeType::List(&AttributeType::Object(ADDRESS)),
        "Addresses requested for this Gateway.",
    )
    .with(&[Constraint::max_size(16)]),
];

pub static GATEWAY: ResourceDefinition = ResourceDefinition::new(
    Crd {
        group: GROUP,
        version: V1BETA1,
        names: CrdNames {
            kind: "Gateway",
            plural: "gateways",
            singular: "gateway",
        },
        scope: Scope::Namespaced,
    },
    "Gateway represents an instance of a service-traffic handling infrastructure by binding Listeners to a set of IP addresses.",
    Attribute::required(
        "spec",
        AttributeType::Object(SPEC),
        "Spec defines the desired state of Gateway.",
    ),
);

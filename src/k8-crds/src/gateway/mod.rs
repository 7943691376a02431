//!
//! # Gateway API
//!
//! Kinds of the `gateway.networking.k8s.io` group and the blocks they share.
//!
mod gateway;
mod gateway_class;
mod grpc_route;
mod http_route;
mod reference_grant;
mod tcp_route;
mod tls_route;
mod udp_route;

pub use self::gateway::GATEWAY;
pub use self::gateway_class::GATEWAY_CLASS;
pub use self::grpc_route::GRPC_ROUTE;
pub use self::http_route::HTTP_ROUTE;
pub use self::reference_grant::REFERENCE_GRANT;
pub use self::tcp_route::TCP_ROUTE;
pub use self::tls_route::TLS_ROUTE;
pub use self::udp_route::UDP_ROUTE;

use k8_manifest::schema::Attribute;
use k8_manifest::schema::AttributeType;
use k8_manifest::schema::Constraint;

pub const GROUP: &str = "gateway.networking.k8s.io";
pub const V1ALPHA2: &str = "v1alpha2";
pub const V1BETA1: &str = "v1beta1";

pub(crate) const GROUP_PATTERN: &str =
    r"^$|^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$";
pub(crate) const KIND_PATTERN: &str = r"^[a-zA-Z]([-a-zA-Z0-9]*[a-zA-Z0-9])?$";
pub(crate) const NAMESPACE_PATTERN: &str = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$";
pub(crate) const SECTION_NAME_PATTERN: &str =
    r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$";
pub(crate) const HOSTNAME_PATTERN: &str =
    r"^(\*\.)?[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$";
pub(crate) const PRECISE_HOSTNAME_PATTERN: &str =
    r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$";
pub(crate) const HEADER_NAME_PATTERN: &str = r"^[A-Za-z0-9!#$%&'*+\-.^_\x60|~]+$";

const GROUP_CONSTRAINTS: &[Constraint] =
    &[Constraint::max_length(253), Constraint::matches(GROUP_PATTERN)];
const KIND_CONSTRAINTS: &[Constraint] =
    &[Constraint::length(1, 63), Constraint::matches(KIND_PATTERN)];
const NAME_CONSTRAINTS: &[Constraint] = &[Constraint::length(1, 253)];
const NAMESPACE_CONSTRAINTS: &[Constraint] =
    &[Constraint::length(1, 63), Constraint::matches(NAMESPACE_PATTERN)];
const PORT_CONSTRAINTS: &[Constraint] = &[Constraint::between(1, 65535)];

pub(crate) const GROUP_ATTRIBUTE: Attribute = Attribute::optional(
    "group",
    AttributeType::String,
    "Group is the group of the referent. When unspecified or empty string, core API group is inferred.",
)
.with(GROUP_CONSTRAINTS);

pub(crate) const KIND_ATTRIBUTE: Attribute = Attribute::optional(
    "kind",
    AttributeType::String,
    "Kind is kind of the referent.",
)
.with(KIND_CONSTRAINTS);

pub(crate) const NAME_ATTRIBUTE: Attribute = Attribute::required(
    "name",
    AttributeType::String,
    "Name is the name of the referent.",
)
.with(NAME_CONSTRAINTS);

pub(crate) const NAMESPACE_ATTRIBUTE: Attribute = Attribute::optional(
    "namespace",
    AttributeType::String,
    "Namespace is the namespace of the referent. When unspecified, the local namespace is inferred.",
)
.with(NAMESPACE_CONSTRAINTS);

pub(crate) const PORT_ATTRIBUTE: Attribute = Attribute::optional(
    "port",
    AttributeType::Int64,
    "Port specifies the destination port number to use for this resource.",
)
.with(PORT_CONSTRAINTS);

const PARENT_REFERENCE: &[Attribute] = &[
    GROUP_ATTRIBUTE,
    KIND_ATTRIBUTE,
    NAMESPACE_ATTRIBUTE,
    NAME_ATTRIBUTE,
    Attribute::optional(
        "sectionName",
        AttributeType::String,
        "SectionName is the name of a section within the target resource, such as a listener name of a Gateway.",
    )
    .with(&[
        Constraint::length(1, 253),
        Constraint::matches(SECTION_NAME_PATTERN),
    ]),
    Attribute::optional(
        "port",
        AttributeType::Int64,
        "Port is the network port this Route targets.",
    )
    .with(PORT_CONSTRAINTS),
];

pub(crate) const PARENT_REFS: Attribute = Attribute::optional(
    "parentRefs",
    AttributeType::List(&AttributeType::Object(PARENT_REFERENCE)),
    "ParentRefs references the resources (usually Gateways) that a Route wants to be attached to.",
)
.with(&[Constraint::max_size(32)]);

pub(crate) const HOSTNAMES: Attribute = Attribute::optional(
    "hostnames",
    AttributeType::List(&AttributeType::String),
    "Hostnames defines a set of hostnames that should match against the SNI or Host header to select a Route used to process the request.",
)
.with(&[
    Constraint::max_size(16),
    Constraint::length(1, 253),
    Constraint::matches(HOSTNAME_PATTERN),
]);

pub(crate) const WEIGHT_ATTRIBUTE: Attribute = Attribute::optional(
    "weight",
    AttributeType::Int64,
    "Weight specifies the proportion of requests forwarded to the referenced backend.",
)
.with(&[Constraint::between(0, 1_000_000)]);

pub(crate) const BACKEND_REF: &[Attribute] = &[
    GROUP_ATTRIBUTE,
    KIND_ATTRIBUTE,
    NAME_ATTRIBUTE,
    NAMESPACE_ATTRIBUTE,
    PORT_ATTRIBUTE,
    WEIGHT_ATTRIBUTE,
];

/// `backendRefs` of the layer four routes
pub(crate) const BACKEND_REFS: Attribute = Attribute::optional(
    "backendRefs",
    AttributeType::List(&AttributeType::Object(BACKEND_REF)),
    "BackendRefs defines the backend(s) where matching requests should be sent.",
)
.with(&[Constraint::size(1, 16)]);

/// rule shared by TLSRoute, TCPRoute and UDPRoute
pub(crate) const BACKEND_RULE: &[Attribute] = &[BACKEND_REFS];

const HTTP_HEADER: &[Attribute] = &[
    Attribute::required(
        "name",
        AttributeType::String,
        "Name is the name of the HTTP Header to be matched.",
    )
    .with(&[
        Constraint::length(1, 256),
        Constraint::matches(HEADER_NAME_PATTERN),
    ]),
    Attribute::required(
        "value",
        AttributeType::String,
        "Value is the value of HTTP Header to be matched.",
    )
    .with(&[Constraint::length(1, 4096)]),
];

const HEADER_FILTER: &[Attribute] = &[
    Attribute::optional(
        "add",
        AttributeType::List(&AttributeType::Object(HTTP_HEADER)),
        "Add adds the given header(s) (name, value) to the request before the action.",
    )
    .with(&[Constraint::max_size(16)]),
    Attribute::optional(
        "set",
        AttributeType::List(&AttributeType::Object(HTTP_HEADER)),
        "Set overwrites the request with the given header (name, value) before the action.",
    )
    .with(&[Constraint::max_size(16)]),
    Attribute::optional(
        "remove",
        AttributeType::List(&AttributeType::String),
        "Remove the given header(s) from the HTTP request before the action.",
    )
    .with(&[Constraint::max_size(16)]),
];

pub(crate) const REQUEST_HEADER_MODIFIER: Attribute = Attribute::optional(
    "requestHeaderModifier",
    AttributeType::Object(HEADER_FILTER),
    "RequestHeaderModifier defines a schema for a filter that modifies request headers.",
);

pub(crate) const RESPONSE_HEADER_MODIFIER: Attribute = Attribute::optional(
    "responseHeaderModifier",
    AttributeType::Object(HEADER_FILTER),
    "ResponseHeaderModifier defines a schema for a filter that modifies response headers.",
);

const MIRROR_BACKEND_REF: &[Attribute] = &[
    GROUP_ATTRIBUTE,
    KIND_ATTRIBUTE,
    NAME_ATTRIBUTE,
    NAMESPACE_ATTRIBUTE,
    PORT_ATTRIBUTE,
];

const REQUEST_MIRROR_FILTER: &[Attribute] = &[Attribute::required(
    "backendRef",
    AttributeType::Object(MIRROR_BACKEND_REF),
    "BackendRef references a resource where mirrored requests are sent.",
)];

pub(crate) const REQUEST_MIRROR: Attribute = Attribute::optional(
    "requestMirror",
    AttributeType::Object(REQUEST_MIRROR_FILTER),
    "RequestMirror defines a schema for a filter that mirrors requests.",
);

const LOCAL_OBJECT_REFERENCE: &[Attribute] = &[
    Attribute::required(
        "group",
        AttributeType::String,
        "Group is the group of the referent. For example, 'gateway.networking.k8s.io'.",
    )
    .with(GROUP_CONSTRAINTS),
    Attribute::required("kind", AttributeType::String, "Kind is kind of the referent.")
        .with(KIND_CONSTRAINTS),
    NAME_ATTRIBUTE,
];

pub(crate) const EXTENSION_REF: Attribute = Attribute::optional(
    "extensionRef",
    AttributeType::Object(LOCAL_OBJECT_REFERENCE),
    "ExtensionRef is an optional, implementation-specific extension to the filter behavior.",
);

pub(crate) const MATCH_TYPES: &[&str] = &["Exact", "RegularExpression"];

pub(crate) const HEADER_MATCH: &[Attribute] = &[
    Attribute::optional(
        "type",
        AttributeType::String,
        "Type specifies how to match against the value of the header.",
    )
    .with(&[Constraint::one_of(MATCH_TYPES)]),
    Attribute::required(
        "name",
        AttributeType::String,
        "Name is the name of the header to be matched. Name matching is case insensitive.",
    )
    .with(&[
        Constraint::length(1, 256),
        Constraint::matches(HEADER_NAME_PATTERN),
    ]),
    Attribute::required(
        "value",
        AttributeType::String,
        "Value is the value of the header to be matched.",
    )
    .with(&[Constraint::length(1, 4096)]),
];

pub(crate) const HEADER_MATCHES: Attribute = Attribute::optional(
    "headers",
    AttributeType::List(&AttributeType::Object(HEADER_MATCH)),
    "Headers specifies request header matchers. Multiple match values are ANDed together.",
)
.with(&[Constraint::max_size(16)]);

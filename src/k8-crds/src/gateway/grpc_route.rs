use k8_manifest::schema::Attribute;
use k8_manifest::schema::AttributeType;
use k8_manifest::schema::Constraint;
use k8_manifest::types::Crd;
use k8_manifest::types::CrdNames;
use k8_manifest::types::Scope;
use k8_manifest::ResourceDefinition;

use super::EXTENSION_REF;
use super::GROUP;
use super::GROUP_ATTRIBUTE;
use super::HEADER_MATCHES;
use super::HOSTNAMES;
use super::KIND_ATTRIBUTE;
use super::MATCH_TYPES;
use super::NAMESPACE_ATTRIBUTE;
use super::NAME_ATTRIBUTE;
use super::PARENT_REFS;
use super::PORT_ATTRIBUTE;
use super::REQUEST_HEADER_MODIFIER;
use super::REQUEST_MIRROR;
use super::RESPONSE_HEADER_MODIFIER;
use super::V1ALPHA2;
use super::WEIGHT_ATTRIBUTE;

const FILTER_TYPES: &[&str] = &[
    "ResponseHeaderModifier",
    "RequestHeaderModifier",
    "RequestMirror",
    "ExtensionRef",
];

const FILTER: &[Attribute] = &[
    Attribute::required(
        "type",
        AttributeType::String,
        "Type identifies the type of filter to apply.",
    )
    .with(&[Constraint::one_of(FILTER_TYPES)]),
    REQUEST_HEADER_MODIFIER,
    RESPONSE_HEADER_MODIFIER,
    REQUEST_MIRROR,
    EXTENSION_REF,
];

const FILTERS: Attribute = Attribute::optional(
    "filters",
    AttributeType::List(&AttributeType::Object(FILTER)),
    "Filters define the filters that are applied to requests that match this rule.",
)
.with(&[Constraint::max_size(16)]);

const METHOD_MATCH: &[Attribute] = &[
    Attribute::optional(
        "type",
        AttributeType::String,
        "Type specifies how to match against the service and/or method.",
    )
    .with(&[Constraint::one_of(MATCH_TYPES)]),
    Attribute::optional(
        "service",
        AttributeType::String,
        "Value of the service to match against. If left empty or omitted, will match any service.",
    )
    .with(&[Constraint::max_length(1024)]),
    Attribute::optional(
        "method",
        AttributeType::String,
        "Value of the method to match against. If left empty or omitted, will match all services.",
    )
    .with(&[Constraint::max_length(1024)]),
];

const MATCH: &[Attribute] = &[
    Attribute::optional(
        "method",
        AttributeType::Object(METHOD_MATCH),
        "Method specifies a gRPC request service/method matcher.",
    ),
    HEADER_MATCHES,
];

const GRPC_BACKEND_REF: &[Attribute] = &[
    GROUP_ATTRIBUTE,
    KIND_ATTRIBUTE,
    NAME_ATTRIBUTE,
    NAMESPACE_ATTRIBUTE,
    PORT_ATTRIBUTE,
    WEIGHT_ATTRIBUTE,
    FILTERS,
];

const RULE: &[Attribute] = &[
    Attribute::optional(
        "matches",
        AttributeType::List(&AttributeType::Object(MATCH)),
        "Matches define conditions used for matching the rule against incoming gRPC requests.",
    )
    .with(&[Constraint::max_size(8)]),
    FILTERS,
    Attribute::optional(
        "backendRefs",
        AttributeType::List(&AttributeType::Object(GRPC_BACKEND_REF)),
        "BackendRefs defines the backend(s) where matching requests should be sent.",
    )
    .with(&[Constraint::max_size(16)]),
];

const SPEC: &[Attribute] = &[
    PARENT_REFS,
    HOSTNAMES,
    Attribute::optional(
        "rules",
        AttributeType::List(&AttributeType::Object(RULE)),
        "Rules are a list of GRPC matchers, filters and actions.",
    )
    .with(&[Constraint::max_size(16)]),
];

pub static GRPC_ROUTE: ResourceDefinition = ResourceDefinition::new(
    Crd {
        group: GROUP,
        version: V1ALPHA2,
        names: CrdNames {
            kind: "GRPCRoute",
            plural: "grpcroutes",
            singular: "grpcroute",
        },
        scope: Scope::Namespaced,
    },
    "GRPCRoute provides a way to route gRPC requests. This includes the capability to match requests by hostname, gRPC service, gRPC method, or HTTP/2 header.",
    Attribute::optional(
        "spec",
        AttributeType::Object(SPEC),
        "Spec defines the desired state of GRPCRoute.",
    ),
);

use k8_manifest::schema::Attribute;
use k8_manifest::schema::AttributeType;
use k8_manifest::schema::Constraint;
use k8_manifest::types::Crd;
use k8_manifest::types::CrdNames;
use k8_manifest::types::Scope;
use k8_manifest::ResourceDefinition;

use super::GROUP;
use super::GROUP_PATTERN;
use super::KIND_PATTERN;
use super::NAMESPACE_PATTERN;
use super::V1BETA1;

const CONTROLLER_NAME_PATTERN: &str = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*/[A-Za-z0-9/\-._~%!$&'()*+,;=:]+$";

const PARAMETERS_REFERENCE: &[Attribute] = &[
    Attribute::required(
        "group",
        AttributeType::String,
        "Group is the group of the referent.",
    )
    .with(&[
        Constraint::max_length(253),
        Constraint::matches(GROUP_PATTERN),
    ]),
    Attribute::required("kind", AttributeType::String, "Kind is kind of the referent.")
        .with(&[Constraint::length(1, 63), Constraint::matches(KIND_PATTERN)]),
    Attribute::required(
        "name",
        AttributeType::String,
        "Name is the name of the referent.",
    )
    .with(&[Constraint::length(1, 253)]),
    Attribute::optional(
        "namespace",
        AttributeType::String,
        "Namespace is the namespace of the referent. This field is required when referring to a Namespace-scoped resource and MUST be unset when referring to a Cluster-scoped resource.",
    )
    .with(&[
        Constraint::length(1, 63),
        Constraint::matches(NAMESPACE_PATTERN),
    ]),
];

const SPEC: &[Attribute] = &[
    Attribute::required(
        "controllerName",
        AttributeType::String,
        "ControllerName is the name of the controller that is managing Gateways of this class.",
    )
    .with(&[
        Constraint::length(1, 253),
        Constraint::matches(CONTROLLER_NAME_PATTERN),
    ]),
    Attribute::optional(
        "description",
        AttributeType::String,
        "Description helps describe a GatewayClass with more details.",
    )
    .with(&[Constraint::max_length(64)]),
    Attribute::optional(
        "parametersRef",
        AttributeType::Object(PARAMETERS_REFERENCE),
        "ParametersRef is a reference to a resource that contains the configuration parameters corresponding to the GatewayClass.",
    ),
];

pub static GATEWAY_CLASS: ResourceDefinition = ResourceDefinition::new(
    Crd {
        group: GROUP,
        version: V1BETA1,
        names: CrdNames {
            kind: "GatewayClass",
            plural: "gatewayclasses",
            singular: "gatewayclass",
        },
        scope: Scope::Cluster,
    },
    "GatewayClass describes a class of Gateways available to the user for creating Gateway resources.",
    Attribute::required(
        "spec",
        AttributeType::Object(SPEC),
        "Spec defines the desired state of GatewayClass.",
    ),
);

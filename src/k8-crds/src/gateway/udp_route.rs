use k8_manifest::schema::Attribute;
use k8_manifest::schema::AttributeType;
use k8_manifest::schema::Constraint;
use k8_manifest::types::Crd;
use k8_manifest::types::CrdNames;
use k8_manifest::types::Scope;
use k8_manifest::ResourceDefinition;

use super::BACKEND_RULE;
use super::GROUP;
use super::PARENT_REFS;
use super::V1ALPHA2;

const SPEC: &[Attribute] = &[
    PARENT_REFS,
    Attribute::required(
        "rules",
        AttributeType::List(&AttributeType::Object(BACKEND_RULE)),
        "Rules are a list of UDP matchers and actions.",
    )
    .with(&[Constraint::size(1, 16)]),
];

pub static UDP_ROUTE: ResourceDefinition = ResourceDefinition::new(
    Crd {
        group: GROUP,
        version: V1ALPHA2,
        names: CrdNames {
            kind: "UDPRoute",
            plural: "udproutes",
            singular: "udproute",
        },
        scope: Scope::Namespaced,
    },
    "UDPRoute provides a way to route UDP traffic. When combined with a Gateway listener, it can be used to forward traffic on the port specified by the listener to a set of backends specified by the UDPRoute.",
    Attribute::required(
        "spec",
        AttributeType::Object(SPEC),
        "Spec defines the desired state of UDPRoute.",
    ),
);

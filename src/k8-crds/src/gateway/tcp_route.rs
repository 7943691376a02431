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
        "Rules are a list of TCP matchers and actions.",
    )
    .with(&[Constraint::size(1, 16)]),
];

pub static TCP_ROUTE: ResourceDefinition = ResourceDefinition::new(
    Crd {
        group: GROUP,
        version: V1ALPHA2,
        names: CrdNames {
            kind: "TCPRoute",
            plural: "tcproutes",
            singular: "tcproute",
        },
        scope: Scope::Namespaced,
    },
    "TCPRoute provides a way to route TCP requests. When combined with a Gateway listener, it can be used to forward connections on the port specified by the listener to a set of backends specified by the TCPRoute.",
    Attribute::required(
        "spec",
        AttributeType::Object(SPEC),
        "Spec defines the desired state of TCPRoute.",
    ),
);

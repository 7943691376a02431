use k8_manifest::schema::Attribute;
use k8_manifest::schema::AttributeType;
use k8_manifest::schema::Constraint;
use k8_manifest::types::Crd;
use k8_manifest::types::CrdNames;
use k8_manifest::types::Scope;
use k8_manifest::ResourceDefinition;

use super::BACKEND_RULE;
use super::GROUP;
use super::HOSTNAMES;
use super::PARENT_REFS;
use super::V1ALPHA2;

const SPEC: &[Attribute] = &[
    PARENT_REFS,
    HOSTNAMES,
    Attribute::optional(
        "rules",
        AttributeType::List(&AttributeType::Object(BACKEND_RULE)),
        "Rules are a list of TLS matchers and actions.",
    )
    .with(&[Constraint::size(1, 16)]),
];

pub static TLS_ROUTE: ResourceDefinition = ResourceDefinition::new(
    Crd {
        group: GROUP,
        version: V1ALPHA2,
        names: CrdNames {
            kind: "TLSRoute",
            plural: "tlsroutes",
            singular: "tlsroute",
        },
        scope: Scope::Namespaced,
    },
    "The TLSRoute resource is similar to TCPRoute, but can be configured to match against TLS-specific metadata. This allows more flexibility in matching streams for a given TLS listener.",
    Attribute::required(
        "spec",
        AttributeType::Object(SPEC),
        "Spec defines the desired state of TLSRoute.",
    ),
);

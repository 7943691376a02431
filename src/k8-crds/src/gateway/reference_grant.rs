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
use super::V1ALPHA2;

const GROUP_FIELD: Attribute = Attribute::required(
    "group",
    AttributeType::String,
    "Group is the group of the referent. When empty, the Kubernetes core API group is inferred.",
)
.with(&[
    Constraint::max_length(253),
    Constraint::matches(GROUP_PATTERN),
]);

const KIND_FIELD: Attribute = Attribute::required(
    "kind",
    AttributeType::String,
    "Kind is the kind of the referent.",
)
.with(&[Constraint::length(1, 63), Constraint::matches(KIND_PATTERN)]);

const FROM: &[Attribute] = &[
    GROUP_FIELD,
    KIND_FIELD,
    Attribute::required(
        "namespace",
        AttributeType::String,
        "Namespace is the namespace of the referent.",
    )
    .with(&[
        Constraint::length(1, 63),
        Constraint::matches(NAMESPACE_PATTERN),
    ]),
];

const TO: &[Attribute] = &[
    GROUP_FIELD,
    KIND_FIELD,
    Attribute::optional(
        "name",
        AttributeType::String,
        "Name is the name of the referent. When unspecified, this policy refers to all resources of the specified Group and Kind in the local namespace.",
    )
    .with(&[Constraint::length(1, 253)]),
];

const SPEC: &[Attribute] = &[
    Attribute::required(
        "from",
        AttributeType::List(&AttributeType::Object(FROM)),
        "From describes the trusted namespaces and kinds that can reference the resources described in 'To'.",
    )
    .with(&[Constraint::size(1, 16)]),
    Attribute::required(
        "to",
        AttributeType::List(&AttributeType::Object(TO)),
        "To describes the resources that may be referenced by the resources described in 'From'.",
    )
    .with(&[Constraint::size(1, 16)]),
];

pub static REFERENCE_GRANT: ResourceDefinition = ResourceDefinition::new(
    Crd {
        group: GROUP,
        version: V1ALPHA2,
        names: CrdNames {
            kind: "ReferenceGrant",
            plural: "referencegrants",
            singular: "referencegrant",
        },
        scope: Scope::Namespaced,
    },
    "ReferenceGrant identifies kinds of resources in other namespaces that are trusted to reference the specified kinds of resources in the same namespace as the policy.",
    Attribute::optional(
        "spec",
        AttributeType::Object(SPEC),
        "Spec defines the desired state of ReferenceGrant.",
    ),
);

//!
//! # Tigera operator
//!
//! Kinds of the `operator.tigera.io` group used to install Calico.
//!
mod api_server;
mod image_set;
mod installation;

pub use self::api_server::API_SERVER;
pub use self::image_set::IMAGE_SET;
pub use self::installation::INSTALLATION;

use k8_manifest::schema::Attribute;
use k8_manifest::schema::AttributeType;
use k8_manifest::schema::Constraint;

pub const GROUP: &str = "operator.tigera.io";
pub const V1: &str = "v1";

pub(crate) const ENABLED_DISABLED: &[&str] = &["Enabled", "Disabled"];

pub(crate) const TOLERATION: &[Attribute] = &[
    Attribute::optional(
        "key",
        AttributeType::String,
        "Key is the taint key that the toleration applies to. Empty means match all taint keys.",
    ),
    Attribute::optional(
        "operator",
        AttributeType::String,
        "Operator represents a key's relationship to the value.",
    )
    .with(&[Constraint::one_of(&["Exists", "Equal"])]),
    Attribute::optional(
        "value",
        AttributeType::String,
        "Value is the taint value the toleration matches to.",
    ),
    Attribute::optional(
        "effect",
        AttributeType::String,
        "Effect indicates the taint effect to match. Empty means match all taint effects.",
    )
    .with(&[Constraint::one_of(&[
        "NoSchedule",
        "PreferNoSchedule",
        "NoExecute",
    ])]),
    Attribute::optional(
        "tolerationSeconds",
        AttributeType::Int64,
        "TolerationSeconds represents the period of time the toleration tolerates the taint.",
    ),
];

pub(crate) const TOLERATIONS: Attribute = Attribute::optional(
    "tolerations",
    AttributeType::List(&AttributeType::Object(TOLERATION)),
    "Tolerations is the pod's tolerations. If specified, this overrides any tolerations that may be set by the operator.",
);

const LABELS_AND_ANNOTATIONS: &[Attribute] = &[
    Attribute::optional(
        "labels",
        AttributeType::Map,
        "Labels is a map of string keys and values that may match replicaset and service selectors.",
    )
    .with(&[Constraint::Labels]),
    Attribute::optional(
        "annotations",
        AttributeType::Map,
        "Annotations is a map of arbitrary non-identifying metadata.",
    )
    .with(&[Constraint::Annotations]),
];

/// metadata overrides of operator managed workloads
pub(crate) const OVERRIDE_METADATA: Attribute = Attribute::optional(
    "metadata",
    AttributeType::Object(LABELS_AND_ANNOTATIONS),
    "Metadata is a subset of a Kubernetes object's metadata that is added to the Deployment.",
);

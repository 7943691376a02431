use k8_schema::Attribute;
use k8_schema::AttributeType;
use k8_schema::Constraint;
use k8_schema::Schema;
use k8_types::Crd;

pub const ID: Attribute = Attribute::computed(
    "id",
    AttributeType::Int64,
    "Time of the most recent render in nanoseconds since the epoch. Changes on every create and update.",
);

pub const YAML: Attribute = Attribute::computed(
    "yaml",
    AttributeType::String,
    "The generated manifest in YAML format.",
);

pub const API_VERSION: Attribute = Attribute::computed(
    "apiVersion",
    AttributeType::String,
    "The API group and version of the generated manifest.",
);

pub const KIND: Attribute = Attribute::computed(
    "kind",
    AttributeType::String,
    "Type of the Kubernetes resource.",
);

const NAME: Attribute = Attribute::required(
    "name",
    AttributeType::String,
    "Unique name of this object.",
)
.with(&[Constraint::Name]);

const NAMESPACE: Attribute = Attribute::optional(
    "namespace",
    AttributeType::String,
    "Unique identifier of the namespace the object lives in.",
)
.with(&[Constraint::DnsLabel]);

const LABELS: Attribute = Attribute::optional(
    "labels",
    AttributeType::Map,
    "Keys and values that can be used to organize and categorize objects.",
)
.with(&[Constraint::Labels]);

const ANNOTATIONS: Attribute = Attribute::optional(
    "annotations",
    AttributeType::Map,
    "Unstructured key value data stored with a resource that may be set by external tools to store and retrieve arbitrary metadata.",
)
.with(&[Constraint::Annotations]);

pub const NAMESPACED_METADATA: &[Attribute] = &[NAME, NAMESPACE, LABELS, ANNOTATIONS];

pub const CLUSTER_METADATA: &[Attribute] = &[NAME, LABELS, ANNOTATIONS];

const METADATA_DESCRIPTION: &str =
    "Data that helps uniquely identify the object, including a name string and optional namespace.";

/// A Kubernetes kind exposed as manifest resource: identity plus spec schema
#[derive(Debug, Clone, Copy)]
pub struct ResourceDefinition {
    pub crd: Crd,
    pub description: &'static str,
    pub spec: Option<Attribute>,
}

impl ResourceDefinition {
    pub const fn new(crd: Crd, description: &'static str, spec: Attribute) -> Self {
        Self {
            crd,
            description,
            spec: Some(spec),
        }
    }

    /// kinds which only carry metadata
    pub const fn without_spec(crd: Crd, description: &'static str) -> Self {
        Self {
            crd,
            description,
            spec: None,
        }
    }

    pub fn metadata(&self) -> Attribute {
        let attributes = if self.crd.is_namespaced() {
            NAMESPACED_METADATA
        } else {
            CLUSTER_METADATA
        };
        Attribute::required(
            "metadata",
            AttributeType::Object(attributes),
            METADATA_DESCRIPTION,
        )
    }

    /// attributes which end up in the manifest document, in document order
    pub fn manifest_attributes(&self) -> Vec<Attribute> {
        let mut attributes = vec![self.metadata()];
        attributes.extend(self.spec);
        attributes
    }

    /// full schema including computed attributes
    pub fn schema(&self) -> Schema {
        let mut attributes = vec![ID, YAML, API_VERSION, KIND];
        attributes.extend(self.manifest_attributes());
        Schema::new(self.description, attributes)
    }
}

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use k8_types::K8Meta;
use k8_types::ObjectMeta;

/// Record kept by the host for one manifest resource.
/// Every create or update replaces it as a whole
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ResourceState {
    pub id: i64,
    pub api_version: String,
    pub kind: String,
    pub metadata: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<Value>,
    pub yaml: String,
}

impl ResourceState {
    /// typed view of the metadata block
    pub fn meta(&self) -> Result<ObjectMeta, serde_json::Error> {
        serde_json::from_value(self.metadata.clone())
    }

    /// same manifest, ignoring the id
    pub fn same_manifest(&self, other: &Self) -> bool {
        self.api_version == other.api_version
            && self.kind == other.kind
            && self.metadata == other.metadata
            && self.spec == other.spec
            && self.yaml == other.yaml
    }

    /// `namespace/name` or `name`, used in logs
    pub fn object_key(&self) -> String {
        match self.meta() {
            Ok(meta) => match meta.namespace() {
                Some(ns) => format!("{}/{}", ns, meta.name()),
                None => meta.name().to_owned(),
            },
            Err(_) => String::from("<invalid metadata>"),
        }
    }
}

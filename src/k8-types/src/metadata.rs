use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

pub trait K8Meta {
    /// resource name
    fn name(&self) -> &str;

    /// namespace, if the object is namespaced
    fn namespace(&self) -> Option<&str>;
}

pub trait LabelProvider: Sized {
    fn set_label_map(self, labels: BTreeMap<String, String>) -> Self;

    /// helper for setting list of labels
    fn set_labels<T: ToString>(self, labels: Vec<(T, T)>) -> Self {
        let mut label_map = BTreeMap::new();
        for (key, value) in labels {
            label_map.insert(key.to_string(), value.to_string());
        }
        self.set_label_map(label_map)
    }
}

/// metadata block of a manifest as supplied by the user.
/// only the fields a manifest may carry; server populated fields are absent
#[derive(Deserialize, Serialize, PartialEq, Eq, Debug, Default, Clone)]
#[serde(default)]
pub struct ObjectMeta {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl LabelProvider for ObjectMeta {
    fn set_label_map(mut self, labels: BTreeMap<String, String>) -> Self {
        self.labels = labels;
        self
    }
}

impl K8Meta for ObjectMeta {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}

impl fmt::Display for ObjectMeta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}:{}", self.name, ns),
            None => write!(f, "{}", self.name),
        }
    }
}

impl ObjectMeta {
    /// create with name and no namespace
    pub fn named<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn new<S>(name: S, name_space: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            namespace: Some(name_space.into()),
            ..Default::default()
        }
    }

    pub fn with_namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// provide builder pattern setter
    pub fn set_annotations<T: Into<String>>(mut self, annotations: Vec<(T, T)>) -> Self {
        let mut annotation_map = BTreeMap::new();
        for (key, value) in annotations {
            annotation_map.insert(key.into(), value.into());
        }
        self.annotations = annotation_map;
        self
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::LabelProvider;
    use super::ObjectMeta;

    #[test]
    fn test_metadata_label() {
        let metadata =
            ObjectMeta::named("route").set_labels(vec![("app".to_owned(), "test".to_owned())]);

        let maps = metadata.labels;
        assert_eq!(maps.len(), 1);
        assert_eq!(maps.get("app").unwrap(), "test");
    }

    #[test]
    fn test_metadata_value_skips_empty() {
        let metadata = ObjectMeta::named("route");
        let value = serde_json::to_value(&metadata).expect("json");
        assert_eq!(value, json!({ "name": "route" }));

        let metadata = ObjectMeta::new("route", "infra")
            .set_annotations(vec![("example.com/owner", "team-a")]);
        let value = serde_json::to_value(&metadata).expect("json");
        assert_eq!(
            value,
            json!({
                "name": "route",
                "namespace": "infra",
                "annotations": { "example.com/owner": "team-a" }
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ObjectMeta::named("a").to_string(), "a");
        assert_eq!(ObjectMeta::new("a", "b").to_string(), "a:b");
    }
}

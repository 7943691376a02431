use std::borrow::Cow;

use heck::ToSnakeCase;
use serde::ser::SerializeStruct;
use serde::Serialize;
use serde::Serializer;
use serde_json::Value;

use crate::validate::validate_attributes;
use crate::Constraint;
use crate::ValidationError;

/// type of an attribute node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeType {
    String,
    Int64,
    Bool,
    List(&'static AttributeType),
    /// map of string to string
    Map,
    Object(&'static [Attribute]),
}

pub const STRING_LIST: AttributeType = AttributeType::List(&AttributeType::String);

impl AttributeType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int64 => "integer",
            Self::Bool => "boolean",
            Self::List(_) => "list",
            Self::Map => "map",
            Self::Object(_) => "object",
        }
    }

    /// nested attributes for objects and lists of objects
    pub fn attributes(&self) -> Option<&'static [Attribute]> {
        match self {
            Self::Object(attributes) => Some(attributes),
            Self::List(element) => element.attributes(),
            _ => None,
        }
    }
}

impl Serialize for AttributeType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::List(element) => {
                let mut state = serializer.serialize_struct("AttributeType", 2)?;
                state.serialize_field("type", "list")?;
                state.serialize_field("element", element)?;
                state.end()
            }
            Self::Object(attributes) => {
                let mut state = serializer.serialize_struct("AttributeType", 2)?;
                state.serialize_field("type", "object")?;
                state.serialize_field("attributes", attributes)?;
                state.end()
            }
            Self::Map => {
                let mut state = serializer.serialize_struct("AttributeType", 2)?;
                state.serialize_field("type", "map")?;
                state.serialize_field("element", "string")?;
                state.end()
            }
            other => serializer.serialize_str(other.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Required,
    Optional,
    /// derived by the provider, never set by the user
    Computed,
}

/// Single node of the attribute schema.
///
/// `key` is the wire key used in the rendered manifest. The attribute name
/// seen by users is the snake case of the key unless overridden with [`Attribute::named`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attribute {
    pub key: &'static str,
    pub name: Option<&'static str>,
    pub attr_type: AttributeType,
    pub presence: Presence,
    pub description: &'static str,
    pub constraints: &'static [Constraint],
}

impl Attribute {
    pub const fn new(
        key: &'static str,
        attr_type: AttributeType,
        presence: Presence,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            name: None,
            attr_type,
            presence,
            description,
            constraints: &[],
        }
    }

    pub const fn required(
        key: &'static str,
        attr_type: AttributeType,
        description: &'static str,
    ) -> Self {
        Self::new(key, attr_type, Presence::Required, description)
    }

    pub const fn optional(
        key: &'static str,
        attr_type: AttributeType,
        description: &'static str,
    ) -> Self {
        Self::new(key, attr_type, Presence::Optional, description)
    }

    pub const fn computed(
        key: &'static str,
        attr_type: AttributeType,
        description: &'static str,
    ) -> Self {
        Self::new(key, attr_type, Presence::Computed, description)
    }

    pub const fn with(self, constraints: &'static [Constraint]) -> Self {
        Self {
            constraints,
            ..self
        }
    }

    /// override the derived attribute name
    pub const fn named(self, name: &'static str) -> Self {
        Self {
            name: Some(name),
            ..self
        }
    }

    pub fn name(&self) -> Cow<'static, str> {
        match self.name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(self.key.to_snake_case()),
        }
    }

    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }

    pub fn is_computed(&self) -> bool {
        self.presence == Presence::Computed
    }
}

impl Serialize for Attribute {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Attribute", 6)?;
        state.serialize_field("name", &self.name())?;
        state.serialize_field("key", self.key)?;
        state.serialize_field("type", &self.attr_type)?;
        state.serialize_field("presence", &self.presence)?;
        state.serialize_field("description", self.description)?;
        if self.constraints.is_empty() {
            state.skip_field("constraints")?;
        } else {
            state.serialize_field("constraints", self.constraints)?;
        }
        state.end()
    }
}

/// find attribute by its user facing name
pub fn find_attribute<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attributes.iter().find(|attribute| attribute.name() == name)
}

/// Schema of one resource kind
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    pub description: &'static str,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new(description: &'static str, attributes: Vec<Attribute>) -> Self {
        Self {
            description,
            attributes,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        find_attribute(&self.attributes, name)
    }

    /// look up nested attribute by dotted name, list levels are transparent:
    /// `spec.rules.backend_refs.weight`
    pub fn lookup(&self, dotted: &str) -> Option<&Attribute> {
        let mut parts = dotted.split('.');
        let mut current = self.attribute(parts.next()?)?;
        for part in parts {
            let nested = current.attr_type.attributes()?;
            current = find_attribute(nested, part)?;
        }
        Some(current)
    }

    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        validate_attributes(&self.attributes, value)
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::{Attribute, AttributeType, Presence, Schema, STRING_LIST};
    use crate::Constraint;

    const BACKEND_REF: &[Attribute] = &[
        Attribute::required("name", AttributeType::String, "name of the referent"),
        Attribute::optional("port", AttributeType::Int64, "port of the referent")
            .with(&[Constraint::between(1, 65535)]),
    ];

    const RULE: &[Attribute] = &[Attribute::optional(
        "backendRefs",
        AttributeType::List(&AttributeType::Object(BACKEND_REF)),
        "backends",
    )];

    fn schema() -> Schema {
        Schema::new(
            "test",
            vec![
                Attribute::computed("apiVersion", AttributeType::String, "api version"),
                Attribute::optional("hostnames", STRING_LIST, "hostnames"),
                Attribute::optional(
                    "rules",
                    AttributeType::List(&AttributeType::Object(RULE)),
                    "rules",
                ),
                Attribute::optional("disableBGPExport", AttributeType::Bool, "flag"),
                Attribute::optional("ipv4", AttributeType::String, "flag").named("ip_v4"),
            ],
        )
    }

    #[test]
    fn test_derived_names() {
        let schema = schema();
        assert!(schema.attribute("api_version").is_some());
        assert!(schema.attribute("disable_bgp_export").is_some());
        assert!(schema.attribute("ip_v4").is_some());
        assert!(schema.attribute("apiVersion").is_none());
    }

    #[test]
    fn test_lookup_through_lists() {
        let schema = schema();
        let port = schema.lookup("rules.backend_refs.port").expect("port");
        assert_eq!(port.key, "port");
        assert_eq!(port.presence, Presence::Optional);
        assert_eq!(port.constraints, &[Constraint::between(1, 65535)]);
        assert!(schema.lookup("rules.backend_refs.unknown").is_none());
        assert!(schema.lookup("hostnames.nested").is_none());
    }

    #[test]
    fn test_serialize_schema() {
        let value = serde_json::to_value(Schema::new(
            "test",
            vec![Attribute::optional("rules", AttributeType::List(&AttributeType::Object(RULE)), "rules")],
        ))
        .expect("json");

        let rules = &value["attributes"][0];
        assert_eq!(rules["name"], json!("rules"));
        assert_eq!(rules["type"]["type"], json!("list"));
        let backend = &rules["type"]["element"]["attributes"][0];
        assert_eq!(backend["name"], json!("backend_refs"));
        assert_eq!(backend["key"], json!("backendRefs"));
        assert_eq!(backend["presence"], json!("optional"));
        assert!(backend.get("constraints").is_none());
    }
}

//!
//! # Projection walker
//!
//! Moves value trees between the attribute form (user facing names, json values)
//! and the manifest form (wire keys, yaml values) following the schema.
//! Absent, null and empty values never reach the manifest.
//!
use serde_json::Map;
use serde_json::Number;
use serde_json::Value;
use serde_yaml::Mapping;
use serde_yaml::Value as YamlValue;
use tracing::trace;

use k8_schema::Attribute;
use k8_schema::AttributePath;
use k8_schema::AttributeType;
use k8_schema::Violation;

use crate::SerializationError;

/// encode attribute fields into a manifest mapping.
/// returns `None` when nothing is left after omission
pub fn encode_block(
    attributes: &[Attribute],
    fields: &Map<String, Value>,
    path: &AttributePath,
) -> Result<Option<Mapping>, SerializationError> {
    let mut mapping = Mapping::new();
    for attribute in attributes.iter().filter(|attribute| !attribute.is_computed()) {
        let name = attribute.name();
        let Some(value) = fields.get(name.as_ref()) else {
            continue;
        };
        let attribute_path = child(path, &name);
        if let Some(encoded) = encode_value(&attribute.attr_type, value, &attribute_path)? {
            mapping.insert(YamlValue::String(attribute.key.to_owned()), encoded);
        }
    }

    if mapping.is_empty() {
        Ok(None)
    } else {
        Ok(Some(mapping))
    }
}

fn encode_value(
    attr_type: &AttributeType,
    value: &Value,
    path: &AttributePath,
) -> Result<Option<YamlValue>, SerializationError> {
    if value.is_null() {
        return Ok(None);
    }
    match (attr_type, value) {
        (AttributeType::String, Value::String(text)) => Ok(Some(YamlValue::String(text.clone()))),
        (AttributeType::Int64, Value::Number(number)) => match number.as_i64() {
            Some(int) => Ok(Some(YamlValue::Number(int.into()))),
            None => Err(SerializationError::value(
                path,
                format!("{} is not a 64 bit integer", number),
            )),
        },
        (AttributeType::Bool, Value::Bool(flag)) => Ok(Some(YamlValue::Bool(*flag))),
        (AttributeType::List(element), Value::Array(items)) => {
            if items.is_empty() {
                return Ok(None);
            }
            let mut sequence = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                sequence.push(encode_element(element, item, &path.index(index))?);
            }
            Ok(Some(YamlValue::Sequence(sequence)))
        }
        (AttributeType::Map, Value::Object(entries)) => {
            if entries.is_empty() {
                return Ok(None);
            }
            let mut mapping = Mapping::new();
            for (key, entry) in entries {
                match entry {
                    Value::String(text) => {
                        mapping.insert(
                            YamlValue::String(key.clone()),
                            YamlValue::String(text.clone()),
                        );
                    }
                    _ => {
                        return Err(SerializationError::value(
                            &path.key(key),
                            "map values must be strings",
                        ))
                    }
                }
            }
            Ok(Some(YamlValue::Mapping(mapping)))
        }
        (AttributeType::Object(attributes), Value::Object(fields)) => {
            Ok(encode_block(attributes, fields, path)?.map(YamlValue::Mapping))
        }
        (expected, _) => Err(SerializationError::value(
            path,
            format!("value cannot be represented as {}", expected.label()),
        )),
    }
}

/// list elements keep their position, an empty object stays `{}`
fn encode_element(
    element: &AttributeType,
    item: &Value,
    path: &AttributePath,
) -> Result<YamlValue, SerializationError> {
    match (element, item) {
        (AttributeType::Object(attributes), Value::Object(fields)) => Ok(YamlValue::Mapping(
            encode_block(attributes, fields, path)?.unwrap_or_default(),
        )),
        (AttributeType::Map, Value::Object(entries)) if entries.is_empty() => {
            Ok(YamlValue::Mapping(Mapping::new()))
        }
        (AttributeType::List(_), Value::Array(items)) if items.is_empty() => {
            Ok(YamlValue::Sequence(vec![]))
        }
        _ => encode_value(element, item, path)?
            .ok_or_else(|| SerializationError::value(path, "list element must not be null")),
    }
}

/// decode a manifest mapping back into attribute fields.
/// keys unknown to the schema are skipped, mismatches are collected as violations
pub fn decode_block(
    attributes: &[Attribute],
    mapping: &Mapping,
    path: &AttributePath,
    violations: &mut Vec<Violation>,
) -> Map<String, Value> {
    let mut fields = Map::new();
    for (key, _) in mapping.iter() {
        let known = key
            .as_str()
            .map(|key| attributes.iter().any(|attribute| attribute.key == key))
            .unwrap_or(false);
        if !known {
            trace!(%path, ?key, "skipping key not in schema");
        }
    }

    for attribute in attributes.iter().filter(|attribute| !attribute.is_computed()) {
        let Some(value) = mapping.get(attribute.key) else {
            continue;
        };
        let name = attribute.name();
        let attribute_path = child(path, &name);
        if let Some(decoded) = decode_value(&attribute.attr_type, value, &attribute_path, violations)
        {
            fields.insert(name.into_owned(), decoded);
        }
    }
    fields
}

fn decode_value(
    attr_type: &AttributeType,
    value: &YamlValue,
    path: &AttributePath,
    violations: &mut Vec<Violation>,
) -> Option<Value> {
    match (attr_type, value) {
        (_, YamlValue::Null) => None,
        (AttributeType::String, YamlValue::String(text)) => Some(Value::String(text.clone())),
        (AttributeType::Int64, YamlValue::Number(number)) => match number.as_i64() {
            Some(int) => Some(Value::Number(Number::from(int))),
            None => {
                violations.push(Violation::new(
                    path.clone(),
                    format!("expected integer, got {}", number),
                ));
                None
            }
        },
        (AttributeType::Bool, YamlValue::Bool(flag)) => Some(Value::Bool(*flag)),
        (AttributeType::List(element), YamlValue::Sequence(items)) => {
            let mut decoded = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let item_path = path.index(index);
                match decode_value(element, item, &item_path, violations) {
                    Some(value) => decoded.push(value),
                    None if item.is_null() => violations.push(Violation::new(
                        item_path,
                        "list element must not be null",
                    )),
                    None => {}
                }
            }
            Some(Value::Array(decoded))
        }
        (AttributeType::Map, YamlValue::Mapping(entries)) => {
            let mut decoded = Map::new();
            for (key, entry) in entries {
                match (key.as_str(), entry.as_str()) {
                    (Some(key), Some(entry)) => {
                        decoded.insert(key.to_owned(), Value::String(entry.to_owned()));
                    }
                    _ => violations.push(Violation::new(
                        path.clone(),
                        format!("expected string entries, got {:?}: {:?}", key, entry),
                    )),
                }
            }
            Some(Value::Object(decoded))
        }
        (AttributeType::Object(attributes), YamlValue::Mapping(mapping)) => Some(Value::Object(
            decode_block(attributes, mapping, path, violations),
        )),
        (expected, other) => {
            violations.push(Violation::new(
                path.clone(),
                format!("expected {}, got {}", expected.label(), yaml_kind(other)),
            ));
            None
        }
    }
}

fn child(path: &AttributePath, name: &str) -> AttributePath {
    if path.is_root() {
        AttributePath::new(name)
    } else {
        path.attribute(name)
    }
}

fn yaml_kind(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "boolean",
        YamlValue::Number(_) => "number",
        YamlValue::String(_) => "string",
        YamlValue::Sequence(_) => "list",
        YamlValue::Mapping(_) => "object",
        YamlValue::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;
    use serde_json::Value;
    use serde_yaml::Mapping;

    use k8_schema::{Attribute, AttributePath, AttributeType, STRING_LIST};

    use super::{decode_block, encode_block};

    const BACKEND_REF: &[Attribute] = &[
        Attribute::required("name", AttributeType::String, "name"),
        Attribute::optional("weight", AttributeType::Int64, "weight"),
    ];

    const RULE: &[Attribute] = &[Attribute::optional(
        "backendRefs",
        AttributeType::List(&AttributeType::Object(BACKEND_REF)),
        "backends",
    )];

    const SPEC: &[Attribute] = &[
        Attribute::optional("hostnames", STRING_LIST, "hostnames"),
        Attribute::optional("rules", AttributeType::List(&AttributeType::Object(RULE)), "rules"),
        Attribute::optional("selector", AttributeType::Map, "selector"),
        Attribute::optional("disableBGPExport", AttributeType::Bool, "flag"),
        Attribute::computed("status", AttributeType::String, "status"),
    ];

    fn encode(value: Value) -> Option<Mapping> {
        let fields = value.as_object().cloned().expect("object");
        encode_block(SPEC, &fields, &AttributePath::new("spec")).expect("encode")
    }

    #[test]
    fn test_wire_keys_and_order() {
        let mapping = encode(json!({
            "disable_bgp_export": false,
            "hostnames": ["a.example.com"],
            "rules": [{ "backend_refs": [{ "weight": 0, "name": "svc" }] }]
        }))
        .expect("mapping");

        let text = serde_yaml::to_string(&mapping).expect("yaml");
        assert_eq!(
            text,
            "hostnames:\n- a.example.com\nrules:\n- backendRefs:\n  - name: svc\n    weight: 0\ndisableBGPExport: false\n"
        );
    }

    #[test]
    fn test_empty_values_are_omitted() {
        assert!(encode(json!({})).is_none());
        assert!(encode(json!({
            "hostnames": [],
            "selector": {},
            "rules": null,
            "status": "ignored"
        }))
        .is_none());

        let mapping = encode(json!({ "rules": [{}, { "backend_refs": [] }] })).expect("rules");
        let text = serde_yaml::to_string(&mapping).expect("yaml");
        assert_eq!(text, "rules:\n- {}\n- {}\n");
    }

    #[test]
    fn test_encode_mismatch_is_error() {
        let fields = json!({ "hostnames": "a" }).as_object().cloned().unwrap();
        let err = encode_block(SPEC, &fields, &AttributePath::new("spec")).expect_err("mismatch");
        assert!(err.to_string().starts_with("spec.hostnames"));
    }

    #[test]
    fn test_decode_inverse() {
        let input = json!({
            "hostnames": ["a.example.com"],
            "rules": [{ "backend_refs": [{ "name": "svc", "weight": 10 }] }],
            "selector": { "app": "web" },
            "disable_bgp_export": true
        });
        let mapping = encode(input.clone()).expect("mapping");

        let mut violations = vec![];
        let decoded = decode_block(SPEC, &mapping, &AttributePath::new("spec"), &mut violations);
        assert!(violations.is_empty());
        assert_eq!(Value::Object(decoded), input);
    }

    #[test]
    fn test_decode_skips_unknown_and_reports_mismatch() {
        let mapping: Mapping = serde_yaml::from_str(
            "hostnames: [a]\nunknownField: 1\nrules:\n- backendRefs:\n  - name: svc\n    weight: heavy\n",
        )
        .expect("yaml");

        let mut violations = vec![];
        let decoded = decode_block(SPEC, &mapping, &AttributePath::new("spec"), &mut violations);
        assert!(decoded.get("unknown_field").is_none());
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].path.to_string(),
            "spec.rules[0].backend_refs[0].weight"
        );
    }
}

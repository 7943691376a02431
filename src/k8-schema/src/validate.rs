use serde_json::Map;
use serde_json::Value;
use tracing::trace;

use crate::Attribute;
use crate::AttributePath;
use crate::AttributeType;
use crate::Constraint;
use crate::ValidationError;
use crate::Violation;

/// validate a value tree against top level attributes.
/// every violation is collected, `null` counts as absent
pub fn validate_attributes(attributes: &[Attribute], value: &Value) -> Result<(), ValidationError> {
    let mut violations = vec![];
    let root = AttributePath::root();
    match value {
        Value::Object(fields) => validate_block(attributes, fields, &root, &mut violations),
        other => violations.push(Violation::new(
            root,
            format!("expected object, got {}", value_kind(other)),
        )),
    }

    if violations.is_empty() {
        Ok(())
    } else {
        trace!(count = violations.len(), "validation failed");
        Err(ValidationError::new(violations))
    }
}

fn validate_block(
    attributes: &[Attribute],
    fields: &Map<String, Value>,
    path: &AttributePath,
    violations: &mut Vec<Violation>,
) {
    for key in fields.keys() {
        if !attributes.iter().any(|attribute| attribute.name() == key.as_str()) {
            violations.push(Violation::new(
                child(path, key),
                "unsupported attribute",
            ));
        }
    }

    for attribute in attributes {
        let name = attribute.name();
        let attribute_path = child(path, &name);
        match fields.get(name.as_ref()) {
            None | Some(Value::Null) => {
                if attribute.is_required() {
                    violations.push(Violation::new(
                        attribute_path,
                        "required attribute is missing",
                    ));
                }
            }
            Some(value) => {
                if attribute.is_computed() {
                    violations.push(Violation::new(
                        attribute_path,
                        "attribute is computed and cannot be set",
                    ));
                } else {
                    validate_value(
                        &attribute.attr_type,
                        attribute.constraints,
                        value,
                        &attribute_path,
                        violations,
                    );
                }
            }
        }
    }
}

fn validate_value(
    attr_type: &AttributeType,
    constraints: &[Constraint],
    value: &Value,
    path: &AttributePath,
    violations: &mut Vec<Violation>,
) {
    match (attr_type, value) {
        (AttributeType::String, Value::String(text)) => {
            for constraint in constraints {
                if let Some(Err(message)) = constraint.check_str(text) {
                    violations.push(Violation::new(path.clone(), message));
                }
            }
        }
        (AttributeType::Int64, Value::Number(number)) => match number.as_i64() {
            Some(int) => {
                for constraint in constraints {
                    if let Some(Err(message)) = constraint.check_int(int) {
                        violations.push(Violation::new(path.clone(), message));
                    }
                }
            }
            None => violations.push(Violation::new(
                path.clone(),
                format!("expected integer, got {}", number),
            )),
        },
        (AttributeType::Bool, Value::Bool(_)) => {}
        (AttributeType::List(element), Value::Array(items)) => {
            let mut element_constraints = vec![];
            for constraint in constraints {
                match constraint.check_size(items.len()) {
                    Some(Err(message)) => violations.push(Violation::new(path.clone(), message)),
                    Some(Ok(())) => {}
                    None => element_constraints.push(*constraint),
                }
            }
            for (index, item) in items.iter().enumerate() {
                let item_path = path.index(index);
                if item.is_null() {
                    violations.push(Violation::new(item_path, "list element must not be null"));
                    continue;
                }
                validate_value(element, &element_constraints, item, &item_path, violations);
            }
        }
        (AttributeType::Map, Value::Object(entries)) => {
            for constraint in constraints {
                if let Some(Err(message)) = constraint.check_size(entries.len()) {
                    violations.push(Violation::new(path.clone(), message));
                }
            }
            let mut strings = vec![];
            for (key, entry) in entries {
                match entry {
                    Value::String(text) => strings.push((key.as_str(), text.as_str())),
                    other => violations.push(Violation::new(
                        path.key(key),
                        format!("expected string, got {}", value_kind(other)),
                    )),
                }
            }
            for constraint in constraints {
                for (key, text) in &strings {
                    if let Some(Err(message)) = constraint.check_entry(key, text) {
                        violations.push(Violation::new(path.key(*key), message));
                    }
                }
                if let Some(Err(message)) = constraint.check_map(strings.iter().copied()) {
                    violations.push(Violation::new(path.clone(), message));
                }
            }
        }
        (AttributeType::Object(attributes), Value::Object(fields)) => {
            validate_block(attributes, fields, path, violations);
        }
        (expected, other) => violations.push(Violation::new(
            path.clone(),
            format!("expected {}, got {}", expected.label(), value_kind(other)),
        )),
    }
}

fn child(path: &AttributePath, name: &str) -> AttributePath {
    if path.is_root() {
        AttributePath::new(name)
    } else {
        path.attribute(name)
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use crate::{Attribute, AttributeType, Constraint, Schema, STRING_LIST};

    const BACKEND_REF: &[Attribute] = &[
        Attribute::required("name", AttributeType::String, "name")
            .with(&[Constraint::length(1, 253)]),
        Attribute::optional("weight", AttributeType::Int64, "weight")
            .with(&[Constraint::between(0, 1_000_000)]),
    ];

    const RULE: &[Attribute] = &[Attribute::optional(
        "backendRefs",
        AttributeType::List(&AttributeType::Object(BACKEND_REF)),
        "backends",
    )
    .with(&[Constraint::size(1, 16)])];

    const METADATA: &[Attribute] = &[
        Attribute::required("name", AttributeType::String, "name").with(&[Constraint::Name]),
        Attribute::optional("labels", AttributeType::Map, "labels").with(&[Constraint::Labels]),
    ];

    const SPEC: &[Attribute] = &[
        Attribute::optional("hostnames", STRING_LIST, "hostnames").with(&[
            Constraint::max_size(2),
            Constraint::matches(r"^[a-z.]+$"),
        ]),
        Attribute::optional("rules", AttributeType::List(&AttributeType::Object(RULE)), "rules"),
        Attribute::optional("enabled", AttributeType::Bool, "flag"),
    ];

    fn schema() -> Schema {
        Schema::new(
            "test",
            vec![
                Attribute::computed("id", AttributeType::Int64, "id"),
                Attribute::required("metadata", AttributeType::Object(METADATA), "metadata"),
                Attribute::optional("spec", AttributeType::Object(SPEC), "spec"),
            ],
        )
    }

    #[test]
    fn test_valid_input() {
        let input = json!({
            "metadata": { "name": "route", "labels": { "app": "web" } },
            "spec": {
                "hostnames": ["a.example.com"],
                "rules": [{ "backend_refs": [{ "name": "svc", "weight": 1000000 }] }],
                "enabled": false
            }
        });
        assert!(schema().validate(&input).is_ok());
    }

    #[test]
    fn test_null_is_absent() {
        let input = json!({
            "metadata": { "name": "route", "labels": null },
            "spec": null
        });
        assert!(schema().validate(&input).is_ok());
    }

    #[test]
    fn test_missing_required() {
        let err = schema()
            .validate(&json!({ "metadata": {} }))
            .expect_err("missing name");
        assert_eq!(err.violations.len(), 1);
        let violation = err.find("metadata.name").expect("name violation");
        assert_eq!(violation.message, "required attribute is missing");
        assert!(err.to_string().contains("metadata.name"));

        let err = schema().validate(&json!({})).expect_err("missing metadata");
        assert!(err.find("metadata").is_some());
    }

    #[test]
    fn test_weight_above_maximum() {
        let input = json!({
            "metadata": { "name": "route" },
            "spec": { "rules": [{ "backend_refs": [{ "name": "svc", "weight": 2000000 }] }] }
        });
        let err = schema().validate(&input).expect_err("weight");
        let violation = err
            .find("spec.rules[0].backend_refs[0].weight")
            .expect("weight violation");
        assert!(violation.message.contains("at most 1000000"));
    }

    #[test]
    fn test_collects_all_violations() {
        let input = json!({
            "id": 5,
            "metadata": { "name": "Route", "labels": { "app": "-bad" }, "extra": "x" },
            "spec": {
                "hostnames": ["ok.com", "BAD", "c.com"],
                "rules": [{ "backend_refs": [] }],
                "enabled": "yes"
            }
        });
        let err = schema().validate(&input).expect_err("invalid");
        let paths: Vec<String> = err
            .violations
            .iter()
            .map(|violation| violation.path.to_string())
            .collect();
        assert!(paths.contains(&"id".to_owned()));
        assert!(paths.contains(&"metadata.name".to_owned()));
        assert!(paths.contains(&"metadata.extra".to_owned()));
        assert!(paths.contains(&r#"metadata.labels["app"]"#.to_owned()));
        assert!(paths.contains(&"spec.hostnames".to_owned()));
        assert!(paths.contains(&"spec.hostnames[1]".to_owned()));
        assert!(paths.contains(&"spec.rules[0].backend_refs".to_owned()));
        assert!(paths.contains(&"spec.enabled".to_owned()));
    }

    #[test]
    fn test_type_mismatch() {
        let input = json!({ "metadata": { "name": "route" }, "spec": { "rules": [1.5] } });
        let err = schema().validate(&input).expect_err("mismatch");
        assert_eq!(
            err.find("spec.rules[0]").unwrap().message,
            "expected object, got number"
        );

        let input = json!({ "metadata": { "name": "route" }, "spec": { "rules": [{ "backend_refs": [{ "name": "a", "weight": 1.5 }] }] } });
        let err = schema().validate(&input).expect_err("float");
        assert!(err.find("spec.rules[0].backend_refs[0].weight").is_some());
    }

    #[test]
    fn test_root_must_be_object() {
        let err = schema().validate(&json!([])).expect_err("array");
        assert!(err.find("(root)").is_some());
    }
}

//!
//! # Manifest text
//!
//! The api server and kubectl read manifests with a YAML 1.1 parser, which
//! resolves plain `on`, `yes`, `n`, `1_000` or `0x1f` to booleans and numbers.
//! serde_yaml only quotes the YAML 1.2 forms, so string leaves matching a
//! YAML 1.1 boolean, null, integer, float or timestamp are emitted single quoted.
//!
use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::Mapping;
use serde_yaml::Value as YamlValue;
use tracing::trace;

use crate::SerializationError;

static YAML11_SCALAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        "^(?:",
        "y|Y|yes|Yes|YES|n|N|no|No|NO|true|True|TRUE|false|False|FALSE|on|On|ON|off|Off|OFF",
        "|~|null|Null|NULL",
        "|[-+]?0b[0-1_]+",
        "|[-+]?0[0-7_]+",
        "|[-+]?(?:0|[1-9][0-9_]*)",
        "|[-+]?0x[0-9a-fA-F_]+",
        "|[-+]?[1-9][0-9_]*(?::[0-5]?[0-9])+",
        r"|[-+]?(?:[0-9][0-9_]*)?\.[0-9.]*(?:[eE][-+][0-9]+)?",
        r"|[-+]?(?:\.[0-9]+|[0-9]+(?:\.[0-9]*)?)(?:[eE][-+]?[0-9]+)?",
        r"|[-+]?[0-9][0-9_]*(?::[0-5]?[0-9])+\.[0-9_]*",
        r"|[-+]?\.(?:inf|Inf|INF)",
        r"|\.(?:nan|NaN|NAN)",
        "|<<|=",
        "|[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}(?:[Tt ].*)?",
        ")$"
    ))
    .expect("yaml 1.1 scalar pattern")
});

const MARKER: &str = "k8quoted";

/// true when a YAML 1.1 reader would not resolve the plain scalar to a string
pub fn needs_quotes(text: &str) -> bool {
    text.is_empty() || YAML11_SCALAR.is_match(text)
}

/// Serialize a manifest mapping, single quoting every string key or value
/// which YAML 1.1 would read as another type.
///
/// Such strings are swapped for unique plain placeholders before emitting and
/// replaced by their quoted form afterwards. Numbers and booleans of the
/// mapping are not strings and keep their plain form.
pub fn to_yaml_string(document: &Mapping) -> Result<String, SerializationError> {
    let marker = unused_marker(document);
    let mut quoted = vec![];
    let masked = mask_mapping(document, &marker, &mut quoted);
    let mut text = serde_yaml::to_string(&masked)?;
    for (index, original) in quoted.iter().enumerate() {
        text = text.replacen(&placeholder(&marker, index), &single_quoted(original), 1);
    }
    trace!(quoted = quoted.len(), "quoted yaml 1.1 scalars");
    Ok(text)
}

fn placeholder(marker: &str, index: usize) -> String {
    format!("{}{}{}", marker, index, marker)
}

fn single_quoted(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// marker which no string of the document contains
fn unused_marker(document: &Mapping) -> String {
    let mut marker = MARKER.to_owned();
    while mapping_contains(document, &marker) {
        marker.push('q');
    }
    marker
}

fn mapping_contains(mapping: &Mapping, needle: &str) -> bool {
    mapping
        .iter()
        .any(|(key, value)| value_contains(key, needle) || value_contains(value, needle))
}

fn value_contains(value: &YamlValue, needle: &str) -> bool {
    match value {
        YamlValue::String(text) => text.contains(needle),
        YamlValue::Sequence(items) => items.iter().any(|item| value_contains(item, needle)),
        YamlValue::Mapping(mapping) => mapping_contains(mapping, needle),
        _ => false,
    }
}

fn mask_mapping(mapping: &Mapping, marker: &str, quoted: &mut Vec<String>) -> Mapping {
    let mut masked = Mapping::new();
    for (key, value) in mapping {
        let key = mask(key, marker, quoted);
        let value = mask(value, marker, quoted);
        masked.insert(key, value);
    }
    masked
}

fn mask(value: &YamlValue, marker: &str, quoted: &mut Vec<String>) -> YamlValue {
    match value {
        YamlValue::String(text) if needs_quotes(text) => {
            let masked = placeholder(marker, quoted.len());
            quoted.push(text.clone());
            YamlValue::String(masked)
        }
        YamlValue::Sequence(items) => YamlValue::Sequence(
            items
                .iter()
                .map(|item| mask(item, marker, quoted))
                .collect(),
        ),
        YamlValue::Mapping(mapping) => YamlValue::Mapping(mask_mapping(mapping, marker, quoted)),
        other => other.clone(),
    }
}

#[cfg(test)]
mod test {

    use pretty_assertions::assert_eq;
    use serde_yaml::Mapping;
    use serde_yaml::Value as YamlValue;

    use super::needs_quotes;
    use super::to_yaml_string;

    fn string(text: &str) -> YamlValue {
        YamlValue::String(text.to_owned())
    }

    #[test]
    fn test_yaml11_forms() {
        for text in [
            "y", "Y", "yes", "No", "on", "On", "OFF", "off", "n", "N", "true", "False", "~",
            "null", "", "0", "-12", "1_000", "0755", "0b101", "0x1F", "1:30", "1.5", "1e3",
            "6.8523015e+5", ".inf", "-.Inf", ".NaN", "<<", "=", "2024-01-02",
            "2001-12-14t21:59:43.10-05:00",
        ] {
            assert!(needs_quotes(text), "{:?} is not a string in yaml 1.1", text);
        }
        for text in [
            "ok", "yess", "onion", "a.example.com", "10.0.0.0/16", "Calico", "v1", "0xZZ",
            "1_000a", "tls-route-1", "null-route", "aGVsbG8=",
        ] {
            assert!(!needs_quotes(text), "{:?} is a string in yaml 1.1", text);
        }
    }

    #[test]
    fn test_ambiguous_strings_are_quoted() {
        let mut annotations = Mapping::new();
        annotations.insert(string("b"), string("on"));
        annotations.insert(string("k"), string("Off"));
        annotations.insert(string("j"), string("N"));
        annotations.insert(string("h"), string("1_000"));
        annotations.insert(string("yes"), string("plain"));
        let mut document = Mapping::new();
        document.insert(string("annotations"), YamlValue::Mapping(annotations));
        document.insert(
            string("hostnames"),
            YamlValue::Sequence(vec![string("y"), string("a.example.com")]),
        );
        document.insert(string("weight"), YamlValue::Number(0.into()));
        document.insert(string("enabled"), YamlValue::Bool(false));

        let text = to_yaml_string(&document).expect("yaml");
        assert_eq!(
            text,
            "annotations:\n  b: 'on'\n  k: 'Off'\n  j: 'N'\n  h: '1_000'\n  'yes': plain\nhostnames:\n- 'y'\n- a.example.com\nweight: 0\nenabled: false\n"
        );

        let parsed: Mapping = serde_yaml::from_str(&text).expect("parse");
        assert_eq!(parsed, document);
    }

    #[test]
    fn test_marker_in_input_is_kept() {
        let mut document = Mapping::new();
        document.insert(string("name"), string("k8quoted0k8quoted"));
        document.insert(string("flag"), string("on"));

        let text = to_yaml_string(&document).expect("yaml");
        assert_eq!(text, "name: k8quoted0k8quoted\nflag: 'on'\n");
    }
}

//!
//! # Constraints
//!
//! Declarative per-value predicates attached to attributes.
//!
use std::collections::HashMap;
use std::sync::RwLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

const DNS1123_SUBDOMAIN_MAX: usize = 253;
const DNS1123_LABEL_MAX: usize = 63;
const QUALIFIED_NAME_MAX: usize = 63;
const LABEL_VALUE_MAX: usize = 63;
const ANNOTATIONS_TOTAL_MAX: usize = 256 * 1024;

static DNS1123_SUBDOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("subdomain pattern")
});

static DNS1123_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("label pattern"));

static QUALIFIED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$").expect("qualified name pattern")
});

static LABEL_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9])?$").expect("label value pattern")
});

/// compiled `Matches` patterns, keyed by pattern text
static PATTERNS: Lazy<RwLock<HashMap<&'static str, Regex>>> = Lazy::new(Default::default);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum Constraint {
    /// string length in characters, inclusive
    Length {
        min: Option<usize>,
        max: Option<usize>,
    },
    /// regular expression, anchors are honored as written
    Matches { pattern: &'static str },
    OneOf { values: &'static [&'static str] },
    /// integer bounds, inclusive
    Range { min: Option<i64>, max: Option<i64> },
    /// number of elements of a list or map
    Size {
        min: Option<usize>,
        max: Option<usize>,
    },
    /// object name, RFC 1123 subdomain
    Name,
    /// RFC 1123 label, used for namespaces
    DnsLabel,
    /// label keys and values
    Labels,
    /// annotation keys
    Annotations,
    Base64,
}

impl Constraint {
    pub const fn length(min: usize, max: usize) -> Self {
        Self::Length {
            min: Some(min),
            max: Some(max),
        }
    }

    pub const fn min_length(min: usize) -> Self {
        Self::Length {
            min: Some(min),
            max: None,
        }
    }

    pub const fn max_length(max: usize) -> Self {
        Self::Length {
            min: None,
            max: Some(max),
        }
    }

    pub const fn matches(pattern: &'static str) -> Self {
        Self::Matches { pattern }
    }

    pub const fn one_of(values: &'static [&'static str]) -> Self {
        Self::OneOf { values }
    }

    pub const fn between(min: i64, max: i64) -> Self {
        Self::Range {
            min: Some(min),
            max: Some(max),
        }
    }

    pub const fn at_least(min: i64) -> Self {
        Self::Range {
            min: Some(min),
            max: None,
        }
    }

    pub const fn at_most(max: i64) -> Self {
        Self::Range {
            min: None,
            max: Some(max),
        }
    }

    pub const fn size(min: usize, max: usize) -> Self {
        Self::Size {
            min: Some(min),
            max: Some(max),
        }
    }

    pub const fn max_size(max: usize) -> Self {
        Self::Size {
            min: None,
            max: Some(max),
        }
    }

    /// true for constraints evaluated on a container rather than its elements
    pub fn is_container_check(&self) -> bool {
        matches!(self, Self::Size { .. } | Self::Labels | Self::Annotations)
    }

    /// check a string value, `None` if the constraint does not apply to strings
    pub fn check_str(&self, value: &str) -> Option<Result<(), String>> {
        let result = match self {
            Self::Length { min, max } => check_length(value, *min, *max),
            Self::Matches { pattern } => check_pattern(*pattern, value),
            Self::OneOf { values } => {
                if values.contains(&value) {
                    Ok(())
                } else {
                    Err(format!("value must be one of {:?}, got {:?}", values, value))
                }
            }
            Self::Name => check_subdomain(value),
            Self::DnsLabel => check_dns_label(value),
            Self::Base64 => STANDARD
                .decode(value)
                .map(|_| ())
                .map_err(|err| format!("value must be base64 encoded: {}", err)),
            _ => return None,
        };
        Some(result)
    }

    /// check an integer value, `None` if the constraint does not apply to integers
    pub fn check_int(&self, value: i64) -> Option<Result<(), String>> {
        match self {
            Self::Range { min, max } => Some(check_range(value, *min, *max)),
            _ => None,
        }
    }

    /// check element count of a list or map
    pub fn check_size(&self, count: usize) -> Option<Result<(), String>> {
        match self {
            Self::Size { min, max } => Some(check_count(count, *min, *max)),
            _ => None,
        }
    }

    /// check a map entry
    pub fn check_entry(&self, key: &str, value: &str) -> Option<Result<(), String>> {
        match self {
            Self::Labels => Some(check_label_key(key).and_then(|_| check_label_value(value))),
            Self::Annotations => Some(check_qualified_key(key, "annotation key")),
            _ => None,
        }
    }

    /// check a whole map, used for limits spanning entries
    pub fn check_map<'a, I>(&self, entries: I) -> Option<Result<(), String>>
    where
        I: Iterator<Item = (&'a str, &'a str)>,
    {
        match self {
            Self::Annotations => {
                let total: usize = entries.map(|(key, value)| key.len() + value.len()).sum();
                if total > ANNOTATIONS_TOTAL_MAX {
                    Some(Err(format!(
                        "annotations must not exceed {} bytes in total, got {}",
                        ANNOTATIONS_TOTAL_MAX, total
                    )))
                } else {
                    Some(Ok(()))
                }
            }
            _ => None,
        }
    }
}

fn check_length(value: &str, min: Option<usize>, max: Option<usize>) -> Result<(), String> {
    let length = value.chars().count();
    if let Some(min) = min {
        if length < min {
            return Err(format!(
                "string length must be at least {}, got {}",
                min, length
            ));
        }
    }
    if let Some(max) = max {
        if length > max {
            return Err(format!("string length must be at most {}, got {}", max, length));
        }
    }
    Ok(())
}

fn compiled(pattern: &'static str) -> Result<Regex, String> {
    if let Some(regex) = PATTERNS
        .read()
        .ok()
        .and_then(|patterns| patterns.get(pattern).cloned())
    {
        return Ok(regex);
    }
    let regex =
        Regex::new(pattern).map_err(|err| format!("invalid pattern {:?}: {}", pattern, err))?;
    if let Ok(mut patterns) = PATTERNS.write() {
        patterns.insert(pattern, regex.clone());
    }
    Ok(regex)
}

fn check_pattern(pattern: &'static str, value: &str) -> Result<(), String> {
    let regex = compiled(pattern)?;
    if regex.is_match(value) {
        Ok(())
    } else {
        Err(format!("value {:?} must match pattern {}", value, pattern))
    }
}

fn check_range(value: i64, min: Option<i64>, max: Option<i64>) -> Result<(), String> {
    if let Some(min) = min {
        if value < min {
            return Err(format!("value must be at least {}, got {}", min, value));
        }
    }
    if let Some(max) = max {
        if value > max {
            return Err(format!("value must be at most {}, got {}", max, value));
        }
    }
    Ok(())
}

fn check_count(count: usize, min: Option<usize>, max: Option<usize>) -> Result<(), String> {
    if let Some(min) = min {
        if count < min {
            return Err(format!(
                "must contain at least {} elements, got {}",
                min, count
            ));
        }
    }
    if let Some(max) = max {
        if count > max {
            return Err(format!("must contain at most {} elements, got {}", max, count));
        }
    }
    Ok(())
}

fn check_subdomain(value: &str) -> Result<(), String> {
    if value.len() > DNS1123_SUBDOMAIN_MAX {
        return Err(format!(
            "name must be no more than {} characters",
            DNS1123_SUBDOMAIN_MAX
        ));
    }
    if !DNS1123_SUBDOMAIN.is_match(value) {
        return Err(format!(
            "name {:?} must consist of lower case alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character",
            value
        ));
    }
    Ok(())
}

fn check_dns_label(value: &str) -> Result<(), String> {
    if value.len() > DNS1123_LABEL_MAX {
        return Err(format!(
            "value must be no more than {} characters",
            DNS1123_LABEL_MAX
        ));
    }
    if !DNS1123_LABEL.is_match(value) {
        return Err(format!(
            "value {:?} must consist of lower case alphanumeric characters or '-', and must start and end with an alphanumeric character",
            value
        ));
    }
    Ok(())
}

/// `prefix/name` where prefix is an optional subdomain
fn check_qualified_key(key: &str, what: &str) -> Result<(), String> {
    let name = match key.split_once('/') {
        Some((prefix, name)) => {
            if prefix.is_empty() {
                return Err(format!("{} {:?} has an empty prefix", what, key));
            }
            check_subdomain(prefix)
                .map_err(|err| format!("{} {:?} has an invalid prefix: {}", what, key, err))?;
            name
        }
        None => key,
    };
    if name.is_empty() {
        return Err(format!("{} {:?} has an empty name", what, key));
    }
    if name.len() > QUALIFIED_NAME_MAX {
        return Err(format!(
            "{} {:?}: name part must be no more than {} characters",
            what, key, QUALIFIED_NAME_MAX
        ));
    }
    if !QUALIFIED_NAME.is_match(name) {
        return Err(format!(
            "{} {:?}: name part must consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character",
            what, key
        ));
    }
    Ok(())
}

fn check_label_key(key: &str) -> Result<(), String> {
    check_qualified_key(key, "label key")
}

fn check_label_value(value: &str) -> Result<(), String> {
    if value.len() > LABEL_VALUE_MAX {
        return Err(format!(
            "label value must be no more than {} characters",
            LABEL_VALUE_MAX
        ));
    }
    if !LABEL_VALUE.is_match(value) {
        return Err(format!(
            "label value {:?} must be empty or consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character",
            value
        ));
    }
    Ok(())
}

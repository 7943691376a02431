use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::AttributePath;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: AttributePath,
    pub message: String,
}

impl Violation {
    pub fn new<S: Into<String>>(path: AttributePath, message: S) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// input does not satisfy the attribute schema
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("invalid configuration: {}", join(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn single<S: Into<String>>(path: AttributePath, message: S) -> Self {
        Self::new(vec![Violation::new(path, message)])
    }

    /// first violation reported at `path`, compared by display form
    pub fn find(&self, path: &str) -> Option<&Violation> {
        self.violations
            .iter()
            .find(|violation| violation.path.to_string() == path)
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|violation| violation.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

use thiserror::Error;

use k8_schema::AttributePath;
use k8_schema::ValidationError;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("cannot serialize manifest: {0}")]
    Serialization(#[from] SerializationError),
    #[error("unknown resource type: {0}")]
    UnknownResource(String),
    #[error("resource type already registered: {0}")]
    DuplicateResource(String),
}

impl ManifestError {
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{path}: {message}")]
    Value {
        path: AttributePath,
        message: String,
    },
}

impl SerializationError {
    pub(crate) fn value<S: Into<String>>(path: &AttributePath, message: S) -> Self {
        Self::Value {
            path: path.clone(),
            message: message.into(),
        }
    }
}

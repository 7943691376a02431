use serde_yaml::Error as SerdeYamlError;
use std::env::VarError;
use std::io::Error as IoError;
use thiserror::Error;

use k8_manifest::ManifestError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] IoError),
    #[error("Yaml error: {0}")]
    SerdeError(#[from] SerdeYamlError),
    #[error("environment error: {0}")]
    EnvError(#[from] VarError),
    #[error("invalid type prefix {0:?}: use lower case letters, digits and '_'")]
    InvalidPrefix(String),
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

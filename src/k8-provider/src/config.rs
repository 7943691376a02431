use std::env::VarError;
use std::fs::read_to_string;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::ConfigError;

/// environment variable holding the path of the provider configuration
pub const CONFIG_ENV: &str = "K8S_MANIFEST_CONFIG";

const DEFAULT_TYPE_PREFIX: &str = "k8s";

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProviderConfig {
    /// first segment of every resource type name
    pub type_prefix: String,
    /// API groups to expose, empty exposes all
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
    /// start rendered yaml with `---`
    pub document_start: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            type_prefix: DEFAULT_TYPE_PREFIX.to_owned(),
            groups: vec![],
            document_start: false,
        }
    }
}

impl ProviderConfig {
    pub fn from_file<T: AsRef<Path>>(path: T) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading provider config");
        let content = read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// path from `K8S_MANIFEST_CONFIG`, defaults when unset
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env_path(std::env::var(CONFIG_ENV))
    }

    fn from_env_path(path: Result<String, VarError>) -> Result<Self, ConfigError> {
        match path {
            Ok(path) => Self::from_file(path),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn to_file<T: AsRef<Path>>(&self, path: T) -> Result<(), ConfigError> {
        let file = File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = !self.type_prefix.is_empty()
            && self
                .type_prefix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidPrefix(self.type_prefix.clone()))
        }
    }
}

//!
//! # Manifest provider
//!
//! Resource lifecycle over the manifest catalog, configured from YAML.
//!
mod config;
mod error;
mod provider;
mod resource;

pub use self::config::ProviderConfig;
pub use self::config::CONFIG_ENV;
pub use self::error::ConfigError;
pub use self::error::ProviderError;
pub use self::provider::ManifestProvider;
pub use self::resource::ManifestResource;
pub use self::resource::ResourceMetadata;

pub use k8_manifest::ResourceState;

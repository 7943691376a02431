use std::sync::Arc;

use tracing::debug;

use k8_manifest::IdGenerator;
use k8_manifest::ManifestProjector;
use k8_manifest::ResourceRegistry;
use k8_manifest::WallClockIds;

use crate::ManifestResource;
use crate::ProviderConfig;
use crate::ProviderError;

/// Entry point: the configured catalog of manifest resources
pub struct ManifestProvider<I = WallClockIds> {
    config: ProviderConfig,
    registry: ResourceRegistry,
    projector: Arc<ManifestProjector<I>>,
}

impl ManifestProvider<WallClockIds> {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        Self::with_ids(config, WallClockIds::new())
    }

    /// configuration from `K8S_MANIFEST_CONFIG` or defaults
    pub fn load() -> Result<Self, ProviderError> {
        Self::new(ProviderConfig::load()?)
    }
}

impl<I> ManifestProvider<I>
where
    I: IdGenerator,
{
    pub fn with_ids(config: ProviderConfig, ids: I) -> Result<Self, ProviderError> {
        config.validate()?;
        let mut registry = k8_crds::registry_with_prefix(&config.type_prefix)?;
        registry.retain_groups(&config.groups);
        debug!(resources = registry.len(), "provider configured");

        let projector = ManifestProjector::with_ids(ids).document_start(config.document_start);
        Ok(Self {
            config,
            registry,
            projector: Arc::new(projector),
        })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// every exposed resource in type name order
    pub fn resources(&self) -> Vec<ManifestResource<I>> {
        self.registry
            .iter()
            .map(|(type_name, definition)| {
                ManifestResource::new(type_name.to_owned(), definition, self.projector.clone())
            })
            .collect()
    }

    pub fn resource(&self, type_name: &str) -> Result<ManifestResource<I>, ProviderError> {
        let definition = self.registry.lookup(type_name)?;
        Ok(ManifestResource::new(
            type_name.to_owned(),
            definition,
            self.projector.clone(),
        ))
    }
}

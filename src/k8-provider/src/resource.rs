use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use tracing::instrument;
use tracing::trace;

use k8_manifest::schema::Schema;
use k8_manifest::IdGenerator;
use k8_manifest::ManifestProjector;
use k8_manifest::ResourceDefinition;
use k8_manifest::ResourceState;
use k8_manifest::WallClockIds;

use crate::ProviderError;

/// identity of a resource type as reported to the host
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ResourceMetadata {
    pub type_name: String,
    pub api_version: String,
    pub kind: String,
    pub namespaced: bool,
}

/// Lifecycle of one resource type.
///
/// Resources only exist in state: create and update render the manifest,
/// read hands the state back and delete has nothing to remove.
pub struct ManifestResource<I = WallClockIds> {
    type_name: String,
    definition: &'static ResourceDefinition,
    projector: Arc<ManifestProjector<I>>,
}

impl<I> Clone for ManifestResource<I> {
    fn clone(&self) -> Self {
        Self {
            type_name: self.type_name.clone(),
            definition: self.definition,
            projector: self.projector.clone(),
        }
    }
}

impl<I> ManifestResource<I>
where
    I: IdGenerator,
{
    pub(crate) fn new(
        type_name: String,
        definition: &'static ResourceDefinition,
        projector: Arc<ManifestProjector<I>>,
    ) -> Self {
        Self {
            type_name,
            definition,
            projector,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn definition(&self) -> &'static ResourceDefinition {
        self.definition
    }

    pub fn metadata(&self) -> ResourceMetadata {
        ResourceMetadata {
            type_name: self.type_name.clone(),
            api_version: self.definition.crd.api_version(),
            kind: self.definition.crd.kind().to_owned(),
            namespaced: self.definition.crd.is_namespaced(),
        }
    }

    pub fn schema(&self) -> Schema {
        self.definition.schema()
    }

    #[instrument(skip(self, input), fields(type_name = %self.type_name))]
    pub fn create(&self, input: &Value) -> Result<ResourceState, ProviderError> {
        let state = self.projector.render(self.definition, input)?;
        debug!(id = state.id, "created");
        Ok(state)
    }

    /// same as create, prior state is replaced as a whole
    #[instrument(skip(self, prior, input), fields(type_name = %self.type_name, prior_id = prior.id))]
    pub fn update(
        &self,
        prior: &ResourceState,
        input: &Value,
    ) -> Result<ResourceState, ProviderError> {
        let state = self.projector.render(self.definition, input)?;
        debug!(id = state.id, changed = !prior.same_manifest(&state), "updated");
        Ok(state)
    }

    pub fn read(&self, state: ResourceState) -> Result<ResourceState, ProviderError> {
        trace!(type_name = %self.type_name, id = state.id, "read");
        Ok(state)
    }

    pub fn delete(&self, state: &ResourceState) -> Result<(), ProviderError> {
        debug!(type_name = %self.type_name, object = %state.object_key(), "deleted");
        Ok(())
    }

    /// state from an existing manifest document
    pub fn import(&self, manifest: &str) -> Result<ResourceState, ProviderError> {
        let state = self.projector.import(self.definition, manifest)?;
        debug!(type_name = %self.type_name, id = state.id, "imported");
        Ok(state)
    }

    /// manifest text without touching state
    pub fn render_yaml(&self, input: &Value) -> Result<String, ProviderError> {
        Ok(self.projector.render_yaml(self.definition, input)?)
    }
}

use std::collections::BTreeMap;

use tracing::debug;

use crate::ManifestError;
use crate::ResourceDefinition;

/// Lookup table of exposed resource kinds, keyed by resource type name
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    prefix: String,
    resources: BTreeMap<String, &'static ResourceDefinition>,
}

impl ResourceRegistry {
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self {
            prefix: prefix.into(),
            resources: BTreeMap::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn register(&mut self, definition: &'static ResourceDefinition) -> Result<(), ManifestError> {
        let type_name = definition.crd.type_name(&self.prefix);
        if self.resources.contains_key(&type_name) {
            return Err(ManifestError::DuplicateResource(type_name));
        }
        debug!(%type_name, "registering resource");
        self.resources.insert(type_name, definition);
        Ok(())
    }

    pub fn get(&self, type_name: &str) -> Option<&'static ResourceDefinition> {
        self.resources.get(type_name).copied()
    }

    pub fn lookup(&self, type_name: &str) -> Result<&'static ResourceDefinition, ManifestError> {
        self.get(type_name)
            .ok_or_else(|| ManifestError::UnknownResource(type_name.to_owned()))
    }

    /// find by manifest identity
    pub fn find(&self, api_version: &str, kind: &str) -> Option<&'static ResourceDefinition> {
        self.resources
            .values()
            .copied()
            .find(|definition| definition.crd.matches(api_version, kind))
    }

    /// keep only kinds of the given API groups, empty keeps everything
    pub fn retain_groups(&mut self, groups: &[String]) {
        if groups.is_empty() {
            return;
        }
        self.resources
            .retain(|_, definition| groups.iter().any(|group| group == definition.crd.group));
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &'static ResourceDefinition)> {
        self.resources
            .iter()
            .map(|(name, definition)| (name.as_str(), *definition))
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

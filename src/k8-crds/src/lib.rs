//!
//! # Manifest catalog
//!
//! Resource definitions for the Kubernetes kinds exposed as manifest resources.
//!
pub mod gateway;
pub mod tigera;

use tracing::debug;

use k8_manifest::ManifestError;
use k8_manifest::ResourceDefinition;
use k8_manifest::ResourceRegistry;

pub const DEFAULT_PREFIX: &str = "k8s";

/// every definition of the catalog
pub static ALL: &[&ResourceDefinition] = &[
    &gateway::GATEWAY,
    &gateway::GATEWAY_CLASS,
    &gateway::GRPC_ROUTE,
    &gateway::HTTP_ROUTE,
    &gateway::REFERENCE_GRANT,
    &gateway::TCP_ROUTE,
    &gateway::TLS_ROUTE,
    &gateway::UDP_ROUTE,
    &tigera::API_SERVER,
    &tigera::IMAGE_SET,
    &tigera::INSTALLATION,
];

pub fn registry() -> Result<ResourceRegistry, ManifestError> {
    registry_with_prefix(DEFAULT_PREFIX)
}

pub fn registry_with_prefix(prefix: &str) -> Result<ResourceRegistry, ManifestError> {
    let mut registry = ResourceRegistry::new(prefix);
    for definition in ALL {
        registry.register(definition)?;
    }
    debug!(prefix, resources = registry.len(), "catalog loaded");
    Ok(registry)
}

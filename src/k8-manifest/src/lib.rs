//!
//! # Manifest projection
//!
//! Generic engine turning schema validated input into Kubernetes manifests
//! and the state record kept for them.
//!
mod definition;
mod error;
mod id;
mod projector;
mod registry;
mod scalar;
mod state;
pub mod walk;

pub use self::definition::*;
pub use self::error::ManifestError;
pub use self::error::SerializationError;
pub use self::id::IdGenerator;
pub use self::id::SequenceIds;
pub use self::id::WallClockIds;
pub use self::projector::ManifestProjector;
pub use self::registry::ResourceRegistry;
pub use self::state::ResourceState;

pub use k8_schema as schema;
pub use k8_types as types;

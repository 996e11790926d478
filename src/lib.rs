//! apidefaults - type-directed defaulting for API objects
//!
//! Fills the unset fields of a typed object graph (pods, controllers,
//! services, volumes, ...) from a registry of per-type procedures. Some
//! defaults are constants, others are derived from sibling fields: requests
//! from limits, selectors from template labels, allocatable from capacity.

pub mod config;
pub mod defaulter;
pub mod domain;
pub mod error;
pub mod manifest;

// Re-exports for convenience
pub use config::{ConfigWarning, PolicyConfig};
pub use defaulter::Defaulter;
pub use domain::object::{ApiObject, ObjectKind};
pub use domain::registry::{DefaulterRegistry, Procedure};
pub use domain::value_objects::{IntOrString, Quantity, QuantityFormat, ResourceList};
pub use error::{DefaultsError, DefaultsResult};
pub use manifest::Manifest;

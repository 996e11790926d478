//! Defaulter - the entry point callers hold on to
//!
//! Builds the registry once from a `PolicyConfig` and then defaults any
//! number of object graphs. Immutable after construction; share it behind
//! an `Arc` to default disjoint graphs from several threads.

use tracing::debug;

use crate::config::PolicyConfig;
use crate::domain::object::ApiObject;
use crate::domain::policies::register_defaults;
use crate::domain::registry::DefaulterRegistry;
use crate::domain::walker::Walker;

#[derive(Debug)]
pub struct Defaulter {
    registry: DefaulterRegistry,
}

impl Defaulter {
    /// Build a defaulter carrying the full policy table.
    pub fn new(policy: &PolicyConfig) -> Self {
        let mut registry = DefaulterRegistry::new();
        register_defaults(&mut registry, policy);
        debug!(procedures = registry.len(), "defaulting registry built");
        Self { registry }
    }

    /// Build a defaulter around a hand-assembled registry.
    pub fn from_registry(registry: DefaulterRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &DefaulterRegistry {
        &self.registry
    }

    /// Default `object` and everything reachable from it, in place.
    pub fn apply_defaults<T: ApiObject>(&self, object: &mut T) {
        Walker::new(&self.registry).apply_defaults(object);
    }

    /// By-value form of [`Defaulter::apply_defaults`].
    pub fn defaulted<T: ApiObject>(&self, mut object: T) -> T {
        self.apply_defaults(&mut object);
        object
    }
}

impl Default for Defaulter {
    fn default() -> Self {
        Self::new(&PolicyConfig::default())
    }
}

//! Policy configuration
//!
//! The constants of the policy table are configurable. Resolution order:
//! 1. Environment variables (APIDEFAULTS_*, highest priority)
//! 2. Project config (.apidefaults/config.toml)
//! 3. User config (<config dir>/apidefaults/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_PATH, USER_CONFIG_PATH};
pub use types::{
    ContainerPolicy, ControllerPolicy, FieldSelectorPolicy, PodPolicy, PolicyConfig, ProbePolicy,
    VolumePolicy,
};

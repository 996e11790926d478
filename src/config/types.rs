//! Policy configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DnsPolicy, RestartPolicy};
use crate::error::DefaultsResult;

use super::loader::{self, ConfigWarning};

/// Pod-level defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodPolicy {
    #[serde(default = "default_dns_policy")]
    pub dns_policy: DnsPolicy,

    #[serde(default = "default_restart_policy")]
    pub restart_policy: RestartPolicy,

    #[serde(default = "default_termination_grace_period_seconds")]
    pub termination_grace_period_seconds: i64,

    #[serde(default = "default_network_mode")]
    pub network_mode: String,
}

impl Default for PodPolicy {
    fn default() -> Self {
        Self {
            dns_policy: default_dns_policy(),
            restart_policy: default_restart_policy(),
            termination_grace_period_seconds: default_termination_grace_period_seconds(),
            network_mode: default_network_mode(),
        }
    }
}

fn default_dns_policy() -> DnsPolicy {
    DnsPolicy::ClusterFirst
}

fn default_restart_policy() -> RestartPolicy {
    RestartPolicy::Always
}

fn default_termination_grace_period_seconds() -> i64 {
    30
}

fn default_network_mode() -> String {
    "bridge".to_string()
}

/// Container-level defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerPolicy {
    #[serde(default = "default_termination_message_path")]
    pub termination_message_path: String,
}

impl Default for ContainerPolicy {
    fn default() -> Self {
        Self {
            termination_message_path: default_termination_message_path(),
        }
    }
}

fn default_termination_message_path() -> String {
    "/dev/termination-log".to_string()
}

/// Probe timing defaults, in seconds and consecutive results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbePolicy {
    #[serde(default = "default_one")]
    pub timeout_seconds: i32,

    #[serde(default = "default_period_seconds")]
    pub period_seconds: i32,

    #[serde(default = "default_one")]
    pub success_threshold: i32,

    #[serde(default = "default_failure_threshold")]
    pub failure_threshold: i32,
}

impl Default for ProbePolicy {
    fn default() -> Self {
        Self {
            timeout_seconds: default_one(),
            period_seconds: default_period_seconds(),
            success_threshold: default_one(),
            failure_threshold: default_failure_threshold(),
        }
    }
}

fn default_one() -> i32 {
    1
}

fn default_period_seconds() -> i32 {
    10
}

fn default_failure_threshold() -> i32 {
    3
}

/// Replication controller defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerPolicy {
    #[serde(default = "default_one")]
    pub replicas: i32,
}

impl Default for ControllerPolicy {
    fn default() -> Self {
        Self {
            replicas: default_one(),
        }
    }
}

/// Volume source defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumePolicy {
    #[serde(default = "default_iscsi_interface")]
    pub iscsi_interface: String,
}

impl Default for VolumePolicy {
    fn default() -> Self {
        Self {
            iscsi_interface: default_iscsi_interface(),
        }
    }
}

fn default_iscsi_interface() -> String {
    "default".to_string()
}

/// Downward API field selector defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSelectorPolicy {
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

impl Default for FieldSelectorPolicy {
    fn default() -> Self {
        Self {
            api_version: default_api_version(),
        }
    }
}

fn default_api_version() -> String {
    "v1".to_string()
}

/// Every tunable constant of the policy table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PolicyConfig {
    #[serde(default)]
    pub pod: PodPolicy,

    #[serde(default)]
    pub container: ContainerPolicy,

    #[serde(default)]
    pub probe: ProbePolicy,

    #[serde(default)]
    pub controller: ControllerPolicy,

    #[serde(default)]
    pub volume: VolumePolicy,

    #[serde(default)]
    pub field_selector: FieldSelectorPolicy,
}

impl PolicyConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DefaultsResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DefaultsResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (APIDEFAULTS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}

//! Pod entity, its spec and the pod-scoped option objects

use serde::{Deserialize, Serialize};

use super::{is_default, Container, ObjectMeta, Volume};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RestartPolicy {
    Always,
    OnFailure,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DnsPolicy {
    ClusterFirst,
    Default,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pod {
    #[serde(rename = "apiVersion", skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    pub metadata: ObjectMeta,
    pub spec: PodSpec,
}

impl Pod {
    pub fn new(name: impl Into<String>, spec: PodSpec) -> Self {
        Self {
            metadata: ObjectMeta::named(name),
            spec,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PodSpec {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<Volume>,

    pub containers: Vec<Container>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart_policy: Option<RestartPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_grace_period_seconds: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_policy: Option<DnsPolicy>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub service_account_name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub node_name: String,

    #[serde(skip_serializing_if = "is_default")]
    pub host_network: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub network_mode: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_context: Option<PodSecurityContext>,
}

impl PodSpec {
    pub fn with_containers(containers: Vec<Container>) -> Self {
        Self {
            containers,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PodSecurityContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_as_user: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_as_non_root: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_group: Option<i64>,
}

/// Pod description embedded in controllers. Not a pod itself: pod-only
/// rules (such as requests-from-limits) do not apply to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodTemplateSpec {
    pub metadata: ObjectMeta,
    pub spec: PodSpec,
}

/// Options for running a command in a container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodExecOptions {
    #[serde(rename = "apiVersion", skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    pub stdin: bool,
    pub stdout: bool,
    pub stderr: bool,
    pub tty: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub container: String,

    pub command: Vec<String>,
}

/// Options for attaching to a running container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodAttachOptions {
    #[serde(rename = "apiVersion", skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    pub stdin: bool,
    pub stdout: bool,
    pub stderr: bool,
    pub tty: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub container: String,
}

//! Policy configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::entities::{DnsPolicy, RestartPolicy};
use crate::error::{DefaultsError, DefaultsResult};

use super::types::PolicyConfig;

/// Project-level config, relative to the project root.
pub const PROJECT_CONFIG_PATH: &str = ".apidefaults/config.toml";

/// User-level config, relative to the platform config directory.
pub const USER_CONFIG_PATH: &str = "apidefaults/config.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DefaultsResult<(PolicyConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: PolicyConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DefaultsError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> PolicyConfig {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_PATH))
        .into_iter()
        .chain(dirs::config_dir().map(|dir| dir.join(USER_CONFIG_PATH)));

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    warn!(
                        path = %warning.file.display(),
                        key = %warning.key,
                        line = ?warning.line,
                        suggestion = ?warning.suggestion,
                        "unknown policy config key"
                    );
                }
                debug!(path = %path.display(), "loaded policy config");
                return with_env_overrides(config);
            }
            Err(err) => warn!(path = %path.display(), error = %err, "ignoring unreadable policy config"),
        }
    }

    with_env_overrides(PolicyConfig::default())
}

/// Apply environment variable overrides (APIDEFAULTS_* prefix)
pub fn with_env_overrides(mut config: PolicyConfig) -> PolicyConfig {
    // APIDEFAULTS_TERMINATION_GRACE_PERIOD_SECONDS
    if let Some(seconds) = env_number("APIDEFAULTS_TERMINATION_GRACE_PERIOD_SECONDS") {
        config.pod.termination_grace_period_seconds = seconds;
    }

    // APIDEFAULTS_NETWORK_MODE
    if let Ok(mode) = std::env::var("APIDEFAULTS_NETWORK_MODE") {
        if !mode.trim().is_empty() {
            config.pod.network_mode = mode.trim().to_string();
        }
    }

    // APIDEFAULTS_DNS_POLICY
    if let Ok(policy) = std::env::var("APIDEFAULTS_DNS_POLICY") {
        config.pod.dns_policy = match policy.to_lowercase().as_str() {
            "default" => DnsPolicy::Default,
            _ => DnsPolicy::ClusterFirst,
        };
    }

    // APIDEFAULTS_RESTART_POLICY
    if let Ok(policy) = std::env::var("APIDEFAULTS_RESTART_POLICY") {
        config.pod.restart_policy = match policy.to_lowercase().as_str() {
            "onfailure" | "on-failure" => RestartPolicy::OnFailure,
            "never" => RestartPolicy::Never,
            _ => RestartPolicy::Always,
        };
    }

    // APIDEFAULTS_TERMINATION_MESSAGE_PATH
    if let Ok(path) = std::env::var("APIDEFAULTS_TERMINATION_MESSAGE_PATH") {
        if !path.trim().is_empty() {
            config.container.termination_message_path = path.trim().to_string();
        }
    }

    // APIDEFAULTS_REPLICAS
    if let Some(replicas) = env_number("APIDEFAULTS_REPLICAS") {
        config.controller.replicas = replicas;
    }

    config
}

fn env_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(variable = name, value = %raw, "ignoring non-numeric override");
            None
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "pod",
        "dns_policy",
        "restart_policy",
        "termination_grace_period_seconds",
        "network_mode",
        "container",
        "termination_message_path",
        "probe",
        "timeout_seconds",
        "period_seconds",
        "success_threshold",
        "failure_threshold",
        "controller",
        "replicas",
        "volume",
        "iscsi_interface",
        "field_selector",
        "api_version",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

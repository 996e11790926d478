use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use apidefaults::{Defaulter, Manifest, PolicyConfig};

use crate::OutputFormat;

/// Input format of a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFormat {
    Yaml,
    Json,
}

impl InputFormat {
    /// `.json` files are JSON; everything else, stdin included, is YAML.
    fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Yaml,
        }
    }
}

pub fn cmd_apply(input: &Path, output: OutputFormat, config: Option<&PathBuf>) -> Result<()> {
    let policy = load_policy(config)?;
    let defaulter = Defaulter::new(&policy);

    let (content, format) = if input == Path::new("-") {
        let content =
            std::io::read_to_string(std::io::stdin()).context("failed to read manifest from stdin")?;
        (content, InputFormat::Yaml)
    } else {
        let content = std::fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        (content, InputFormat::detect(input))
    };

    let mut manifest = match format {
        InputFormat::Yaml => Manifest::from_yaml_str(&content),
        InputFormat::Json => Manifest::from_json_str(&content),
    }
    .with_context(|| format!("failed to decode {}", input.display()))?;

    debug!(kind = %manifest.kind(), ?format, "decoded manifest");
    manifest.apply_defaults(&defaulter);
    info!(kind = %manifest.kind(), "defaults applied");

    let rendered = match output {
        OutputFormat::Yaml => manifest.to_yaml_string()?,
        OutputFormat::Json => {
            let mut json = manifest.to_json_string()?;
            json.push('\n');
            json
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("failed to write manifest")?;
    Ok(())
}

/// An explicit `--config` must load; otherwise fall back through the
/// project and user configs.
fn load_policy(config: Option<&PathBuf>) -> Result<PolicyConfig> {
    let Some(path) = config else {
        let cwd = std::env::current_dir().ok();
        return Ok(PolicyConfig::load_or_default(cwd.as_deref()));
    };

    let (policy, warnings) = PolicyConfig::load_with_warnings(path)
        .with_context(|| format!("failed to load policy config {}", path.display()))?;
    crate::ui::output::print_config_warnings(path, &warnings);
    Ok(policy.with_env_overrides())
}

//! Service configuration and factory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use intervue_core::traits::InterviewService;

use crate::local::LocalService;
use crate::remote::RemoteService;

/// Configuration for a single interview service backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServiceConfig {
    Remote {
        base_url: String,
    },
    Local {},
}

/// Top-level intervue configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervueConfig {
    /// Service configurations keyed by name.
    #[serde(default)]
    pub services: HashMap<String, ServiceConfig>,
    /// Default service to use.
    #[serde(default = "default_service")]
    pub default_service: String,
    /// Default role label for question generation.
    #[serde(default = "default_role")]
    pub default_role: String,
    /// Output directory for reports and exports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_service() -> String {
    "local".to_string()
}
fn default_role() -> String {
    "Software Engineer".to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./intervue-results")
}

impl Default for IntervueConfig {
    fn default() -> Self {
        let mut services = HashMap::new();
        services.insert("local".to_string(), ServiceConfig::Local {});
        Self {
            services,
            default_service: default_service(),
            default_role: default_role(),
            output_dir: default_output_dir(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Resolve env vars in a service config.
fn resolve_service_config(config: &ServiceConfig) -> ServiceConfig {
    match config {
        ServiceConfig::Remote { base_url } => ServiceConfig::Remote {
            base_url: resolve_env_vars(base_url),
        },
        ServiceConfig::Local {} => ServiceConfig::Local {},
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `intervue.toml` in the current directory
/// 2. `~/.config/intervue/config.toml`
///
/// Environment variable override: `INTERVUE_REMOTE_URL`.
pub fn load_config() -> Result<IntervueConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<IntervueConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("intervue.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<IntervueConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => IntervueConfig::default(),
    };

    // Apply env var override
    if let Ok(url) = std::env::var("INTERVUE_REMOTE_URL") {
        config
            .services
            .insert("remote".into(), ServiceConfig::Remote { base_url: url });
    }

    // Resolve env vars in all service configs
    let resolved: HashMap<String, ServiceConfig> = config
        .services
        .iter()
        .map(|(k, v)| (k.clone(), resolve_service_config(v)))
        .collect();
    config.services = resolved;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("intervue"))
}

/// Create a service instance from its configuration.
pub fn create_service(name: &str, config: &ServiceConfig) -> Result<Arc<dyn InterviewService>> {
    match config {
        ServiceConfig::Remote { base_url } => {
            anyhow::ensure!(
                !base_url.is_empty(),
                "service '{name}' has an empty base_url"
            );
            Ok(Arc::new(RemoteService::new(base_url)))
        }
        ServiceConfig::Local {} => Ok(Arc::new(LocalService::new())),
    }
}

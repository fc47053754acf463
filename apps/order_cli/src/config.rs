use std::{fs, path::Path};

use anyhow::{bail, Context};
use client_core::DEFAULT_ORDER_ENDPOINT;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = "order_form.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub order_endpoint: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            order_endpoint: DEFAULT_ORDER_ENDPOINT.into(),
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    order_endpoint: Option<String>,
    log_filter: Option<String>,
}

/// Defaults, then `path` if it exists, then the process environment.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();
    apply_file(&mut settings, path)?;
    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, path: &Path) -> anyhow::Result<()> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read '{}'", path.display()))
        }
    };
    let file_cfg: FileSettings = toml::from_str(&raw)
        .with_context(|| format!("failed to parse '{}'", path.display()))?;

    if let Some(v) = file_cfg.order_endpoint {
        settings.order_endpoint = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("ORDER_ENDPOINT") {
        settings.order_endpoint = v;
    }
    if let Some(v) = var("APP__ORDER_ENDPOINT") {
        settings.order_endpoint = v;
    }
    if let Some(v) = var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

/// Accepts only absolute http(s) URLs.
pub fn validate_endpoint(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim())
        .with_context(|| format!("order endpoint '{raw}' is not a valid url"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("order endpoint '{raw}' must use http or https");
    }
    if url.host_str().is_none() {
        bail!("order endpoint '{raw}' has no host");
    }
    Ok(url)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

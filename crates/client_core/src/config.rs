use std::{fs, path::Path, time::Duration};

use anyhow::{bail, Context};
use serde::Deserialize;
use url::Url;

pub const SETTINGS_FILE: &str = "signup.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub server_url: String,
    pub notification_ttl_ms: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:3333".into(),
            notification_ttl_ms: 3000,
        }
    }
}

impl ClientSettings {
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    notification_ttl_ms: Option<u64>,
}

/// Defaults, then `signup.toml` in the working directory, then environment.
pub fn load_settings() -> anyhow::Result<ClientSettings> {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub(crate) fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ClientSettings> {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        let file_cfg: FileSettings = toml::from_str(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
        if let Some(v) = file_cfg.server_url {
            settings.server_url = v;
        }
        if let Some(v) = file_cfg.notification_ttl_ms {
            settings.notification_ttl_ms = v;
        }
    }

    if let Some(v) = env("SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = env("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(v) = env("APP__NOTIFICATION_TTL_MS") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings.notification_ttl_ms = parsed;
        }
    }

    settings.server_url = normalize_server_url(&settings.server_url)?;
    Ok(settings)
}

pub fn normalize_server_url(raw_server_url: &str) -> anyhow::Result<String> {
    let trimmed = raw_server_url.trim().trim_end_matches('/');
    let parsed =
        Url::parse(trimmed).with_context(|| format!("invalid server url '{raw_server_url}'"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!(
            "server url '{raw_server_url}' must use http or https, got '{}'",
            parsed.scheme()
        );
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

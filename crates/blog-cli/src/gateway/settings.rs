//! Stored connection settings and base URL resolution.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use blog_core::ApiUrl;

use crate::cli::ConnectionArgs;

/// Environment variable naming the gateway base URL.
pub const API_URL_ENV: &str = "BLOG_API_URL";

/// Request timeout when neither the flag nor the settings file sets one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings persisted between runs.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<ApiUrl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Where the base URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiSource {
    Flag,
    Env,
    Settings,
    Default,
}

impl fmt::Display for ApiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiSource::Flag => f.write_str("--api flag"),
            ApiSource::Env => write!(f, "{} environment variable", API_URL_ENV),
            ApiSource::Settings => f.write_str("settings file"),
            ApiSource::Default => f.write_str("default"),
        }
    }
}

/// A fully resolved gateway connection.
#[derive(Debug, Clone)]
pub struct Connection {
    pub api: ApiUrl,
    pub source: ApiSource,
    pub timeout: Duration,
}

/// Get the settings file path.
pub fn settings_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "blogdesk").context("Could not determine config directory")?;

    let config_dir = dirs.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config directory")?;

    Ok(config_dir.join("settings.json"))
}

/// Load settings from disk. A missing file yields empty settings.
pub fn load_settings() -> Result<StoredSettings> {
    let path = settings_path()?;

    if !path.exists() {
        return Ok(StoredSettings::default());
    }

    let json = fs::read_to_string(&path).context("Failed to read settings file")?;
    serde_json::from_str(&json).context("Invalid settings file")
}

/// Save settings to disk.
pub fn save_settings(settings: &StoredSettings) -> Result<()> {
    let path = settings_path()?;
    let json = serde_json::to_string_pretty(settings)?;

    fs::write(&path, json).context("Failed to write settings file")?;
    debug!(path = %path.display(), "Saved settings");

    Ok(())
}

/// Remove the settings file. Returns false if there was none.
pub fn clear_settings() -> Result<bool> {
    let path = settings_path()?;

    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(&path).context("Failed to remove settings file")?;
    Ok(true)
}

/// Resolve the connection from the flags, the environment, and stored
/// settings, in that order.
pub fn resolve(args: &ConnectionArgs) -> Result<Connection> {
    let env = std::env::var(API_URL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty());
    let stored = load_settings()?;
    resolve_from(args, env.as_deref(), &stored)
}

fn resolve_from(
    args: &ConnectionArgs,
    env: Option<&str>,
    stored: &StoredSettings,
) -> Result<Connection> {
    let (api, source) = if let Some(flag) = &args.api {
        (ApiUrl::new(flag).context("Invalid --api URL")?, ApiSource::Flag)
    } else if let Some(env) = env {
        (
            ApiUrl::new(env).with_context(|| format!("Invalid {} value", API_URL_ENV))?,
            ApiSource::Env,
        )
    } else if let Some(api) = &stored.api_url {
        (api.clone(), ApiSource::Settings)
    } else {
        (ApiUrl::default(), ApiSource::Default)
    };

    let timeout_secs = args
        .timeout
        .or(stored.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    debug!(%api, %source, timeout_secs, "Resolved gateway");

    Ok(Connection {
        api,
        source,
        timeout: Duration::from_secs(timeout_secs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(api: Option<&str>, timeout: Option<u64>) -> ConnectionArgs {
        ConnectionArgs {
            api: api.map(String::from),
            timeout,
        }
    }

    fn stored(api: &str) -> StoredSettings {
        StoredSettings {
            api_url: Some(ApiUrl::new(api).unwrap()),
            timeout_secs: Some(5),
        }
    }

    #[test]
    fn flag_wins() {
        let conn = resolve_from(
            &args(Some("https://flag.example"), None),
            Some("https://env.example"),
            &stored("https://stored.example"),
        )
        .unwrap();
        assert_eq!(conn.source, ApiSource::Flag);
        assert_eq!(conn.api.host(), Some("flag.example"));
    }

    #[test]
    fn env_beats_settings_file() {
        let conn = resolve_from(
            &args(None, None),
            Some("https://env.example"),
            &stored("https://stored.example"),
        )
        .unwrap();
        assert_eq!(conn.source, ApiSource::Env);
        assert_eq!(conn.api.host(), Some("env.example"));
    }

    #[test]
    fn settings_file_then_default() {
        let conn = resolve_from(&args(None, None), None, &stored("https://stored.example")).unwrap();
        assert_eq!(conn.source, ApiSource::Settings);
        assert_eq!(conn.timeout, Duration::from_secs(5));

        let conn = resolve_from(&args(None, None), None, &StoredSettings::default()).unwrap();
        assert_eq!(conn.source, ApiSource::Default);
        assert_eq!(conn.api, ApiUrl::default());
        assert_eq!(conn.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn timeout_flag_overrides_stored() {
        let conn = resolve_from(&args(None, Some(2)), None, &stored("https://stored.example")).unwrap();
        assert_eq!(conn.timeout, Duration::from_secs(2));
    }

    #[test]
    fn invalid_flag_is_an_error() {
        let err = resolve_from(&args(Some("ftp://nope"), None), None, &StoredSettings::default())
            .unwrap_err();
        assert!(err.to_string().contains("--api"));
    }

    #[test]
    fn stored_settings_roundtrip_omits_unset() {
        let json = serde_json::to_string(&StoredSettings::default()).unwrap();
        assert_eq!(json, "{}");

        let settings: StoredSettings =
            serde_json::from_str(r#"{"api_url":"file:///tmp/blogs"}"#).unwrap();
        assert!(settings.api_url.unwrap().is_local());
        assert_eq!(settings.timeout_secs, None);
    }
}

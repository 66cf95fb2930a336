use std::fs;
use std::path::Path;

use reqwest::header::HeaderValue;
use reqwest::Url;
use serde::Deserialize;
use tracing::warn;

use super::path::ensure_config_file;
use super::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Contents of `config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Where the dashboard API (`/api/configs`) is served
    pub base_url: String,
    /// Sent as `X-API-Key` when present
    pub api_key: Option<String>,
    pub json_logs: bool,
    pub theme: ThemeConfig,
}

/// Hex colors (`#rrggbb`); unset fields keep the built-in palette.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub bg: Option<String>,
    pub fg: Option<String>,
    pub accent: Option<String>,
    pub muted: Option<String>,
    pub error: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            json_logs: false,
            theme: ThemeConfig::default(),
        }
    }
}

/// Values from the command line or environment; they win over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl Settings {
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(url) = overrides.base_url {
            self.base_url = url;
        }
        if let Some(key) = overrides.api_key {
            self.api_key = Some(key);
        }
        self
    }

    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let url = Url::parse(self.base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }

    pub fn api_key_header(&self) -> Result<Option<HeaderValue>, ConfigError> {
        match self.api_key.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(key) => HeaderValue::from_str(key)
                .map(Some)
                .map_err(|_| ConfigError::InvalidApiKey),
        }
    }
}

pub fn parse_settings(content: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str::<Settings>(content)
}

/// Load settings from `path`, writing the default file first when missing.
///
/// A file that cannot be created falls back to defaults; one that exists but
/// does not parse is an error.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    if let Err(e) = ensure_config_file(path) {
        warn!(path = %path.display(), error = %e, "cannot init config file, using defaults");
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let s = parse_settings("api_key = \"secret\"\n").unwrap();
        assert_eq!(s.base_url, DEFAULT_BASE_URL);
        assert_eq!(s.api_key.as_deref(), Some("secret"));
        assert!(!s.json_logs);
        assert_eq!(s.theme, ThemeConfig::default());
    }

    #[test]
    fn reads_theme_table() {
        let s = parse_settings("[theme]\naccent = \"#ff0000\"\n").unwrap();
        assert_eq!(s.theme.accent.as_deref(), Some("#ff0000"));
        assert!(s.theme.bg.is_none());
    }

    #[test]
    fn overrides_win_over_file() {
        let s = parse_settings("base_url = \"http://file:1\"\napi_key = \"a\"\n")
            .unwrap()
            .apply(Overrides {
                base_url: Some("http://flag:2".into()),
                api_key: None,
            });
        assert_eq!(s.base_url, "http://flag:2");
        assert_eq!(s.api_key.as_deref(), Some("a"));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let s = Settings {
            base_url: "ftp://host".into(),
            ..Settings::default()
        };
        assert!(matches!(
            s.parsed_base_url(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));

        let s = Settings {
            base_url: "not a url".into(),
            ..Settings::default()
        };
        assert!(s.parsed_base_url().is_err());
        assert!(Settings::default().parsed_base_url().is_ok());
    }

    #[test]
    fn blank_api_key_means_no_header() {
        let s = Settings {
            api_key: Some("  ".into()),
            ..Settings::default()
        };
        assert!(s.api_key_header().unwrap().is_none());

        let s = Settings {
            api_key: Some("bad\nkey".into()),
            ..Settings::default()
        };
        assert!(matches!(s.api_key_header(), Err(ConfigError::InvalidApiKey)));
    }

    #[test]
    fn load_creates_then_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let s = load_settings(&path).unwrap();
        assert_eq!(s, Settings::default());
        assert!(path.exists());

        fs::write(&path, "base_url = [1]\n").unwrap();
        assert!(matches!(
            load_settings(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}

//! Configuration layer: paths + TOML settings file.
pub mod io;
pub mod path;

use std::path::PathBuf;

pub use io::{load_settings, Overrides, Settings, ThemeConfig};
pub use path::{config_path, ensure_config_file, expand_path, log_path};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("api key is not a valid header value")]
    InvalidApiKey,

    #[error("cannot build http client: {0}")]
    Client(#[from] reqwest::Error),
}

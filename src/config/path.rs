use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r##"# cfgdash configuration
base_url = "http://127.0.0.1:8000"
# api_key = "..."
json_logs = false

[theme]
# bg = "#282828"
# fg = "#dcdccc"
# accent = "#b5bd68"
# muted = "#969696"
# error = "#cc6666"
"##;

pub fn app_dir() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
    });
    base.join("cfgdash")
}

pub fn config_path() -> PathBuf {
    app_dir().join("config.toml")
}

pub fn log_path() -> PathBuf {
    app_dir().join("cfgdash.log")
}

/// `~` and `$VAR` expansion for paths given on the command line.
pub fn expand_path(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(raw),
    }
}

pub fn ensure_config_file(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    if !path.exists() {
        std::fs::write(path, DEFAULT_CONFIG)?;
    }
    Ok(())
}

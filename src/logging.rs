use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use tracing::Level as TraceLevel;
use tracing_subscriber::FmtSubscriber;

/// Where log lines go. The full-screen dashboard owns the terminal, so it
/// logs to a file.
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// `LOG_LEVEL` (trace, debug, info, warn, error); anything else is info.
pub fn level_from_env() -> TraceLevel {
    parse_level(&std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()))
}

fn parse_level(raw: &str) -> TraceLevel {
    match raw.trim().to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

pub fn init_logging(target: LogTarget, json: bool) -> anyhow::Result<()> {
    let log_level = level_from_env();

    match target {
        LogTarget::Stderr => {
            let builder = FmtSubscriber::builder()
                .with_max_level(log_level)
                .with_writer(std::io::stderr);
            if json {
                tracing::subscriber::set_global_default(builder.json().finish())?;
            } else {
                tracing::subscriber::set_global_default(builder.finish())?;
            }
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("cannot create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            let builder = FmtSubscriber::builder()
                .with_max_level(log_level)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            if json {
                tracing::subscriber::set_global_default(builder.json().finish())?;
            } else {
                tracing::subscriber::set_global_default(builder.finish())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_levels_fall_back_to_info() {
        assert_eq!(parse_level("DEBUG"), TraceLevel::DEBUG);
        assert_eq!(parse_level(" warn "), TraceLevel::WARN);
        assert_eq!(parse_level("verbose"), TraceLevel::INFO);
        assert_eq!(parse_level(""), TraceLevel::INFO);
    }
}

//! One-shot subcommands for scripts and quick edits outside the dashboard.
pub mod cache;
pub mod crud;
pub mod list;

//! Library root for cfgdash
pub mod models;
pub mod util;

pub mod api;
pub mod commands;
pub mod config;
pub mod logging;
pub mod store;
pub mod tui;
pub mod view;

// Convenience re-exports
pub use api::{ConfigApi, HttpTransport, RequestError};
pub use config::{io as cfg_io, path as cfg_path};
pub use store::StateStore;
pub use view::ViewController;

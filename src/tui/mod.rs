//! Terminal binding: draws the render tree and maps keys to controller actions.
pub mod app;
pub mod entry;
pub mod functions;
pub mod input;
pub mod theme;

pub use app::run_tui;

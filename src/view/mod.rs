//! I/O-free dashboard logic: drafts, button states, effects and the render tree.
pub mod controller;
pub mod effects;
pub mod forms;
pub mod tree;

pub use controller::{Completion, Control, Effect, ViewController, CLEARED_LABEL, FLASH_DURATION};
pub use effects::{run_effect, spawn_effects};
pub use forms::{Field, FormDraft, FormId, TextEdit};
pub use tree::{ButtonView, ConfirmView, CreateFormView, RecordView, RenderTree};

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use tracing::{debug, info, warn};

use super::forms::{Field, FormDraft, FormId, TextEdit};
use super::tree::{self, ButtonView, RenderTree};
use crate::api::RequestError;
use crate::models::{Acknowledgement, ConfigEntry};
use crate::store::StateStore;

/// How long a successful cache clear shows its confirmation label.
pub const FLASH_DURATION: Duration = Duration::from_secs(2);
pub const CLEARED_LABEL: &str = "Cleared!";

/// A button whose busy state is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Control {
    Create,
    Save(String),
    ClearCache(String),
}

impl Control {
    pub fn default_label(&self) -> &'static str {
        match self {
            Control::Create => "Create",
            Control::Save(_) => "Save Changes",
            Control::ClearCache(_) => "Clear Cache",
        }
    }

    pub fn busy_label(&self) -> &'static str {
        match self {
            Control::Create => "Creating...",
            Control::Save(_) => "Saving...",
            Control::ClearCache(_) => "Clearing...",
        }
    }
}

impl FormId {
    pub fn submit_control(&self) -> Control {
        match self {
            FormId::Create => Control::Create,
            FormId::Entry(key) => Control::Save(key.clone()),
        }
    }
}

/// Absent from the map means idle: enabled with the default label.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ControlState {
    /// Request in flight.
    Busy,
    /// Write accepted; waiting for the reload that follows.
    Settling,
    /// Cache cleared; reverts when the matching timer fires.
    Flash { token: u64 },
}

/// Work the controller asks its host to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Load,
    Write {
        control: Control,
        key: String,
        raw_value: String,
        description: String,
    },
    ClearCache {
        key: String,
    },
    RevertAfter {
        control: Control,
        token: u64,
        delay: Duration,
    },
}

/// Result of an [`Effect`], fed back through [`ViewController::complete`].
#[derive(Debug)]
pub enum Completion {
    Loaded(Result<Vec<ConfigEntry>, RequestError>),
    Written {
        control: Control,
        result: Result<ConfigEntry, RequestError>,
    },
    CacheCleared {
        key: String,
        result: Result<Acknowledgement, RequestError>,
    },
    RevertDue {
        control: Control,
        token: u64,
    },
}

/// Drives the dashboard: owns the [`StateStore`], form drafts and button
/// states, and turns operator actions into [`Effect`]s.
///
/// It never performs I/O itself. Every load completion is a full re-render:
/// drafts go back to the server values and every control that is not waiting
/// on its own request returns to idle.
#[derive(Debug, Default)]
pub struct ViewController {
    store: StateStore,
    create: FormDraft,
    create_error: Option<String>,
    drafts: HashMap<String, FormDraft>,
    controls: HashMap<Control, ControlState>,
    confirm: Option<String>,
    notices: VecDeque<String>,
    next_token: u64,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Initial load, issued once at startup.
    pub fn start(&mut self) -> Vec<Effect> {
        info!("starting dashboard");
        self.reload()
    }

    pub fn reload(&mut self) -> Vec<Effect> {
        self.store.begin_reload();
        vec![Effect::Load]
    }

    pub fn draft(&self, form: &FormId) -> Option<&FormDraft> {
        match form {
            FormId::Create => Some(&self.create),
            FormId::Entry(key) => self.drafts.get(key),
        }
    }

    pub fn create_error(&self) -> Option<&str> {
        self.create_error.as_deref()
    }

    /// Type into a form. A record's key is read-only.
    pub fn edit(&mut self, form: &FormId, field: Field, edit: TextEdit) {
        let draft = match form {
            FormId::Create => &mut self.create,
            FormId::Entry(_) if field == Field::Key => return,
            FormId::Entry(key) => match self.drafts.get_mut(key) {
                Some(d) => d,
                None => return,
            },
        };
        draft.apply(field, edit);
    }

    pub fn is_enabled(&self, control: &Control) -> bool {
        !self.controls.contains_key(control)
    }

    pub fn button(&self, control: &Control) -> ButtonView {
        let label = match self.controls.get(control) {
            None => control.default_label(),
            Some(ControlState::Busy) | Some(ControlState::Settling) => control.busy_label(),
            Some(ControlState::Flash { .. }) => CLEARED_LABEL,
        };
        ButtonView {
            label: label.to_string(),
            enabled: self.is_enabled(control),
        }
    }

    /// Submit a form. Disabled buttons and incomplete create forms send
    /// nothing.
    pub fn submit(&mut self, form: &FormId) -> Vec<Effect> {
        let control = form.submit_control();
        if !self.is_enabled(&control) {
            return Vec::new();
        }

        let (key, draft) = match form {
            FormId::Create => {
                let draft = self.create.clone();
                if let Some(missing) = missing_field(&draft) {
                    self.create_error = Some(format!("Please fill out the {missing} field."));
                    return Vec::new();
                }
                self.create_error = None;
                (draft.key.clone(), draft)
            }
            // The record's own key, never an input.
            FormId::Entry(key) => match self.drafts.get(key) {
                Some(d) => (key.clone(), d.clone()),
                None => return Vec::new(),
            },
        };

        debug!(%key, "submitting config");
        self.controls.insert(control.clone(), ControlState::Busy);
        vec![Effect::Write {
            control,
            key,
            raw_value: draft.value,
            description: draft.description,
        }]
    }

    /// Ask for confirmation before clearing `key`'s cache.
    pub fn request_cache_clear(&mut self, key: &str) {
        if key.is_empty() || self.store.get(key).is_none() {
            return;
        }
        if !self.is_enabled(&Control::ClearCache(key.to_string())) {
            return;
        }
        self.confirm = Some(key.to_string());
    }

    pub fn pending_confirm(&self) -> Option<&str> {
        self.confirm.as_deref()
    }

    pub fn resolve_confirm(&mut self, accepted: bool) -> Vec<Effect> {
        let Some(key) = self.confirm.take() else {
            return Vec::new();
        };
        if !accepted {
            debug!(%key, "cache clear cancelled");
            return Vec::new();
        }
        let control = Control::ClearCache(key.clone());
        if !self.is_enabled(&control) {
            return Vec::new();
        }
        self.controls.insert(control, ControlState::Busy);
        vec![Effect::ClearCache { key }]
    }

    /// Oldest blocking notification still shown.
    pub fn notice(&self) -> Option<&str> {
        self.notices.front().map(String::as_str)
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    pub fn complete(&mut self, completion: Completion) -> Vec<Effect> {
        match completion {
            Completion::Loaded(result) => {
                self.store.finish_reload(result);
                self.reset_forms();
                Vec::new()
            }
            Completion::Written { control, result } => match result {
                Ok(entry) => {
                    info!(key = %entry.key, "config saved");
                    self.controls.insert(control, ControlState::Settling);
                    self.reload()
                }
                Err(e) => {
                    warn!(error = %e, "config save failed");
                    self.controls.remove(&control);
                    self.notices.push_back(format!("Error saving config: {e}"));
                    Vec::new()
                }
            },
            Completion::CacheCleared { key, result } => {
                let control = Control::ClearCache(key);
                match result {
                    Ok(_) => {
                        self.next_token += 1;
                        let token = self.next_token;
                        self.controls
                            .insert(control.clone(), ControlState::Flash { token });
                        vec![Effect::RevertAfter {
                            control,
                            token,
                            delay: FLASH_DURATION,
                        }]
                    }
                    Err(e) => {
                        warn!(error = %e, "cache clear failed");
                        self.controls.remove(&control);
                        self.notices.push_back(format!("Error clearing cache: {e}"));
                        Vec::new()
                    }
                }
            }
            Completion::RevertDue { control, token } => {
                if self.controls.get(&control) == Some(&ControlState::Flash { token }) {
                    self.controls.remove(&control);
                }
                Vec::new()
            }
        }
    }

    pub fn render(&self) -> RenderTree {
        tree::render(self)
    }

    fn reset_forms(&mut self) {
        self.create = FormDraft::default();
        self.create_error = None;
        self.drafts = self
            .store
            .entries()
            .iter()
            .map(|e| (e.key.clone(), FormDraft::from_entry(e)))
            .collect();
        self.controls.retain(|_, state| *state == ControlState::Busy);
    }
}

fn missing_field(draft: &FormDraft) -> Option<&'static str> {
    if draft.key.is_empty() {
        Some("Key")
    } else if draft.value.is_empty() {
        Some("Value")
    } else {
        None
    }
}

//! Terminal-agnostic description of one frame of the dashboard.

use super::controller::{Control, ViewController};
use super::forms::{FormDraft, FormId};
use crate::models::value_preview;
use crate::util::format_local_time;

pub const CREATE_TITLE: &str = "Create New Configuration";
pub const VALUE_HINT: &str =
    "Enter strings in quotes (e.g., \"value\"), numbers/booleans without (e.g., 120 or true).";
pub const EMPTY_NOTICE: &str = "No configurations found.";
pub const UPDATED_LABEL: &str = "Last Updated";
const PREVIEW_CHARS: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateFormView {
    pub title: &'static str,
    pub draft: FormDraft,
    pub hint: &'static str,
    /// Set when the last submission was missing a required field
    pub validation: Option<String>,
    pub submit: ButtonView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordView {
    pub key: String,
    /// Draft value, pretty JSON until edited
    pub value: String,
    pub description: String,
    /// One-line server value, cut for list rows
    pub preview: String,
    pub updated_label: &'static str,
    pub updated_at: String,
    pub save: ButtonView,
    pub clear_cache: ButtonView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmView {
    pub key: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderTree {
    pub banner: Option<String>,
    pub create: CreateFormView,
    pub heading: String,
    pub records: Vec<RecordView>,
    /// Shown in place of `records` when there is nothing to list
    pub empty_notice: Option<&'static str>,
    pub confirm: Option<ConfirmView>,
    pub notice: Option<String>,
}

impl RenderTree {
    pub fn record(&self, key: &str) -> Option<&RecordView> {
        self.records.iter().find(|r| r.key == key)
    }
}

pub fn confirm_message(key: &str) -> String {
    format!("Are you sure you want to clear the cache for \"{key}\"?")
}

pub fn render(ctl: &ViewController) -> RenderTree {
    let store = ctl.store();

    let records: Vec<RecordView> = store
        .entries()
        .iter()
        .map(|entry| {
            let form = FormId::Entry(entry.key.clone());
            let draft = ctl
                .draft(&form)
                .cloned()
                .unwrap_or_else(|| FormDraft::from_entry(entry));
            RecordView {
                key: entry.key.clone(),
                value: draft.value,
                description: draft.description,
                preview: value_preview(&entry.value, PREVIEW_CHARS),
                updated_label: UPDATED_LABEL,
                updated_at: format_local_time(entry.updated_at.as_ref()),
                save: ctl.button(&Control::Save(entry.key.clone())),
                clear_cache: ctl.button(&Control::ClearCache(entry.key.clone())),
            }
        })
        .collect();

    let empty_notice = (records.is_empty() && store.load_error().is_none()).then_some(EMPTY_NOTICE);

    RenderTree {
        banner: store.load_error().map(|e| format!("Error: {e}")),
        create: CreateFormView {
            title: CREATE_TITLE,
            draft: ctl.draft(&FormId::Create).cloned().unwrap_or_default(),
            hint: VALUE_HINT,
            validation: ctl.create_error().map(str::to_string),
            submit: ctl.button(&Control::Create),
        },
        heading: format!("Existing Configurations ({})", records.len()),
        records,
        empty_notice,
        confirm: ctl.pending_confirm().map(|key| ConfirmView {
            key: key.to_string(),
            message: confirm_message(key),
        }),
        notice: ctl.notice().map(str::to_string),
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::functions::{follow, index_of, row_count, selection_at, Selection};
use crate::view::{Control, Effect, Field, FormId, TextEdit, ViewController};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Form,
}

/// A focusable element of the right-hand form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Text(Field),
    Button(Control),
}

pub enum KeyOutcome {
    Effects(Vec<Effect>),
    Quit,
}

/// Terminal-only state: what is selected and focused. Everything else lives
/// in the [`ViewController`].
#[derive(Debug, Clone)]
pub struct UiState {
    pub selection: Selection,
    pub focus: Focus,
    pub slot: usize,
    /// 0 = Clear, 1 = Cancel
    pub confirm_button: usize,
}

impl Default for UiState {
    fn default() -> Self {
        UiState {
            selection: Selection::Create,
            focus: Focus::List,
            slot: 0,
            confirm_button: 0,
        }
    }
}

impl Selection {
    pub fn form(&self) -> FormId {
        match self {
            Selection::Create => FormId::Create,
            Selection::Entry(key) => FormId::Entry(key.clone()),
        }
    }

    pub fn slots(&self) -> Vec<Slot> {
        match self {
            Selection::Create => vec![
                Slot::Text(Field::Key),
                Slot::Text(Field::Value),
                Slot::Text(Field::Description),
                Slot::Button(Control::Create),
            ],
            // Key is shown but never focusable.
            Selection::Entry(key) => vec![
                Slot::Text(Field::Value),
                Slot::Text(Field::Description),
                Slot::Button(Control::Save(key.clone())),
                Slot::Button(Control::ClearCache(key.clone())),
            ],
        }
    }
}

impl UiState {
    /// Focused slot, if the form has focus.
    pub fn focused(&self) -> Option<Slot> {
        if self.focus != Focus::Form {
            return None;
        }
        self.selection.slots().get(self.slot).cloned()
    }

    /// Re-anchor after the entry list changed.
    pub fn sync(&mut self, ctl: &ViewController) {
        let next = follow(&self.selection, ctl.store().entries());
        if next != self.selection {
            self.selection = next;
            self.focus = Focus::List;
            self.slot = 0;
        }
    }

    pub fn handle_key(&mut self, ctl: &mut ViewController, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyOutcome::Quit;
        }

        // Modals take every key while open.
        if ctl.notice().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                ctl.dismiss_notice();
            }
            return KeyOutcome::Effects(Vec::new());
        }
        if ctl.pending_confirm().is_some() {
            return KeyOutcome::Effects(self.confirm_key(ctl, key));
        }

        match self.focus {
            Focus::List => self.list_key(ctl, key),
            Focus::Form => KeyOutcome::Effects(self.form_key(ctl, key)),
        }
    }

    fn confirm_key(&mut self, ctl: &mut ViewController, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.confirm_button = 1 - self.confirm_button;
                Vec::new()
            }
            KeyCode::Enter => {
                let accepted = self.confirm_button == 0;
                self.confirm_button = 0;
                ctl.resolve_confirm(accepted)
            }
            KeyCode::Esc => {
                self.confirm_button = 0;
                ctl.resolve_confirm(false)
            }
            _ => Vec::new(),
        }
    }

    fn list_key(&mut self, ctl: &mut ViewController, key: KeyEvent) -> KeyOutcome {
        let entries = ctl.store().entries();
        let rows = row_count(entries);
        let selected = index_of(&self.selection, entries);

        match key.code {
            KeyCode::Up => self.selection = selection_at(selected.saturating_sub(1), entries),
            KeyCode::Down => self.selection = selection_at((selected + 1).min(rows - 1), entries),
            KeyCode::Home => self.selection = Selection::Create,
            KeyCode::End => self.selection = selection_at(rows - 1, entries),
            KeyCode::Enter | KeyCode::Tab | KeyCode::Right => {
                self.focus = Focus::Form;
                self.slot = 0;
            }
            KeyCode::Char('c') => {
                if let Selection::Entry(k) = &self.selection {
                    ctl.request_cache_clear(k);
                }
            }
            KeyCode::Char('r') => return KeyOutcome::Effects(ctl.reload()),
            KeyCode::Char('q') | KeyCode::Char('Q') => return KeyOutcome::Quit,
            _ => {}
        }
        KeyOutcome::Effects(Vec::new())
    }

    fn form_key(&mut self, ctl: &mut ViewController, key: KeyEvent) -> Vec<Effect> {
        let slots = self.selection.slots();
        let form = self.selection.form();

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                return ctl.submit(&form);
            }
            return Vec::new();
        }

        match key.code {
            KeyCode::Esc => self.focus = Focus::List,
            KeyCode::Tab | KeyCode::Down => self.slot = (self.slot + 1) % slots.len(),
            KeyCode::BackTab | KeyCode::Up => {
                self.slot = if self.slot == 0 { slots.len() - 1 } else { self.slot - 1 };
            }
            KeyCode::Enter => match slots.get(self.slot) {
                Some(Slot::Text(Field::Value)) => {
                    ctl.edit(&form, Field::Value, TextEdit::Insert('\n'));
                }
                Some(Slot::Text(_)) => self.slot = (self.slot + 1) % slots.len(),
                Some(Slot::Button(Control::ClearCache(k))) => ctl.request_cache_clear(k),
                Some(Slot::Button(_)) => return ctl.submit(&form),
                None => {}
            },
            KeyCode::Backspace => {
                if let Some(Slot::Text(field)) = slots.get(self.slot) {
                    ctl.edit(&form, *field, TextEdit::Backspace);
                }
            }
            KeyCode::Char(c) => {
                if let Some(Slot::Text(field)) = slots.get(self.slot) {
                    ctl.edit(&form, *field, TextEdit::Insert(c));
                }
            }
            _ => {}
        }
        Vec::new()
    }
}

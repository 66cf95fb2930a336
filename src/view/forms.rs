use crate::models::ConfigEntry;

/// Which form an action targets: the creation form or one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormId {
    Create,
    Entry(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Key,
    Value,
    Description,
}

/// One keystroke applied to a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
}

/// Text the operator is typing into a form, before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub key: String,
    pub value: String,
    pub description: String,
}

impl FormDraft {
    pub fn from_entry(entry: &ConfigEntry) -> Self {
        FormDraft {
            key: entry.key.clone(),
            value: entry.value_text(),
            description: entry.description_text().to_string(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Key => &self.key,
            Field::Value => &self.value,
            Field::Description => &self.description,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Key => &mut self.key,
            Field::Value => &mut self.value,
            Field::Description => &mut self.description,
        }
    }

    pub fn apply(&mut self, field: Field, edit: TextEdit) {
        let text = self.field_mut(field);
        match edit {
            TextEdit::Insert(c) => text.push(c),
            TextEdit::Backspace => {
                text.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn draft_starts_from_server_values() {
        let entry = ConfigEntry {
            key: "svc/timeout".into(),
            value: json!(120),
            description: Some("timeout seconds".into()),
            updated_at: None,
        };
        let draft = FormDraft::from_entry(&entry);
        assert_eq!(draft.field(Field::Key), "svc/timeout");
        assert_eq!(draft.field(Field::Value), "120");
        assert_eq!(draft.field(Field::Description), "timeout seconds");
    }

    #[test]
    fn edits_touch_only_the_given_field() {
        let mut draft = FormDraft::default();
        draft.apply(Field::Value, TextEdit::Insert('4'));
        draft.apply(Field::Value, TextEdit::Insert('2'));
        draft.apply(Field::Value, TextEdit::Insert('!'));
        draft.apply(Field::Value, TextEdit::Backspace);
        draft.apply(Field::Key, TextEdit::Backspace);

        assert_eq!(draft.value, "42");
        assert_eq!(draft.key, "");
    }
}

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::models::ConfigEntry;

/// What a row of the left-hand list points at. Row 0 is always the create form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Create,
    Entry(String),
}

pub fn row_count(entries: &[ConfigEntry]) -> usize {
    entries.len() + 1
}

pub fn selection_at(index: usize, entries: &[ConfigEntry]) -> Selection {
    match index.checked_sub(1).and_then(|i| entries.get(i)) {
        Some(entry) => Selection::Entry(entry.key.clone()),
        None => Selection::Create,
    }
}

pub fn index_of(selection: &Selection, entries: &[ConfigEntry]) -> usize {
    match selection {
        Selection::Create => 0,
        Selection::Entry(key) => entries
            .iter()
            .position(|e| &e.key == key)
            .map_or(0, |i| i + 1),
    }
}

/// Keep pointing at `selection` after the entry list changed. A key that
/// disappeared moves to the next key in order, or the last row.
pub fn follow(selection: &Selection, entries: &[ConfigEntry]) -> Selection {
    let Selection::Entry(key) = selection else {
        return Selection::Create;
    };
    entries
        .iter()
        .find(|e| e.key.as_str() >= key.as_str())
        .or_else(|| entries.last())
        .map_or(Selection::Create, |e| Selection::Entry(e.key.clone()))
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn entries(keys: &[&str]) -> Vec<ConfigEntry> {
        keys.iter()
            .map(|k| ConfigEntry {
                key: k.to_string(),
                value: Value::Null,
                description: None,
                updated_at: None,
            })
            .collect()
    }

    #[test]
    fn rows_start_with_create() {
        let e = entries(&["a", "b"]);
        assert_eq!(row_count(&e), 3);
        assert_eq!(selection_at(0, &e), Selection::Create);
        assert_eq!(selection_at(2, &e), Selection::Entry("b".into()));
        assert_eq!(selection_at(9, &e), Selection::Create);
        assert_eq!(index_of(&Selection::Entry("b".into()), &e), 2);
    }

    #[test]
    fn follow_keeps_key_or_moves_to_neighbour() {
        let e = entries(&["a", "c", "e"]);
        assert_eq!(follow(&Selection::Entry("c".into()), &e), Selection::Entry("c".into()));
        assert_eq!(follow(&Selection::Entry("b".into()), &e), Selection::Entry("c".into()));
        assert_eq!(follow(&Selection::Entry("z".into()), &e), Selection::Entry("e".into()));
        assert_eq!(follow(&Selection::Entry("a".into()), &[]), Selection::Create);
    }

    #[test]
    fn centered_rect_stays_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 30, outer);
        assert!((59..=61).contains(&inner.width));
        assert!(inner.right() <= outer.right() && inner.bottom() <= outer.bottom());
        assert!(inner.x > 0 && inner.y > 0);
    }
}

use ratatui::prelude::{Line, Modifier, Span, Style};
use ratatui::widgets::ListItem;

use crate::tui::theme::Theme;
use crate::view::tree::CREATE_TITLE;
use crate::view::RenderTree;

/// Left-pane rows: the create entry, then one row per record.
pub fn get_item_list<'a>(tree: &RenderTree, theme: &Theme) -> Vec<ListItem<'a>> {
    let mut items = vec![ListItem::new(Line::from(Span::styled(
        format!("+ {CREATE_TITLE}"),
        Style::default().fg(theme.accent),
    )))];

    if let Some(notice) = tree.empty_notice {
        items.push(ListItem::new(Line::from(Span::styled(
            notice,
            Style::default().fg(theme.muted),
        ))));
        return items;
    }

    items.extend(tree.records.iter().map(|record| {
        ListItem::new(Line::from(vec![
            Span::styled(
                record.key.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", record.preview),
                Style::default().fg(theme.muted),
            ),
        ]))
    }));
    items
}

use ratatui::layout::Rect;
use ratatui::prelude::{Line, Modifier, Span, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::functions::Selection;
use crate::tui::input::{Slot, UiState};
use crate::tui::theme::Theme;
use crate::view::{ButtonView, Control, Field, RenderTree};

fn field_lines(
    label: &str,
    text: &str,
    focused: bool,
    read_only: bool,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let label_style = if focused {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let text_style = if read_only {
        Style::default().fg(theme.muted)
    } else {
        Style::default().fg(theme.fg)
    };

    let mut lines = vec![Line::from(Span::styled(format!("{label}:"), label_style))];
    let shown = if focused { format!("{text}|") } else { text.to_string() };
    lines.extend(
        shown
            .split('\n')
            .map(|l| Line::from(Span::styled(format!("  {l}"), text_style))),
    );
    lines
}

fn button_span(button: &ButtonView, focused: bool, theme: &Theme) -> Span<'static> {
    let label = format!("[ {} ]", button.label);
    if !button.enabled {
        Span::styled(label, Style::default().fg(theme.muted).add_modifier(Modifier::DIM))
    } else if focused {
        Span::styled(
            label,
            Style::default()
                .bg(theme.accent)
                .fg(theme.bg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(label, Style::default().fg(theme.accent))
    }
}

/// Right pane: the form for whatever row is selected.
pub fn show_form_box(tree: &RenderTree, ui: &UiState, f: &mut ratatui::Frame<'_>, area: Rect, theme: &Theme) {
    let focused = ui.focused();
    let is_focused = |field: Field| focused == Some(Slot::Text(field));
    let button_focused = |control: Control| focused == Some(Slot::Button(control));

    let (title, lines) = match &ui.selection {
        Selection::Create => {
            let form = &tree.create;
            let mut lines = field_lines("Key", &form.draft.key, is_focused(Field::Key), false, theme);
            lines.extend(field_lines("Value", &form.draft.value, is_focused(Field::Value), false, theme));
            lines.push(Line::from(Span::styled(form.hint, Style::default().fg(theme.muted))));
            lines.extend(field_lines(
                "Description",
                &form.draft.description,
                is_focused(Field::Description),
                false,
                theme,
            ));
            lines.push(Line::from(""));
            if let Some(msg) = &form.validation {
                lines.push(Line::from(Span::styled(msg.clone(), Style::default().fg(theme.error))));
            }
            lines.push(Line::from(button_span(
                &form.submit,
                button_focused(Control::Create),
                theme,
            )));
            (form.title.to_string(), lines)
        }
        Selection::Entry(key) => match tree.record(key) {
            Some(record) => {
                let mut lines = field_lines("Key", &record.key, false, true, theme);
                lines.extend(field_lines("Value", &record.value, is_focused(Field::Value), false, theme));
                lines.extend(field_lines(
                    "Description",
                    &record.description,
                    is_focused(Field::Description),
                    false,
                    theme,
                ));
                lines.push(Line::from(Span::styled(
                    format!("{}: {}", record.updated_label, record.updated_at),
                    Style::default().fg(theme.muted),
                )));
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    button_span(&record.save, button_focused(Control::Save(key.clone())), theme),
                    Span::raw("   "),
                    button_span(
                        &record.clear_cache,
                        button_focused(Control::ClearCache(key.clone())),
                        theme,
                    ),
                ]));
                (record.key.clone(), lines)
            }
            None => (key.clone(), Vec::new()),
        },
    };

    let p = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg).fg(theme.fg)),
    );
    f.render_widget(p, area);
}

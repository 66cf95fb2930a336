use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Line, Modifier, Span, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::functions::centered_rect;
use crate::tui::theme::Theme;
use crate::view::ConfirmView;

fn choice(label: &'static str, selected: bool, theme: &Theme) -> Span<'static> {
    if selected {
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

/// Modal asking before a cache clear. `button_index` 0 is Clear, 1 is Cancel.
pub fn show_confirm_box(confirm: &ConfirmView, button_index: usize, f: &mut ratatui::Frame, size: Rect, theme: &Theme) {
    let area = centered_rect(60, 30, size);
    let block = Block::default()
        .title(Span::styled(
            "Confirm cache clear",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.bg).fg(theme.fg));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let msg = Paragraph::new(vec![Line::from(confirm.message.clone())])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(msg, inner);

    let buttons_area = Rect {
        x: inner.x,
        y: inner.y + inner.height.saturating_sub(2),
        width: inner.width,
        height: 1.min(inner.height),
    };
    let buttons = Paragraph::new(Line::from(vec![
        choice("[ Clear ]", button_index == 0, theme),
        Span::raw("   "),
        choice("[ Cancel ]", button_index == 1, theme),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(buttons, buttons_area);
}

use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Line, Modifier, Span, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::functions::centered_rect;
use crate::tui::theme::Theme;

/// Blocking notification; stays up until dismissed with Enter or Esc.
pub fn show_alert_box(message: &str, f: &mut ratatui::Frame, size: Rect, theme: &Theme) {
    let area = centered_rect(60, 30, size);
    let block = Block::default()
        .title(Span::styled(
            "Error",
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.error))
        .style(Style::default().bg(theme.bg).fg(theme.fg));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", Style::default().fg(theme.muted))),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

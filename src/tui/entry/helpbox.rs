use ratatui::prelude::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::input::{Focus, UiState};
use crate::tui::theme::Theme;

/// Help box content for whatever currently has focus.
pub fn get_help_box_content(ui: &UiState, theme: &Theme) -> Paragraph<'static> {
    let help_text = match ui.focus {
        Focus::List => {
            "Shortcuts:  ↑/↓ move • Enter edit • c clear cache • r reload • q quit"
        }
        Focus::Form => {
            "Shortcuts:  Tab/Shift-Tab move • Ctrl-S submit • Esc back\n\
             Notes: Enter adds a line in Value, activates a focused button."
        }
    };

    Paragraph::new(help_text).block(
        Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg).fg(theme.muted)),
    )
}

use std::io::{self, stdout, Stdout};
use std::sync::Arc;

use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    prelude::*,
    widgets::{Block, Borders, List, ListState, Paragraph, Wrap},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::entry::{alertbox, confirmbox, formbox, helpbox, listitems};
use super::functions::Selection;
use super::input::{KeyOutcome, UiState};
use super::theme::Theme;
use crate::api::ConfigApi;
use crate::view::{spawn_effects, Completion, RenderTree, ViewController};

type Term = Terminal<CrosstermBackend<Stdout>>;

fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

fn restore_terminal(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    Ok(())
}

/// Full-screen dashboard. Returns when the operator quits.
pub async fn run_tui(api: Arc<dyn ConfigApi>, theme: Theme) -> anyhow::Result<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, api, &theme).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn event_loop(terminal: &mut Term, api: Arc<dyn ConfigApi>, theme: &Theme) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();
    let mut ctl = ViewController::new();
    let mut ui = UiState::default();
    let mut events = EventStream::new();

    spawn_effects(ctl.start(), &api, &tx);

    loop {
        let tree = ctl.render();
        terminal.draw(|f| draw(f, &tree, &ui, theme))?;

        tokio::select! {
            Some(completion) = rx.recv() => {
                let next = ctl.complete(completion);
                ui.sync(&ctl);
                spawn_effects(next, &api, &tx);
            }
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    match ui.handle_key(&mut ctl, key) {
                        KeyOutcome::Quit => break,
                        KeyOutcome::Effects(effects) => spawn_effects(effects, &api, &tx),
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => {
                    debug!("terminal event stream closed");
                    break;
                }
            },
        }
    }

    info!("dashboard closed");
    Ok(())
}

fn selected_row(tree: &RenderTree, selection: &Selection) -> usize {
    match selection {
        Selection::Create => 0,
        Selection::Entry(key) => tree
            .records
            .iter()
            .position(|r| &r.key == key)
            .map_or(0, |i| i + 1),
    }
}

pub fn draw(f: &mut Frame, tree: &RenderTree, ui: &UiState, theme: &Theme) {
    let size = f.area();
    let banner_height = if tree.banner.is_some() { 3 } else { 0 };
    let vchunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(size);
    let hchunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(vchunks[1]);

    // ----- Banner -----
    if let Some(banner) = &tree.banner {
        let p = Paragraph::new(banner.clone())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.error))
                    .style(Style::default().bg(theme.bg).fg(theme.error)),
            );
        f.render_widget(p, vchunks[0]);
    }

    // ----- List -----
    let mut list_state = ListState::default();
    list_state.select(Some(selected_row(tree, &ui.selection)));
    let list = List::new(listitems::get_item_list(tree, theme))
        .block(
            Block::default()
                .title(tree.heading.clone())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .style(Style::default().bg(theme.bg).fg(theme.fg)),
        )
        .highlight_symbol("➜ ")
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_stateful_widget(list, hchunks[0], &mut list_state);

    // ----- Form -----
    formbox::show_form_box(tree, ui, f, hchunks[1], theme);

    // ----- Help -----
    f.render_widget(helpbox::get_help_box_content(ui, theme), vchunks[2]);

    // ----- Modals -----
    if let Some(confirm) = &tree.confirm {
        confirmbox::show_confirm_box(confirm, ui.confirm_button, f, size, theme);
    }
    if let Some(notice) = &tree.notice {
        alertbox::show_alert_box(notice, f, size, theme);
    }
}

// Status bar component
//
// Key hints for the active screen on the left, uptime on the right.

use super::formatters::hint_line;
use crate::controller::{FormField, Screen};
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Hints shown for the current input mode
pub fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.screen() {
        Screen::IncidentsList if app.search_editing => {
            vec![("type", "filter"), ("Enter/Esc", "done")]
        }
        Screen::IncidentsList => vec![
            ("/", "search"),
            ("↑↓", "select"),
            ("Enter", "open"),
            ("n", "new"),
            ("r", "reload"),
            ("q", "quit"),
        ],
        Screen::CreateIncident if app.controller.create.form.popup.is_some() => {
            vec![("Enter", "dismiss")]
        }
        Screen::CreateIncident if app.controller.create.form.focus == FormField::Department => {
            vec![
                ("←→", "department"),
                ("Enter", "submit"),
                ("Tab", "next field"),
                ("Esc", "cancel"),
            ]
        }
        Screen::CreateIncident => vec![
            ("Tab", "next field"),
            ("Ctrl-S", "submit"),
            ("Esc", "cancel"),
        ],
        Screen::IncidentDetail(_) => vec![("Esc", "back"), ("d", "theme"), ("q", "quit")],
        Screen::Solutions if app.solutions.editing => {
            vec![("type", "filter"), ("Enter/Esc", "done")]
        }
        Screen::Solutions => vec![
            ("/", "search"),
            ("←→", "category"),
            ("↑↓", "select"),
            ("q", "quit"),
        ],
        Screen::Settings => vec![("←→", "tab"), ("Space", "toggle"), ("q", "quit")],
        Screen::Dashboard => vec![("1-4", "screens"), ("d", "theme"), ("q", "quit")],
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border_style(false))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(inner);

    f.render_widget(
        Paragraph::new(hint_line(&hints(app), theme)).style(Style::default().fg(theme.status_bar)),
        cols[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(format!("⏱ {} ", app.uptime())).right_aligned())
            .style(Style::default().fg(theme.status_bar)),
        cols[1],
    );
}

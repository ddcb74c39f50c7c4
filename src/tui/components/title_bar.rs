// Title bar component
//
// App name, the active screen, a spinner while any backend call is in
// flight, and the light/dark indicator.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let mut spans = vec![
        Span::styled(
            " NOC Center",
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · Incident Management", theme.dim()),
        Span::styled(format!(" ──── {}", app.screen().title()), theme.text()),
    ];
    if app.controller.is_busy() {
        spans.push(Span::styled(
            format!(" {}", app.spinner_char()),
            Style::default().fg(theme.accent),
        ));
    }

    let mode = if app.dark_mode { " ☾ dark " } else { " ☀ light " };

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.title))
            .style(Style::default().bg(theme.surface))
            .title_top(Line::from(mode).right_aligned()),
    );

    f.render_widget(title, area);
}

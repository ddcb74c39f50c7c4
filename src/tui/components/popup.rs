// Centered message popup (department suggestion result)

use crate::tui::layout::centered;
use crate::tui::theme::Theme;
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
    let width = 56.min(area.width.saturating_sub(4));
    let popup = centered(area, width, 7);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.surface))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            truncate_to_width(message, usize::from(width.saturating_sub(4)) * 2),
            theme.text(),
        )),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", theme.dim())),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        popup,
    );
}

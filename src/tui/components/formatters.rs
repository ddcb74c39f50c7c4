// Shared formatting helpers for components and views

use crate::catalog::Metric;
use crate::tui::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

/// Bordered block with a bold title in the theme's colors
pub fn panel<'a>(title: &'a str, theme: &Theme, focused: bool) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(focused))
        .style(Style::default().bg(theme.surface))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ))
}

/// `key action │ key action` hint strip
pub fn hint_line<'a>(hints: &[(&'a str, &'a str)], theme: &Theme) -> Line<'a> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", theme.dim()));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", action), theme.dim()));
    }
    Line::from(spans)
}

/// Metric change colored by whether it is an improvement
pub fn change_span(metric: &Metric, theme: &Theme) -> Span<'static> {
    let arrow = if metric.change > 0 { '▲' } else { '▼' };
    let color = if metric.is_improvement() {
        theme.success
    } else {
        theme.danger
    };
    Span::styled(
        format!("{} {}", arrow, metric.change_label()),
        Style::default().fg(color),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::dashboard::METRICS;

    #[test]
    fn change_arrow_follows_sign_color_follows_improvement() {
        let theme = Theme::dark();
        let mttd = change_span(&METRICS[0], &theme);
        assert_eq!(mttd.content, "▼ -15%");
        assert_eq!(mttd.style.fg, Some(theme.success));

        let mttr = change_span(&METRICS[2], &theme);
        assert_eq!(mttr.content, "▲ +10%");
        assert_eq!(mttr.style.fg, Some(theme.danger));
    }

    #[test]
    fn hints_are_separated() {
        let theme = Theme::light();
        let line = hint_line(&[("q", "quit"), ("d", "theme")], &theme);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "q quit │ d theme");
    }
}

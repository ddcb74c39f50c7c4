// Severity badge: "S1" on the severity color

use crate::incidents::Severity;
use crate::tui::theme::Theme;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Compact badge for list rows
pub fn badge(severity: Severity, theme: &Theme) -> Span<'static> {
    Span::styled(
        format!(" {} ", severity.label()),
        Style::default()
            .bg(theme.severity(severity))
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )
}

/// Badge with the tier name, for the detail header
pub fn labeled(severity: Severity, theme: &Theme) -> Vec<Span<'static>> {
    vec![
        badge(severity, theme),
        Span::styled(
            format!(" {}", severity.description()),
            Style::default().fg(theme.severity(severity)),
        ),
    ]
}

// Theme system for the TUI
//
// Two palettes, light and dark, switched at runtime with 'd'. The active
// theme is derived from the dark-mode flag and handed to every render
// function; nothing reads it from global state.

use crate::incidents::Severity;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Complete theme definition with all UI colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,

    // Base colors
    pub background: Color,
    pub surface: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_type: BorderType,

    // Title and status
    pub title: Color,
    pub status_bar: Color,

    // Selection
    pub selection: Color,
    pub selection_fg: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,
    pub accent: Color,

    // Severity badges
    pub sev_critical: Color,
    pub sev_high: Color,
    pub sev_medium: Color,
    pub sev_low: Color,

    // Chart
    pub chart_opened: Color,
    pub chart_resolved: Color,
}

impl Theme {
    /// Palette for the given mode
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "Dark",
            background: Color::Rgb(17, 24, 39),
            surface: Color::Rgb(31, 41, 55),
            foreground: Color::Rgb(243, 244, 246),
            muted: Color::Rgb(156, 163, 175),
            border: Color::Rgb(55, 65, 81),
            border_focused: Color::Rgb(96, 165, 250),
            border_type: BorderType::Rounded,
            title: Color::Rgb(96, 165, 250),
            status_bar: Color::Rgb(156, 163, 175),
            selection: Color::Rgb(30, 58, 138),
            selection_fg: Color::White,
            success: Color::Rgb(74, 222, 128),
            warning: Color::Rgb(251, 146, 60),
            danger: Color::Rgb(248, 113, 113),
            info: Color::Rgb(96, 165, 250),
            accent: Color::Rgb(192, 132, 252),
            sev_critical: Color::Rgb(248, 113, 113),
            sev_high: Color::Rgb(251, 146, 60),
            sev_medium: Color::Rgb(250, 204, 21),
            sev_low: Color::Rgb(96, 165, 250),
            chart_opened: Color::Rgb(96, 165, 250),
            chart_resolved: Color::Rgb(74, 222, 128),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light",
            background: Color::Rgb(249, 250, 251),
            surface: Color::White,
            foreground: Color::Rgb(17, 24, 39),
            muted: Color::Rgb(107, 114, 128),
            border: Color::Rgb(209, 213, 219),
            border_focused: Color::Rgb(37, 99, 235),
            border_type: BorderType::Plain,
            title: Color::Rgb(37, 99, 235),
            status_bar: Color::Rgb(75, 85, 99),
            selection: Color::Rgb(219, 234, 254),
            selection_fg: Color::Rgb(30, 64, 175),
            success: Color::Rgb(22, 163, 74),
            warning: Color::Rgb(234, 88, 12),
            danger: Color::Rgb(220, 38, 38),
            info: Color::Rgb(37, 99, 235),
            accent: Color::Rgb(147, 51, 234),
            sev_critical: Color::Rgb(220, 38, 38),
            sev_high: Color::Rgb(234, 88, 12),
            sev_medium: Color::Rgb(202, 138, 4),
            sev_low: Color::Rgb(37, 99, 235),
            chart_opened: Color::Rgb(59, 130, 246),
            chart_resolved: Color::Rgb(34, 197, 94),
        }
    }

    pub fn severity(&self, severity: Severity) -> Color {
        match severity {
            Severity::S1 => self.sev_critical,
            Severity::S2 => self.sev_high,
            Severity::S3 => self.sev_medium,
            Severity::S4 => self.sev_low,
        }
    }

    // ─── Style helpers ──────────────────────────────────────────────────

    pub fn text(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selection)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_selects_palette() {
        assert_eq!(Theme::for_mode(true).name, "Dark");
        assert_eq!(Theme::for_mode(false).name, "Light");
        assert_ne!(Theme::dark().background, Theme::light().background);
    }

    #[test]
    fn severity_colors_are_distinct() {
        let theme = Theme::dark();
        let colors = [
            theme.severity(Severity::S1),
            theme.severity(Severity::S2),
            theme.severity(Severity::S3),
            theme.severity(Severity::S4),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

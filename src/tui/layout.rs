//! Responsive layout: breakpoints and the application shell.
//!
//! Single source of truth for width thresholds - no magic numbers scattered in render code.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 80 cols: sidebar collapses to numbers, fewer list columns
    Compact,
    /// 80-119 cols
    Normal,
    /// 120+ cols: side panels next to the main content
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=79 => Breakpoint::Compact,
            80..=119 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }

    /// Sidebar column width
    pub fn sidebar_width(&self) -> u16 {
        match self {
            Breakpoint::Compact => 7,
            _ => 20,
        }
    }
}

/// Regions of the application frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shell {
    pub title: Rect,
    pub sidebar: Rect,
    pub content: Rect,
    pub status: Rect,
}

impl Shell {
    /// Title bar on top, status bar at the bottom, sidebar left of content
    pub fn split(area: Rect) -> Self {
        let bp = Breakpoint::from_width(area.width);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(2),
            ])
            .split(area);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(bp.sidebar_width()), Constraint::Min(10)])
            .split(rows[1]);

        Self {
            title: rows[0],
            sidebar: cols[0],
            content: cols[1],
            status: rows[2],
        }
    }
}

/// A `width` x `height` rect centered in `area`, clamped to fit
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(79), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(80), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(119), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(120), Breakpoint::Wide);
        assert!(Breakpoint::Wide.at_least(Breakpoint::Normal));
        assert!(!Breakpoint::Compact.at_least(Breakpoint::Normal));
    }

    #[test]
    fn shell_covers_frame() {
        let area = Rect::new(0, 0, 120, 40);
        let shell = Shell::split(area);
        assert_eq!(shell.title.height, 3);
        assert_eq!(shell.status.height, 2);
        assert_eq!(shell.sidebar.width, 20);
        assert_eq!(shell.sidebar.width + shell.content.width, 120);
        assert_eq!(shell.content.height, 35);
    }

    #[test]
    fn centered_is_clamped() {
        let area = Rect::new(10, 5, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(15, 8, 10, 4));
        assert_eq!(centered(area, 50, 50), area);
    }
}

// Components module - reusable UI building blocks
//
// Shell components are rendered on every screen:
// - Title bar: app name, busy spinner, dark-mode indicator
// - Sidebar: the four top-level screens
// - Status bar: key hints for the active screen, uptime
//
// Overlays (toast, popup) draw on top of whatever is below.

pub mod formatters;
pub mod popup;
pub mod severity_badge;
pub mod sidebar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the sidebar (convenience wrapper)
pub fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    sidebar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}

pub use formatters::{change_span, panel};

// Views module - screen-level rendering logic
//
// Each screen fills the content slot of the shell:
// - Dashboard: KPIs, weekly chart, error budgets, insights
// - Incidents: searchable list, create form, detail
// - Solutions: runbook library
// - Settings: team, notifications, integrations, system
//
// This module draws the shell and dispatches to the active screen.

mod create;
mod dashboard;
mod detail;
mod incidents;
mod settings;
mod solutions;

use super::app::App;
use super::layout::Shell;
use crate::controller::Screen;
use crate::tui::components::{self, popup};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    app.clear_expired_toast();

    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    let full = f.area();
    f.render_widget(bg_block, full);

    let shell = Shell::split(full);
    components::render_title(f, shell.title, app);
    components::render_sidebar(f, shell.sidebar, app);

    let area = shell.content;
    match app.screen() {
        Screen::Dashboard => dashboard::render(f, area, app),
        Screen::IncidentsList => incidents::render(f, area, app),
        Screen::CreateIncident => create::render(f, area, app),
        Screen::IncidentDetail(id) => detail::render(f, area, app, id),
        Screen::Solutions => solutions::render(f, area, app),
        Screen::Settings => settings::render(f, area, app),
    }

    components::render_status(f, shell.status, app);

    if app.screen() == Screen::CreateIncident {
        if let Some(message) = &app.controller.create.form.popup {
            popup::render(f, area, "Gợi ý phòng ban", message, &app.theme);
        }
    }

    if let Some(toast) = &app.toast {
        toast.render(f, full, &app.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::dead_backend;
    use crate::config::Config;
    use crate::controller::{Controller, Nav, SidebarItem};
    use crate::catalog::SettingsTab;
    use crate::incidents::{Incident, IncidentStatus, Severity};
    use crate::logging::LogBuffer;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    async fn app() -> App {
        let client = dead_backend().await;
        let (controller, _rx) = Controller::new(Arc::new(client));
        App::new(controller, Config::default(), LogBuffer::new())
    }

    fn screen_text(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[tokio::test]
    async fn every_screen_renders_at_every_breakpoint() {
        let mut app = app().await;
        for item in SidebarItem::ALL {
            app.open(item);
            for (w, h) in [(60, 20), (100, 30), (160, 45)] {
                let text = screen_text(&mut app, w, h);
                assert!(text.contains("NOC Center"), "{item:?} at {w}x{h}");
            }
        }
    }

    #[tokio::test]
    async fn incidents_screen_shows_loaded_rows() {
        let mut app = app().await;
        app.open(SidebarItem::Incidents);
        app.controller.list.items = vec![Incident {
            id: 7,
            name: "VPN sập".into(),
            description: "Không kết nối được".into(),
            department_name: "Network".into(),
            status: IncidentStatus::Open,
            created_at: "2024-01-15T10:30:00Z".into(),
        }];

        let text = screen_text(&mut app, 140, 30);
        assert!(text.contains("VPN sập"));
        assert!(text.contains("Network"));
    }

    #[tokio::test]
    async fn create_screen_draws_suggestion_popup() {
        let mut app = app().await;
        app.open(SidebarItem::Incidents);
        app.controller.navigate(Nav::CreateNew).unwrap();
        app.controller.create.form.popup = Some("Hệ thống gợi ý phòng: Security".into());

        let text = screen_text(&mut app, 120, 36);
        assert!(text.contains("Gợi ý phòng ban"));
        assert!(text.contains("Security"));
    }

    #[tokio::test]
    async fn create_screen_titles_department_panel_with_selection() {
        let mut app = app().await;
        app.open(SidebarItem::Incidents);
        app.controller.navigate(Nav::CreateNew).unwrap();
        assert!(screen_text(&mut app, 140, 36).contains("Phòng ban · chưa chọn"));

        app.controller.create.form.department = Some(2);
        let text = screen_text(&mut app, 140, 36);
        assert!(text.contains("Phòng ban · Phòng Tích hợp"));
    }

    #[tokio::test]
    async fn settings_lists_severity_tiers_and_log_count() {
        let mut app = app().await;
        app.open(SidebarItem::Settings);
        app.settings.tab = SettingsTab::Notifications;
        let text = screen_text(&mut app, 160, 45);
        for severity in Severity::ALL {
            assert!(text.contains(severity.description()), "{severity:?}");
        }

        app.settings.tab = SettingsTab::System;
        let text = screen_text(&mut app, 160, 45);
        assert!(text.contains("Nhật ký gần đây (0)"));
        assert!(text.contains("Chưa có nhật ký."));
    }
}

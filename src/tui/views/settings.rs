// Settings view - team, notification toggles, integrations, system info
//
// Notification toggles live in the app state; everything else is read-only.

use crate::catalog::settings::{
    INTEGRATIONS, NOTIFICATION_RULES, SLACK_CHANNEL, SLA_TARGETS, TEAM,
};
use crate::catalog::SettingsTab;
use crate::tui::app::App;
use crate::incidents::Severity;
use crate::tui::components::{panel, severity_badge};
use crate::tui::theme::Theme;
use crate::util::fit_width;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Wrap},
    Frame,
};
use tracing::Level;

/// Log lines shown on the System tab
const LOG_TAIL: usize = 8;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let titles: Vec<&str> = SettingsTab::ALL.iter().map(|t| t.label()).collect();
    let tabs = Tabs::new(titles)
        .block(panel("Cài đặt", theme, false))
        .select(app.settings.tab.index())
        .style(theme.dim())
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, rows[0]);

    match app.settings.tab {
        SettingsTab::Users => render_users(f, rows[1], theme),
        SettingsTab::Notifications => render_notifications(f, rows[1], app),
        SettingsTab::Integrations => render_integrations(f, rows[1], theme),
        SettingsTab::System => render_system(f, rows[1], app),
    }
}

fn render_users(f: &mut Frame, area: Rect, theme: &Theme) {
    let mut lines = vec![Line::from(Span::styled(
        format!(
            "  {}{}{}{}{}",
            fit_width("Tên", 18),
            fit_width("Email", 24),
            fit_width("Vai trò", 16),
            fit_width("Nhóm", 16),
            "Đăng nhập cuối"
        ),
        theme.heading(),
    ))];
    for member in TEAM.iter() {
        let (dot, color) = if member.active {
            ("●", theme.success)
        } else {
            ("○", theme.muted)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", dot), Style::default().fg(color)),
            Span::styled(fit_width(member.name, 18), theme.text()),
            Span::styled(fit_width(member.email, 24), theme.dim()),
            Span::styled(fit_width(member.role, 16), theme.text()),
            Span::styled(fit_width(member.team, 16), Style::default().fg(theme.info)),
            Span::styled(member.last_login, theme.dim()),
        ]));
    }
    f.render_widget(
        Paragraph::new(lines).block(panel("Thành viên", theme, true)),
        area,
    );
}

fn render_notifications(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let settings = &app.settings;

    let mut lines: Vec<Line> = NOTIFICATION_RULES
        .iter()
        .zip(settings.notifications.iter())
        .enumerate()
        .map(|(i, (rule, on))| {
            let selected = i == settings.selected;
            let check = if *on { "[x]" } else { "[ ]" };
            let style = if selected {
                theme.selected()
            } else {
                theme.text()
            };
            Line::from(vec![
                Span::styled(if selected { "▸ " } else { "  " }, style),
                Span::styled(format!("{} ", check), style),
                Span::styled(rule.label, style),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Kênh Slack: ", theme.dim()),
        Span::styled(SLACK_CHANNEL, Style::default().fg(theme.accent)),
    ]));
    for (tier, minutes) in SLA_TARGETS.iter() {
        lines.push(Line::from(vec![
            Span::styled(format!("  SLA {}: ", tier), theme.dim()),
            Span::styled(format!("{} phút", minutes), theme.text()),
        ]));
    }

    lines.push(Line::from(Span::styled("  Mức độ nghiêm trọng:", theme.dim())));
    for severity in Severity::ALL {
        let mut spans = vec![Span::raw("  ")];
        spans.extend(severity_badge::labeled(severity, theme));
        lines.push(Line::from(spans));
    }

    f.render_widget(
        Paragraph::new(lines).block(panel("Quy tắc thông báo", theme, true)),
        area,
    );
}

fn render_integrations(f: &mut Frame, area: Rect, theme: &Theme) {
    let mut lines = Vec::new();
    for integration in INTEGRATIONS.iter() {
        let color = if integration.connected {
            theme.success
        } else {
            theme.muted
        };
        lines.push(Line::from(vec![
            Span::styled(fit_width(integration.name, 16), theme.heading()),
            Span::styled(
                integration.status_label(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  · {}", integration.last_sync), theme.dim()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", integration.description),
            theme.text(),
        )));
        lines.push(Line::from(""));
    }
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("Tích hợp", theme, true)),
        area,
    );
}

fn render_system(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let cols = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(3)])
        .split(area);

    let config = &app.config;
    let logging = &config.logging;
    let row = |key: &'static str, value: String| {
        Line::from(vec![
            Span::styled(fit_width(key, 16), theme.dim()),
            Span::styled(value, theme.text()),
        ])
    };
    let file_logging = if logging.file_enabled {
        format!(
            "{} ({}, {})",
            logging.file_dir.display(),
            logging.file_prefix,
            logging.file_rotation.as_str()
        )
    } else {
        "tắt".to_string()
    };
    let lines = vec![
        row("API", config.api_url.clone()),
        row("Giao diện", theme.name.to_string()),
        row("Log level", logging.level.clone()),
        row("Log file", file_logging),
        row(
            "Cấu hình",
            crate::config::Config::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(không có)".to_string()),
        ),
        row("Uptime", app.uptime()),
    ];
    f.render_widget(
        Paragraph::new(lines).block(panel("Hệ thống", theme, false)),
        cols[0],
    );

    let visible = usize::from(cols[1].height.saturating_sub(2)).min(LOG_TAIL);
    let logs: Vec<Line> = app
        .log_buffer
        .recent(visible)
        .into_iter()
        .map(|entry| {
            let color = match entry.level {
                Level::ERROR => theme.danger,
                Level::WARN => theme.warning,
                Level::INFO => theme.info,
                _ => theme.muted,
            };
            Line::from(vec![
                Span::styled(entry.timestamp.format("%H:%M:%S ").to_string(), theme.dim()),
                Span::styled(format!("{:<5} ", entry.level), Style::default().fg(color)),
                Span::styled(format!("{}: ", entry.short_target()), theme.dim()),
                Span::styled(entry.message, theme.text()),
            ])
        })
        .collect();
    let title = format!("Nhật ký gần đây ({})", app.log_buffer.len());
    let body = if app.log_buffer.is_empty() {
        Paragraph::new(Span::styled("Chưa có nhật ký.", theme.dim()))
    } else {
        Paragraph::new(logs)
    };
    f.render_widget(body.block(panel(&title, theme, false)), cols[1]);
}

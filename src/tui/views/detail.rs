// Incident detail view - header, AI root-cause list, quick actions

use crate::controller::FallbackReason;
use crate::tui::app::App;
use crate::tui::components::{panel, severity_badge};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const QUICK_ACTIONS: [&str; 4] = [
    "Gán cho kỹ sư trực",
    "Mở kênh war-room",
    "Áp dụng runbook",
    "Đánh dấu đã xử lý",
];

pub fn render(f: &mut Frame, area: Rect, app: &App, id: i64) {
    let theme = &app.theme;
    let state = &app.controller.detail;

    let Some(detail) = &state.detail else {
        let text = format!("{} Đang tải chi tiết sự cố #{}...", app.spinner_char(), id);
        f.render_widget(
            Paragraph::new(Span::styled(text, theme.dim())).block(panel("Chi tiết", theme, true)),
            area,
        );
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(area);

    let mut header_top = vec![Span::styled(
        format!("#{} ", id),
        theme.dim().add_modifier(Modifier::BOLD),
    )];
    header_top.extend(severity_badge::labeled(state.severity(), theme));
    if let Some(status) = &state.status {
        header_top.push(Span::styled(format!("  · {}", status), theme.dim()));
    }

    let mut header = vec![
        Line::from(header_top),
        Line::from(vec![
            Span::styled("Phòng ban: ", theme.dim()),
            Span::styled(detail.department_display(), Style::default().fg(theme.info)),
        ]),
    ];
    if let Some(reason) = state.fallback {
        header.push(Line::from(Span::styled(
            fallback_note(reason),
            Style::default().fg(theme.warning),
        )));
    }
    f.render_widget(
        Paragraph::new(header)
            .wrap(Wrap { trim: true })
            .block(panel(&detail.detail, theme, false)),
        rows[0],
    );

    let wide = Breakpoint::from_width(area.width).at_least(Breakpoint::Normal);
    let body = if wide {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(28)])
            .split(rows[1])
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(6)])
            .split(rows[1])
    };

    let mut lines = Vec::new();
    if detail.reason_list.is_empty() {
        lines.push(Line::from(Span::styled(
            "Chưa có phân tích nguyên nhân.",
            theme.dim(),
        )));
    }
    for (i, reason) in detail.reason_list.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("{}. {}", i + 1, reason.title),
            theme.heading(),
        )));
        lines.push(Line::from(Span::styled(
            format!("   {}", reason.description),
            theme.text(),
        )));
        lines.push(Line::from(vec![
            Span::styled("   → ", Style::default().fg(theme.success)),
            Span::styled(reason.actions.as_str(), Style::default().fg(theme.success)),
        ]));
        lines.push(Line::from(""));
    }
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("Nguyên nhân khả dĩ (AI)", theme, true)),
        body[0],
    );

    let actions: Vec<Line> = QUICK_ACTIONS
        .iter()
        .map(|a| Line::from(vec![Span::styled("• ", theme.dim()), Span::styled(*a, theme.text())]))
        .collect();
    f.render_widget(
        Paragraph::new(actions).block(panel("Thao tác nhanh", theme, false)),
        body[1],
    );
}

fn fallback_note(reason: FallbackReason) -> String {
    let why = match reason {
        FallbackReason::Status(code) => format!("máy chủ trả về {}", code),
        FallbackReason::Network => "không kết nối được máy chủ".to_string(),
        FallbackReason::Malformed => "dữ liệu không hợp lệ".to_string(),
    };
    format!("⚠ Đang hiển thị dữ liệu mẫu ({})", why)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_note_names_the_cause() {
        assert!(fallback_note(FallbackReason::Status(503)).contains("503"));
        assert!(fallback_note(FallbackReason::Network).contains("không kết nối"));
    }
}

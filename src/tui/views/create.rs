// Create-incident view - title, description, department selector

use crate::controller::FormField;
use crate::incidents::DEPARTMENTS;
use crate::tui::app::App;
use crate::tui::components::panel;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let create = &app.controller.create;
    let form = &create.form;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(DEPARTMENTS.len() as u16 + 2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    render_input(
        f,
        rows[0],
        "Tiêu đề sự cố",
        &form.title,
        form.focus == FormField::Title,
        theme,
    );
    render_input(
        f,
        rows[1],
        "Mô tả",
        &form.description,
        form.focus == FormField::Description,
        theme,
    );

    let dept_title = match (create.is_suggesting(), form.selected_department()) {
        (true, _) => format!("Phòng ban {} đang gợi ý", app.spinner_char()),
        (false, Some(d)) => format!("Phòng ban · {}", d.name),
        (false, None) => "Phòng ban · chưa chọn".to_string(),
    };
    let dept_lines: Vec<Line> = DEPARTMENTS
        .iter()
        .map(|d| {
            let chosen = form.department == Some(d.id);
            let marker = if chosen { "●" } else { "○" };
            let style = if chosen {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme.text()
            };
            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(format!("{:<6}", d.code), style),
                Span::styled(d.name, style),
                Span::styled(format!("  {}", d.description), theme.dim()),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(dept_lines).block(panel(
            &dept_title,
            theme,
            form.focus == FormField::Department,
        )),
        rows[2],
    );

    let status = if create.is_submitting() {
        Line::from(Span::styled(
            format!("{} Đang tạo sự cố...", app.spinner_char()),
            Style::default().fg(theme.info),
        ))
    } else if let Some(error) = &form.error {
        Line::from(Span::styled(
            format!("✗ {}", error),
            Style::default().fg(theme.danger),
        ))
    } else {
        Line::from(Span::styled(
            "Ctrl-S hoặc Enter ở ô phòng ban để tạo sự cố",
            theme.dim(),
        ))
    };
    f.render_widget(Paragraph::new(status), rows[3]);
}

fn render_input(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool, theme: &Theme) {
    let mut spans = vec![Span::styled(value.to_string(), theme.text())];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .block(panel(title, theme, focused)),
        area,
    );
}

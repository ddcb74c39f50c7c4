// Solutions view - runbook library with category tabs and search

use crate::catalog::Category;
use crate::tui::app::App;
use crate::tui::components::panel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Wrap},
    Frame,
};

/// Steps listed before collapsing the rest
const PREVIEW_STEPS: usize = 2;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let state = &app.solutions;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
        ])
        .split(area);

    let titles: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{} ({})", c.label(), c.count()))
        .collect();
    let selected = Category::ALL
        .iter()
        .position(|c| *c == state.category)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .block(panel("Danh mục", theme, false))
        .select(selected)
        .style(theme.dim())
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, rows[0]);

    let search = if state.query.is_empty() && !state.editing {
        Line::from(Span::styled("Nhấn / để tìm giải pháp...", theme.dim()))
    } else {
        let mut spans = vec![Span::styled(state.query.as_str(), theme.text())];
        if state.editing {
            spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
        }
        Line::from(spans)
    };
    f.render_widget(
        Paragraph::new(search).block(panel("Tìm kiếm", theme, state.editing)),
        rows[1],
    );

    let visible = state.visible();
    let block = panel("Runbooks", theme, !state.editing);
    if visible.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("Không tìm thấy giải pháp phù hợp.", theme.dim()))
                .block(block),
            rows[2],
        );
        return;
    }

    let mut lines = Vec::new();
    for (i, solution) in visible.iter().enumerate() {
        let selected = i == state.selected;
        let title_style = if selected {
            theme.selected()
        } else {
            theme.heading()
        };
        lines.push(Line::from(vec![
            Span::styled(if selected { "▸ " } else { "  " }, title_style),
            Span::styled(solution.title, title_style),
            Span::styled(
                format!("  ★ {:.1}", solution.rating),
                Style::default().fg(theme.warning),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", solution.description),
            theme.text(),
        )));
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", solution.category.label()),
                Style::default().fg(theme.info),
            ),
            Span::styled(
                solution
                    .tags
                    .iter()
                    .map(|t| format!("#{}", t))
                    .collect::<Vec<_>>()
                    .join(" "),
                theme.dim(),
            ),
            Span::styled(
                format!(
                    "  · {} lượt dùng · {} · cập nhật {}",
                    solution.usage_count, solution.estimated_time, solution.last_updated
                ),
                theme.dim(),
            ),
        ]));
        for (n, step) in solution.steps.iter().take(PREVIEW_STEPS).enumerate() {
            lines.push(Line::from(Span::styled(
                format!("    {}. {}", n + 1, step),
                theme.text(),
            )));
        }
        let hidden = solution.steps.len().saturating_sub(PREVIEW_STEPS);
        if hidden > 0 {
            lines.push(Line::from(Span::styled(
                format!("    ... và {} bước nữa", hidden),
                theme.dim(),
            )));
        }
        lines.push(Line::from(""));
    }

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        rows[2],
    );
}

// Incidents list view - search box plus the incident table

use crate::tui::app::App;
use crate::tui::components::panel;
use crate::tui::components::severity_badge;
use crate::tui::layout::Breakpoint;
use crate::util::{fit_width, single_line};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_search(f, rows[0], app);
    render_table(f, rows[1], app);
}

fn render_search(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let query = &app.controller.list.query;

    let content = if query.is_empty() && !app.search_editing {
        Line::from(Span::styled("Nhấn / để tìm kiếm sự cố...", theme.dim()))
    } else {
        let mut spans = vec![Span::styled(query.clone(), theme.text())];
        if app.search_editing {
            spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
        }
        Line::from(spans)
    };

    f.render_widget(
        Paragraph::new(content).block(panel("Tìm kiếm", theme, app.search_editing)),
        area,
    );
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let list = &app.controller.list;
    let title = if list.is_loading() {
        format!("Sự cố {} đang tải", app.spinner_char())
    } else {
        format!("Sự cố ({})", list.items.len())
    };
    let block = panel(&title, theme, !app.search_editing);

    if let Some(error) = &list.error {
        let message = Paragraph::new(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(theme.danger),
        )))
        .block(block);
        f.render_widget(message, area);
        return;
    }

    if list.items.is_empty() {
        let hint = if list.is_loading() {
            "Đang tải danh sách sự cố..."
        } else if list.query.is_empty() {
            "Chưa có sự cố nào. Nhấn n để tạo mới."
        } else {
            "Không tìm thấy sự cố phù hợp."
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(hint, theme.dim()))).block(block),
            area,
        );
        return;
    }

    let wide = Breakpoint::from_width(area.width).at_least(Breakpoint::Normal);
    let inner_width = usize::from(area.width.saturating_sub(2));
    // badge, status, date and department take the fixed part of the row
    let fixed = if wide { 5 + 11 + 17 + 20 } else { 5 + 11 };
    let text_width = inner_width.saturating_sub(fixed + 2);
    let name_width = text_width / 2;
    let desc_width = text_width - name_width;

    let items: Vec<ListItem> = list
        .items
        .iter()
        .map(|incident| {
            let mut spans = vec![
                severity_badge::badge(incident.severity(), theme),
                Span::raw(" "),
                Span::styled(
                    fit_width(incident.status.as_str(), 10),
                    Style::default().fg(theme.severity(incident.severity())),
                ),
                Span::raw(" "),
                Span::styled(
                    fit_width(&single_line(&incident.name), name_width),
                    theme.text().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    fit_width(&single_line(&incident.description), desc_width),
                    theme.dim(),
                ),
            ];
            if wide {
                spans.push(Span::styled(
                    fit_width(&incident.department_name, 19),
                    Style::default().fg(theme.info),
                ));
                spans.push(Span::raw(" "));
                spans.push(Span::styled(incident.created_display(), theme.dim()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let widget = List::new(items)
        .block(block)
        .highlight_style(theme.selected())
        .highlight_symbol("▸ ");

    let mut state = ListState::default().with_selected(Some(list.selected));
    f.render_stateful_widget(widget, area, &mut state);
}

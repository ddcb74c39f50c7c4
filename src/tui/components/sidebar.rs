// Sidebar component
//
// The four top-level screens. The entry owning the active screen is
// highlighted; detail and create count as Incidents.

use crate::controller::SidebarItem;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

fn icon(item: SidebarItem) -> &'static str {
    match item {
        SidebarItem::Dashboard => "◆",
        SidebarItem::Incidents => "▲",
        SidebarItem::Solutions => "✚",
        SidebarItem::Settings => "⚙",
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let active = app.screen().sidebar_item();
    let compact = !Breakpoint::from_width(f.area().width).at_least(Breakpoint::Normal);

    let items: Vec<ListItem> = SidebarItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let text = if compact {
                format!(" {} {}", i + 1, icon(*item))
            } else {
                format!(" {} {} {}", i + 1, icon(*item), item.label())
            };
            let style = if *item == active {
                theme.selected()
            } else {
                theme.text()
            };
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(theme.border_style(false))
            .style(Style::default().bg(theme.surface)),
    );
    f.render_widget(list, area);
}

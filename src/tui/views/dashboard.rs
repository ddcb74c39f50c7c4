// Dashboard view - KPI cards, weekly chart, services, error budgets, insights

use crate::catalog::dashboard::{
    weekly_peak, BUDGET_LOW_WATERMARK, ERROR_BUDGETS, INSIGHTS, METRICS, TOP_SERVICES, WEEKLY,
};
use crate::catalog::{InsightKind, Metric, Trend};
use crate::tui::app::App;
use crate::tui::components::{change_span, panel};
use crate::tui::layout::Breakpoint;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Gauge, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let wide = Breakpoint::from_width(area.width).at_least(Breakpoint::Wide);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);

    render_metrics(f, rows[0], theme);

    if wide {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(rows[1]);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(7)])
            .split(cols[0]);
        render_chart(f, left[0], theme);
        render_services(f, left[1], theme);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(6)])
            .split(cols[1]);
        render_budgets(f, right[0], theme);
        render_insights(f, right[1], theme);
    } else {
        let stack = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(5),
                Constraint::Length(8),
            ])
            .split(rows[1]);
        render_chart(f, stack[0], theme);
        render_services(f, stack[1], theme);
        render_insights(f, stack[2], theme);
    }
}

fn render_metrics(f: &mut Frame, area: Rect, theme: &Theme) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (metric, card) in METRICS.iter().zip(cards.iter()) {
        f.render_widget(metric_card(metric, theme), *card);
    }
}

fn metric_card<'a>(metric: &'a Metric, theme: &'a Theme) -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                metric.value,
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            change_span(metric, theme),
        ]),
        Line::from(Span::styled(metric.description, theme.dim())),
    ])
    .block(panel(metric.title, theme, false))
}

fn render_chart(f: &mut Frame, area: Rect, theme: &Theme) {
    let groups: Vec<BarGroup> = WEEKLY
        .iter()
        .map(|d| {
            BarGroup::default()
                .label(Line::from(d.day).centered())
                .bars(&[
                    Bar::default()
                        .value(d.incidents)
                        .style(Style::default().fg(theme.chart_opened)),
                    Bar::default()
                        .value(d.resolved)
                        .style(Style::default().fg(theme.chart_resolved)),
                ])
        })
        .collect();

    let mut chart = BarChart::default()
        .block(panel("Sự cố trong tuần (mở / đã xử lý)", theme, false))
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2)
        .max(weekly_peak())
        .value_style(Style::default().fg(theme.background))
        .label_style(theme.dim());
    for group in groups {
        chart = chart.data(group);
    }

    f.render_widget(chart, area);
}

fn render_services(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines: Vec<Line> = TOP_SERVICES
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let (arrow, color) = match s.trend {
                Trend::Up => ("↗", theme.danger),
                Trend::Down => ("↘", theme.success),
            };
            Line::from(vec![
                Span::styled(format!(" {}. ", i + 1), theme.dim()),
                Span::styled(format!("{:<20}", s.name), theme.text()),
                Span::styled(format!("{:>3} sự cố ", s.incidents), theme.dim()),
                Span::styled(arrow, Style::default().fg(color)),
            ])
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines).block(panel("Top dịch vụ có sự cố", theme, false)),
        area,
    );
}

fn render_budgets(f: &mut Frame, area: Rect, theme: &Theme) {
    let block = panel("Error Budget", theme, false);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); ERROR_BUDGETS.len()])
        .split(inner);

    for ((service, left), row) in ERROR_BUDGETS.iter().zip(rows.iter()) {
        let color = if *left < BUDGET_LOW_WATERMARK {
            theme.danger
        } else {
            theme.success
        };
        let gauge = Gauge::default()
            .block(Block::default().title(Span::styled(*service, theme.text())))
            .gauge_style(Style::default().fg(color).bg(theme.border))
            .percent(*left)
            .label(format!("{}% còn lại", left));
        f.render_widget(gauge, *row);
    }
}

fn render_insights(f: &mut Frame, area: Rect, theme: &Theme) {
    let mut lines = Vec::new();
    for insight in INSIGHTS.iter() {
        let (icon, color) = match insight.kind {
            InsightKind::Warning => ("⚠", theme.warning),
            InsightKind::Trend => ("↗", theme.info),
            InsightKind::Suggestion => ("✦", theme.success),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(color)),
            Span::styled(
                insight.title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(insight.message, theme.text())));
        lines.push(Line::from(""));
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("AI Insights", theme, false)),
        area,
    );
}

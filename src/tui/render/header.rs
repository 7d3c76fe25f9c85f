use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Filter, RangeTag};
use crate::ops::ticket_ops::ticket_counts;
use crate::tui::app::App;

use super::helpers::{badge, spans_width};

/// Render the dashboard header: title + counts, range bar, filter/sort bar
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let lines = vec![
        title_line(app, width),
        range_line(app),
        criteria_line(app),
        Line::from(Span::styled(
            "\u{2500}".repeat(width),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];
    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn title_line(app: &App, width: usize) -> Line<'static> {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled(
        format!(" {}", app.config.desk.name),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    let counts = ticket_counts(app.store.tickets());
    let shown = app.visible().len();
    let stats: Vec<Span> = vec![
        Span::styled(
            format!("{} open", counts.open),
            Style::default().fg(app.theme.green).bg(bg),
        ),
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(
            format!("{} in progress", counts.in_progress),
            Style::default().fg(app.theme.purple).bg(bg),
        ),
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(
            format!("{} closed", counts.closed),
            Style::default().fg(app.theme.gray).bg(bg),
        ),
        Span::styled(
            format!("  {}/{} shown ", shown, counts.total()),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ];

    // Right-align the stats when they fit
    let used = spans_width(&spans) + spans_width(&stats);
    if used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(bg),
        ));
    } else {
        spans.push(Span::styled("  ", Style::default().bg(bg)));
    }
    spans.extend(stats);
    Line::from(spans)
}

fn range_line(app: &App) -> Line<'static> {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled(
        " Range ",
        Style::default().fg(app.theme.text).bg(bg),
    )];
    let tags = RangeTag::PRESETS.iter().chain(std::iter::once(&RangeTag::Custom));
    for tag in tags {
        let active = *tag == app.range.tag;
        let (fg, badge_bg) = if active {
            (app.theme.background, app.theme.highlight)
        } else {
            (app.theme.dim, bg)
        };
        spans.push(badge(tag.label(), fg, badge_bg));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }
    if app.range.tag == RangeTag::Custom {
        spans.push(Span::styled(
            app.range.describe().trim_start_matches("Custom ").to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }
    Line::from(spans)
}

fn criteria_line(app: &App) -> Line<'static> {
    let bg = app.theme.background;
    let label_style = Style::default().fg(app.theme.text).bg(bg);
    let mut spans = vec![Span::styled(" ", label_style)];

    let push_filter = |spans: &mut Vec<Span<'static>>, name: &str, value: Option<String>| {
        spans.push(Span::styled(format!("{}: ", name), label_style));
        match value {
            Some(v) => spans.push(badge(&v, app.theme.background, app.theme.highlight)),
            None => spans.push(Span::styled(
                "All",
                Style::default().fg(app.theme.dim).bg(bg),
            )),
        }
        spans.push(Span::styled("   ", label_style));
    };

    push_filter(&mut spans, "Priority", filter_label(&app.filter.priority));
    push_filter(&mut spans, "Status", filter_label(&app.filter.status));
    push_filter(
        &mut spans,
        "Assigned To",
        app.filter.assigned_to.value().cloned(),
    );

    spans.push(Span::styled("Sort: ", label_style));
    spans.push(Span::styled(
        app.sort.label(),
        Style::default().fg(app.theme.text_bright).bg(bg),
    ));
    Line::from(spans)
}

fn filter_label<T: std::fmt::Display + PartialEq>(filter: &Filter<T>) -> Option<String> {
    filter.value().map(|v| v.to_string())
}

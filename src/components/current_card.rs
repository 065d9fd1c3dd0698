//! Current-conditions card: icon, label, date, temperature and metrics table

use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use super::palette::{ACCENT, DIVIDER, ON_ACCENT};
use crate::layout::{
    CARD_MARGIN_X, CURRENT_CARD_HEIGHT, METRIC_ROW_HEIGHT, METRICS_HEIGHT, TEMPERATURE_HEIGHT,
};
use crate::format;
use crate::screen::{CurrentCard, Metric, MetricsTable};
use crate::sprites::{self, SPRITE_HEIGHT};

/// Columns reserved for a metric's icon
const METRIC_ICON_WIDTH: u16 = 5;
const DEGREE_WIDTH: u16 = 1;

pub fn render(buf: &mut Buffer, area: Rect, card: &CurrentCard) {
    let card_area = Rect::new(
        area.x + CARD_MARGIN_X,
        area.y,
        area.width.saturating_sub(2 * CARD_MARGIN_X),
        area.height.min(CURRENT_CARD_HEIGHT),
    );

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(DIVIDER))
        .style(Style::default().bg(ACCENT).fg(ON_ACCENT));
    let inner = block.inner(card_area);
    block.render(card_area, buf);

    let chunks = Layout::vertical([
        Constraint::Length(1),                  // Padding
        Constraint::Length(SPRITE_HEIGHT),      // Condition icon
        Constraint::Length(1),                  // Condition label
        Constraint::Length(1),                  // Date
        Constraint::Length(1),                  // Padding
        Constraint::Length(TEMPERATURE_HEIGHT), // Temperature
        Constraint::Length(1),                  // Padding
        Constraint::Length(METRICS_HEIGHT),     // Metrics table
    ])
    .split(inner);

    let art = sprites::icon_art(card.icon, chunks[1].width, chunks[1].height);
    Paragraph::new(art)
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    Paragraph::new(Line::from(Span::styled(card.label, Style::default().bold())).centered())
        .render(chunks[2], buf);

    Paragraph::new(Line::from(card.date.as_str()).centered()).render(chunks[3], buf);

    render_temperature(buf, chunks[5], &card.temperature);

    render_metrics(buf, chunks[7], &card.metrics);
}

/// Large digits with the degree mark drawn beside them.
///
/// The art fonts carry no `°`, so only the number goes through the renderer.
fn render_temperature(buf: &mut Buffer, area: Rect, temperature: &str) {
    let digits = temperature.strip_suffix(format::DEGREE).unwrap_or(temperature);
    let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
        .with_plain_fallback()
        .with_alignment(ArtAlignment::TopLeft)
        .with_fill(temperature_fill());

    let metrics = renderer
        .render(digits, area.width.saturating_sub(DEGREE_WIDTH), area.height)
        .ok()
        .and_then(|rendered| rendered.metrics());
    let Some(metrics) = metrics else {
        Paragraph::new(Line::from(temperature).centered()).render(area, buf);
        return;
    };

    let art_width = metrics.width.min(area.width.saturating_sub(DEGREE_WIDTH));
    let art_height = metrics.height.min(area.height);
    let x = area.x + area.width.saturating_sub(art_width + DEGREE_WIDTH) / 2;

    let art_area = Rect::new(x, area.y, art_width, art_height);
    ArtBox::new(&renderer, digits).render(art_area, buf);

    if digits.len() < temperature.len() {
        buf.set_string(
            art_area.right(),
            area.y,
            format::DEGREE.to_string(),
            Style::default().fg(ON_ACCENT).bold(),
        );
    }
}

fn temperature_fill() -> Fill {
    Fill::Linear(LinearGradient::horizontal(
        ArtColor::rgb(255, 255, 255),
        ArtColor::rgb(200, 225, 255),
    ))
}

fn render_metrics(buf: &mut Buffer, area: Rect, table: &MetricsTable) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(METRIC_ROW_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(METRIC_ROW_HEIGHT),
    ])
    .split(area);

    for (index, row) in table.rows.iter().enumerate() {
        render_divider(buf, chunks[index * 2]);

        let cells = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(chunks[index * 2 + 1]);

        render_metric(buf, cells[0], &row[0]);
        render_rule(buf, cells[1]);
        render_metric(buf, cells[2], &row[1]);
    }
}

fn render_metric(buf: &mut Buffer, area: Rect, metric: &Metric) {
    let chunks = Layout::horizontal([
        Constraint::Length(METRIC_ICON_WIDTH),
        Constraint::Fill(1),
    ])
    .split(area);

    Paragraph::new(vec![
        Line::default(),
        Line::from(metric.icon.glyph()).centered(),
    ])
    .render(chunks[0], buf);

    Paragraph::new(vec![
        Line::default(),
        Line::from(metric.title),
        Line::from(Span::styled(metric.value.as_str(), Style::default().bold())),
    ])
    .render(chunks[1], buf);
}

fn render_divider(buf: &mut Buffer, area: Rect) {
    let rule = "─".repeat(area.width as usize);
    buf.set_string(area.x, area.y, rule, Style::default().fg(DIVIDER));
}

fn render_rule(buf: &mut Buffer, area: Rect) {
    for y in area.top()..area.bottom() {
        buf.set_string(area.x, y, "│", Style::default().fg(DIVIDER));
    }
}

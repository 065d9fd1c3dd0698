//! "Today / Next 7 Days" header and the horizontally scrolling card strip

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use super::palette::{ACCENT, CARD_BORDER, MUTED};
use crate::layout::{
    CARD_MARGIN_X, FORECAST_CARD_HEIGHT, FORECAST_CARD_WIDTH, FORECAST_SPACER_WIDTH,
    STRIP_PADDING_X,
};
use crate::screen::{ForecastCard, SectionHeader, StripItem};

const MORE_LEFT: &str = "‹";
const MORE_RIGHT: &str = "›";

pub fn render_header(buf: &mut Buffer, area: Rect, header: &SectionHeader) {
    if area.height < 2 {
        return;
    }
    let row = Rect::new(
        area.x + CARD_MARGIN_X,
        area.y + 1,
        area.width.saturating_sub(2 * CARD_MARGIN_X),
        1,
    );

    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(row);

    Paragraph::new(Line::from(Span::styled(header.title, Style::default().bold())))
        .render(chunks[0], buf);

    Paragraph::new(Line::from(format!("{} →", header.link)))
        .alignment(Alignment::Right)
        .render(chunks[1], buf);
}

/// Draw the strip starting at the `offset`-th card.
///
/// Cards that do not fit are left out and flagged with a marker on that side.
pub fn render(buf: &mut Buffer, area: Rect, items: &[StripItem], offset: usize) {
    if area.height < FORECAST_CARD_HEIGHT || area.width <= 2 * STRIP_PADDING_X {
        return;
    }

    let start = items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches!(item, StripItem::Card(_)))
        .nth(offset)
        .map(|(index, _)| index);
    let Some(start) = start else {
        return;
    };

    let right = area.right() - STRIP_PADDING_X;
    let mut x = area.x + STRIP_PADDING_X;
    let mut hidden_right = false;

    for item in &items[start..] {
        match item {
            StripItem::Card(card) => {
                if x + FORECAST_CARD_WIDTH > right {
                    hidden_right = true;
                    break;
                }
                let card_area = Rect::new(x, area.y, FORECAST_CARD_WIDTH, FORECAST_CARD_HEIGHT);
                render_card(buf, card_area, card);
                x += FORECAST_CARD_WIDTH;
            }
            StripItem::Spacer => x += FORECAST_SPACER_WIDTH,
        }
    }

    let marker_y = area.y + FORECAST_CARD_HEIGHT / 2;
    let marker_style = Style::default().fg(MUTED).bold();
    if offset > 0 {
        buf.set_string(area.x, marker_y, MORE_LEFT, marker_style);
    }
    if hidden_right {
        buf.set_string(area.right() - 1, marker_y, MORE_RIGHT, marker_style);
    }
}

fn render_card(buf: &mut Buffer, area: Rect, card: &ForecastCard) {
    let border = if card.is_today { ACCENT } else { CARD_BORDER };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    block.render(area, buf);

    let weekday = if card.is_today {
        Span::styled(card.weekday.as_str(), Style::default().bold())
    } else {
        Span::raw(card.weekday.as_str())
    };

    Paragraph::new(vec![
        Line::from(weekday),
        Line::default(),
        Line::from(card.icon.glyph()).yellow(),
        Line::default(),
        Line::from(card.high.as_str()),
    ])
    .alignment(Alignment::Center)
    .render(inner, buf);
}

use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    prelude::Frame,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, current_card, forecast_strip};
use crate::action::Action;
use crate::layout::{
    CARD_MARGIN_X, CONTENT_HEIGHT, CURRENT_CARD_HEIGHT, HEADING_HEIGHT, SECTION_HEIGHT,
    STATUS_BAR_HEIGHT, STRIP_HEIGHT,
};
use crate::screen::Screen;
use crate::state::AppState;

/// Props for DashboardView - read-only view of state
pub struct DashboardViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole dashboard plus the key hint bar
#[derive(Default)]
pub struct DashboardView;

impl Component<Action> for DashboardView {
    type Props<'a> = DashboardViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
                KeyCode::Char('g') | KeyCode::Home => Some(Action::ScrollTop),
                KeyCode::Char('G') | KeyCode::End => Some(Action::ScrollBottom),
                KeyCode::Char('l') | KeyCode::Right => Some(Action::StripNext),
                KeyCode::Char('h') | KeyCode::Left => Some(Action::StripPrev),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DashboardViewProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Min(1),                    // Dashboard
            Constraint::Length(STATUS_BAR_HEIGHT), // Help bar
        ])
        .split(area);
        let body = chunks[0];

        // Draw the full-height dashboard off-screen, then show the scrolled window
        let content_area = Rect::new(0, 0, body.width, CONTENT_HEIGHT);
        let mut content = Buffer::empty(content_area);
        draw_screen(
            &mut content,
            content_area,
            &props.state.screen(),
            props.state.strip_offset,
        );

        let scroll = props
            .state
            .scroll
            .min(CONTENT_HEIGHT.saturating_sub(body.height));
        blit(&content, frame.buffer_mut(), body, scroll);

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("j/k", "scroll"),
                    StatusBarHint::new("g/G", "top/bottom"),
                    StatusBarHint::new("h/l", "forecast"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

/// Draw the whole dashboard, top to bottom, into `area`
pub fn draw_screen(buf: &mut Buffer, area: Rect, screen: &Screen, strip_offset: usize) {
    let chunks = Layout::vertical([
        Constraint::Length(HEADING_HEIGHT),
        Constraint::Length(CURRENT_CARD_HEIGHT),
        Constraint::Length(SECTION_HEIGHT),
        Constraint::Length(STRIP_HEIGHT),
    ])
    .split(area);

    render_heading(buf, chunks[0], &screen.heading);
    current_card::render(buf, chunks[1], &screen.current);
    forecast_strip::render_header(buf, chunks[2], &screen.section);
    forecast_strip::render(buf, chunks[3], &screen.strip, strip_offset);
}

fn render_heading(buf: &mut Buffer, area: Rect, place: &str) {
    if area.height < 2 {
        return;
    }
    let row = Rect::new(
        area.x + CARD_MARGIN_X,
        area.y + 1,
        area.width.saturating_sub(CARD_MARGIN_X),
        1,
    );
    Paragraph::new(Line::from(Span::styled(place, Style::default().bold()))).render(row, buf);
}

/// Copy rows `scroll..scroll + area.height` of `content` into `area` of `target`
fn blit(content: &Buffer, target: &mut Buffer, area: Rect, scroll: u16) {
    for row in 0..area.height {
        for col in 0..area.width {
            let Some(cell) = content.cell((col, row.saturating_add(scroll))) else {
                continue;
            };
            if let Some(dst) = target.cell_mut((area.x + col, area.y + row)) {
                *dst = cell.clone();
            }
        }
    }
}

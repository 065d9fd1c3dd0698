//! Render snapshot tests using RenderHarness
//!
//! Each test renders the full dashboard into a test buffer and inspects
//! the plain-text output.

use tui_dispatch::testing::*;
use weather_dashboard::{
    components::{Component, DashboardView, DashboardViewProps},
    data::{Condition, Dashboard, Weather, WeatherForecast},
    layout::{CONTENT_HEIGHT, STATUS_BAR_HEIGHT},
    state::AppState,
};

const FULL_HEIGHT: u16 = CONTENT_HEIGHT + STATUS_BAR_HEIGHT;

fn render(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = DashboardView;

    render.render_to_string_plain(|frame| {
        let props = DashboardViewProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

fn single_day(condition: Condition, temperature: i32) -> Dashboard {
    let sample = Dashboard::sample();
    let date = sample.current.date;
    Dashboard::new(
        Weather {
            place: "Reykjavík".into(),
            condition,
            temperature,
            ..sample.current
        },
        vec![WeatherForecast {
            date,
            highest_temperature: 4,
        }],
    )
}

#[test]
fn test_render_sample_dashboard() {
    let state = AppState::default();
    let output = render(&state, 80, FULL_HEIGHT);

    for expected in [
        "Berlin",
        "CLOUDY",
        "Thu, 18 Mar",
        "WIND",
        "12 km/h",
        "FEELS LIKE",
        "19°",
        "INDEX UV",
        "PRESSURE",
        "1012 mbar",
        "Today",
        "Next 7 Days",
    ] {
        assert!(
            output.contains(expected),
            "{:?} should be visible in output:\n{}",
            expected,
            output
        );
    }
}

#[test]
fn test_render_forecast_weekdays_in_order() {
    let state = AppState::default();
    let output = render(&state, 80, FULL_HEIGHT);

    let row = output
        .lines()
        .find(|line| line.contains("Thu") && line.contains("Wed"))
        .unwrap_or_else(|| panic!("No weekday row in output:\n{}", output));

    let positions: Vec<_> = ["Thu", "Fri", "Sat", "Sun", "Mon", "Tue", "Wed"]
        .iter()
        .map(|day| row.find(day).expect("weekday missing from row"))
        .collect();
    assert!(
        positions.windows(2).all(|pair| pair[0] < pair[1]),
        "Weekdays out of order: {}",
        row
    );
}

/// Rows of the current card between its date line and the metrics table
fn temperature_rows(output: &str, date: &str) -> Vec<String> {
    output
        .lines()
        .skip_while(|line| !line.contains(date))
        .skip(1)
        .take_while(|line| !line.contains("WIND"))
        .map(str::to_owned)
        .collect()
}

#[test]
fn test_render_large_temperature_keeps_degree_mark() {
    let state = AppState::default();
    let output = render(&state, 80, FULL_HEIGHT);

    let rows = temperature_rows(&output, "Thu, 18 Mar");
    assert!(!rows.is_empty(), "No temperature rows in output:\n{}", output);
    assert!(
        rows.iter().any(|row| row.contains('°')),
        "Degree mark missing next to the temperature:\n{}",
        rows.join("\n")
    );
}

#[test]
fn test_render_negative_temperature_keeps_degree_mark() {
    let state = AppState::new(single_day(Condition::Snowy, -12));
    let output = render(&state, 80, FULL_HEIGHT);

    let rows = temperature_rows(&output, "Thu, 18 Mar");
    assert!(
        rows.iter().any(|row| row.contains('°')),
        "Degree mark missing next to the temperature:\n{}",
        rows.join("\n")
    );
}

#[test]
fn test_render_forecast_highs() {
    let state = AppState::default();
    let output = render(&state, 80, FULL_HEIGHT);

    let row = output
        .lines()
        .find(|line| line.contains("22") && line.contains("24") && line.contains("18"))
        .unwrap_or_else(|| panic!("No highs row in output:\n{}", output));
    assert!(!row.contains('°'), "Forecast highs carry no unit: {}", row);
}

#[test]
fn test_render_other_condition() {
    let state = AppState::new(single_day(Condition::Snowy, -3));
    let output = render(&state, 60, FULL_HEIGHT);

    assert!(output.contains("Reykjavík"));
    assert!(output.contains("SNOWY"));
    assert!(!output.contains("CLOUDY"));
}

#[test]
fn test_render_empty_forecast() {
    let mut dashboard = Dashboard::sample();
    dashboard.forecast.clear();
    let state = AppState::new(dashboard);
    let output = render(&state, 60, FULL_HEIGHT);

    // Header still drawn, strip left blank
    assert!(output.contains("Today"));
    assert!(output.contains("Next 7 Days"));
    assert!(!output.contains("Fri"));
    assert!(!output.contains("Wed"));
}

#[test]
fn test_render_is_idempotent() {
    let state = AppState::default();
    let first = render(&state, 70, 30);
    let second = render(&state, 70, 30);
    assert_eq!(first, second);
}

#[test]
fn test_render_small_terminal_does_not_panic() {
    let state = AppState::default();
    for (width, height) in [(30, 10), (40, 12), (24, 6)] {
        let output = render(&state, width, height);
        assert!(!output.is_empty());
    }
}

#[test]
fn test_render_status_bar_hints() {
    let state = AppState::default();
    let output = render(&state, 80, 24);

    let last = output.lines().last().unwrap_or_default();
    assert!(last.contains("scroll"), "Status bar: {}", last);
    assert!(last.contains("g/G"), "Status bar: {}", last);
    assert!(last.contains("top/bottom"), "Status bar: {}", last);
    assert!(last.contains("quit"), "Status bar: {}", last);
}

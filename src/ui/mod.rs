pub mod snapshot;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::{AppState, View},
    cli::Cli,
    resilience::freshness::FreshnessState,
};

const KEY_HELP: &str = "h hourly  d 5-day  b back  p prefs  r reload  ↑↓ scroll  q quit";

pub fn render(frame: &mut Frame, state: &AppState, cli: &Cli) {
    let area = frame.area();

    if area.width < 40 || area.height < 12 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 40x12.")
            .block(Block::default().borders(Borders::ALL).title("weather-widget"));
        frame.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    match state.view {
        View::Current => widgets::current::render(frame, chunks[0], state, cli),
        View::Hourly => widgets::hourly::render(frame, chunks[0], state, cli),
        View::FiveDay => widgets::five_day::render(frame, chunks[0], state, cli),
    }

    render_footer(frame, chunks[1], state);
    render_status_badge(frame, area, state);

    if let Some(dialog) = &state.dialog {
        widgets::prefs::render(frame, centered_rect(80, 80, area), dialog);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = match &state.last_error {
        Some(err) if state.weather.is_some() => format!("{KEY_HELP}  | last error: {err}"),
        _ => KEY_HELP.to_string(),
    };
    let footer = Paragraph::new(Line::from(text)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

fn render_status_badge(frame: &mut Frame, area: Rect, state: &AppState) {
    let meta = &state.refresh_meta;
    let (Some(_), Some(badge)) = (&state.weather, meta.state.badge()) else {
        return;
    };

    let mut text = format!("⚠ {badge}");
    if let Some(age) = meta.age_minutes() {
        text.push_str(&format!(" ({age}m)"));
    }
    let color = if meta.state == FreshnessState::Offline {
        Color::LightRed
    } else {
        Color::Yellow
    };

    let width = u16::try_from(text.chars().count() + 2)
        .unwrap_or(u16::MAX)
        .min(area.width);
    let badge_area = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.y,
        width,
        height: 1,
    };
    let style = Style::default()
        .fg(color)
        .bg(Color::Black)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(Line::from(text)).style(style), badge_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

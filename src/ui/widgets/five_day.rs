use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::{
    app::state::AppState,
    cli::Cli,
    domain::{
        conditions::weather_icon,
        daylight::DaylightWindow,
        summary::{DailySummary, HourlyRow, hourly_rows, summarize_days},
        units::{SpeedUnit, compass_point},
        weather::FiveDayForecast,
    },
    ui::widgets::{
        Paint, format_percent, format_temp_range, format_wind,
        table::{TableOptions, forecast_table},
    },
};

/// Day/night here is hour-granular against the city's sunrise and sunset.
#[must_use]
pub fn rows_for(forecast: &FiveDayForecast) -> Vec<HourlyRow> {
    let window = DaylightWindow::new(forecast.sunrise, forecast.sunset);
    let offset = forecast.utc_offset_secs;
    hourly_rows(&forecast.samples, offset, |s| {
        window.contains_by_clock(s.timestamp, offset)
    })
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, cli: &Cli) {
    let Some(forecast) = &state.five_day else {
        let message = match (&state.five_day_error, state.five_day_in_flight) {
            (Some(err), _) => format!("Five-day forecast unavailable: {err}"),
            (None, true) => "Fetching five-day forecast...".to_string(),
            (None, false) => "No five-day forecast loaded; press r to retry".to_string(),
        };
        let block = Block::default().borders(Borders::ALL).title("5 day 3 hour forecast");
        frame.render_widget(Paragraph::new(message).block(block), area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(4)])
        .split(area);

    let summaries = summarize_days(&forecast.samples, forecast.utc_offset_secs);
    render_summaries(frame, chunks[0], &summaries, state, cli);

    let opts = TableOptions {
        temp_unit: state.prefs.temp_unit,
        speed_unit: state.prefs.speed_unit,
        icons: cli.icon_mode(),
        paint: Paint { enabled: cli.use_color() },
    };
    let table = forecast_table(&rows_for(forecast), state.scroll, opts).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("5 day 3 hour forecast: {}", forecast.city)),
    );
    frame.render_widget(table, chunks[1]);
}

/// Average speed, with the day's peak gust only when some sample reported one.
fn summary_wind(summary: &DailySummary, unit: SpeedUnit) -> String {
    let gust = (summary.wind_gust_max_ms > 0.0).then_some(summary.wind_gust_max_ms);
    format_wind(summary.wind_speed_avg_ms, gust, unit)
}

fn render_summaries(
    frame: &mut Frame,
    area: Rect,
    summaries: &[DailySummary],
    state: &AppState,
    cli: &Cli,
) {
    let prefs = &state.prefs;
    let icons = cli.icon_mode();

    let row = |cell: &dyn Fn(&DailySummary) -> String| -> Row<'static> {
        Row::new(summaries.iter().map(|s| Cell::from(cell(s))))
    };
    let rows = vec![
        row(&|s| format_temp_range(s.temp_min_c, s.temp_max_c, prefs.temp_unit)),
        row(&|s| format!("{} {}", weather_icon(&s.condition, icons), compass_point(s.wind_deg))),
        row(&|s| summary_wind(s, prefs.speed_unit)),
        row(&|s| format!("{:.1}mm", s.rain_total_mm)),
        row(&|s| format_percent(s.precip_probability_max)),
        row(&|s| format!("{:.0}mb", s.pressure_avg_hpa)),
    ];
    let header = Row::new(summaries.iter().map(|s| {
        Cell::from(s.label.clone()).style(Style::default().add_modifier(Modifier::BOLD))
    }));

    let widths = vec![Constraint::Ratio(1, summaries.len().max(1) as u32); summaries.len()];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(Block::default().borders(Borders::ALL).title("Daily summary"));
    frame.render_widget(table, area);
}

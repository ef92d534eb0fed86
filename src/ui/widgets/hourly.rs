use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::AppState,
    cli::Cli,
    domain::{
        daylight::DaylightWindow,
        summary::{HourlyRow, hourly_rows},
        weather::ForecastBundle,
    },
    ui::widgets::{
        Paint,
        table::{TableOptions, forecast_table},
    },
};

pub const HOURLY_ROWS: usize = 48;

/// Rows of the 48-hour table. Day/night uses today's sunrise and sunset
/// repeated over the following two days.
#[must_use]
pub fn rows_for(bundle: &ForecastBundle) -> Vec<HourlyRow> {
    let window = DaylightWindow::new(bundle.current.sunrise, bundle.current.sunset);
    let samples = &bundle.hourly[..bundle.hourly.len().min(HOURLY_ROWS)];
    hourly_rows(samples, bundle.utc_offset_secs, |s| window.contains(s.timestamp))
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, cli: &Cli) {
    let Some(bundle) = &state.weather else {
        let block = Block::default().borders(Borders::ALL).title("Hourly forecast");
        frame.render_widget(Paragraph::new(state.status.clone()).block(block), area);
        return;
    };

    let opts = TableOptions {
        temp_unit: state.prefs.temp_unit,
        speed_unit: state.prefs.speed_unit,
        icons: cli.icon_mode(),
        paint: Paint { enabled: cli.use_color() },
    };
    let table = forecast_table(&rows_for(bundle), state.scroll, opts).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Hourly forecast: {}", bundle.location)),
    );
    frame.render_widget(table, area);
}

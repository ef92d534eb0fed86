use ratatui::{
    layout::Constraint,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Row, Table},
};

use crate::{
    cli::IconMode,
    domain::{
        conditions::weather_icon,
        palette::{cloud_colour, row_background, temp_colour, wind_colour},
        summary::HourlyRow,
        units::{SpeedUnit, TempUnit, compass_point, round_wind_speed},
    },
    ui::widgets::{Paint, format_rain, format_temp},
};

const HEADERS: [&str; 9] = ["Time", "Temp", "", "Cond", "Rain", "Wind", "", "Cloud", "Pres"];

#[derive(Debug, Clone, Copy)]
pub struct TableOptions {
    pub temp_unit: TempUnit,
    pub speed_unit: SpeedUnit,
    pub icons: IconMode,
    pub paint: Paint,
}

/// The shared per-sample table of the hourly and five-day views, starting
/// at row `scroll`.
#[must_use]
pub fn forecast_table(rows: &[HourlyRow], scroll: usize, opts: TableOptions) -> Table<'static> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(HEADERS.map(|h| Cell::from(h).style(bold)));
    let body = rows.iter().skip(scroll).map(|row| build_row(row, opts));

    Table::new(
        body,
        [
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(7),
        ],
    )
    .header(header)
    .column_spacing(1)
}

fn build_row(row: &HourlyRow, opts: TableOptions) -> Row<'static> {
    let sample = &row.sample;
    let paint = opts.paint;

    let rain = sample.rain_mm.unwrap_or(0.0);
    let rain_style = if rain > 0.0 {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    // Cloud shading only shows against the day background.
    let cloud_style = if row.is_day {
        paint.bg(cloud_colour(sample.cloud_cover))
    } else {
        Style::default()
    };

    let cells = vec![
        Cell::from(row.label()).style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from(format_temp(sample.temp_c, opts.temp_unit))
            .style(paint.bold(temp_colour(sample.temp_c))),
        Cell::from(weather_icon(&sample.condition, opts.icons)),
        Cell::from(sample.condition.description.clone()),
        Cell::from(format_rain(sample.rain_mm)).style(rain_style),
        Cell::from(wind_line(sample.wind_speed_ms, sample.wind_gust_ms, opts)),
        Cell::from(compass_point(sample.wind_deg)),
        Cell::from(format!("{:.0}%", sample.cloud_cover)).style(cloud_style),
        Cell::from(format!("{:.0}mb", sample.pressure_hpa)),
    ];

    Row::new(cells).style(paint.row(row_background(row.is_day)))
}

/// Speed and gust coloured independently by their own brackets.
fn wind_line(speed_ms: f32, gust_ms: Option<f32>, opts: TableOptions) -> Line<'static> {
    let unit = opts.speed_unit;
    let speed = Span::styled(
        round_wind_speed(speed_ms, unit).to_string(),
        opts.paint.fg(wind_colour(speed_ms)),
    );
    let gust = match gust_ms {
        Some(gust) => Span::styled(
            format!("/{}{}", round_wind_speed(gust, unit), unit.label()),
            opts.paint.fg(wind_colour(gust)),
        ),
        None => Span::styled(unit.label().to_string(), opts.paint.fg(wind_colour(speed_ms))),
    };
    Line::from(vec![speed, gust])
}

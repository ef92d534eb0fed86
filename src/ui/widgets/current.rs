use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::{
    app::state::AppState,
    cli::Cli,
    domain::{
        conditions::weather_icon,
        palette::temp_colour,
        units::compass_point,
        weather::{DailyOutlook, ForecastBundle},
    },
    ui::widgets::{
        Paint, format_percent, format_rain, format_temp, format_temp_range, format_wind,
    },
};

const STRIP_DAYS: usize = 7;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, cli: &Cli) {
    let Some(bundle) = &state.weather else {
        render_placeholder(frame, area, state);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(6)])
        .split(area);

    render_conditions(frame, chunks[0], state, bundle, cli);
    render_daily_strip(frame, chunks[1], state, bundle, cli);
}

fn render_placeholder(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::from(Span::styled(
            state.prefs.location.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(state.status.clone()),
    ];
    if let Some(err) = &state.last_error {
        lines.push(Line::from(format!("Error: {err}")));
    }
    let block = Block::default().borders(Borders::ALL).title("Current conditions");
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn render_conditions(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    bundle: &ForecastBundle,
    cli: &Cli,
) {
    let paint = Paint { enabled: cli.use_color() };
    let prefs = &state.prefs;
    let current = &bundle.current;
    let clock = |ts: i64| bundle.local_time(ts).format("%H:%M").to_string();

    let left = vec![
        Line::from(Span::styled(
            bundle.location.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format_temp(current.temp_c, prefs.temp_unit),
                paint.bold(temp_colour(current.temp_c)),
            ),
            Span::raw(format!(
                " f/l {}",
                format_temp(current.feels_like_c, prefs.temp_unit)
            )),
        ]),
        Line::from(format!(
            "{} {}",
            weather_icon(&current.condition, cli.icon_mode()),
            current.condition.description
        )),
    ];

    let right = vec![
        Line::from(format!(
            "Wind: {} {}",
            format_wind(current.wind_speed_ms, current.wind_gust_ms, prefs.speed_unit),
            compass_point(current.wind_deg)
        )),
        Line::from(format!("Pressure: {:.0}mb", current.pressure_hpa)),
        Line::from(format!("Humidity: {:.0}%", current.humidity)),
        Line::from(format!("Sunrise: {}", clock(current.sunrise))),
        Line::from(format!("Sunset:  {}", clock(current.sunset))),
        Line::from(format!(
            "Updated: {}",
            bundle.local_time(current.observed_at).format("%H:%M:%S")
        )),
    ];

    let block = Block::default().borders(Borders::ALL).title("Current conditions");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);
    frame.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    frame.render_widget(Paragraph::new(right), cols[1]);
}

fn render_daily_strip(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    bundle: &ForecastBundle,
    cli: &Cli,
) {
    let days: Vec<&DailyOutlook> = bundle.daily.iter().take(STRIP_DAYS).collect();
    let prefs = &state.prefs;
    let icons = cli.icon_mode();

    let row = |cell: &dyn Fn(&DailyOutlook) -> String| -> Row<'static> {
        Row::new(days.iter().map(|&d| Cell::from(cell(d))))
    };
    let rows = vec![
        row(&|d| format_temp_range(d.temp_min_c, d.temp_max_c, prefs.temp_unit)),
        row(&|d| weather_icon(&d.condition, icons).to_string()),
        row(&|d| format_wind(d.wind_speed_ms, d.wind_gust_ms, prefs.speed_unit)),
        row(&|d| compass_point(d.wind_deg).to_string()),
        row(&|d| format!("H {:.0}%", d.humidity)),
        row(&|d| format_percent(d.precip_probability)),
        row(&|d| format_rain(d.rain_mm)),
        row(&|d| format!("{:.0}mb", d.pressure_hpa)),
    ];

    let header = Row::new(days.iter().map(|d| {
        Cell::from(bundle.local_time(d.timestamp).format("%a").to_string())
            .style(Style::default().add_modifier(Modifier::BOLD))
    }));

    let widths = vec![Constraint::Ratio(1, days.len().max(1) as u32); days.len()];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(Block::default().borders(Borders::ALL).title("7-day forecast"));
    frame.render_widget(table, area);
}

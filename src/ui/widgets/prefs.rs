use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    app::state::{DialogField, PrefsDialog},
    domain::units::{SpeedUnit, TempUnit},
};

pub fn render(frame: &mut Frame, area: Rect, dialog: &PrefsDialog) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Preferences")
        .title_bottom("Tab next field  Enter search/choose/save  Esc cancel");
    let paragraph = Paragraph::new(dialog_lines(dialog))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn dialog_lines(dialog: &PrefsDialog) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(field_line(dialog, DialogField::Search, format!("{}_", dialog.query)));
    lines.push(Line::from(format!("  Current: {}", dialog.location())));

    lines.push(field_line(dialog, DialogField::Results, String::new()));
    if dialog.results.is_empty() {
        lines.push(Line::from("    (none)"));
    }
    for (idx, place) in dialog.results.iter().enumerate() {
        let marker = if idx == dialog.selected { "> " } else { "  " };
        let style = if idx == dialog.selected && dialog.focus == DialogField::Results {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("  {marker}{} ({})", place.display_name, place.locality),
            style,
        )));
    }

    lines.push(field_line(dialog, DialogField::ApiKey, dialog.api_key.clone()));
    lines.push(field_line(
        dialog,
        DialogField::TempUnit,
        choices(&TempUnit::ALL.map(TempUnit::label), dialog.temp_unit.label()),
    ));
    lines.push(field_line(
        dialog,
        DialogField::SpeedUnit,
        choices(&SpeedUnit::ALL.map(SpeedUnit::label), dialog.speed_unit.label()),
    ));
    lines.push(field_line(dialog, DialogField::Refresh, dialog.refresh.clone()));
    lines.push(field_line(dialog, DialogField::FontSize, dialog.font_size.to_string()));

    if let Some(status) = &dialog.status {
        lines.push(Line::from(""));
        lines.push(Line::from(status.clone()));
    }
    lines
}

fn field_line(dialog: &PrefsDialog, field: DialogField, value: String) -> Line<'static> {
    let focused = dialog.focus == field;
    let label_style = if focused {
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        Span::raw(if focused { "> " } else { "  " }),
        Span::styled(format!("{}:", field.label()), label_style),
        Span::raw(format!(" {value}")),
    ])
}

/// Radio-style row: `(•) C  ( ) F`.
fn choices(labels: &[&str], selected: &str) -> String {
    labels
        .iter()
        .map(|label| {
            if *label == selected {
                format!("(•) {label}")
            } else {
                format!("( ) {label}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    app::prefs::{MAX_FONT_SIZE, MIN_FONT_SIZE, Preferences},
    domain::{
        units::{SpeedUnit, TempUnit},
        weather::PlaceMatch,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogField {
    Search,
    Results,
    ApiKey,
    TempUnit,
    SpeedUnit,
    Refresh,
    FontSize,
}

impl DialogField {
    pub const ALL: [DialogField; 7] = [
        DialogField::Search,
        DialogField::Results,
        DialogField::ApiKey,
        DialogField::TempUnit,
        DialogField::SpeedUnit,
        DialogField::Refresh,
        DialogField::FontSize,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Search => "Search location",
            Self::Results => "Results",
            Self::ApiKey => "OpenWeatherMap key",
            Self::TempUnit => "Temperature",
            Self::SpeedUnit => "Wind speed",
            Self::Refresh => "Refresh time (minutes)",
            Self::FontSize => "Font size",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    None,
    Cancel,
    Save,
    Search(String),
}

/// Editable copy of the preferences. Nothing is applied until saved.
#[derive(Debug, Clone)]
pub struct PrefsDialog {
    pub focus: DialogField,
    pub query: String,
    pub results: Vec<PlaceMatch>,
    pub selected: usize,
    pub searching: bool,
    pub status: Option<String>,
    pub api_key: String,
    pub temp_unit: TempUnit,
    pub speed_unit: SpeedUnit,
    pub refresh: String,
    pub font_size: u8,
    base: Preferences,
}

impl PrefsDialog {
    #[must_use]
    pub fn new(prefs: &Preferences) -> Self {
        Self {
            focus: DialogField::Search,
            query: prefs.location.clone(),
            results: Vec::new(),
            selected: 0,
            searching: false,
            status: None,
            api_key: prefs.api_key.clone(),
            temp_unit: prefs.temp_unit,
            speed_unit: prefs.speed_unit,
            refresh: prefs.refresh_minutes().to_string(),
            font_size: prefs.font_size,
            base: prefs.clone(),
        }
    }

    /// The location currently chosen: the picked search result, or the one
    /// the dialog was opened with.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.base.location
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => DialogAction::Save,
                KeyCode::Char('c') => DialogAction::Cancel,
                _ => DialogAction::None,
            };
        }

        match key.code {
            KeyCode::Esc => return DialogAction::Cancel,
            KeyCode::Tab | KeyCode::Down if self.focus != DialogField::Results => {
                self.focus = self.focus.next();
            }
            KeyCode::BackTab | KeyCode::Up if self.focus != DialogField::Results => {
                self.focus = self.focus.prev();
            }
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Enter => return self.handle_enter(),
            code => self.edit_focused(code),
        }
        DialogAction::None
    }

    fn handle_enter(&mut self) -> DialogAction {
        match self.focus {
            DialogField::Search => {
                let query = self.query.trim();
                if query.is_empty() {
                    return DialogAction::None;
                }
                self.searching = true;
                self.status = Some(format!("Searching for {query}..."));
                DialogAction::Search(query.to_string())
            }
            DialogField::Results => {
                self.pick_selected();
                DialogAction::None
            }
            _ => DialogAction::Save,
        }
    }

    fn edit_focused(&mut self, code: KeyCode) {
        match self.focus {
            DialogField::Search => edit_text(&mut self.query, code, |_| true),
            DialogField::ApiKey => edit_text(&mut self.api_key, code, |ch| !ch.is_whitespace()),
            DialogField::Refresh => edit_text(&mut self.refresh, code, |ch| ch.is_ascii_digit()),
            DialogField::Results => match code {
                KeyCode::Up => self.selected = self.selected.saturating_sub(1),
                KeyCode::Down => {
                    self.selected = (self.selected + 1).min(self.results.len().saturating_sub(1));
                }
                _ => {}
            },
            DialogField::TempUnit => {
                if matches!(code, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) {
                    self.temp_unit = self.temp_unit.next();
                }
            }
            DialogField::SpeedUnit => match code {
                KeyCode::Right | KeyCode::Char(' ') => self.speed_unit = self.speed_unit.next(),
                KeyCode::Left => self.speed_unit = self.speed_unit.prev(),
                _ => {}
            },
            DialogField::FontSize => match code {
                KeyCode::Right | KeyCode::Char('+') => {
                    self.font_size = (self.font_size + 1).min(MAX_FONT_SIZE);
                }
                KeyCode::Left | KeyCode::Char('-') => {
                    self.font_size = self.font_size.saturating_sub(1).max(MIN_FONT_SIZE);
                }
                _ => {}
            },
        }
    }

    pub fn set_results(&mut self, results: Vec<PlaceMatch>) {
        self.searching = false;
        self.selected = 0;
        self.status = Some(match results.len() {
            0 => "No matching places".to_string(),
            1 => "1 place found; Enter to choose".to_string(),
            n => format!("{n} places found; Enter to choose"),
        });
        if !results.is_empty() {
            self.focus = DialogField::Results;
        }
        self.results = results;
    }

    pub fn set_search_error(&mut self, message: String) {
        self.searching = false;
        self.status = Some(format!("Search failed: {message}"));
    }

    fn pick_selected(&mut self) {
        let Some(place) = self.results.get(self.selected) else {
            return;
        };
        self.base.location.clone_from(&place.locality);
        self.base.latitude = place.latitude;
        self.base.longitude = place.longitude;
        self.status = Some(format!("Selected {}", place.display_name));
    }

    /// Preferences as they would be saved. A blank or unreadable refresh
    /// time keeps the previous value.
    #[must_use]
    pub fn to_preferences(&self) -> Preferences {
        let refresh_interval = self
            .refresh
            .parse()
            .unwrap_or(self.base.refresh_interval);
        Preferences {
            api_key: self.api_key.trim().to_string(),
            temp_unit: self.temp_unit,
            speed_unit: self.speed_unit,
            refresh_interval,
            font_size: self.font_size,
            ..self.base.clone()
        }
    }
}

fn edit_text(buffer: &mut String, code: KeyCode, accept: impl Fn(char) -> bool) {
    match code {
        KeyCode::Char(ch) if accept(ch) => buffer.push(ch),
        KeyCode::Backspace => {
            buffer.pop();
        }
        _ => {}
    }
}

pub mod events;
pub mod prefs;
pub mod state;

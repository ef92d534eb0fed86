pub mod conditions;
pub mod daylight;
pub mod palette;
pub mod summary;
pub mod units;
pub mod weather;

pub mod freshness;
pub mod outcome;

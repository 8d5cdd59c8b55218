pub mod checks;
pub mod coerce;

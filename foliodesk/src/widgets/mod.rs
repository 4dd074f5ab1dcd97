//! Header widgets: clock, calendar popup, weather

pub mod calendar;
pub mod clock;
pub mod weather;

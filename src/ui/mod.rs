pub mod calendar;
pub mod state;

//! Household electricity and water meter tracker.
//!
//! The calculation core in [`calculations`] turns a pair of meter readings
//! into consumption, the daily average, and a projection over the upcoming
//! period. The rest is what a tracker needs around it: typed quantities,
//! tariff flags, the local history, monthly reports, and a dashboard.

pub mod calculations;
pub mod fmt;
pub mod overview;
pub mod prelude;
pub mod quantity;
pub mod reading;
pub mod record;
pub mod report;
pub mod store;
pub mod tariff;

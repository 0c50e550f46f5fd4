use chrono::NaiveDate;
use clap::Parser;
use meterbook::{
    quantity::{Quantity, time::Days},
    reading::ReadingPair,
};

#[derive(Parser)]
pub struct PeriodArgs {
    /// Date of the current reading, today by default.
    #[clap(long)]
    pub current_date: Option<NaiveDate>,

    /// Date of the previous reading, the last saved one by default.
    #[clap(long)]
    pub previous_date: Option<NaiveDate>,

    /// Days since the previous reading, overrides the difference between the dates.
    #[clap(long = "days")]
    pub elapsed: Option<Days>,

    /// Number of days to project the daily rate over.
    #[clap(long = "horizon-days", env = "HORIZON_DAYS", default_value = "30")]
    pub horizon: Days,
}

impl PeriodArgs {
    pub fn elapsed<const ENERGY: isize, const VOLUME: isize>(
        &self,
        readings: &ReadingPair<Quantity<ENERGY, VOLUME, 0, 0>>,
    ) -> Days {
        self.elapsed.unwrap_or_else(|| readings.elapsed())
    }
}

use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::Parser;
use meterbook::{
    overview::Trend,
    prelude::*,
    record::{ElectricityRecord, WaterRecord},
    store::Store,
};

use crate::tables::build_trend_table;

#[derive(Parser)]
pub struct OverviewArgs {
    /// Date to forecast the month for, today by default.
    #[clap(long)]
    date: Option<NaiveDate>,
}

impl OverviewArgs {
    #[instrument(skip_all)]
    pub fn run(&self, store_path: &Path) -> Result {
        let store = Store::read_from(store_path)?;
        let today = self.date.unwrap_or_else(|| Local::now().date_naive());
        for trend in [
            Trend::from_records(&store.recent::<ElectricityRecord>(), today),
            Trend::from_records(&store.recent::<WaterRecord>(), today),
        ] {
            println!("{}", build_trend_table(&trend));
        }
        Ok(())
    }
}

use std::path::Path;

use chrono::Local;
use clap::Parser;
use meterbook::{
    calculations::WaterEstimate,
    prelude::*,
    quantity::volume::CubicMeters,
    reading::{Reading, ReadingPair},
    record::WaterRecord,
    store::Store,
};

use crate::{
    cli::{period::PeriodArgs, readings::resolve_previous},
    tables::build_water_estimate_table,
};

#[derive(Parser)]
pub struct WaterArgs {
    /// Current meter reading in cubic meters.
    #[clap(long = "current-reading")]
    current: CubicMeters,

    /// Previous meter reading in cubic meters, the last saved one by default.
    #[clap(long = "previous-reading")]
    previous: Option<CubicMeters>,

    #[clap(flatten)]
    period: PeriodArgs,

    /// Save the reading into the history.
    #[clap(long)]
    save: bool,

    /// Print the record as JSON instead of a table.
    #[clap(long)]
    json: bool,
}

impl WaterArgs {
    #[instrument(skip_all)]
    pub fn run(self, store_path: &Path) -> Result {
        let mut store = Store::read_from(store_path)?;
        let previous = resolve_previous(
            self.previous,
            self.period.previous_date,
            store.last::<WaterRecord>().map(|record| record.readings.current),
        )?;
        let current = Reading::new(
            self.current,
            self.period.current_date.unwrap_or_else(|| Local::now().date_naive()),
        );
        let readings = ReadingPair::new(previous, current);
        readings.validate()?;

        let elapsed = self.period.elapsed(&readings);
        let estimate = WaterEstimate::calculate(&readings, elapsed, self.period.horizon);
        info!(
            consumption = %estimate.consumption,
            daily_rate = %estimate.daily_rate,
            projected_consumption = %estimate.projected_consumption,
            %elapsed,
            "estimated"
        );

        let record = WaterRecord::builder().readings(readings).estimate(estimate).build();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&record)?);
        } else {
            println!("{}", build_water_estimate_table(&record, elapsed, self.period.horizon));
        }

        if self.save {
            store.insert(record);
            store.write_to(store_path)?;
            info!("saved the reading");
        }
        Ok(())
    }
}

use std::path::Path;

use chrono::Local;
use clap::Parser;
use meterbook::{
    calculations::ElectricityEstimate,
    prelude::*,
    quantity::energy::KilowattHours,
    reading::{Reading, ReadingPair},
    record::ElectricityRecord,
    store::Store,
};

use crate::{
    cli::{period::PeriodArgs, readings::resolve_previous, tariff::TariffArgs},
    tables::build_electricity_estimate_table,
};

#[derive(Parser)]
pub struct ElectricityArgs {
    /// Current meter reading in kilowatt-hours.
    #[clap(long = "current-reading")]
    current: KilowattHours,

    /// Previous meter reading in kilowatt-hours, the last saved one by default.
    #[clap(long = "previous-reading")]
    previous: Option<KilowattHours>,

    #[clap(flatten)]
    period: PeriodArgs,

    #[clap(flatten)]
    tariff: TariffArgs,

    /// Save the reading into the history.
    #[clap(long)]
    save: bool,

    /// Print the record as JSON instead of a table.
    #[clap(long)]
    json: bool,
}

impl ElectricityArgs {
    #[instrument(skip_all)]
    pub fn run(self, store_path: &Path) -> Result {
        let mut store = Store::read_from(store_path)?;
        let previous = resolve_previous(
            self.previous,
            self.period.previous_date,
            store.last::<ElectricityRecord>().map(|record| record.readings.current),
        )?;
        let current = Reading::new(
            self.current,
            self.period.current_date.unwrap_or_else(|| Local::now().date_naive()),
        );
        let readings = ReadingPair::new(previous, current);
        readings.validate()?;

        let elapsed = self.period.elapsed(&readings);
        let tariff = self.tariff.tariff();
        let estimate = ElectricityEstimate::calculate(&readings, elapsed, &tariff, self.period.horizon);
        info!(
            consumption = %estimate.consumption,
            daily_rate = %estimate.daily_rate,
            projected_cost = %estimate.projected_cost,
            %elapsed,
            "estimated"
        );

        let record =
            ElectricityRecord::builder().readings(readings).tariff(tariff).estimate(estimate).build();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&record)?);
        } else {
            println!("{}", build_electricity_estimate_table(&record, elapsed, self.period.horizon));
        }

        if self.save {
            store.insert(record);
            store.write_to(store_path)?;
            info!("saved the reading");
        }
        Ok(())
    }
}

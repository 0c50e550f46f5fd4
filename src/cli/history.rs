use std::path::Path;

use clap::Parser;
use meterbook::{
    prelude::*,
    record::{ElectricityRecord, UtilityKind, WaterRecord},
    store::Store,
};

use crate::tables::{build_electricity_history_table, build_water_history_table};

#[derive(Parser)]
pub struct HistoryArgs {
    #[clap(value_enum)]
    kind: UtilityKind,

    /// Show at most this many readings.
    #[clap(long, default_value = "12")]
    limit: usize,
}

impl HistoryArgs {
    #[instrument(skip_all, fields(kind = ?self.kind))]
    pub fn run(&self, store_path: &Path) -> Result {
        let store = Store::read_from(store_path)?;
        let table = match self.kind {
            UtilityKind::Electricity => {
                let mut records = store.recent::<ElectricityRecord>();
                records.truncate(self.limit);
                info!(n_records = records.len(), "loaded");
                build_electricity_history_table(&records)
            }
            UtilityKind::Water => {
                let mut records = store.recent::<WaterRecord>();
                records.truncate(self.limit);
                info!(n_records = records.len(), "loaded");
                build_water_history_table(&records)
            }
        };
        println!("{table}");
        Ok(())
    }
}

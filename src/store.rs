use std::{cmp::Reverse, fs, path::Path};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    record::{ElectricityRecord, Record, WaterRecord},
    report::StoredReport,
};

/// Local TOML file with the reading history and the saved reports.
#[must_use]
#[derive(Default, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub electricity: Vec<ElectricityRecord>,

    #[serde(default)]
    pub water: Vec<WaterRecord>,

    #[serde(default)]
    pub reports: Vec<StoredReport>,
}

impl Store {
    /// Read the store, a missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        if path.is_file() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read `{}`", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("failed to parse `{}`", path.display()))
        } else {
            debug!("no store yet");
            Ok(Self::default())
        }
    }

    /// # Errors
    ///
    /// Fails when the store cannot be serialized or the file cannot be written.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn write_to(&self, path: &Path) -> Result {
        fs::write(path, toml::to_string(self)?)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        debug!(
            n_electricity = self.electricity.len(),
            n_water = self.water.len(),
            n_reports = self.reports.len(),
            "saved"
        );
        Ok(())
    }

    pub fn insert<R: Record>(&mut self, record: R) {
        R::collection_mut(self).push(record);
    }

    /// Records ordered by the current reading date, most recent first.
    #[must_use]
    pub fn recent<R: Record>(&self) -> Vec<&R> {
        R::collection(self)
            .iter()
            .sorted_by_key(|record| Reverse((record.current_date(), record.recorded_at())))
            .collect()
    }

    /// The most recent record, used to prefill the next reading.
    #[must_use]
    pub fn last<R: Record>(&self) -> Option<&R> {
        R::collection(self)
            .iter()
            .max_by_key(|record| (record.current_date(), record.recorded_at()))
    }

    pub fn insert_report(&mut self, report: StoredReport) {
        self.reports.push(report);
    }

    /// Saved reports, newest first.
    #[must_use]
    pub fn reports(&self) -> Vec<&StoredReport> {
        self.reports.iter().sorted_by_key(|report| Reverse(report.created_at)).collect()
    }

    /// Remove the report by its ID, returns whether it was there.
    pub fn delete_report(&mut self, id: &str) -> bool {
        let n_reports = self.reports.len();
        self.reports.retain(|report| report.id != id);
        self.reports.len() != n_reports
    }
}

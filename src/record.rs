use bon::Builder;
use chrono::{DateTime, Local, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    calculations::{ElectricityEstimate, WaterEstimate, month_forecast},
    quantity::{cost::Cost, energy::KilowattHours, volume::CubicMeters},
    reading::ReadingPair,
    store::Store,
    tariff::Tariff,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UtilityKind {
    Electricity,
    Water,
}

impl UtilityKind {
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Electricity => "kWh",
            Self::Water => "m³",
        }
    }

    /// Portuguese title used in reports.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Electricity => "Energia",
            Self::Water => "Água",
        }
    }

    /// ASCII form of [`UtilityKind::title`] for file names.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Electricity => "energia",
            Self::Water => "agua",
        }
    }
}

/// Stored reading pair together with what has been derived from it.
pub trait Record: Sized {
    const KIND: UtilityKind;

    fn recorded_at(&self) -> DateTime<Local>;

    /// Date of the current reading, records are ordered by it.
    fn current_date(&self) -> NaiveDate;

    fn consumption(&self) -> f64;

    fn daily_average(&self) -> f64;

    fn projected_cost(&self) -> Option<Cost>;

    /// Usage expected over the calendar month of `today` at the recorded daily rate.
    fn month_forecast(&self, today: NaiveDate) -> f64;

    fn collection(store: &Store) -> &[Self];

    fn collection_mut(store: &mut Store) -> &mut Vec<Self>;
}

/// Electricity reading entry.
#[derive(Clone, Debug, Serialize, Deserialize, Builder)]
pub struct ElectricityRecord {
    #[builder(default = Local::now())]
    pub recorded_at: DateTime<Local>,

    pub readings: ReadingPair<KilowattHours>,
    pub tariff: Tariff,
    pub estimate: ElectricityEstimate,
}

impl Record for ElectricityRecord {
    const KIND: UtilityKind = UtilityKind::Electricity;

    fn recorded_at(&self) -> DateTime<Local> {
        self.recorded_at
    }

    fn current_date(&self) -> NaiveDate {
        self.readings.current.date
    }

    fn consumption(&self) -> f64 {
        self.estimate.consumption.into_inner()
    }

    fn daily_average(&self) -> f64 {
        self.estimate.daily_rate.into_inner()
    }

    fn projected_cost(&self) -> Option<Cost> {
        Some(self.estimate.projected_cost)
    }

    fn month_forecast(&self, today: NaiveDate) -> f64 {
        month_forecast(self.estimate.daily_rate, today).into_inner()
    }

    fn collection(store: &Store) -> &[Self] {
        &store.electricity
    }

    fn collection_mut(store: &mut Store) -> &mut Vec<Self> {
        &mut store.electricity
    }
}

/// Water reading entry.
#[derive(Clone, Debug, Serialize, Deserialize, Builder)]
pub struct WaterRecord {
    #[builder(default = Local::now())]
    pub recorded_at: DateTime<Local>,

    pub readings: ReadingPair<CubicMeters>,
    pub estimate: WaterEstimate,
}

impl Record for WaterRecord {
    const KIND: UtilityKind = UtilityKind::Water;

    fn recorded_at(&self) -> DateTime<Local> {
        self.recorded_at
    }

    fn current_date(&self) -> NaiveDate {
        self.readings.current.date
    }

    fn consumption(&self) -> f64 {
        self.estimate.consumption.into_inner()
    }

    fn daily_average(&self) -> f64 {
        self.estimate.daily_rate.into_inner()
    }

    fn projected_cost(&self) -> Option<Cost> {
        None
    }

    fn month_forecast(&self, today: NaiveDate) -> f64 {
        month_forecast(self.estimate.daily_rate, today).into_inner()
    }

    fn collection(store: &Store) -> &[Self] {
        &store.water
    }

    fn collection_mut(store: &mut Store) -> &mut Vec<Self> {
        &mut store.water
    }
}


#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{fixtures::*, *};

    #[test]
    fn test_electricity_record() {
        let record = electricity((1250.0, date(2025, 1, 10)), (1350.0, date(2025, 2, 9)));
        assert_eq!(record.current_date(), date(2025, 2, 9));
        assert_abs_diff_eq!(record.consumption(), 100.0);
        assert_abs_diff_eq!(record.projected_cost().unwrap().into_inner(), 105.8, epsilon = 1e-9);
        assert_abs_diff_eq!(record.month_forecast(date(2025, 2, 20)), 100.0 / 30.0 * 28.0);
    }

    #[test]
    fn test_water_record_has_no_cost() {
        let record = water((10.0, date(2025, 1, 1)), (20.0, date(2025, 1, 11)));
        assert_abs_diff_eq!(record.daily_average(), 1.0);
        assert!(record.projected_cost().is_none());
        assert_eq!(WaterRecord::KIND.unit(), "m³");
    }
}

//! Consumption, daily rate, and projections derived from meter readings.
//!
//! Everything here is total: a decreasing meter yields zero usage,
//! and a non-positive period yields a zero daily rate.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    quantity::{
        Quantity,
        cost::Cost,
        energy::KilowattHours,
        price::KilowattHourPrice,
        rate::{DailyCubicMeters, DailyKilowattHours},
        time::Days,
        volume::CubicMeters,
    },
    reading::ReadingPair,
    tariff::Tariff,
};

/// Default projection horizon.
pub const DEFAULT_HORIZON: Days = Days::MONTH;

/// Usage between two readings of the same meter, floored at zero.
pub fn consumption<const ENERGY: isize, const VOLUME: isize>(
    current: Quantity<ENERGY, VOLUME, 0, 0>,
    previous: Quantity<ENERGY, VOLUME, 0, 0>,
) -> Quantity<ENERGY, VOLUME, 0, 0> {
    (current - previous).max(Quantity::ZERO)
}

/// Average usage per day over the elapsed period.
///
/// Returns zero when the period is empty or negative. Callers must tell
/// «no data» apart before calling this.
pub fn daily_rate<const ENERGY: isize, const VOLUME: isize>(
    consumption: Quantity<ENERGY, VOLUME, 0, 0>,
    elapsed: Days,
) -> Quantity<ENERGY, VOLUME, -1, 0> {
    if elapsed <= Days::ZERO { Quantity::ZERO } else { consumption / elapsed }
}

/// Extrapolate the daily rate over the horizon.
///
/// The horizon is not validated: a negative one yields a negative total.
pub fn project_consumption<const ENERGY: isize, const VOLUME: isize>(
    daily_rate: Quantity<ENERGY, VOLUME, -1, 0>,
    horizon: Days,
) -> Quantity<ENERGY, VOLUME, 0, 0> {
    daily_rate * horizon
}

/// Projected electricity bill under the tariff.
pub fn project_cost(daily_rate: DailyKilowattHours, tariff: &Tariff, horizon: Days) -> Cost {
    project_cost_with(daily_rate, tariff.unit_price, tariff.surcharge, tariff.fixed_fee, horizon)
}

/// Projected electricity bill: energy and surcharge for the projected usage plus the fixed fee.
pub fn project_cost_with(
    daily_rate: DailyKilowattHours,
    unit_price: KilowattHourPrice,
    surcharge: KilowattHourPrice,
    fixed_fee: Cost,
    horizon: Days,
) -> Cost {
    let projected = project_consumption(daily_rate, horizon);
    projected * unit_price + projected * surcharge + fixed_fee
}

/// Relative change in percent, [`None`] when there is nothing to compare against.
#[must_use]
pub fn percentage_change(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 { None } else { Some((current - previous) / previous * 100.0) }
}

/// Usage expected over the whole calendar month containing the date.
pub fn month_forecast<const ENERGY: isize, const VOLUME: isize>(
    daily_rate: Quantity<ENERGY, VOLUME, -1, 0>,
    date: NaiveDate,
) -> Quantity<ENERGY, VOLUME, 0, 0> {
    project_consumption(daily_rate, days_in_month(date))
}

fn days_in_month(date: NaiveDate) -> Days {
    date.with_day(1)
        .and_then(|first| Some(Days::from(first.checked_add_months(Months::new(1))? - first)))
        .unwrap_or(DEFAULT_HORIZON)
}

/// Electricity usage derived from two readings.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectricityEstimate {
    pub consumption: KilowattHours,
    pub daily_rate: DailyKilowattHours,
    pub projected_cost: Cost,
}

impl ElectricityEstimate {
    pub fn calculate(
        readings: &ReadingPair<KilowattHours>,
        elapsed: Days,
        tariff: &Tariff,
        horizon: Days,
    ) -> Self {
        let consumption = readings.consumption();
        let daily_rate = daily_rate(consumption, elapsed);
        Self { consumption, daily_rate, projected_cost: project_cost(daily_rate, tariff, horizon) }
    }
}

/// Water usage derived from two readings, there is no cost term.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterEstimate {
    pub consumption: CubicMeters,
    pub daily_rate: DailyCubicMeters,
    pub projected_consumption: CubicMeters,
}

impl WaterEstimate {
    pub fn calculate(readings: &ReadingPair<CubicMeters>, elapsed: Days, horizon: Days) -> Self {
        let consumption = readings.consumption();
        let daily_rate = daily_rate(consumption, elapsed);
        Self {
            consumption,
            daily_rate,
            projected_consumption: project_consumption(daily_rate, horizon),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{reading::Reading, tariff::TariffFlag};

    fn kwh(value: f64) -> KilowattHours {
        KilowattHours::new(value)
    }

    fn days(value: f64) -> Days {
        Days::new(value)
    }

    #[test]
    fn test_consumption_is_difference_for_increasing_meter() {
        for (current, previous) in [(1350.0, 1250.0), (0.5, 0.0), (42.0, 42.0)] {
            assert_abs_diff_eq!(
                consumption(kwh(current), kwh(previous)).into_inner(),
                current - previous
            );
        }
    }

    #[test]
    fn test_consumption_clamps_decreasing_meter() {
        assert_eq!(consumption(kwh(100.0), kwh(150.0)), KilowattHours::ZERO);
        assert_eq!(
            consumption(CubicMeters::new(0.0), CubicMeters::new(0.001)),
            CubicMeters::ZERO
        );
    }

    #[test]
    fn test_daily_rate_non_positive_days() {
        for elapsed in [0.0, -1.0, -30.0] {
            assert_eq!(daily_rate(kwh(100.0), days(elapsed)), DailyKilowattHours::ZERO);
        }
    }

    #[test]
    fn test_daily_rate_division() {
        assert_abs_diff_eq!(daily_rate(kwh(100.0), days(30.0)).into_inner(), 100.0 / 30.0);
        assert_abs_diff_eq!(daily_rate(kwh(7.5), days(2.5)).into_inner(), 3.0);
    }

    #[test]
    fn test_idempotence() {
        let tariff = Tariff::builder().flag(TariffFlag::Yellow).build();
        let first = project_cost(DailyKilowattHours::new(5.0), &tariff, DEFAULT_HORIZON);
        let second = project_cost(DailyKilowattHours::new(5.0), &tariff, DEFAULT_HORIZON);
        assert_eq!(first, second);
    }

    #[test]
    fn test_scenario_plain_tariff() {
        let usage = consumption(kwh(1350.0), kwh(1250.0));
        assert_abs_diff_eq!(usage.into_inner(), 100.0);

        let rate = daily_rate(usage, days(30.0));
        assert_abs_diff_eq!(rate.into_inner(), 3.333_333, epsilon = 1e-6);

        let cost = project_cost_with(
            rate,
            KilowattHourPrice::new(0.70),
            KilowattHourPrice::ZERO,
            Cost::new(35.80),
            days(30.0),
        );
        assert_abs_diff_eq!(cost.into_inner(), 105.80, epsilon = 1e-9);
    }

    #[test]
    fn test_scenario_surcharge() {
        let cost = project_cost_with(
            DailyKilowattHours::new(5.0),
            KilowattHourPrice::new(0.70),
            KilowattHourPrice::new(0.018_74),
            Cost::new(35.80),
            days(30.0),
        );
        assert_abs_diff_eq!(cost.into_inner(), 143.611, epsilon = 1e-9);
    }

    #[test]
    fn test_scenario_water() {
        let projected = project_consumption(DailyCubicMeters::new(1.0 / 3.0), DEFAULT_HORIZON);
        assert_abs_diff_eq!(projected.into_inner(), 10.0, epsilon = 1e-9);
        let projected = project_consumption(DailyCubicMeters::new(0.333), DEFAULT_HORIZON);
        assert_abs_diff_eq!(projected.into_inner(), 9.99, epsilon = 1e-9);
    }

    #[test]
    fn test_scenario_fixed_fee_survives_zero_consumption() {
        let usage = consumption(kwh(100.0), kwh(150.0));
        let rate = daily_rate(usage, days(30.0));
        assert_eq!(rate, DailyKilowattHours::ZERO);
        let cost = project_cost_with(
            rate,
            KilowattHourPrice::new(0.7),
            KilowattHourPrice::ZERO,
            Cost::new(35.80),
            DEFAULT_HORIZON,
        );
        assert_abs_diff_eq!(cost.into_inner(), 35.80);
    }

    #[test]
    fn test_division_by_zero_guard() {
        assert_eq!(daily_rate(kwh(100.0), days(0.0)), DailyKilowattHours::ZERO);
    }

    #[test]
    fn test_negative_horizon_falls_through() {
        let projected = project_consumption(DailyKilowattHours::new(2.0), days(-3.0));
        assert_abs_diff_eq!(projected.into_inner(), -6.0);
    }

    #[test]
    fn test_percentage_change() {
        assert_abs_diff_eq!(percentage_change(110.0, 100.0).unwrap(), 10.0);
        assert_abs_diff_eq!(percentage_change(75.0, 100.0).unwrap(), -25.0);
        assert_eq!(percentage_change(75.0, 0.0), None);
    }

    #[test]
    fn test_month_forecast() {
        let february = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let forecast = month_forecast(DailyKilowattHours::new(2.0), february);
        assert_abs_diff_eq!(forecast.into_inner(), 58.0);
        let july = NaiveDate::from_ymd_opt(2025, 7, 31).unwrap();
        let forecast = month_forecast(DailyCubicMeters::new(0.5), july);
        assert_abs_diff_eq!(forecast.into_inner(), 15.5);
    }

    #[test]
    fn test_electricity_estimate() {
        let readings = ReadingPair::new(
            Reading::new(kwh(1250.0), NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()),
            Reading::new(kwh(1350.0), NaiveDate::from_ymd_opt(2025, 2, 9).unwrap()),
        );
        let estimate = ElectricityEstimate::calculate(
            &readings,
            readings.elapsed(),
            &Tariff::default(),
            DEFAULT_HORIZON,
        );
        assert_abs_diff_eq!(estimate.consumption.into_inner(), 100.0);
        assert_abs_diff_eq!(estimate.daily_rate.into_inner(), 100.0 / 30.0);
        assert_abs_diff_eq!(estimate.projected_cost.into_inner(), 105.80, epsilon = 1e-9);
    }

    #[test]
    fn test_water_estimate_same_day() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let readings = ReadingPair::new(
            Reading::new(CubicMeters::new(10.0), date),
            Reading::new(CubicMeters::new(12.0), date),
        );
        let estimate = WaterEstimate::calculate(&readings, readings.elapsed(), DEFAULT_HORIZON);
        assert_abs_diff_eq!(estimate.consumption.into_inner(), 2.0);
        assert_eq!(estimate.daily_rate, DailyCubicMeters::ZERO);
        assert_eq!(estimate.projected_consumption, CubicMeters::ZERO);
    }
}

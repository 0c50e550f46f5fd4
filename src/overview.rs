//! Dashboard: recent consumption trend, change, and the current month forecast.

use chrono::NaiveDate;

use crate::{
    calculations::percentage_change,
    fmt::{last_months, month_abbreviation},
    record::{Record, UtilityKind},
};

/// Number of most recent records shown.
pub const N_TREND_POINTS: usize = 6;

#[derive(Clone, Debug, PartialEq)]
pub struct TrendPoint {
    /// Month abbreviation.
    pub label: &'static str,

    pub consumption: f64,

    /// Current reading date, [`None`] for placeholders.
    pub date: Option<NaiveDate>,
}

#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct Trend {
    pub kind: UtilityKind,

    /// Oldest first.
    pub points: Vec<TrendPoint>,

    /// Latest consumption against the one before, in percent.
    pub change: Option<f64>,

    /// Expected consumption over the month of `today`.
    pub forecast: f64,
}

impl Trend {
    /// Build the trend from records sorted most recent first.
    ///
    /// Without any records, the last months are shown with zero consumption.
    pub fn from_records<R: Record>(records: &[&R], today: NaiveDate) -> Self {
        let points = if records.is_empty() {
            last_months(N_TREND_POINTS, &today)
                .into_iter()
                .map(|label| TrendPoint { label, consumption: 0.0, date: None })
                .collect()
        } else {
            records
                .iter()
                .take(N_TREND_POINTS)
                .rev()
                .map(|record| {
                    let date = record.current_date();
                    TrendPoint {
                        label: month_abbreviation(&date),
                        consumption: record.consumption(),
                        date: Some(date),
                    }
                })
                .collect()
        };
        let change = match records {
            [latest, previous, ..] => percentage_change(latest.consumption(), previous.consumption()),
            _ => None,
        };
        let forecast = records.first().map_or(0.0, |latest| latest.month_forecast(today));
        Self { kind: R::KIND, points, change, forecast }
    }
}

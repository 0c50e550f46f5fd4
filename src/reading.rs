use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    calculations::consumption,
    prelude::*,
    quantity::{Quantity, time::Days},
};

/// Meter value captured on a date.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading<Q> {
    pub value: Q,
    pub date: NaiveDate,
}

impl<Q> Reading<Q> {
    pub const fn new(value: Q, date: NaiveDate) -> Self {
        Self { value, date }
    }
}

/// Previous and current readings of the same meter.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingPair<Q> {
    pub previous: Reading<Q>,
    pub current: Reading<Q>,
}

impl<const ENERGY: isize, const VOLUME: isize> ReadingPair<Quantity<ENERGY, VOLUME, 0, 0>> {
    pub const fn new(
        previous: Reading<Quantity<ENERGY, VOLUME, 0, 0>>,
        current: Reading<Quantity<ENERGY, VOLUME, 0, 0>>,
    ) -> Self {
        Self { previous, current }
    }

    /// Days between the readings, may be zero or negative for misordered dates.
    pub fn elapsed(&self) -> Days {
        Days::from(self.current.date - self.previous.date)
    }

    /// Usage between the readings, never negative.
    pub fn consumption(&self) -> Quantity<ENERGY, VOLUME, 0, 0> {
        consumption(self.current.value, self.previous.value)
    }

    /// Check the pair the way the input forms do before computing anything.
    ///
    /// The calculations themselves clamp a decreasing meter to zero usage,
    /// this rejects it instead.
    ///
    /// # Errors
    ///
    /// Fails when the current reading is less than the previous one.
    pub fn validate(&self) -> Result {
        ensure!(
            self.current.value >= self.previous.value,
            "the current reading ({}) is less than the previous one ({})",
            self.current.value.into_inner(),
            self.previous.value.into_inner(),
        );
        if self.current.date < self.previous.date {
            warn!(
                previous = %self.previous.date,
                current = %self.current.date,
                "the current reading is dated before the previous one"
            );
        }
        Ok(())
    }
}

pub mod cost;
pub mod energy;
pub mod price;
pub mod rate;
pub mod time;
pub mod volume;

use std::ops::{Div, Mul};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::quantity::time::Days;

/// Physical quantity with the dimension encoded in the type.
///
/// Dimensions are: energy, water volume, time (in days), and cost.
#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[from(f64, OrderedFloat<f64>)]
#[serde(transparent)]
#[must_use]
pub struct Quantity<const ENERGY: isize, const VOLUME: isize, const TIME: isize, const COST: isize>(
    pub OrderedFloat<f64>,
);

impl<const ENERGY: isize, const VOLUME: isize, const TIME: isize, const COST: isize>
    Quantity<ENERGY, VOLUME, TIME, COST>
{
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    pub const fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    #[must_use]
    pub const fn into_inner(self) -> f64 {
        self.0.0
    }
}

impl<const ENERGY: isize, const VOLUME: isize, const TIME: isize, const COST: isize> Default
    for Quantity<ENERGY, VOLUME, TIME, COST>
{
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const ENERGY: isize, const VOLUME: isize, const TIME: isize, const COST: isize> Mul<f64>
    for Quantity<ENERGY, VOLUME, TIME, COST>
{
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const ENERGY: isize, const VOLUME: isize, const TIME: isize, const COST: isize> Div<f64>
    for Quantity<ENERGY, VOLUME, TIME, COST>
{
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

/// Total over a period divided by its length gives the daily rate.
impl<const ENERGY: isize, const VOLUME: isize, const COST: isize> Div<Days>
    for Quantity<ENERGY, VOLUME, 0, COST>
{
    type Output = Quantity<ENERGY, VOLUME, -1, COST>;

    fn div(self, rhs: Days) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

/// Daily rate extrapolated over a period gives the total.
impl<const ENERGY: isize, const VOLUME: isize, const COST: isize> Mul<Days>
    for Quantity<ENERGY, VOLUME, -1, COST>
{
    type Output = Quantity<ENERGY, VOLUME, 0, COST>;

    fn mul(self, rhs: Days) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

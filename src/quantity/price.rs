use std::fmt::{Debug, Display, Formatter};

use crate::{fmt::format_number, quantity::Quantity};

/// Brazilian real per kilowatt-hour.
pub type KilowattHourPrice = Quantity<-1, 0, 0, 1>;

impl Display for KilowattHourPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "R$ {}/kWh", format_number(self.into_inner(), 5))
    }
}

impl Debug for KilowattHourPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "R${:?}/kWh", self.0.0)
    }
}

use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Average energy usage per day.
pub type DailyKilowattHours = Quantity<1, 0, -1, 0>;

/// Average water usage per day.
pub type DailyCubicMeters = Quantity<0, 1, -1, 0>;

impl Display for DailyKilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} kWh/d", self.0)
    }
}

impl Debug for DailyKilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}kWh/d", self.0.0)
    }
}

impl Display for DailyCubicMeters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} m³/d", self.0)
    }
}

impl Debug for DailyCubicMeters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}m³/d", self.0.0)
    }
}

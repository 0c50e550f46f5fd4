use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Water volume.
pub type CubicMeters = Quantity<0, 1, 0, 0>;

impl Display for CubicMeters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} m³", self.0)
    }
}

impl Debug for CubicMeters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}m³", self.0.0)
    }
}

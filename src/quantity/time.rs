use std::fmt::{Debug, Display, Formatter};

use chrono::TimeDelta;

use crate::quantity::Quantity;

pub type Days = Quantity<0, 0, 1, 0>;

impl Days {
    /// Calendar month approximation used for projections.
    pub const MONTH: Self = Self::new(30.0);
}

impl From<TimeDelta> for Days {
    /// Whole days, truncated towards zero.
    #[expect(clippy::cast_precision_loss)]
    fn from(time_delta: TimeDelta) -> Self {
        Self::new(time_delta.num_days() as f64)
    }
}

impl Display for Days {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} d", self.0)
    }
}

impl Debug for Days {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}d", self.0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_time_delta() {
        assert_eq!(Days::from(TimeDelta::days(31)), Days::new(31.0));
        assert_eq!(Days::from(TimeDelta::hours(47)), Days::new(1.0));
        assert_eq!(Days::from(TimeDelta::days(-2)), Days::new(-2.0));
    }
}

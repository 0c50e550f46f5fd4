use std::fmt::{Debug, Display, Formatter};

use crate::{fmt::format_currency, quantity::Quantity};

pub type Cost = Quantity<0, 0, 0, 1>;

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_currency(self.into_inner()))
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "R${:?}", self.0.0)
    }
}

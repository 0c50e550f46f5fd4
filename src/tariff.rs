use std::fmt::{Display, Formatter};

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::quantity::{cost::Cost, price::KilowattHourPrice};

/// Default energy price, per kilowatt-hour.
pub const DEFAULT_UNIT_PRICE: KilowattHourPrice = KilowattHourPrice::new(0.70);

/// Default public lighting fee («contribuição de iluminação pública»).
pub const DEFAULT_PUBLIC_LIGHTING: Cost = Cost::new(35.80);

/// Tariff flag («bandeira tarifária»), signals the generation cost tier.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum TariffFlag {
    #[default]
    Green,
    Yellow,
    Red1,
    Red2,
}

impl TariffFlag {
    /// Additional charge per kilowatt-hour under the flag.
    pub const fn surcharge(self) -> KilowattHourPrice {
        match self {
            Self::Green => KilowattHourPrice::ZERO,
            Self::Yellow => KilowattHourPrice::new(0.018_85),
            Self::Red1 => KilowattHourPrice::new(0.044_63),
            Self::Red2 => KilowattHourPrice::new(0.078_77),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "Verde",
            Self::Yellow => "Amarela",
            Self::Red1 => "Vermelha - Patamar 1",
            Self::Red2 => "Vermelha - Patamar 2",
        }
    }
}

impl Display for TariffFlag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Electricity pricing parameters.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct Tariff {
    #[builder(default = DEFAULT_UNIT_PRICE)]
    pub unit_price: KilowattHourPrice,

    #[builder(default)]
    pub flag: TariffFlag,

    /// Per-kilowatt-hour surcharge, defaults to the flag's one.
    #[builder(default = flag.surcharge())]
    pub surcharge: KilowattHourPrice,

    /// Fixed additive fee, such as public lighting.
    #[builder(default = DEFAULT_PUBLIC_LIGHTING)]
    pub fixed_fee: Cost,
}

impl Default for Tariff {
    fn default() -> Self {
        Self::builder().build()
    }
}

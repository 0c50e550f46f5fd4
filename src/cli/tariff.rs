use clap::Parser;
use meterbook::{
    quantity::{cost::Cost, price::KilowattHourPrice},
    tariff::{Tariff, TariffFlag},
};

#[derive(Parser)]
pub struct TariffArgs {
    /// Energy price per kilowatt-hour.
    #[clap(long = "kwh-price", env = "KWH_PRICE", default_value = "0.70")]
    unit_price: KilowattHourPrice,

    /// Tariff flag («bandeira tarifária»).
    #[clap(long = "flag", env = "TARIFF_FLAG", value_enum, default_value = "green")]
    flag: TariffFlag,

    /// Flag surcharge per kilowatt-hour, overrides the flag's default one.
    #[clap(long = "flag-value", env = "TARIFF_FLAG_VALUE")]
    surcharge: Option<KilowattHourPrice>,

    /// Fixed public lighting fee.
    #[clap(long = "public-lighting", env = "PUBLIC_LIGHTING", default_value = "35.80")]
    fixed_fee: Cost,
}

impl TariffArgs {
    pub fn tariff(&self) -> Tariff {
        Tariff::builder()
            .unit_price(self.unit_price)
            .flag(self.flag)
            .maybe_surcharge(self.surcharge)
            .fixed_fee(self.fixed_fee)
            .build()
    }
}

mod electricity;
mod history;
mod overview;
mod period;
mod readings;
mod report;
mod tariff;
mod water;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use self::{
    electricity::ElectricityArgs,
    history::HistoryArgs,
    overview::OverviewArgs,
    report::ReportArgs,
    water::WaterArgs,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Reading history and saved reports.
    #[clap(long, env = "METERBOOK_STORE", default_value = "meterbook.toml", global = true)]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate electricity consumption and the upcoming bill from two meter readings.
    #[clap(name = "electricity")]
    Electricity(Box<ElectricityArgs>),

    /// Estimate water consumption from two meter readings.
    #[clap(name = "water")]
    Water(Box<WaterArgs>),

    /// List the saved readings, most recent first.
    #[clap(name = "history")]
    History(HistoryArgs),

    /// Recent consumption trend and the forecast for the current month.
    #[clap(name = "overview")]
    Overview(OverviewArgs),

    /// Generate and manage monthly reports.
    #[clap(name = "report")]
    Report(ReportArgs),
}

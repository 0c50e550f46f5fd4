mod cli;
mod tables;

use clap::{Parser, crate_version};
use meterbook::prelude::*;

use crate::cli::{Args, Command};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    match args.command {
        Command::Electricity(command_args) => command_args.run(&args.store)?,
        Command::Water(command_args) => command_args.run(&args.store)?,
        Command::History(command_args) => command_args.run(&args.store)?,
        Command::Overview(command_args) => command_args.run(&args.store)?,
        Command::Report(command_args) => command_args.run(&args.store)?,
    }

    info!("done!");
    Ok(())
}

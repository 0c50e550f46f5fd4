use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use meterbook::{
    prelude::*,
    record::{ElectricityRecord, Record, UtilityKind, WaterRecord},
    report::{MonthlyReport, StoredReport},
    store::Store,
};

use crate::tables::build_reports_table;

#[derive(Parser)]
pub struct ReportArgs {
    #[command(subcommand)]
    command: ReportCommand,
}

#[derive(Subcommand)]
enum ReportCommand {
    /// Write the monthly report and add it to the saved reports.
    Generate(GenerateArgs),

    /// List the saved reports, newest first.
    List,

    /// Remove the report from the saved ones.
    Delete {
        /// Report ID as shown by `report list`.
        id: String,
    },
}

#[derive(Parser)]
struct GenerateArgs {
    #[clap(value_enum)]
    kind: UtilityKind,

    /// Year of the reported month, the current one by default.
    #[clap(long)]
    year: Option<i32>,

    /// Reported month number, the current one by default.
    #[clap(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    /// Directory to write the report into.
    #[clap(long, env = "METERBOOK_REPORTS_DIR", default_value = ".")]
    output_dir: PathBuf,
}

impl ReportArgs {
    pub fn run(self, store_path: &Path) -> Result {
        let mut store = Store::read_from(store_path)?;
        match self.command {
            ReportCommand::Generate(args) => {
                let report = args.report(&store)?;
                let now = Local::now();
                let path = args.output_dir.join(report.file_name());
                fs::write(&path, report.render(now.date_naive()))
                    .with_context(|| format!("failed to write `{}`", path.display()))?;
                info!(path = %path.display(), "written the report");
                store.insert_report(StoredReport::new(&report, now));
                store.write_to(store_path)?;
            }
            ReportCommand::List => {
                println!("{}", build_reports_table(&store.reports()));
            }
            ReportCommand::Delete { id } => {
                ensure!(store.delete_report(&id), "there is no report `{id}`");
                store.write_to(store_path)?;
                info!(%id, "deleted the report");
            }
        }
        Ok(())
    }
}

impl GenerateArgs {
    fn report(&self, store: &Store) -> Result<MonthlyReport> {
        match self.kind {
            UtilityKind::Electricity => self.report_on::<ElectricityRecord>(store),
            UtilityKind::Water => self.report_on::<WaterRecord>(store),
        }
    }

    #[instrument(skip_all, fields(kind = ?R::KIND))]
    fn report_on<R: Record>(&self, store: &Store) -> Result<MonthlyReport> {
        let today = Local::now().date_naive();
        let year = self.year.unwrap_or_else(|| today.year());
        let month = self.month.unwrap_or_else(|| today.month());
        MonthlyReport::from_records(&store.recent::<R>(), year, month)
            .with_context(|| format!("no readings for {month:02}/{year}"))
    }
}

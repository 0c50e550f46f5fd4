//! Monthly consumption reports and their saved index.

use chrono::{DateTime, Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    calculations::percentage_change,
    fmt::{format_number, month_abbreviation},
    quantity::cost::Cost,
    record::{Record, UtilityKind},
};

#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyReport {
    pub kind: UtilityKind,

    /// First day of the reported month.
    pub period: NaiveDate,

    pub consumption: f64,
    pub daily_average: f64,

    /// Projected bill, electricity only.
    pub cost: Option<Cost>,

    pub previous_consumption: Option<f64>,
    pub percentage_change: Option<f64>,
}

impl MonthlyReport {
    /// Report on the newest record whose current reading falls into the month of `period`.
    ///
    /// The records must be sorted most recent first. The next older record is
    /// the comparison baseline.
    pub fn from_records<R: Record>(records: &[&R], year: i32, month: u32) -> Option<Self> {
        let period = NaiveDate::from_ymd_opt(year, month, 1)?;
        let position = records.iter().position(|record| {
            let date = record.current_date();
            date.year() == year && date.month() == month
        })?;
        let record = records[position];
        let consumption = record.consumption();
        let previous_consumption = records.get(position + 1).map(|previous| previous.consumption());
        Some(Self {
            kind: R::KIND,
            period,
            consumption,
            daily_average: record.daily_average(),
            cost: record.projected_cost(),
            previous_consumption,
            percentage_change: previous_consumption
                .and_then(|previous| percentage_change(consumption, previous)),
        })
    }

    #[must_use]
    pub fn month(&self) -> &'static str {
        month_abbreviation(&self.period)
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.period.year()
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!("Relatório de {} - {}/{}", self.kind.title(), self.month(), self.year())
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        file_name(self.kind, self.month(), self.year())
    }

    /// Render the plain-text document.
    #[must_use]
    pub fn render(&self, generated_on: NaiveDate) -> String {
        let unit = self.kind.unit();
        let title = self.title();
        let mut lines = vec![
            "Monitor de Consumo".to_string(),
            title.clone(),
            "─".repeat(title.chars().count()),
            String::new(),
            format!("Consumo Total: {} {unit}", format_number(self.consumption, 2)),
            format!("Média Diária: {} {unit}", format_number(self.daily_average, 3)),
        ];
        if let Some(cost) = self.cost {
            lines.push(format!("Custo Estimado: {cost}"));
        }
        if let Some(previous_consumption) = self.previous_consumption {
            lines.push(format!("Consumo Anterior: {} {unit}", format_number(previous_consumption, 2)));
            if let Some(change) = self.percentage_change {
                lines.push(if change >= 0.0 {
                    format!("Aumento: {}%", format_number(change, 2))
                } else {
                    format!("Redução: {}%", format_number(change.abs(), 2))
                });
            }
        }
        lines.push(String::new());
        lines.push(format!("Gerado em {}", generated_on.format("%d/%m/%Y")));
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Report file name, like `relatorio_energia_Mar_2025.txt`.
#[must_use]
pub fn file_name(kind: UtilityKind, month: &str, year: i32) -> String {
    format!("relatorio_{}_{month}_{year}.txt", kind.slug())
}

/// Entry in the saved reports index.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredReport {
    pub id: String,
    pub kind: UtilityKind,
    pub month: String,
    pub year: i32,
    pub created_at: DateTime<Local>,
    pub consumption: f64,
    pub daily_average: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,

    pub file_name: String,
}

impl StoredReport {
    pub fn new(report: &MonthlyReport, created_at: DateTime<Local>) -> Self {
        let file_name = report.file_name();
        let digest = md5::compute(format!("{file_name}\n{}", created_at.to_rfc3339()).as_bytes());
        Self {
            id: format!("{digest:x}"),
            kind: report.kind,
            month: report.month().to_string(),
            year: report.year(),
            created_at,
            consumption: report.consumption,
            daily_average: report.daily_average,
            cost: report.cost,
            file_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        record::{
            ElectricityRecord,
            WaterRecord,
            fixtures::{date, electricity, water},
        },
        store::Store,
    };

    fn electricity_store() -> Store {
        let mut store = Store::default();
        store.insert(electricity((1160.0, date(2025, 1, 10)), (1250.0, date(2025, 2, 9))));
        store.insert(electricity((1250.0, date(2025, 2, 9)), (1350.0, date(2025, 3, 11))));
        store
    }

    #[test]
    fn test_from_records() {
        let store = electricity_store();
        let records = store.recent::<ElectricityRecord>();
        let report = MonthlyReport::from_records(&records, 2025, 3).unwrap();
        assert_eq!(report.kind, UtilityKind::Electricity);
        assert_eq!(report.month(), "Mar");
        assert_abs_diff_eq!(report.consumption, 100.0);
        assert_abs_diff_eq!(report.previous_consumption.unwrap(), 90.0);
        assert_abs_diff_eq!(report.percentage_change.unwrap(), 100.0 / 9.0, epsilon = 1e-9);
        assert!(report.cost.is_some());
    }

    #[test]
    fn test_oldest_record_has_no_baseline() {
        let store = electricity_store();
        let records = store.recent::<ElectricityRecord>();
        let report = MonthlyReport::from_records(&records, 2025, 2).unwrap();
        assert_eq!(report.previous_consumption, None);
        assert_eq!(report.percentage_change, None);
        assert!(MonthlyReport::from_records(&records, 2024, 12).is_none());
    }

    #[test]
    fn test_render_electricity() {
        let store = electricity_store();
        let records = store.recent::<ElectricityRecord>();
        let rendered =
            MonthlyReport::from_records(&records, 2025, 3).unwrap().render(date(2025, 3, 12));
        assert!(rendered.starts_with("Monitor de Consumo\nRelatório de Energia - Mar/2025\n"));
        assert!(rendered.contains("Consumo Total: 100.00 kWh\n"));
        assert!(rendered.contains("Média Diária: 3.333 kWh\n"));
        assert!(rendered.contains("Custo Estimado: R$\u{a0}105,80\n"));
        assert!(rendered.contains("Consumo Anterior: 90.00 kWh\n"));
        assert!(rendered.contains("Aumento: 11.11%\n"));
        assert!(rendered.contains("Gerado em 12/03/2025\n"));
    }

    #[test]
    fn test_render_water_decrease() {
        let mut store = Store::default();
        store.insert(water((10.0, date(2025, 4, 1)), (30.0, date(2025, 5, 1))));
        store.insert(water((30.0, date(2025, 5, 1)), (45.0, date(2025, 5, 31))));
        let records = store.recent::<WaterRecord>();
        let report = MonthlyReport::from_records(&records, 2025, 5).unwrap();
        let rendered = report.render(date(2025, 6, 1));
        assert!(rendered.contains("Relatório de Água - Mai/2025"));
        assert!(rendered.contains("Consumo Total: 15.00 m³"));
        assert!(rendered.contains("Redução: 25.00%"));
        assert!(!rendered.contains("Custo Estimado"));
        assert_eq!(report.file_name(), "relatorio_agua_Mai_2025.txt");
    }

    #[test]
    fn test_stored_report_ids_differ_by_creation_time() {
        let store = electricity_store();
        let records = store.recent::<ElectricityRecord>();
        let report = MonthlyReport::from_records(&records, 2025, 3).unwrap();
        let now = Local::now();
        let first = StoredReport::new(&report, now);
        let second = StoredReport::new(&report, now + chrono::TimeDelta::seconds(1));
        assert_ne!(first.id, second.id);
        assert_eq!(first.id.len(), 32);
        assert_eq!(first.file_name, "relatorio_energia_Mar_2025.txt");
    }
}

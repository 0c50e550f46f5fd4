use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use meterbook::{
    fmt::{FormattedPercentage, format_number},
    overview::Trend,
    quantity::time::Days,
    record::{ElectricityRecord, WaterRecord},
    report::StoredReport,
};

const BAR_WIDTH: f64 = 24.0;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

#[expect(clippy::cast_precision_loss)]
fn mean(values: impl ExactSizeIterator<Item = f64>) -> Option<f64> {
    let n_values = values.len();
    (n_values != 0).then(|| values.sum::<f64>() / n_values as f64)
}

/// Color the value red when it is above the mean.
fn above_mean_color(value: f64, mean: Option<f64>) -> Color {
    match mean {
        Some(mean) if value > mean => Color::Red,
        Some(_) => Color::Green,
        None => Color::Reset,
    }
}

fn change_color(change: f64) -> Color {
    if change > 0.0 { Color::Red } else { Color::Green }
}

pub fn build_electricity_estimate_table(
    record: &ElectricityRecord,
    elapsed: Days,
    horizon: Days,
) -> Table {
    let readings = &record.readings;
    let estimate = &record.estimate;
    let mut table = new_table();
    table.set_header(vec!["", "Value"]);
    table.add_row(vec![
        Cell::new("Period").add_attribute(Attribute::Dim),
        Cell::new(format!(
            "{} → {} ({elapsed})",
            readings.previous.date.format("%d/%m/%Y"),
            readings.current.date.format("%d/%m/%Y"),
        )),
    ]);
    table.add_row(vec![
        Cell::new("Readings").add_attribute(Attribute::Dim),
        Cell::new(format!("{} → {}", readings.previous.value, readings.current.value))
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Consumption").add_attribute(Attribute::Bold),
        Cell::new(estimate.consumption).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Daily average"),
        Cell::new(estimate.daily_rate).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Price").add_attribute(Attribute::Dim),
        Cell::new(record.tariff.unit_price).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new(format!("Flag: {}", record.tariff.flag)).add_attribute(Attribute::Dim),
        Cell::new(record.tariff.surcharge).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Public lighting").add_attribute(Attribute::Dim),
        Cell::new(record.tariff.fixed_fee).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new(format!("Projected cost ({horizon})")).add_attribute(Attribute::Bold),
        Cell::new(estimate.projected_cost)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_water_estimate_table(record: &WaterRecord, elapsed: Days, horizon: Days) -> Table {
    let readings = &record.readings;
    let estimate = &record.estimate;
    let mut table = new_table();
    table.set_header(vec!["", "Value"]);
    table.add_row(vec![
        Cell::new("Period").add_attribute(Attribute::Dim),
        Cell::new(format!(
            "{} → {} ({elapsed})",
            readings.previous.date.format("%d/%m/%Y"),
            readings.current.date.format("%d/%m/%Y"),
        )),
    ]);
    table.add_row(vec![
        Cell::new("Readings").add_attribute(Attribute::Dim),
        Cell::new(format!("{} → {}", readings.previous.value, readings.current.value))
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Consumption").add_attribute(Attribute::Bold),
        Cell::new(estimate.consumption).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Daily average"),
        Cell::new(estimate.daily_rate).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new(format!("Projected ({horizon})")).add_attribute(Attribute::Bold),
        Cell::new(estimate.projected_consumption)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_electricity_history_table(records: &[&ElectricityRecord]) -> Table {
    let mean_consumption =
        mean(records.iter().map(|record| record.estimate.consumption.into_inner()));

    let mut table = new_table();
    table.set_header(vec!["From", "To", "Previous", "Current", "Usage", "Daily", "Flag", "Cost"]);
    for record in records {
        let consumption = record.estimate.consumption;
        table.add_row(vec![
            Cell::new(record.readings.previous.date.format("%d/%m/%Y"))
                .add_attribute(Attribute::Dim),
            Cell::new(record.readings.current.date.format("%d/%m/%Y")),
            Cell::new(record.readings.previous.value)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(record.readings.current.value).set_alignment(CellAlignment::Right),
            Cell::new(consumption)
                .set_alignment(CellAlignment::Right)
                .fg(above_mean_color(consumption.into_inner(), mean_consumption)),
            Cell::new(record.estimate.daily_rate).set_alignment(CellAlignment::Right),
            Cell::new(record.tariff.flag),
            Cell::new(record.estimate.projected_cost).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_water_history_table(records: &[&WaterRecord]) -> Table {
    let mean_consumption =
        mean(records.iter().map(|record| record.estimate.consumption.into_inner()));

    let mut table = new_table();
    table.set_header(vec!["From", "To", "Previous", "Current", "Usage", "Daily", "Projected"]);
    for record in records {
        let consumption = record.estimate.consumption;
        table.add_row(vec![
            Cell::new(record.readings.previous.date.format("%d/%m/%Y"))
                .add_attribute(Attribute::Dim),
            Cell::new(record.readings.current.date.format("%d/%m/%Y")),
            Cell::new(record.readings.previous.value)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(record.readings.current.value).set_alignment(CellAlignment::Right),
            Cell::new(consumption)
                .set_alignment(CellAlignment::Right)
                .fg(above_mean_color(consumption.into_inner(), mean_consumption)),
            Cell::new(record.estimate.daily_rate).set_alignment(CellAlignment::Right),
            Cell::new(record.estimate.projected_consumption).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Month-by-month consumption with a bar chart, followed by the change and the forecast.
pub fn build_trend_table(trend: &Trend) -> Table {
    let unit = trend.kind.unit();
    let max_consumption =
        trend.points.iter().map(|point| point.consumption).fold(0.0_f64, f64::max);

    let mut table = new_table();
    table.set_header(vec![trend.kind.title(), "Date", "Usage", ""]);
    for point in &trend.points {
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bar_width = if max_consumption > 0.0 {
            (point.consumption / max_consumption * BAR_WIDTH).round() as usize
        } else {
            0
        };
        table.add_row(vec![
            Cell::new(point.label),
            Cell::new(point.date.map_or_else(String::new, |date| date.format("%d/%m").to_string()))
                .add_attribute(Attribute::Dim),
            Cell::new(format!("{} {unit}", format_number(point.consumption, 2)))
                .set_alignment(CellAlignment::Right),
            Cell::new("█".repeat(bar_width)).fg(Color::Cyan),
        ]);
    }
    table.add_row(vec![
        Cell::new("Change").add_attribute(Attribute::Dim),
        Cell::new(""),
        trend
            .change
            .map_or_else(
                || Cell::new("–").add_attribute(Attribute::Dim),
                |change| Cell::new(FormattedPercentage(change)).fg(change_color(change)),
            )
            .set_alignment(CellAlignment::Right),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Forecast").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(format!("{} {unit}", format_number(trend.forecast, 2)))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table
}

pub fn build_reports_table(reports: &[&StoredReport]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Kind", "Month", "Usage", "Daily", "Cost", "Created", "File"]);
    for report in reports {
        table.add_row(vec![
            Cell::new(&report.id).add_attribute(Attribute::Dim),
            Cell::new(report.kind.title()),
            Cell::new(format!("{}/{}", report.month, report.year)),
            Cell::new(format!("{} {}", format_number(report.consumption, 2), report.kind.unit()))
                .set_alignment(CellAlignment::Right),
            Cell::new(format_number(report.daily_average, 3)).set_alignment(CellAlignment::Right),
            Cell::new(report.cost.map_or_else(String::new, |cost| cost.to_string()))
                .set_alignment(CellAlignment::Right),
            Cell::new(report.created_at.format("%d/%m/%Y %H:%M")).add_attribute(Attribute::Dim),
            Cell::new(&report.file_name),
        ]);
    }
    table
}

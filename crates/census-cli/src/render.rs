//! Machine-readable report output.

use anyhow::{Context, Result};
use census_model::{EstimateYears, MetricKind, Report, ResultRow};
use serde::Serialize;

/// Leading columns before the metric columns.
pub const ROW_HEADERS: [&str; 3] = ["State", "Type", "Name"];

/// Header labels for a report, metric columns in report order.
pub fn report_headers(report: &Report, years: EstimateYears) -> Vec<String> {
    ROW_HEADERS
        .iter()
        .map(|header| (*header).to_string())
        .chain(report.columns.iter().map(|metric| metric.label(years)))
        .collect()
}

/// Cell text of one row, aligned with [`report_headers`].
pub fn row_cells(report: &Report, row: &ResultRow) -> Vec<String> {
    let mut cells = vec![
        row.state_name.clone(),
        row.kind.label().to_string(),
        row.jurisdiction_name.clone(),
    ];
    cells.extend(
        report
            .columns
            .iter()
            .map(|metric| row.cell(*metric).to_string()),
    );
    cells
}

/// Render a report as CSV with a header row.
pub fn report_to_csv(report: &Report, years: EstimateYears) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(report_headers(report, years))
        .context("write CSV header")?;
    for row in &report.rows {
        writer
            .write_record(row_cells(report, row))
            .context("write CSV row")?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| error.into_error())
        .context("flush CSV output")?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    years: EstimateYears,
    columns: Vec<ColumnDocument>,
    rows: &'a [ResultRow],
}

#[derive(Serialize)]
struct ColumnDocument {
    metric: MetricKind,
    token: String,
    label: String,
}

/// Render a report as pretty-printed JSON. Empty slots are `null`.
pub fn report_to_json(report: &Report, years: EstimateYears) -> Result<String> {
    let document = ReportDocument {
        years,
        columns: report
            .columns
            .iter()
            .map(|metric| ColumnDocument {
                metric: *metric,
                token: metric.token(years),
                label: metric.label(years),
            })
            .collect(),
        rows: &report.rows,
    };
    serde_json::to_string_pretty(&document).context("serialize report")
}

// Row analysis - Column selection and comparative series for one row
use crate::domain::table::{CellValue, Row, Table};

/// Rows from elsewhere in the table shown next to the current row.
pub const MAX_CONTEXT_ROWS: usize = 4;

const CONTEXT_LABEL: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    /// Column plotted as the value axis.
    pub primary: String,
    /// Column naming each data point.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComparativeSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ComparativeSeries {
    fn push(&mut self, label: String, value: f64) {
        self.labels.push(label);
        self.values.push(value);
    }
}

fn numeric_in(row: &Row, header: &str) -> Option<f64> {
    row.get(header).and_then(CellValue::parse_numeric)
}

pub fn classify_columns(row: &Row, headers: &[String]) -> ColumnSelection {
    let first = headers.first().cloned().unwrap_or_default();

    let primary = headers
        .iter()
        .find(|h| numeric_in(row, h).is_some())
        .or_else(|| headers.get(1))
        .cloned()
        .unwrap_or_else(|| first.clone());

    let label = headers
        .iter()
        .find(|h| **h != primary)
        .cloned()
        .unwrap_or(first);

    ColumnSelection { primary, label }
}

/// The row's own point first, then up to four other rows in table order.
/// `row_index` identifies the current row by position, so duplicate rows
/// elsewhere in the table still count as context.
pub fn build_comparative_series(
    row: &Row,
    row_index: usize,
    table: &Table,
    columns: &ColumnSelection,
) -> ComparativeSeries {
    let mut series = ComparativeSeries::default();

    let own_label = match row.get(&columns.label) {
        Some(value) if value.is_truthy() => value.to_string(),
        _ => {
            // 1-based position of the primary column among the row's keys, 0 if absent
            let position = row
                .get_index_of(&columns.primary)
                .map(|i| i + 1)
                .unwrap_or(0);
            format!("Item {}", position)
        }
    };
    series.push(own_label, numeric_in(row, &columns.primary).unwrap_or(0.0));

    let context_rows = table
        .rows
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != row_index)
        .take(MAX_CONTEXT_ROWS);

    for (_, other) in context_rows {
        let label = match other.get(&columns.label) {
            Some(value) if value.is_truthy() => value.to_string(),
            _ => CONTEXT_LABEL.to_string(),
        };
        series.push(label, numeric_in(other, &columns.primary).unwrap_or(0.0));
    }

    series
}

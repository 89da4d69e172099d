// Tabular input domain model
use indexmap::IndexMap;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// A single field of a parsed CSV row.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    /// Numeric view of the cell. The only coercion rule used anywhere in the crate.
    pub fn parse_numeric(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(*n),
            CellValue::Number(_) => None,
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() || !looks_decimal(trimmed) {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            CellValue::Empty => None,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Number(n) => *n != 0.0 && !n.is_nan(),
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Empty => false,
        }
    }

    pub fn is_present(&self) -> bool {
        match self {
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Number(_) => true,
            CellValue::Empty => false,
        }
    }
}

// Rejects spellings like "inf" or "NaN" that f64::from_str accepts.
fn looks_decimal(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Empty => Ok(()),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Number(n) => serializer.serialize_f64(*n),
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Empty => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CellVisitor;

        impl<'de> Visitor<'de> for CellVisitor {
            type Value = CellValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number, string, boolean or null")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<CellValue, E> {
                Ok(CellValue::Number(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<CellValue, E> {
                Ok(CellValue::Number(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<CellValue, E> {
                Ok(CellValue::Number(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<CellValue, E> {
                Ok(CellValue::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<CellValue, E> {
                Ok(CellValue::Text(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<CellValue, E> {
                Ok(CellValue::Text(v.to_string()))
            }

            fn visit_none<E: de::Error>(self) -> Result<CellValue, E> {
                Ok(CellValue::Empty)
            }

            fn visit_unit<E: de::Error>(self) -> Result<CellValue, E> {
                Ok(CellValue::Empty)
            }
        }

        deserializer.deserialize_any(CellVisitor)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

/// One CSV row, keyed by header in insertion order.
pub type Row = IndexMap<String, CellValue>;

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("table has no headers")]
    NoHeaders,

    #[error("duplicate header: {0}")]
    DuplicateHeader(String),

    #[error("row count {declared} does not match {actual} rows")]
    RowCountMismatch { declared: usize, actual: usize },

    #[error("row {row} has unknown column: {column}")]
    UnknownColumn { row: usize, column: String },
}

/// Parsed CSV content handed over by the upload collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    pub file_name: String,
    pub row_count: usize,
}

impl Table {
    pub fn validate(&self) -> Result<(), TableError> {
        if self.headers.is_empty() {
            return Err(TableError::NoHeaders);
        }

        let mut seen = HashSet::new();
        for header in &self.headers {
            if !seen.insert(header.as_str()) {
                return Err(TableError::DuplicateHeader(header.clone()));
            }
        }

        if self.row_count != self.rows.len() {
            return Err(TableError::RowCountMismatch {
                declared: self.row_count,
                actual: self.rows.len(),
            });
        }

        for (index, row) in self.rows.iter().enumerate() {
            if let Some(column) = row.keys().find(|k| !seen.contains(k.as_str())) {
                return Err(TableError::UnknownColumn {
                    row: index,
                    column: column.clone(),
                });
            }
        }

        Ok(())
    }
}

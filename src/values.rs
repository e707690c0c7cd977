use super::DT_FORMAT;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value as JsonValue;

/// Datetime layouts recognised when a column is not numeric.
pub const DT_INPUT_FORMATS: [&str; 3] = [DT_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// The kind of values found in one csv column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Numeric,
    DateTime,
    Text,
}

/// The cells of one csv column, typed after inference.
/// Missing numeric cells are kept as NAN.
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    Numeric(Vec<f64>),
    DateTime(Vec<NaiveDateTime>),
    Text(Vec<String>),
}

impl Values {
    /// Infers the column type from the raw cells:
    /// numeric if every non-empty cell is a float,
    /// datetime if every cell is a datetime,
    /// text otherwise (cells kept verbatim).
    pub fn infer(cells: &[String]) -> Values {
        if let Some(numbers) = parse_numeric(cells) {
            return Values::Numeric(numbers);
        }
        if let Some(datetimes) = parse_datetimes(cells) {
            return Values::DateTime(datetimes);
        }
        Values::Text(cells.to_vec())
    }

    pub fn len(&self) -> usize {
        match self {
            Values::Numeric(v) => v.len(),
            Values::DateTime(v) => v.len(),
            Values::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> Kind {
        match self {
            Values::Numeric(_) => Kind::Numeric,
            Values::DateTime(_) => Kind::DateTime,
            Values::Text(_) => Kind::Text,
        }
    }

    /// number of missing (NAN) values, only numeric columns can have them
    pub fn missing(&self) -> usize {
        match self {
            Values::Numeric(v) => v.iter().filter(|x| x.is_nan()).count(),
            _ => 0,
        }
    }

    /// cells as json values for the interactive charts, NAN becomes null
    pub fn to_json(&self) -> Vec<JsonValue> {
        match self {
            Values::Numeric(v) => v.iter().map(|&x| JsonValue::from(x)).collect(),
            Values::DateTime(v) => v
                .iter()
                .map(|t| JsonValue::from(t.format(DT_FORMAT).to_string()))
                .collect(),
            Values::Text(v) => v.iter().map(|s| JsonValue::from(s.as_str())).collect(),
        }
    }

    /// cells as labels, used when series with different kinds share a categorical axis
    pub fn to_text(&self) -> Vec<String> {
        match self {
            Values::Numeric(v) => v.iter().map(|x| x.to_string()).collect(),
            Values::DateTime(v) => v.iter().map(|t| t.format(DT_FORMAT).to_string()).collect(),
            Values::Text(v) => v.clone(),
        }
    }
}

fn parse_numeric(cells: &[String]) -> Option<Vec<f64>> {
    cells
        .iter()
        .map(|c| {
            let c = c.trim();
            if c.is_empty() {
                Some(f64::NAN)
            } else {
                c.parse::<f64>().ok()
            }
        })
        .collect()
}

fn parse_datetimes(cells: &[String]) -> Option<Vec<NaiveDateTime>> {
    cells.iter().map(|c| parse_datetime(c.trim())).collect()
}

/// Parses one datetime cell, a bare date is taken at midnight.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    DT_INPUT_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, DATE_INPUT_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

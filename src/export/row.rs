//! Export rows and cell values
//!
//! An [`ExportRow`] is the display-ready flattening of one record: an ordered
//! list of `(label, value)` pairs. Order is insertion order and drives both
//! the CSV header and JSON key order.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A primitive display value in an export row
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    /// Explicit null
    Null,
    /// The column exists but the record carried no value for it.
    ///
    /// Renders as an empty CSV field and is omitted from JSON objects.
    Undefined,
}

impl CellValue {
    /// Whether this cell is [`CellValue::Undefined`]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Text cell from an optional string, defaulting to `""`
    pub fn text_or_empty(value: Option<&str>) -> Self {
        Self::Text(value.unwrap_or_default().to_string())
    }

    /// Number cell, or `""` when absent
    pub fn number_or_empty(value: Option<f64>) -> Self {
        value.map_or_else(|| Self::Text(String::new()), Self::Number)
    }

    /// Number rendered with a `%` suffix, or `""` when absent
    pub fn percent_or_empty(value: Option<f64>) -> Self {
        Self::Text(value.map(|n| format!("{}%", format_number(n))).unwrap_or_default())
    }
}

/// Format a number the way the dashboard displays it: integral values
/// without a fractional part, everything else in shortest form.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Null | Self::Undefined => Ok(()),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Number(n) if !n.is_finite() => serializer.serialize_none(),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Null | Self::Undefined => serializer.serialize_none(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

/// One record flattened to labeled display values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportRow {
    cells: Vec<(String, CellValue)>,
}

impl ExportRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column, builder style
    pub fn with(mut self, label: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.push(label, value);
        self
    }

    /// Append a column, replacing the value if the label already exists
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<CellValue>) {
        let label = label.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => *existing = value,
            None => self.cells.push((label, value)),
        }
    }

    /// Look up a cell by label
    pub fn get(&self, label: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(l, _)| l == label).map(|(_, v)| v)
    }

    /// Column labels in order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(l, _)| l.as_str())
    }

    /// Cells in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(l, v)| (l.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Serialize for ExportRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let defined = self.cells.iter().filter(|(_, v)| !v.is_undefined());
        let mut map = serializer.serialize_map(Some(defined.clone().count()))?;
        for (label, value) in defined {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(94.2), "94.2");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_push_keeps_first_position() {
        let mut row = ExportRow::new().with("A", 1.0).with("B", "x");
        row.push("A", 2.0);

        assert_eq!(row.labels().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(row.get("A"), Some(&CellValue::Number(2.0)));
    }

    #[test]
    fn test_undefined_is_omitted_from_json() {
        let row = ExportRow::new()
            .with("Asset", "a.jpg")
            .with("Status", None::<String>)
            .with("Open", true);

        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"Asset":"a.jpg","Open":true}"#);
    }

    #[test]
    fn test_numbers_serialize_like_dashboard() {
        let row = ExportRow::new()
            .with("Assets", 5u32)
            .with("Score", 94.2)
            .with("Bad", f64::NAN);

        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"Assets":5,"Score":94.2,"Bad":null}"#);
    }

    #[test]
    fn test_percent_and_empty_helpers() {
        assert_eq!(CellValue::percent_or_empty(Some(92.0)).to_string(), "92%");
        assert_eq!(CellValue::percent_or_empty(None).to_string(), "");
        assert_eq!(CellValue::text_or_empty(None), CellValue::Text(String::new()));
        assert_eq!(CellValue::number_or_empty(Some(3.5)), CellValue::Number(3.5));
    }
}

//! A flat, spreadsheet-shaped dataset.
//!
//! A [`Sheet`] is an ordered list of rows of [`Cell`]s. Rows may have
//! different lengths. Numeric cells stay numeric so a spreadsheet writer can
//! keep them as numbers; missing values use the [`PLACEHOLDER`] text.

use std::{fmt, io};

use crate::support::format::PLACEHOLDER;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// An empty cell.
    Empty,
    /// A numeric value.
    Number(f64),
    /// A text value.
    Text(String),
}

impl Cell {
    /// Returns the placeholder cell used for missing or invalid values.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::Text(PLACEHOLDER.to_owned())
    }

    /// Returns a numeric cell, or the placeholder when `value` is absent or not finite.
    #[must_use]
    pub fn number_or_placeholder(value: Option<f64>) -> Self {
        match value {
            Some(value) if value.is_finite() => Self::Number(value),
            _ => Self::placeholder(),
        }
    }

    /// Returns a text cell.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns the numeric value, if this is a numeric cell.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Self::Number(value) => Some(value),
            _ => None,
        }
    }

    /// Returns `true` if this cell holds the placeholder text.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Text(text) if text == PLACEHOLDER)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A named sheet of rows with optional column width hints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<Cell>>,
    column_widths: Vec<u16>,
}

impl Sheet {
    /// Creates an empty sheet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Appends a row.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Appends a row containing a single empty cell.
    pub fn push_blank(&mut self) {
        self.rows.push(vec![Cell::Empty]);
    }

    /// Sets the column width hints, in characters.
    pub fn set_column_widths(&mut self, widths: Vec<u16>) {
        self.column_widths = widths;
    }

    /// Returns the sheet name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rows in order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Returns the column width hints, in characters.
    #[must_use]
    pub fn column_widths(&self) -> &[u16] {
        &self.column_widths
    }

    /// Writes the sheet as CSV.
    ///
    /// # Errors
    ///
    /// Returns an error if a record cannot be written or the writer fails to flush.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(writer);

        for row in &self.rows {
            writer.write_record(row.iter().map(ToString::to_string))?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_replaces_missing_numbers() {
        assert_eq!(Cell::number_or_placeholder(Some(1.5)), Cell::Number(1.5));
        assert!(Cell::number_or_placeholder(None).is_placeholder());
        assert!(Cell::number_or_placeholder(Some(f64::NAN)).is_placeholder());
        assert!(!Cell::text("value").is_placeholder());
    }

    #[test]
    fn csv_keeps_ragged_rows() {
        let mut sheet = Sheet::new("Results");
        sheet.push_row(vec!["Title".into()]);
        sheet.push_blank();
        sheet.push_row(vec!["Voc (V)".into(), 48.65.into(), Cell::placeholder()]);

        let mut out = Vec::new();
        sheet.write_csv(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Title");
        assert_eq!(lines[2], "Voc (V),48.65,-");
    }
}

use std::slice;

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

use crate::support::parse::parse_number;

/// Cell temperatures the calculator starts with, in degrees Celsius.
pub const DEFAULT_TEMPERATURES_CELSIUS: [f64; 14] = [
    -20.0, -15.0, -10.0, -5.0, 0.0, 10.0, 20.0, 25.0, 48.9, 49.5, 60.9, 60.0, 70.0, 80.0,
];

/// Temperature given to a newly added row, in degrees Celsius.
pub const NEW_ROW_CELSIUS: f64 = 25.0;

/// One operating temperature to evaluate.
///
/// A row without a value (blank or unparseable input) is kept in place but
/// skipped by the calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRow {
    celsius: Option<f64>,
}

impl TemperatureRow {
    /// Creates a row at the given temperature in °C.
    ///
    /// Non-finite temperatures produce an empty row.
    #[must_use]
    pub fn new(celsius: f64) -> Self {
        Self {
            celsius: Some(celsius).filter(|c| c.is_finite()),
        }
    }

    /// Creates a row without a temperature.
    #[must_use]
    pub fn empty() -> Self {
        Self { celsius: None }
    }

    /// Creates a row from the text of a temperature input.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            celsius: parse_number(text),
        }
    }

    /// Returns the temperature in °C, if the row has one.
    #[must_use]
    pub fn celsius(&self) -> Option<f64> {
        self.celsius
    }

    /// Returns the cell temperature, if the row has one.
    #[must_use]
    pub fn temperature(&self) -> Option<ThermodynamicTemperature> {
        self.celsius
            .map(ThermodynamicTemperature::new::<degree_celsius>)
    }
}

/// The ordered list of temperature rows.
///
/// Duplicates are allowed and order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureRows(Vec<TemperatureRow>);

impl Default for TemperatureRows {
    fn default() -> Self {
        Self::from_celsius(DEFAULT_TEMPERATURES_CELSIUS)
    }
}

impl TemperatureRows {
    /// Creates a list with no rows.
    ///
    /// [`TemperatureRows::default`] is the seeded list instead.
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Creates rows from temperatures in °C.
    pub fn from_celsius(temperatures: impl IntoIterator<Item = f64>) -> Self {
        temperatures.into_iter().map(TemperatureRow::new).collect()
    }

    /// Creates rows from the text of temperature inputs.
    pub fn from_texts<S: AsRef<str>>(texts: impl IntoIterator<Item = S>) -> Self {
        texts
            .into_iter()
            .map(|text| TemperatureRow::from_text(text.as_ref()))
            .collect()
    }

    /// Appends a row.
    pub fn push(&mut self, row: TemperatureRow) {
        self.0.push(row);
    }

    /// Appends a row at [`NEW_ROW_CELSIUS`].
    pub fn add_row(&mut self) {
        self.push(TemperatureRow::new(NEW_ROW_CELSIUS));
    }

    /// Removes and returns the row at `index`, if it exists.
    pub fn remove(&mut self, index: usize) -> Option<TemperatureRow> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the rows in order.
    pub fn iter(&self) -> slice::Iter<'_, TemperatureRow> {
        self.0.iter()
    }
}

impl FromIterator<TemperatureRow> for TemperatureRows {
    fn from_iter<I: IntoIterator<Item = TemperatureRow>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TemperatureRows {
    type Item = &'a TemperatureRow;
    type IntoIter = slice::Iter<'a, TemperatureRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rows_follow_seed_order() {
        let rows = TemperatureRows::default();
        let temps: Vec<f64> = rows.iter().filter_map(TemperatureRow::celsius).collect();

        assert_eq!(temps, DEFAULT_TEMPERATURES_CELSIUS);
    }

    #[test]
    fn empty_list_starts_without_rows() {
        let mut rows = TemperatureRows::empty();
        assert!(rows.is_empty());
        assert!(!TemperatureRows::default().is_empty());

        rows.add_row();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn rows_can_be_added_and_removed() {
        let mut rows = TemperatureRows::from_celsius([10.0, 10.0]);
        rows.add_row();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows.iter().last().and_then(TemperatureRow::celsius), Some(25.0));

        assert_eq!(rows.remove(0), Some(TemperatureRow::new(10.0)));
        assert_eq!(rows.remove(5), None);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn unparseable_text_gives_empty_row() {
        let rows = TemperatureRows::from_texts(["-5", "", "hot", "48.9"]);
        let temps: Vec<Option<f64>> = rows.iter().map(TemperatureRow::celsius).collect();

        assert_eq!(temps, vec![Some(-5.0), None, None, Some(48.9)]);
        assert_eq!(TemperatureRow::new(f64::NAN), TemperatureRow::empty());
    }
}

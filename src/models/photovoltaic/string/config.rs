use serde::{Deserialize, Serialize};
use uom::si::{electric_potential::volt, f64::ElectricPotential};

use crate::support::parse::{integer_or, number_or};

use super::{SeriesRange, SeriesRangeError};

/// Series count at the start of the default range.
pub const DEFAULT_SERIES_START: i32 = 14;

/// Series count at the end of the default range.
pub const DEFAULT_SERIES_END: i32 = 19;

/// Default maximum system voltage, in volts.
pub const DEFAULT_MAX_SYSTEM_VOLTAGE: f64 = 1500.0;

/// Series-count range and voltage ceiling for string aggregation.
///
/// The range bounds are inclusive. They are not checked on construction;
/// call [`SeriesConfig::range`] to validate them before a calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesConfig {
    /// First series count to evaluate.
    pub start: i32,

    /// Last series count to evaluate.
    pub end: i32,

    /// Maximum allowed open-circuit string voltage.
    pub max_system_voltage: ElectricPotential,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_SERIES_START,
            end: DEFAULT_SERIES_END,
            max_system_voltage: ElectricPotential::new::<volt>(DEFAULT_MAX_SYSTEM_VOLTAGE),
        }
    }
}

impl SeriesConfig {
    /// Builds a config from free-text fields.
    ///
    /// Blank, unparseable or zero fields fall back to the defaults.
    #[must_use]
    pub fn from_fields(fields: &SeriesFields) -> Self {
        Self {
            start: integer_or(&fields.start, DEFAULT_SERIES_START),
            end: integer_or(&fields.end, DEFAULT_SERIES_END),
            max_system_voltage: ElectricPotential::new::<volt>(number_or(
                &fields.max_system_voltage,
                DEFAULT_MAX_SYSTEM_VOLTAGE,
            )),
        }
    }

    /// Returns the validated series range.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesRangeError::StartAfterEnd`] if `start > end`.
    pub fn range(&self) -> Result<SeriesRange, SeriesRangeError> {
        SeriesRange::new(self.start, self.end)
    }
}

/// Free-text series fields as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesFields {
    pub start: String,
    pub end: String,
    pub max_system_voltage: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_use_defaults() {
        assert_eq!(
            SeriesConfig::from_fields(&SeriesFields::default()),
            SeriesConfig::default()
        );
    }

    #[test]
    fn entered_fields_override_defaults() {
        let config = SeriesConfig::from_fields(&SeriesFields {
            start: "10".into(),
            end: "22".into(),
            max_system_voltage: "1000".into(),
        });

        assert_eq!(config.start, 10);
        assert_eq!(config.end, 22);
        assert_eq!(config.max_system_voltage, ElectricPotential::new::<volt>(1000.0));
    }

    #[test]
    fn reversed_bounds_are_rejected() {
        let config = SeriesConfig {
            start: 20,
            end: 19,
            ..SeriesConfig::default()
        };

        assert_eq!(
            config.range(),
            Err(SeriesRangeError::StartAfterEnd { start: 20, end: 19 })
        );
    }
}

//! Voltage tolerance band check.
//!
//! Given a nominal voltage and asymmetric percentage tolerances, computes the
//! lowest and highest voltages the tolerance allows:
//!
//! - `min = V · (100 − minus) / 100`
//! - `max = V · (100 + plus) / 100`
//!
//! ```
//! use twine_pv::models::photovoltaic::tolerance::{ToleranceFields, ToleranceInput};
//!
//! let input = ToleranceInput::from_fields(&ToleranceFields {
//!     nominal: "1000".into(),
//!     plus: "10".into(),
//!     minus: "5".into(),
//! });
//! let band = input.band().unwrap().display();
//!
//! assert_eq!(band.min, "950");
//! assert_eq!(band.max, "1,100");
//! ```

use std::convert::Infallible;

use serde::{Deserialize, Serialize};
use twine_core::Model;
use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Ratio},
    ratio::percent,
};

use crate::support::{
    format::{PLACEHOLDER, format_grouped},
    parse::parse_number,
};

/// Lowest and highest voltages allowed by a tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceBand {
    pub min: ElectricPotential,
    pub max: ElectricPotential,
}

impl ToleranceBand {
    /// Returns the band formatted with at most two fraction digits.
    #[must_use]
    pub fn display(&self) -> ToleranceDisplay {
        ToleranceDisplay {
            min: format_grouped(self.min.get::<volt>(), 2),
            max: format_grouped(self.max.get::<volt>(), 2),
        }
    }
}

/// Display text for a [`ToleranceBand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToleranceDisplay {
    pub min: String,
    pub max: String,
}

impl ToleranceDisplay {
    /// Returns display text for an incomplete input.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            min: PLACEHOLDER.to_owned(),
            max: PLACEHOLDER.to_owned(),
        }
    }
}

/// Computes the tolerance band around `nominal`.
#[must_use]
pub fn tolerance_band(nominal: ElectricPotential, plus: Ratio, minus: Ratio) -> ToleranceBand {
    ToleranceBand {
        min: nominal * ((100.0 - minus.get::<percent>()) / 100.0),
        max: nominal * ((100.0 + plus.get::<percent>()) / 100.0),
    }
}

/// Inputs to the tolerance check; any missing value means no band.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ToleranceInput {
    pub nominal: Option<ElectricPotential>,
    pub plus: Option<Ratio>,
    pub minus: Option<Ratio>,
}

impl ToleranceInput {
    /// Builds an input from free-text fields.
    ///
    /// Unlike the calculation inputs, zero is a valid tolerance here and blank
    /// fields are left missing rather than defaulted.
    #[must_use]
    pub fn from_fields(fields: &ToleranceFields) -> Self {
        Self {
            nominal: parse_number(&fields.nominal).map(ElectricPotential::new::<volt>),
            plus: parse_number(&fields.plus).map(Ratio::new::<percent>),
            minus: parse_number(&fields.minus).map(Ratio::new::<percent>),
        }
    }

    /// Returns the band, or `None` if any input is missing.
    #[must_use]
    pub fn band(&self) -> Option<ToleranceBand> {
        Some(tolerance_band(self.nominal?, self.plus?, self.minus?))
    }
}

/// Free-text tolerance fields as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToleranceFields {
    /// Nominal voltage in volts.
    pub nominal: String,

    /// Upper tolerance in percent.
    pub plus: String,

    /// Lower tolerance in percent.
    pub minus: String,
}

/// Model adapter for the tolerance check.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToleranceModel;

impl Model for ToleranceModel {
    type Input = ToleranceInput;
    type Output = Option<ToleranceBand>;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input.band())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn band_is_asymmetric() {
        let band = tolerance_band(
            ElectricPotential::new::<volt>(600.0),
            Ratio::new::<percent>(3.0),
            Ratio::new::<percent>(10.0),
        );

        assert_relative_eq!(band.min.get::<volt>(), 540.0, epsilon = 1e-9);
        assert_relative_eq!(band.max.get::<volt>(), 618.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_tolerance_is_valid() {
        let input = ToleranceInput::from_fields(&ToleranceFields {
            nominal: "925.5".into(),
            plus: "0".into(),
            minus: "0".into(),
        });

        let band = ToleranceModel.call(&input).unwrap().unwrap();
        assert_relative_eq!(band.min.get::<volt>(), 925.5, epsilon = 1e-9);
        assert_relative_eq!(band.max.get::<volt>(), 925.5, epsilon = 1e-9);
    }

    #[test]
    fn missing_input_gives_no_band() {
        let input = ToleranceInput::from_fields(&ToleranceFields {
            nominal: "1000".into(),
            plus: "5".into(),
            minus: String::new(),
        });

        assert_eq!(input.band(), None);
        assert_eq!(ToleranceInput::default().band(), None);
        assert_eq!(ToleranceDisplay::placeholder().min, "-");
    }
}

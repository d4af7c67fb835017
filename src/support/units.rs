//! Extensions to [`uom`] for temperature-corrected module ratings.
//!
//! Module datasheets quote ratings at Standard Test Conditions (STC) and
//! publish linear temperature coefficients in percent per degree Celsius.
//! This module provides the STC reference temperature and a
//! [`TemperatureCoefficient`] type for applying those coefficients to a
//! [`TemperatureInterval`].
//!
//! ```
//! use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};
//! use twine_pv::support::units::{StcDeviation, TemperatureCoefficient};
//!
//! let beta = TemperatureCoefficient::from_percent_per_celsius(-0.25);
//! let cell = ThermodynamicTemperature::new::<degree_celsius>(25.0);
//!
//! // No correction at the reference temperature.
//! assert_eq!(beta.factor(cell.deviation_from_stc()), 1.0);
//! ```

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin as abs_kelvin},
};

/// Cell temperature at Standard Test Conditions, in degrees Celsius.
pub const STC_CELSIUS: f64 = 25.0;

/// Returns the cell temperature at Standard Test Conditions.
#[must_use]
pub fn stc_temperature() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(STC_CELSIUS)
}

/// Extension trait for measuring a cell temperature against STC.
///
/// [`uom`] does not allow subtracting two [`ThermodynamicTemperature`] values
/// directly, so the difference is built from the kelvin magnitudes.
pub trait StcDeviation {
    /// Returns `self - 25 °C` as a temperature interval.
    fn deviation_from_stc(self) -> TemperatureInterval;
}

impl StcDeviation for ThermodynamicTemperature {
    fn deviation_from_stc(self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - stc_temperature().get::<abs_kelvin>(),
        )
    }
}

/// A linear temperature coefficient, as published on module datasheets.
///
/// Stored in percent per kelvin, which is numerically identical to percent
/// per degree Celsius.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct TemperatureCoefficient {
    percent_per_kelvin: f64,
}

impl TemperatureCoefficient {
    /// A coefficient of zero; the rating does not vary with temperature.
    pub const ZERO: Self = Self {
        percent_per_kelvin: 0.0,
    };

    /// Creates a coefficient from a datasheet value in %/°C.
    #[must_use]
    pub const fn from_percent_per_celsius(value: f64) -> Self {
        Self {
            percent_per_kelvin: value,
        }
    }

    /// Returns the coefficient in %/°C.
    #[must_use]
    pub const fn percent_per_celsius(self) -> f64 {
        self.percent_per_kelvin
    }

    /// Returns the coefficient as a fraction per kelvin.
    #[must_use]
    pub fn fraction_per_kelvin(self) -> f64 {
        self.percent_per_kelvin / 100.0
    }

    /// Returns the first-order correction factor `1 + c·ΔT`.
    #[must_use]
    pub fn factor(self, delta_t: TemperatureInterval) -> f64 {
        1.0 + self.fraction_per_kelvin() * delta_t.get::<delta_kelvin>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::temperature_interval::degree_celsius as delta_celsius;

    #[test]
    fn deviation_sign_follows_temperature() {
        let hot = ThermodynamicTemperature::new::<degree_celsius>(80.0);
        let cold = ThermodynamicTemperature::new::<degree_celsius>(-20.0);

        assert_relative_eq!(
            hot.deviation_from_stc().get::<delta_celsius>(),
            55.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            cold.deviation_from_stc().get::<delta_celsius>(),
            -45.0,
            epsilon = 1e-9
        );
        assert_eq!(
            stc_temperature().deviation_from_stc().get::<delta_kelvin>(),
            0.0
        );
    }

    #[test]
    fn factor_is_linear_in_delta_t() {
        let beta = TemperatureCoefficient::from_percent_per_celsius(-0.25);

        assert_relative_eq!(beta.fraction_per_kelvin(), -0.0025, epsilon = 1e-12);
        assert_relative_eq!(
            beta.factor(TemperatureInterval::new::<delta_kelvin>(55.0)),
            0.8625,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            beta.factor(TemperatureInterval::new::<delta_kelvin>(-45.0)),
            1.1125,
            epsilon = 1e-12
        );
        assert_eq!(
            TemperatureCoefficient::ZERO.factor(TemperatureInterval::new::<delta_kelvin>(30.0)),
            1.0
        );
    }
}

//! Series aggregation and over-voltage evaluation.
//!
//! A string of `n` modules in series has `n` times the voltage of one module.
//! [`aggregate`] sweeps the configured series counts for one set of corrected
//! module values and flags every string whose open-circuit voltage exceeds
//! the maximum system voltage.
//!
//! ```
//! use twine_pv::models::photovoltaic::{
//!     module::{CorrectionMode, ModuleSpec, correct},
//!     string::{SeriesConfig, aggregate},
//! };
//! use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};
//!
//! let cold = ThermodynamicTemperature::new::<degree_celsius>(-20.0);
//! let module = correct(&ModuleSpec::reference(), CorrectionMode::Standard, cold);
//!
//! let config = SeriesConfig { start: 24, end: 28, ..SeriesConfig::default() };
//! let flagged: Vec<i32> = aggregate(&module, &config)
//!     .filter(|(_, string)| string.over_voltage)
//!     .map(|(n, _)| n)
//!     .collect();
//!
//! assert_eq!(flagged, vec![24, 25, 26, 27, 28]);
//! ```

mod config;
mod range;
mod sweep;

pub use config::{
    DEFAULT_MAX_SYSTEM_VOLTAGE, DEFAULT_SERIES_END, DEFAULT_SERIES_START, SeriesConfig,
    SeriesFields,
};
pub use range::{LARGE_RANGE_SPAN, SeriesRange, SeriesRangeError};
pub use sweep::{STRING_DISPLAY_DIGITS, SeriesSweep, StringDisplay, StringValues, aggregate};

use std::convert::Infallible;

use twine_core::Model;

use crate::models::photovoltaic::module::ComputedModuleValues;

/// Model adapter for [`aggregate`].
///
/// Takes corrected module values as input and returns a [`SeriesSweep`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StringModel {
    config: SeriesConfig,
}

impl StringModel {
    /// Creates a model for a series config.
    #[must_use]
    pub fn new(config: SeriesConfig) -> Self {
        Self { config }
    }

    /// Returns the series config.
    #[must_use]
    pub fn config(&self) -> &SeriesConfig {
        &self.config
    }
}

impl Model for StringModel {
    type Input = ComputedModuleValues;
    type Output = SeriesSweep;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(aggregate(input, &self.config))
    }
}

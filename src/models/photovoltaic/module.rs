//! Module temperature correction.
//!
//! [`correct`] derives the open-circuit voltage, maximum-power-point voltage,
//! maximum power and retained power ratio of a module at any cell
//! temperature from its STC ratings. [`ModuleTemperatureModel`] exposes the
//! same computation as a [`twine_core::Model`].
//!
//! ```
//! use twine_core::Model;
//! use twine_pv::models::photovoltaic::module::{CorrectionMode, ModuleSpec, ModuleTemperatureModel};
//! use uom::si::{
//!     electric_potential::volt, f64::ThermodynamicTemperature,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let model = ModuleTemperatureModel::new(ModuleSpec::reference(), CorrectionMode::Standard);
//! let values = model
//!     .call(&ThermodynamicTemperature::new::<degree_celsius>(-20.0))
//!     .unwrap();
//!
//! // A cold module produces more voltage than its nameplate rating.
//! assert!(values.voc.get::<volt>() > 56.41);
//! ```

mod core;

pub use self::core::{
    ComputedModuleValues, CorrectionMode, MODULE_DISPLAY_DIGITS, ModuleDisplay, ModuleFields,
    ModuleSpec, correct,
};

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::ThermodynamicTemperature;

/// Model adapter for [`correct`].
///
/// Takes a cell temperature as input and returns the corrected module values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleTemperatureModel {
    spec: ModuleSpec,
    mode: CorrectionMode,
}

impl ModuleTemperatureModel {
    /// Creates a model for a module spec and correction mode.
    #[must_use]
    pub fn new(spec: ModuleSpec, mode: CorrectionMode) -> Self {
        Self { spec, mode }
    }

    /// Returns the module spec.
    #[must_use]
    pub fn spec(&self) -> &ModuleSpec {
        &self.spec
    }

    /// Returns the correction mode.
    #[must_use]
    pub fn mode(&self) -> CorrectionMode {
        self.mode
    }
}

impl Model for ModuleTemperatureModel {
    type Input = ThermodynamicTemperature;
    type Output = ComputedModuleValues;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(correct(&self.spec, self.mode, *input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::photovoltaic::test_support::celsius;

    #[test]
    fn model_matches_function() {
        let spec = ModuleSpec::reference();
        let model = ModuleTemperatureModel::new(spec, CorrectionMode::Compatibility);

        for temp in [-20.0, 25.0, 60.9] {
            let t = celsius(temp);
            assert_eq!(
                model.call(&t).unwrap(),
                correct(&spec, CorrectionMode::Compatibility, t)
            );
        }
    }
}

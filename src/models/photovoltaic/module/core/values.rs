use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Power, Ratio},
    power::watt,
    ratio::percent,
};

use crate::support::format::{PLACEHOLDER, format_grouped};

/// Fraction digits shown for corrected module values.
pub const MODULE_DISPLAY_DIGITS: usize = 2;

/// Temperature-corrected values for a single module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedModuleValues {
    /// Open-circuit voltage at the cell temperature.
    pub voc: ElectricPotential,

    /// Maximum-power-point voltage at the cell temperature.
    pub vmp: ElectricPotential,

    /// Maximum power at the cell temperature.
    pub pmax: Power,

    /// Power retained relative to STC.
    ///
    /// Zero when the STC power rating is zero.
    pub ratio: Ratio,
}

impl ComputedModuleValues {
    /// Returns the values formatted for display.
    #[must_use]
    pub fn display(&self) -> ModuleDisplay {
        let fmt = |value: f64| format_grouped(value, MODULE_DISPLAY_DIGITS);
        ModuleDisplay {
            voc: fmt(self.voc.get::<volt>()),
            vmp: fmt(self.vmp.get::<volt>()),
            pmax: fmt(self.pmax.get::<watt>()),
            ratio: fmt(self.ratio.get::<percent>()),
        }
    }
}

/// Display text for [`ComputedModuleValues`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDisplay {
    pub voc: String,
    pub vmp: String,
    pub pmax: String,
    pub ratio: String,
}

impl ModuleDisplay {
    /// Returns display text for a row without values.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            voc: PLACEHOLDER.to_owned(),
            vmp: PLACEHOLDER.to_owned(),
            pmax: PLACEHOLDER.to_owned(),
            ratio: PLACEHOLDER.to_owned(),
        }
    }
}

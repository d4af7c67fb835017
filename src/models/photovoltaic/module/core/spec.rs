use serde::{Deserialize, Serialize};
use uom::{
    ConstZero,
    si::{
        electric_current::ampere,
        electric_potential::volt,
        f64::{ElectricCurrent, ElectricPotential, Power},
        power::watt,
    },
};

use crate::support::{parse::parse_number, units::TemperatureCoefficient};

use super::CorrectionMode;

/// Nameplate ratings and temperature coefficients of a PV module.
///
/// Electrical ratings are at Standard Test Conditions (STC).
/// The current coefficient `alpha` is carried for reporting only; it does not
/// enter the voltage or power corrections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleSpec {
    /// Maximum power at STC.
    pub pmax: Power,

    /// Open-circuit voltage at STC.
    pub voc: ElectricPotential,

    /// Maximum-power-point voltage at STC.
    pub vmp: ElectricPotential,

    /// Short-circuit current at STC.
    pub isc: ElectricCurrent,

    /// Maximum-power-point current at STC.
    pub imp: ElectricCurrent,

    /// Current temperature coefficient (α).
    pub alpha: TemperatureCoefficient,

    /// Voltage temperature coefficient (β).
    pub beta: TemperatureCoefficient,

    /// Power temperature coefficient (γ).
    pub gamma: TemperatureCoefficient,
}

impl Default for ModuleSpec {
    fn default() -> Self {
        Self {
            pmax: Power::ZERO,
            voc: ElectricPotential::ZERO,
            vmp: ElectricPotential::ZERO,
            isc: ElectricCurrent::ZERO,
            imp: ElectricCurrent::ZERO,
            alpha: TemperatureCoefficient::ZERO,
            beta: TemperatureCoefficient::ZERO,
            gamma: TemperatureCoefficient::ZERO,
        }
    }
}

impl ModuleSpec {
    /// Returns the ratings of the module the calculator starts with
    /// (CHSM78N(DG)/F-BH-635).
    #[must_use]
    pub fn reference() -> Self {
        Self {
            pmax: Power::new::<watt>(635.0),
            voc: ElectricPotential::new::<volt>(56.41),
            vmp: ElectricPotential::new::<volt>(46.79),
            isc: ElectricCurrent::new::<ampere>(14.35),
            imp: ElectricCurrent::new::<ampere>(13.68),
            alpha: TemperatureCoefficient::from_percent_per_celsius(0.043),
            beta: TemperatureCoefficient::from_percent_per_celsius(-0.25),
            gamma: TemperatureCoefficient::from_percent_per_celsius(-0.29),
        }
    }

    /// Builds a spec from free-text fields.
    ///
    /// Blank or unparseable fields become zero.
    #[must_use]
    pub fn from_fields(fields: &ModuleFields) -> Self {
        let value = |text: &str| parse_number(text).unwrap_or(0.0);
        let coefficient =
            |text: &str| TemperatureCoefficient::from_percent_per_celsius(value(text));

        Self {
            pmax: Power::new::<watt>(value(&fields.pmax)),
            voc: ElectricPotential::new::<volt>(value(&fields.voc)),
            vmp: ElectricPotential::new::<volt>(value(&fields.vmp)),
            isc: ElectricCurrent::new::<ampere>(value(&fields.isc)),
            imp: ElectricCurrent::new::<ampere>(value(&fields.imp)),
            alpha: coefficient(&fields.alpha),
            beta: coefficient(&fields.beta),
            gamma: coefficient(&fields.gamma),
        }
    }

    /// Returns the coefficient that governs voltage in the given mode.
    #[must_use]
    pub fn voltage_coefficient(&self, mode: CorrectionMode) -> TemperatureCoefficient {
        match mode {
            CorrectionMode::Standard => self.beta,
            CorrectionMode::Compatibility => self.gamma,
        }
    }

    /// Returns the coefficient that governs power, which is always γ.
    #[must_use]
    pub fn power_coefficient(&self) -> TemperatureCoefficient {
        self.gamma
    }
}

/// Free-text module fields as entered by the user.
///
/// Each field holds the raw text of its input; see [`ModuleSpec::from_fields`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleFields {
    pub pmax: String,
    pub voc: String,
    pub vmp: String,
    pub isc: String,
    pub imp: String,
    pub alpha: String,
    pub beta: String,
    pub gamma: String,
}

impl ModuleFields {
    /// Returns the fields of the reference module.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            pmax: "635".into(),
            voc: "56.41".into(),
            vmp: "46.79".into(),
            isc: "14.35".into(),
            imp: "13.68".into(),
            alpha: "0.043".into(),
            beta: "-0.25".into(),
            gamma: "-0.29".into(),
        }
    }
}

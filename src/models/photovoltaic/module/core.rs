//! Linear temperature correction of module ratings.
//!
//! Each rating is scaled by `1 + c·ΔT`, where `ΔT` is the deviation of the
//! cell temperature from STC and `c` is the matching datasheet coefficient
//! expressed as a fraction per kelvin.

mod mode;
mod spec;
mod values;

pub use mode::CorrectionMode;
pub use spec::{ModuleFields, ModuleSpec};
pub use values::{ComputedModuleValues, MODULE_DISPLAY_DIGITS, ModuleDisplay};

use uom::{
    ConstZero,
    si::{
        f64::{Power, Ratio, ThermodynamicTemperature},
        power::watt,
        ratio::ratio,
    },
};

use crate::support::units::StcDeviation;

/// Corrects module ratings to the given cell temperature.
///
/// Voltage uses the coefficient selected by `mode`; power always uses γ.
#[must_use]
pub fn correct(
    spec: &ModuleSpec,
    mode: CorrectionMode,
    temperature: ThermodynamicTemperature,
) -> ComputedModuleValues {
    let delta_t = temperature.deviation_from_stc();

    let voltage_factor = spec.voltage_coefficient(mode).factor(delta_t);
    let power_factor = spec.power_coefficient().factor(delta_t);

    let pmax = spec.pmax * power_factor;
    let retained = if spec.pmax == Power::ZERO {
        Ratio::ZERO
    } else {
        Ratio::new::<ratio>(pmax.get::<watt>() / spec.pmax.get::<watt>())
    };

    ComputedModuleValues {
        voc: spec.voc * voltage_factor,
        vmp: spec.vmp * voltage_factor,
        pmax,
        ratio: retained,
    }
}

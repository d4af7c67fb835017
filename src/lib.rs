//! # Twine PV
//!
//! Temperature-corrected photovoltaic module ratings and string voltage
//! checks, built as [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! Given a module's STC ratings and temperature coefficients, the crate
//! computes its voltage, power and retained power ratio at any cell
//! temperature, multiplies the voltages across a range of series counts, and
//! flags every string whose open-circuit voltage exceeds the maximum system
//! voltage.
//!
//! ```
//! use twine_pv::models::photovoltaic::calculation::{Calculation, TemperatureRows};
//!
//! let calculation = Calculation {
//!     rows: TemperatureRows::from_celsius([-20.0, 25.0, 80.0]),
//!     ..Calculation::default()
//! };
//! let report = calculation.run()?;
//!
//! // Nineteen reference modules stay under 1500 V even at -20 °C.
//! assert!(report.over_voltages().is_empty());
//! # Ok::<(), twine_pv::models::photovoltaic::calculation::CalculationError>(())
//! ```
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Parsing, formatting, units and tabular output used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;

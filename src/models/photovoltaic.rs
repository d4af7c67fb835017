//! Photovoltaic module and string models.
//!
//! Module datasheets rate a module at Standard Test Conditions (25 °C cell
//! temperature). In the field a module runs hotter or colder, and its
//! voltage and power shift linearly with the deviation from STC. Strings of
//! modules in series add their voltages, so the coldest expected temperature
//! decides how many modules a string can hold before its open-circuit voltage
//! exceeds the maximum system voltage of the inverter or combiner.
//!
//! - [`module`]: temperature correction of a single module.
//! - [`string`]: series aggregation and over-voltage evaluation.
//! - [`calculation`]: a full pass over every temperature row and series count.
//! - [`tolerance`]: voltage tolerance band check.
//! - [`catalog`]: datasheet values for known module models.
//! - [`export`]: spreadsheet export of a calculation.

pub mod calculation;
pub mod catalog;
pub mod export;
pub mod module;
pub mod string;
pub mod tolerance;

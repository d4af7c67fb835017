use std::{iter::FusedIterator, ops::RangeInclusive};

use uom::si::{electric_potential::volt, f64::ElectricPotential};

use crate::models::photovoltaic::module::ComputedModuleValues;
use crate::support::format::{PLACEHOLDER, format_grouped};

use super::SeriesConfig;

/// Fraction digits shown for string voltages.
pub const STRING_DISPLAY_DIGITS: usize = 1;

/// Voltages of a string of `n` identical modules in series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StringValues {
    /// Open-circuit string voltage (`n · Voc`).
    pub voc: ElectricPotential,

    /// Maximum-power-point string voltage (`n · Vmp`).
    pub vmp: ElectricPotential,

    /// Whether the open-circuit voltage exceeds the maximum system voltage.
    ///
    /// A voltage exactly at the limit is not an over-voltage.
    pub over_voltage: bool,
}

impl StringValues {
    /// Computes the string voltages for `series` modules.
    #[must_use]
    pub fn new(
        module: &ComputedModuleValues,
        series: i32,
        max_system_voltage: ElectricPotential,
    ) -> Self {
        let n = f64::from(series);
        let voc = module.voc * n;
        Self {
            voc,
            vmp: module.vmp * n,
            over_voltage: voc > max_system_voltage,
        }
    }

    /// Returns the values formatted for display.
    ///
    /// Over-voltage cells carry a note naming the exceeded limit.
    #[must_use]
    pub fn display(&self, max_system_voltage: ElectricPotential) -> StringDisplay {
        let fmt = |value: f64| format_grouped(value, STRING_DISPLAY_DIGITS);
        StringDisplay {
            voc: fmt(self.voc.get::<volt>()),
            vmp: fmt(self.vmp.get::<volt>()),
            over_voltage: self.over_voltage,
            note: self
                .over_voltage
                .then(|| format!("Over {}V", max_system_voltage.get::<volt>())),
        }
    }
}

/// Display text for [`StringValues`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringDisplay {
    pub voc: String,
    pub vmp: String,
    pub over_voltage: bool,
    pub note: Option<String>,
}

impl StringDisplay {
    /// Returns display text for a cell without values.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            voc: PLACEHOLDER.to_owned(),
            vmp: PLACEHOLDER.to_owned(),
            over_voltage: false,
            note: None,
        }
    }
}

/// Lazily yields `(series, StringValues)` for each series count in a config.
///
/// A sweep holds nothing but its position in the range; call [`aggregate`]
/// again for a fresh one. Yields nothing if the config's start exceeds its end.
#[derive(Debug, Clone)]
pub struct SeriesSweep {
    module: ComputedModuleValues,
    max_system_voltage: ElectricPotential,
    counts: RangeInclusive<i32>,
}

impl Iterator for SeriesSweep {
    type Item = (i32, StringValues);

    fn next(&mut self) -> Option<Self::Item> {
        let series = self.counts.next()?;
        Some((
            series,
            StringValues::new(&self.module, series, self.max_system_voltage),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.counts.size_hint()
    }
}

impl DoubleEndedIterator for SeriesSweep {
    fn next_back(&mut self) -> Option<Self::Item> {
        let series = self.counts.next_back()?;
        Some((
            series,
            StringValues::new(&self.module, series, self.max_system_voltage),
        ))
    }
}

impl FusedIterator for SeriesSweep {}

/// Aggregates module values into string values over the configured range.
///
/// The caller is responsible for rejecting `start > end` beforehand;
/// such a config produces an empty sweep.
#[must_use]
pub fn aggregate(module: &ComputedModuleValues, config: &SeriesConfig) -> SeriesSweep {
    SeriesSweep {
        module: *module,
        max_system_voltage: config.max_system_voltage,
        counts: config.start..=config.end,
    }
}

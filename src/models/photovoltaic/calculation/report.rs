use uom::si::f64::ElectricPotential;

use crate::models::photovoltaic::{
    module::{ComputedModuleValues, CorrectionMode, ModuleDisplay},
    string::{SeriesRange, StringDisplay, StringValues},
};
use crate::support::format::{PLACEHOLDER, format_grouped};

use super::TemperatureRow;

/// Results of one calculation pass.
///
/// Rows correspond one-to-one, in order, with the input temperature rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    range: SeriesRange,
    max_system_voltage: ElectricPotential,
    mode: CorrectionMode,
    rows: Vec<ReportRow>,
}

impl Report {
    pub(super) fn new(
        range: SeriesRange,
        max_system_voltage: ElectricPotential,
        mode: CorrectionMode,
        rows: Vec<ReportRow>,
    ) -> Self {
        Self {
            range,
            max_system_voltage,
            mode,
            rows,
        }
    }

    /// Returns the series range that was evaluated.
    #[must_use]
    pub fn range(&self) -> SeriesRange {
        self.range
    }

    /// Returns the voltage ceiling strings were checked against.
    #[must_use]
    pub fn max_system_voltage(&self) -> ElectricPotential {
        self.max_system_voltage
    }

    /// Returns the correction mode used.
    #[must_use]
    pub fn mode(&self) -> CorrectionMode {
        self.mode
    }

    /// Returns the rows in input order.
    #[must_use]
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Returns `true` if the series range was wide enough to warrant a warning.
    #[must_use]
    pub fn is_large_range(&self) -> bool {
        self.range.is_large()
    }

    /// Returns every `(celsius, series)` pair whose string exceeds the limit.
    #[must_use]
    pub fn over_voltages(&self) -> Vec<(f64, i32)> {
        self.rows
            .iter()
            .filter_map(|row| row.celsius().map(|celsius| (celsius, row)))
            .flat_map(|(celsius, row)| {
                row.strings()
                    .iter()
                    .filter(|(_, string)| string.over_voltage)
                    .map(move |(series, _)| (celsius, *series))
            })
            .collect()
    }

    /// Returns the rows formatted for display.
    #[must_use]
    pub fn display_rows(&self) -> Vec<RowDisplay> {
        self.rows
            .iter()
            .map(|row| row.display(self.range, self.max_system_voltage))
            .collect()
    }
}

/// Results for one temperature row.
///
/// A row without a temperature has no module or string values.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    row: TemperatureRow,
    module: Option<ComputedModuleValues>,
    strings: Vec<(i32, StringValues)>,
}

impl ReportRow {
    pub(super) fn computed(
        row: TemperatureRow,
        module: ComputedModuleValues,
        strings: Vec<(i32, StringValues)>,
    ) -> Self {
        Self {
            row,
            module: Some(module),
            strings,
        }
    }

    pub(super) fn skipped(row: TemperatureRow) -> Self {
        Self {
            row,
            module: None,
            strings: Vec::new(),
        }
    }

    /// Returns the row temperature in °C, if it had one.
    #[must_use]
    pub fn celsius(&self) -> Option<f64> {
        self.row.celsius()
    }

    /// Returns the corrected module values, unless the row was skipped.
    #[must_use]
    pub fn module(&self) -> Option<&ComputedModuleValues> {
        self.module.as_ref()
    }

    /// Returns the string values in ascending series order.
    ///
    /// Empty if the row was skipped.
    #[must_use]
    pub fn strings(&self) -> &[(i32, StringValues)] {
        &self.strings
    }

    /// Returns `true` if the row had no temperature and was not computed.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.module.is_none()
    }

    fn display(&self, range: SeriesRange, max_system_voltage: ElectricPotential) -> RowDisplay {
        let temperature = self
            .celsius()
            .map_or_else(|| PLACEHOLDER.to_owned(), |c| format_grouped(c, 2));

        let Some(module) = self.module else {
            let cells = range.counts().map(|_| StringDisplay::placeholder()).collect();
            return RowDisplay {
                temperature,
                module: ModuleDisplay::placeholder(),
                strings: cells,
            };
        };

        RowDisplay {
            temperature,
            module: module.display(),
            strings: self
                .strings
                .iter()
                .map(|(_, string)| string.display(max_system_voltage))
                .collect(),
        }
    }
}

/// Display text for one report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDisplay {
    pub temperature: String,
    pub module: ModuleDisplay,
    pub strings: Vec<StringDisplay>,
}

//! A full calculation pass over every temperature row and series count.
//!
//! A [`Calculation`] holds everything a pass needs: the module spec, the
//! correction mode, the series configuration and the temperature rows.
//! [`calculate`] validates the series range, corrects the module at each row
//! temperature and aggregates every series count, producing a [`Report`].
//! Each pass is computed from scratch; a new pass replaces the previous one.
//!
//! ```
//! use twine_pv::models::photovoltaic::calculation::{Calculation, calculate};
//!
//! let report = calculate(&Calculation::default()).unwrap();
//!
//! assert_eq!(report.rows().len(), 14);
//! assert_eq!(report.rows()[0].strings().len(), 6);
//! ```

mod error;
mod report;
mod rows;

pub use error::CalculationError;
pub use report::{Report, ReportRow, RowDisplay};
pub use rows::{DEFAULT_TEMPERATURES_CELSIUS, NEW_ROW_CELSIUS, TemperatureRow, TemperatureRows};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::photovoltaic::{
    module::{CorrectionMode, ModuleFields, ModuleSpec, correct},
    string::{LARGE_RANGE_SPAN, SeriesConfig, SeriesFields, aggregate},
};

/// Inputs for one calculation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// Module ratings and coefficients.
    pub spec: ModuleSpec,

    /// Which coefficient corrects voltage.
    pub mode: CorrectionMode,

    /// Series range and voltage ceiling.
    pub series: SeriesConfig,

    /// Temperatures to evaluate, in order.
    pub rows: TemperatureRows,
}

impl Default for Calculation {
    fn default() -> Self {
        Self {
            spec: ModuleSpec::reference(),
            mode: CorrectionMode::default(),
            series: SeriesConfig::default(),
            rows: TemperatureRows::default(),
        }
    }
}

impl Calculation {
    /// Builds a calculation from free-text fields, applying input defaults.
    #[must_use]
    pub fn from_fields(fields: &CalculationFields) -> Self {
        Self {
            spec: ModuleSpec::from_fields(&fields.module),
            mode: fields.mode,
            series: SeriesConfig::from_fields(&fields.series),
            rows: TemperatureRows::from_texts(&fields.temperatures),
        }
    }

    /// Checks the series range before running a pass.
    ///
    /// A [`RangeCheck::Large`] result is advisory; callers may ask the user
    /// to confirm and then run the pass unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidRange`] if the range start exceeds its end.
    pub fn check_range(&self) -> Result<RangeCheck, CalculationError> {
        let range = self.series.range()?;
        Ok(if range.is_large() {
            RangeCheck::Large { span: range.span() }
        } else {
            RangeCheck::Normal
        })
    }

    /// Runs a calculation pass.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidRange`] if the range start exceeds its end.
    pub fn run(&self) -> Result<Report, CalculationError> {
        calculate(self)
    }
}

/// Outcome of [`Calculation::check_range`] for a valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeCheck {
    /// The range is a comfortable size.
    Normal,
    /// The range spans more than [`LARGE_RANGE_SPAN`] series counts.
    Large {
        /// `end - start` of the range.
        span: i64,
    },
}

/// Runs one calculation pass.
///
/// Rows without a temperature are kept in the report but not computed.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidRange`] if the series range start exceeds
/// its end. No rows are computed in that case.
pub fn calculate(calculation: &Calculation) -> Result<Report, CalculationError> {
    let range = calculation.series.range()?;

    debug!(
        rows = calculation.rows.len(),
        start = range.start(),
        end = range.end(),
        mode = ?calculation.mode,
        "running calculation pass"
    );

    if range.is_large() {
        warn!(
            span = range.span(),
            "series range spans more than {} counts", LARGE_RANGE_SPAN
        );
    }

    let rows = calculation
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let Some(temperature) = row.temperature() else {
                debug!(row = index, "skipping temperature row without a value");
                return ReportRow::skipped(*row);
            };

            let module = correct(&calculation.spec, calculation.mode, temperature);
            let strings = aggregate(&module, &calculation.series).collect();
            ReportRow::computed(*row, module, strings)
        })
        .collect();

    Ok(Report::new(
        range,
        calculation.series.max_system_voltage,
        calculation.mode,
        rows,
    ))
}

/// Free-text inputs for a calculation, as supplied by a form or a JSON file.
///
/// Every field is optional; missing fields are treated as blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationFields {
    /// Module manufacturer, for reporting.
    pub maker: String,

    /// Module model name, for reporting.
    pub model: String,

    pub module: ModuleFields,

    pub series: SeriesFields,

    pub mode: CorrectionMode,

    /// Temperature inputs in °C, in row order.
    pub temperatures: Vec<String>,
}

impl CalculationFields {
    /// Returns the fields the calculator starts with.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            maker: String::new(),
            model: "CHSM78N(DG)/F-BH-635".into(),
            module: ModuleFields::reference(),
            series: SeriesFields {
                start: "14".into(),
                end: "19".into(),
                max_system_voltage: "1500".into(),
            },
            mode: CorrectionMode::Standard,
            temperatures: DEFAULT_TEMPERATURES_CELSIUS
                .iter()
                .map(f64::to_string)
                .collect(),
        }
    }

    /// Parses fields from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON for this structure.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

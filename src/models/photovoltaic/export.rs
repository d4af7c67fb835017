//! Spreadsheet export of a calculation.
//!
//! [`build_sheet`] lays out a [`Report`] as a flat table: a parameter block
//! describing the module and series settings, followed by the results grid.
//! The results header is
//! `Temp, Voc, Vmp, Pmax, Ratio` then a `Voc, Vmp` pair per series count,
//! and each body row matches one temperature row. Values are numbers rounded
//! the way they are displayed; missing values are `"-"`.

use std::{
    fs::File,
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use jiff::{Timestamp, civil::Date, tz::TimeZone};
use thiserror::Error;
use tracing::debug;
use uom::si::{electric_potential::volt, power::watt, ratio::percent};

use crate::models::photovoltaic::{
    calculation::{CalculationFields, Report, ReportRow},
    module::{MODULE_DISPLAY_DIGITS, ModuleFields},
    string::{STRING_DISPLAY_DIGITS, SeriesRange},
};
use crate::support::{
    format::round_to,
    parse::parse_number,
    sheet::{Cell, Sheet},
};

/// Name of the exported sheet.
pub const SHEET_NAME: &str = "Results";

const FIXED_COLUMN_WIDTHS: [u16; 5] = [15, 12, 12, 12, 10];
const SERIES_COLUMN_WIDTH: u16 = 12;

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing CSV records failed.
    #[error("failed to write csv")]
    Csv(#[from] csv::Error),

    /// The output file could not be created.
    #[error("failed to create {}", path.display())]
    Io {
        /// Path of the output file.
        path: PathBuf,

        #[source]
        source: io::Error,
    },
}

/// Descriptive inputs written to the parameter block.
///
/// Module fields are written as numbers where they parse, so the block
/// reflects what was entered rather than the defaults used for calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportParameters {
    pub maker: String,
    pub model: String,
    pub module: ModuleFields,
}

impl ExportParameters {
    /// Takes the descriptive inputs from calculation fields.
    #[must_use]
    pub fn from_fields(fields: &CalculationFields) -> Self {
        Self {
            maker: fields.maker.clone(),
            model: fields.model.clone(),
            module: fields.module.clone(),
        }
    }
}

/// Lays out parameters and results as a sheet.
#[must_use]
pub fn build_sheet(params: &ExportParameters, report: &Report) -> Sheet {
    let range = report.range();
    let mut sheet = Sheet::new(SHEET_NAME);

    sheet.push_row(vec!["PV module temperature characteristics".into()]);
    sheet.push_blank();
    sheet.push_row(vec!["Parameters".into()]);
    sheet.push_row(vec!["Item".into(), "Value".into(), "Unit".into()]);
    sheet.push_row(vec!["Maker".into(), params.maker.as_str().into(), Cell::Empty]);
    sheet.push_row(vec!["Model".into(), params.model.as_str().into(), Cell::Empty]);

    let module = &params.module;
    for (label, text, unit) in [
        ("Pmax (STC)", &module.pmax, "W"),
        ("Voc (STC)", &module.voc, "V"),
        ("Vmp (STC)", &module.vmp, "V"),
        ("Isc (STC)", &module.isc, "A"),
        ("Imp (STC)", &module.imp, "A"),
    ] {
        sheet.push_row(parameter_row(label, text, unit));
    }

    sheet.push_row(vec![
        "Series range".into(),
        format!("{} - {}", range.start(), range.end()).into(),
        "series".into(),
    ]);

    for (label, text) in [
        ("Coefficient alpha (current)", &module.alpha),
        ("Coefficient beta (voltage)", &module.beta),
        ("Coefficient gamma (power)", &module.gamma),
    ] {
        sheet.push_row(parameter_row(label, text, "%/°C"));
    }

    sheet.push_row(vec![
        "Correction mode".into(),
        report.mode().label().into(),
        Cell::Empty,
    ]);
    sheet.push_blank();
    sheet.push_row(vec!["Results".into()]);
    sheet.push_row(results_header(range));

    for row in report.rows() {
        sheet.push_row(results_row(row, range));
    }

    let mut widths = FIXED_COLUMN_WIDTHS.to_vec();
    widths.extend(range.counts().flat_map(|_| [SERIES_COLUMN_WIDTH; 2]));
    sheet.set_column_widths(widths);

    sheet
}

/// Writes the exported sheet as CSV.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if writing fails.
pub fn export_csv<W: io::Write>(
    params: &ExportParameters,
    report: &Report,
    writer: W,
) -> Result<(), ExportError> {
    build_sheet(params, report).write_csv(writer)?;
    Ok(())
}

/// Writes the exported sheet to a dated CSV file in `dir`.
///
/// The file name carries today's UTC date, see [`export_date`]. Returns the path of the written file.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be created, or
/// [`ExportError::Csv`] if writing fails.
pub fn save_csv(
    params: &ExportParameters,
    report: &Report,
    dir: impl AsRef<Path>,
) -> Result<PathBuf, ExportError> {
    let path = dir
        .as_ref()
        .join(export_file_name(report.range(), export_date(Timestamp::now())));

    let file = File::create(&path).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    export_csv(params, report, BufWriter::new(file))?;

    debug!(path = %path.display(), "exported calculation results");
    Ok(path)
}

/// Returns the calendar date used in export file names: the UTC date of `now`.
#[must_use]
pub fn export_date(now: Timestamp) -> Date {
    now.to_zoned(TimeZone::UTC).date()
}

/// Returns the export file name for a series range and date.
#[must_use]
pub fn export_file_name(range: SeriesRange, date: Date) -> String {
    format!(
        "pv-temperature-{}-{}-series-{:04}{:02}{:02}.csv",
        range.start(),
        range.end(),
        date.year(),
        date.month(),
        date.day()
    )
}

fn parameter_row(label: &str, text: &str, unit: &str) -> Vec<Cell> {
    vec![
        label.into(),
        Cell::number_or_placeholder(parse_number(text)),
        unit.into(),
    ]
}

fn results_header(range: SeriesRange) -> Vec<Cell> {
    let mut header: Vec<Cell> = ["Temp (°C)", "Voc (V)", "Vmp (V)", "Pmax (W)", "Ratio (%)"]
        .into_iter()
        .map(Cell::from)
        .collect();

    for n in range.counts() {
        header.push(format!("{n} series Voc").into());
        header.push(format!("{n} series Vmp").into());
    }
    header
}

fn results_row(row: &ReportRow, range: SeriesRange) -> Vec<Cell> {
    let mut cells = vec![Cell::number_or_placeholder(row.celsius())];

    let Some(module) = row.module() else {
        let width = 4 + 2 * range.counts().count();
        cells.extend(std::iter::repeat_with(Cell::placeholder).take(width));
        return cells;
    };

    let module_cell = |value: f64| Cell::Number(round_to(value, MODULE_DISPLAY_DIGITS));
    cells.push(module_cell(module.voc.get::<volt>()));
    cells.push(module_cell(module.vmp.get::<volt>()));
    cells.push(module_cell(module.pmax.get::<watt>()));
    cells.push(module_cell(module.ratio.get::<percent>()));

    for (_, string) in row.strings() {
        cells.push(Cell::Number(round_to(
            string.voc.get::<volt>(),
            STRING_DISPLAY_DIGITS,
        )));
        cells.push(Cell::Number(round_to(
            string.vmp.get::<volt>(),
            STRING_DISPLAY_DIGITS,
        )));
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::photovoltaic::calculation::{Calculation, TemperatureRows};

    fn seeded_report(temperatures: &[&str]) -> (ExportParameters, Report) {
        let mut fields = CalculationFields::seeded();
        fields.maker = "Astronergy".into();
        fields.temperatures = temperatures.iter().map(ToString::to_string).collect();

        let report = Calculation::from_fields(&fields).run().unwrap();
        (ExportParameters::from_fields(&fields), report)
    }

    fn find_row<'a>(sheet: &'a Sheet, label: &str) -> &'a [Cell] {
        sheet
            .rows()
            .iter()
            .find(|row| row.first() == Some(&Cell::from(label)))
            .map(Vec::as_slice)
            .unwrap()
    }

    #[test]
    fn parameter_block_lists_inputs() {
        let (params, report) = seeded_report(&["80"]);
        let sheet = build_sheet(&params, &report);

        assert_eq!(sheet.name(), SHEET_NAME);
        assert_eq!(find_row(&sheet, "Maker")[1], Cell::from("Astronergy"));
        assert_eq!(find_row(&sheet, "Voc (STC)")[1], Cell::Number(56.41));
        assert_eq!(find_row(&sheet, "Coefficient gamma (power)")[1], Cell::Number(-0.29));
        assert_eq!(find_row(&sheet, "Series range")[1], Cell::from("14 - 19"));
        assert_eq!(
            find_row(&sheet, "Correction mode")[1],
            Cell::from("Standard (voltage corrected with beta)")
        );
    }

    #[test]
    fn results_grid_has_pair_per_series() {
        let (params, report) = seeded_report(&["80", "-20"]);
        let sheet = build_sheet(&params, &report);

        let header_index = sheet
            .rows()
            .iter()
            .position(|row| row.first() == Some(&Cell::from("Temp (°C)")))
            .unwrap();
        let header = &sheet.rows()[header_index];
        assert_eq!(header.len(), 5 + 2 * 6);
        assert_eq!(header[5], Cell::from("14 series Voc"));
        assert_eq!(header[16], Cell::from("19 series Vmp"));

        let body = &sheet.rows()[header_index + 1..];
        assert_eq!(body.len(), 2);

        let hot = &body[0];
        assert_eq!(hot[0], Cell::Number(80.0));
        assert_eq!(hot[1], Cell::Number(48.65));
        assert_eq!(hot[3], Cell::Number(533.72));
        assert_eq!(hot[4], Cell::Number(84.05));
        assert_eq!(hot[15], Cell::Number(924.4));
        assert_eq!(hot.len(), header.len());

        assert_eq!(sheet.column_widths().len(), header.len());
    }

    #[test]
    fn skipped_rows_export_placeholders() {
        let calculation = Calculation {
            rows: TemperatureRows::from_texts(["", "25"]),
            ..Calculation::default()
        };
        let report = calculation.run().unwrap();
        let sheet = build_sheet(&ExportParameters::default(), &report);

        let rows = sheet.rows();
        let skipped = &rows[rows.len() - 2];
        assert_eq!(skipped.len(), 17);
        assert!(skipped.iter().all(Cell::is_placeholder));

        // Blank module fields are placeholders in the parameter block.
        assert!(find_row(&sheet, "Pmax (STC)")[1].is_placeholder());
    }

    #[test]
    fn csv_output_contains_grid() {
        let (params, report) = seeded_report(&["25"]);
        let mut out = Vec::new();
        export_csv(&params, &report, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Temp (°C),Voc (V),Vmp (V),Pmax (W),Ratio (%),14 series Voc"));
        assert!(text.contains("25,56.41,46.79,635,100,789.7,655.1"));
    }

    #[test]
    fn file_name_includes_range_and_date() {
        let range = SeriesRange::new(14, 19).unwrap();
        assert_eq!(
            export_file_name(range, jiff::civil::date(2026, 3, 7)),
            "pv-temperature-14-19-series-20260307.csv"
        );
    }

    #[test]
    fn file_date_is_taken_in_utc() {
        let evening: Timestamp = "2026-03-07T23:30:00-05:00".parse().unwrap();
        assert_eq!(export_date(evening), jiff::civil::date(2026, 3, 8));

        let morning: Timestamp = "2026-03-07T01:00:00+09:00".parse().unwrap();
        assert_eq!(export_date(morning), jiff::civil::date(2026, 3, 6));
    }

    #[test]
    fn exported_values_round_decimal_ties_up() {
        let mut fields = CalculationFields::seeded();
        fields.module.voc = "48.25".into();
        fields.module.vmp = "40.25".into();
        fields.series.start = "17".into();
        fields.series.end = "17".into();
        fields.temperatures = vec!["25".into()];

        let report = Calculation::from_fields(&fields).run().unwrap();
        let sheet = build_sheet(&ExportParameters::from_fields(&fields), &report);

        let row = sheet.rows().last().unwrap();
        assert_eq!(row[5], Cell::Number(820.3));
        assert_eq!(row[6], Cell::Number(684.3));
    }
}

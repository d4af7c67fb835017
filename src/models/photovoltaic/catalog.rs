//! Catalog of known module models.
//!
//! The catalog is a JSON array of datasheet entries:
//!
//! ```json
//! [
//!   { "maker": "Astronergy", "model": "CHSM78N(DG)/F-BH-635",
//!     "pmax": 635, "voc": 56.41, "vmp": 46.79, "isc": 14.35, "imp": 13.68,
//!     "alpha": 0.043, "beta": -0.25, "gamma": -0.29 }
//! ]
//! ```
//!
//! Missing numeric fields read as zero. Selecting an entry fills the module
//! fields with its ratings, so a known model never has to be typed in.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential, Power},
    power::watt,
};

use crate::models::photovoltaic::module::{ModuleFields, ModuleSpec};
use crate::support::units::TemperatureCoefficient;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}", path.display())]
    Io {
        /// Path of the catalog file.
        path: PathBuf,

        #[source]
        source: io::Error,
    },

    /// The catalog is not valid JSON for a list of entries.
    #[error("failed to parse catalog")]
    Parse(#[from] serde_json::Error),
}

/// Datasheet values for one module model.
///
/// Electrical values are in W, V and A; coefficients are in %/°C.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogEntry {
    pub maker: String,
    pub model: String,
    pub pmax: f64,
    pub voc: f64,
    pub vmp: f64,
    pub isc: f64,
    pub imp: f64,
    pub alpha: f64,
    pub beta: f64,

    /// Not every datasheet publishes a power coefficient.
    pub gamma: Option<f64>,
}

impl CatalogEntry {
    /// Returns the module spec for this entry; a missing γ becomes zero.
    #[must_use]
    pub fn spec(&self) -> ModuleSpec {
        ModuleSpec {
            pmax: Power::new::<watt>(self.pmax),
            voc: ElectricPotential::new::<volt>(self.voc),
            vmp: ElectricPotential::new::<volt>(self.vmp),
            isc: ElectricCurrent::new::<ampere>(self.isc),
            imp: ElectricCurrent::new::<ampere>(self.imp),
            alpha: TemperatureCoefficient::from_percent_per_celsius(self.alpha),
            beta: TemperatureCoefficient::from_percent_per_celsius(self.beta),
            gamma: TemperatureCoefficient::from_percent_per_celsius(self.gamma.unwrap_or(0.0)),
        }
    }

    /// Returns the module fields filled from this entry.
    ///
    /// A missing or zero γ leaves the γ field blank.
    #[must_use]
    pub fn fields(&self) -> ModuleFields {
        ModuleFields {
            pmax: self.pmax.to_string(),
            voc: self.voc.to_string(),
            vmp: self.vmp.to_string(),
            isc: self.isc.to_string(),
            imp: self.imp.to_string(),
            alpha: self.alpha.to_string(),
            beta: self.beta.to_string(),
            gamma: self
                .gamma
                .filter(|gamma| *gamma != 0.0)
                .map(|gamma| gamma.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Models of one maker, sorted by model name.
#[derive(Debug, Clone, PartialEq)]
pub struct MakerGroup<'a> {
    pub maker: &'a str,
    pub models: Vec<&'a CatalogEntry>,
}

/// A list of known module models.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Creates a catalog from entries.
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Parses a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the text is not a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        debug!(entries = entries.len(), "loaded module catalog");
        Ok(Self::new(entries))
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, or
    /// [`CatalogError::Parse`] if its contents are not a valid catalog.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Returns all entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the entry for a maker and model.
    #[must_use]
    pub fn find(&self, maker: &str, model: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.maker == maker && entry.model == model)
    }

    /// Finds the first entry with the given model name, from any maker.
    #[must_use]
    pub fn find_model(&self, model: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.model == model)
    }

    /// Groups entries by maker, with makers and models in ascending order.
    ///
    /// Makers sort by exact name. Models sort ignoring case, then by exact
    /// name, so `tsm-430` lands between `TSM-420` and `TSM-450`.
    #[must_use]
    pub fn grouped(&self) -> Vec<MakerGroup<'_>> {
        let mut groups: BTreeMap<&str, Vec<&CatalogEntry>> = BTreeMap::new();
        for entry in &self.entries {
            groups.entry(entry.maker.as_str()).or_default().push(entry);
        }

        groups
            .into_iter()
            .map(|(maker, mut models)| {
                models.sort_by(|a, b| {
                    a.model
                        .to_lowercase()
                        .cmp(&b.model.to_lowercase())
                        .then_with(|| a.model.cmp(&b.model))
                });
                MakerGroup { maker, models }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        { "maker": "Trina", "model": "TSM-450", "pmax": 450, "voc": 49.6, "vmp": 41.5,
          "isc": 11.5, "imp": 10.85, "alpha": 0.05, "beta": -0.25, "gamma": -0.34 },
        { "maker": "Astronergy", "model": "CHSM78N(DG)/F-BH-635", "pmax": 635, "voc": 56.41,
          "vmp": 46.79, "isc": 14.35, "imp": 13.68, "alpha": 0.043, "beta": -0.25, "gamma": -0.29 },
        { "maker": "Trina", "model": "TSM-420", "pmax": 420, "voc": 48.2, "vmp": 40.1,
          "isc": 11.0, "imp": 10.5, "alpha": 0.05, "beta": -0.26 }
    ]"#;

    #[test]
    fn parses_and_finds_entries() {
        let catalog = Catalog::from_json_str(CATALOG).unwrap();
        assert_eq!(catalog.len(), 3);

        let entry = catalog.find("Astronergy", "CHSM78N(DG)/F-BH-635").unwrap();
        assert_eq!(entry.spec(), ModuleSpec::reference());

        assert!(catalog.find("Trina", "CHSM78N(DG)/F-BH-635").is_none());
        assert_eq!(catalog.find_model("TSM-420").unwrap().maker, "Trina");
    }

    #[test]
    fn groups_are_sorted() {
        let catalog = Catalog::from_json_str(CATALOG).unwrap();
        let groups = catalog.grouped();

        let makers: Vec<&str> = groups.iter().map(|group| group.maker).collect();
        assert_eq!(makers, vec!["Astronergy", "Trina"]);

        let trina: Vec<&str> = groups[1]
            .models
            .iter()
            .map(|entry| entry.model.as_str())
            .collect();
        assert_eq!(trina, vec!["TSM-420", "TSM-450"]);
    }

    #[test]
    fn models_sort_ignoring_case() {
        let entry = |model: &str| CatalogEntry {
            maker: "Trina".into(),
            model: model.into(),
            ..CatalogEntry::default()
        };
        let catalog = Catalog::new(vec![entry("TSM-450"), entry("tsm-430"), entry("TSM-420")]);

        let groups = catalog.grouped();
        let models: Vec<&str> = groups[0]
            .models
            .iter()
            .map(|entry| entry.model.as_str())
            .collect();
        assert_eq!(models, vec!["TSM-420", "tsm-430", "TSM-450"]);
    }

    #[test]
    fn missing_gamma_reads_as_zero() {
        let catalog = Catalog::from_json_str(CATALOG).unwrap();
        let entry = catalog.find_model("TSM-420").unwrap();

        assert_eq!(entry.gamma, None);
        assert_eq!(entry.spec().gamma, TemperatureCoefficient::ZERO);
        assert_eq!(entry.fields().gamma, "");
        assert_eq!(entry.fields().beta, "-0.26");
    }

    #[test]
    fn fields_round_trip_through_spec() {
        let catalog = Catalog::from_json_str(CATALOG).unwrap();
        let entry = catalog.find_model("CHSM78N(DG)/F-BH-635").unwrap();

        assert_eq!(ModuleSpec::from_fields(&entry.fields()), entry.spec());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            Catalog::from_json_str("{ not json"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            Catalog::from_path("/nonexistent/catalog.json"),
            Err(CatalogError::Io { .. })
        ));
    }
}

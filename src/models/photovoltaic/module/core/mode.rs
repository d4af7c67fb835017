use std::fmt;

use serde::{Deserialize, Serialize};

/// Selects which temperature coefficient corrects module voltage.
///
/// Some datasheets only publish β for voltage, while compatibility with other
/// tools requires correcting voltage with γ. Power is always corrected with γ
/// regardless of the mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionMode {
    /// Voltage is corrected with β.
    #[default]
    Standard,
    /// Voltage is corrected with γ.
    Compatibility,
}

impl CorrectionMode {
    /// Returns the other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Standard => Self::Compatibility,
            Self::Compatibility => Self::Standard,
        }
    }

    /// Returns a short label describing the mode.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard (voltage corrected with beta)",
            Self::Compatibility => "Compatibility (voltage corrected with gamma)",
        }
    }
}

impl fmt::Display for CorrectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

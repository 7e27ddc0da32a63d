use serde::{Deserialize, Serialize};
use std::fmt;

/// Which solution of the acid equilibrium to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fidelity {
    /// `[H+] ≈ sqrt(Ka·C)`; matches the reference spreadsheet.
    #[default]
    Approximate,
    /// Exact quadratic root.
    Exact,
}

impl From<bool> for Fidelity {
    fn from(exact: bool) -> Self {
        if exact {
            Fidelity::Exact
        } else {
            Fidelity::Approximate
        }
    }
}

/// Non-fatal message attached to a computed or refused result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    HighConcentration,
    ConcentrationIncrease,
}

impl Advisory {
    pub fn message(self) -> &'static str {
        match self {
            Advisory::HighConcentration => {
                "Warning: very high concentration; the result may differ noticeably from reality because of activity and ionic strength effects."
            }
            Advisory::ConcentrationIncrease => {
                "Adding water cannot increase the concentration (target is not below the current concentration)."
            }
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Intermediate values of a pH computation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PhBreakdown {
    /// mol/L
    pub molarity: f64,
    /// mol/L
    pub hydrogen_ion: f64,
    /// `-log10([H+])` before flooring.
    pub ph_raw: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PhResult {
    /// Floored to one decimal; `0.0` when the input was empty or invalid.
    pub ph: f64,
    pub advisory: Option<Advisory>,
    /// `None` when no computation was performed.
    pub breakdown: Option<PhBreakdown>,
}

impl PhResult {
    pub(crate) fn empty() -> Self {
        Self {
            ph: 0.0,
            advisory: None,
            breakdown: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DilutionResult {
    /// Water to add, in the unit of the current amount. Never negative.
    pub water: f64,
    pub advisory: Option<Advisory>,
}

impl DilutionResult {
    pub(crate) fn empty() -> Self {
        Self {
            water: 0.0,
            advisory: None,
        }
    }
}

fn default_acid() -> String {
    crate::chemistry::ACIDS[0].id.to_string()
}

/// State of the pH form: selected acid key, percent field, exact-mode checkbox.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhForm {
    #[serde(default = "default_acid")]
    pub acid: String,
    #[serde(default)]
    pub percent: String,
    #[serde(default)]
    pub exact: bool,
}

impl Default for PhForm {
    fn default() -> Self {
        Self {
            acid: default_acid(),
            percent: String::new(),
            exact: false,
        }
    }
}

/// State of the dilution form. All fields are raw text.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DilutionForm {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub current: String,
    #[serde(default)]
    pub target: String,
}

/// Both forms as one document, e.g. read from a JSON file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FormDocument {
    #[serde(default)]
    pub ph: PhForm,
    #[serde(default)]
    pub dilution: DilutionForm,
}

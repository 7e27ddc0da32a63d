pub mod adapters;
pub mod chemistry;
pub mod display;
pub mod error;
pub mod format;
pub mod models;
pub mod parse;
pub mod solution;

pub use crate::chemistry::{ACIDS, AcidProfile, acid_options, find_acid, select_acid};
pub use crate::display::{
    DilutionDisplay, FormDisplay, PhDisplay, recalc_dilution, recalc_form, recalc_ph,
};
pub use crate::error::AppError;
pub use crate::format::{format_adaptive, format_fixed1};
pub use crate::models::{
    Advisory, DilutionForm, DilutionResult, Fidelity, FormDocument, PhBreakdown, PhForm, PhResult,
};
pub use crate::parse::{ParsedNumber, parse_number, parse_optional};
pub use crate::solution::{compute_dilution, compute_ph};

//! Presentation model for the interactive form.
//!
//! A UI calls these on every change notification and writes the two strings into its
//! value and note labels. An empty note clears a previously shown advisory.
use serde::Serialize;

use crate::chemistry::select_acid;
use crate::format::{format_adaptive, format_fixed1};
use crate::models::{DilutionForm, FormDocument, PhForm};
use crate::solution::{compute_dilution, compute_ph};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PhDisplay {
    pub ph: String,
    pub note: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DilutionDisplay {
    pub water: String,
    pub note: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormDisplay {
    pub ph: PhDisplay,
    pub dilution: DilutionDisplay,
}

/// Unknown acid keys fall back to the first catalog entry.
pub fn recalc_ph(form: &PhForm) -> PhDisplay {
    let acid = select_acid(&form.acid);
    let result = compute_ph(&form.percent, acid, form.exact.into());
    PhDisplay {
        ph: format_fixed1(result.ph),
        note: result.advisory.map(|a| a.to_string()).unwrap_or_default(),
    }
}

pub fn recalc_dilution(form: &DilutionForm) -> DilutionDisplay {
    let result = compute_dilution(&form.amount, &form.current, &form.target);
    DilutionDisplay {
        water: format_adaptive(result.water),
        note: result.advisory.map(|a| a.to_string()).unwrap_or_default(),
    }
}

pub fn recalc_form(doc: &FormDocument) -> FormDisplay {
    FormDisplay {
        ph: recalc_ph(&doc.ph),
        dilution: recalc_dilution(&doc.dilution),
    }
}

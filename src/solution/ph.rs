use tracing::{debug, trace};

use crate::chemistry::{
    AcidProfile, HIGH_CONCENTRATION_PERCENT, floor_to, hydrogen_ion_approx, hydrogen_ion_exact,
    molar_concentration, ph_from_hydrogen_ion,
};
use crate::models::{Advisory, Fidelity, PhBreakdown, PhResult};
use crate::parse::parse_number;

/// Estimate the pH of a weak-acid solution from its mass-percent text.
///
/// Steps:
/// 1. Parse `percent_text`; anything not strictly positive yields `pH = 0` with no advisory
///    (an unfilled form, not an error).
/// 2. Convert to molarity via [`molar_concentration`].
/// 3. `[H+]` from the approximate or exact equilibrium, per `fidelity`.
/// 4. `pH = floor(-log10([H+]) * 10) / 10`. Always rounded down, never to nearest.
/// 5. Above 50 % a high-concentration advisory is attached; the number is still returned.
///
/// A pH that is not finite (`[H+]` underflows or the molarity overflows) is reported as
/// `pH = 0` without a breakdown; the high-concentration advisory still applies. The function
/// is total: no input string makes it panic or fail.
pub fn compute_ph(percent_text: &str, acid: &AcidProfile, fidelity: Fidelity) -> PhResult {
    let Some(percent) = parse_number(percent_text).positive() else {
        return PhResult::empty();
    };

    let molarity = molar_concentration(percent, acid);
    let hydrogen_ion = match fidelity {
        Fidelity::Approximate => hydrogen_ion_approx(acid.ka, molarity),
        Fidelity::Exact => hydrogen_ion_exact(acid.ka, molarity),
    };
    let ph_raw = ph_from_hydrogen_ion(hydrogen_ion);
    let advisory = (percent > HIGH_CONCENTRATION_PERCENT).then_some(Advisory::HighConcentration);
    if !ph_raw.is_finite() {
        trace!(percent, hydrogen_ion, "pH out of representable range");
        return PhResult {
            ph: 0.0,
            advisory,
            breakdown: None,
        };
    }
    let ph = floor_to(ph_raw, 1);

    debug!(
        acid = acid.id,
        percent,
        ?fidelity,
        molarity,
        hydrogen_ion,
        ph_raw,
        ph,
        "computed pH"
    );

    PhResult {
        ph,
        advisory,
        breakdown: Some(PhBreakdown {
            molarity,
            hydrogen_ion,
            ph_raw,
        }),
    }
}

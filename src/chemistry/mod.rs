//! Chemistry module: acid reference data and equilibrium helpers for weak-acid solutions.
//!
//! This module provides:
//! - The fixed catalog of supported acids (Ka, molar mass, solution density)
//! - Lookup of a catalog entry by its identity key
//! - Mass-percent to molar concentration conversion
//! - Hydrogen-ion concentration from the square-root approximation or the exact quadratic root
//! - Directional (floor) rounding used for pH display values
//!
//! Units conventions:
//! - Ka in mol/L
//! - Molar masses in g/mol
//! - Densities are solution densities in g/mL
//! - Concentrations returned by the helpers are mol/L
//!
//! Model limits:
//! - Single dissociation step, ideal dilute solution (activity coefficients = 1)
//! - No temperature dependence; constants are room-temperature values
//! - Above `HIGH_CONCENTRATION_PERCENT` the ionic-strength error grows large enough that callers
//!   attach an advisory to the result
//!
//! # Examples
//! ```rust
//! use acidcalc_rs::chemistry::{find_acid, hydrogen_ion_approx, molar_concentration};
//!
//! let citric = find_acid("citric").unwrap();
//! let c = molar_concentration(5.0, citric);
//! let h = hydrogen_ion_approx(citric.ka, c);
//! assert!((c - 0.2655).abs() < 1e-3);
//! assert!((h - 0.01402).abs() < 1e-4);
//! ```
//!
//! # Panics
//! None of the functions panic.
use serde::Serialize;

/// Mass-percent above which the ideal-solution model is flagged as unreliable.
pub const HIGH_CONCENTRATION_PERCENT: f64 = 50.0;
/// g/mL -> g/L
pub const ML_PER_L: f64 = 1000.0;

/// Static catalog entry describing one weak acid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AcidProfile {
    /// Identity key, unique within [`ACIDS`].
    pub id: &'static str,
    /// Human-readable name for selection lists.
    pub name: &'static str,
    /// First dissociation constant (mol/L).
    pub ka: f64,
    /// Molar mass (g/mol).
    pub molar_mass: f64,
    /// Solution density (g/mL).
    pub density: f64,
}

/// Supported acids. The first entry is the default selection.
pub const ACIDS: [AcidProfile; 6] = [
    AcidProfile {
        id: "citric",
        name: "Citric",
        ka: 7.4e-4,
        molar_mass: 192.12,
        density: 1.02,
    },
    AcidProfile {
        id: "ascorbic",
        name: "Ascorbic",
        ka: 6.76e-5,
        molar_mass: 176.12,
        density: 1.02,
    },
    AcidProfile {
        id: "malic",
        name: "Malic",
        ka: 3.98e-4,
        molar_mass: 134.09,
        density: 1.02,
    },
    AcidProfile {
        id: "lactic",
        name: "Lactic",
        ka: 1.38e-4,
        molar_mass: 90.08,
        density: 1.02,
    },
    AcidProfile {
        id: "tartaric",
        name: "Tartaric",
        ka: 9.6e-4,
        molar_mass: 150.09,
        density: 1.02,
    },
    AcidProfile {
        id: "acetic",
        name: "Acetic",
        ka: 1.75e-5,
        molar_mass: 60.05,
        density: 1.005,
    },
];

/// Look up a catalog entry by its exact identity key.
pub fn find_acid(id: &str) -> Option<&'static AcidProfile> {
    ACIDS.iter().find(|a| a.id == id)
}

/// Like [`find_acid`], but an unknown key selects the first catalog entry.
pub fn select_acid(id: &str) -> &'static AcidProfile {
    find_acid(id).unwrap_or(&ACIDS[0])
}

/// `(key, name)` pairs in catalog order, for populating a selection list.
pub fn acid_options() -> impl Iterator<Item = (&'static str, &'static str)> {
    ACIDS.iter().map(|a| (a.id, a.name))
}

/// Convert mass-percent (g solute per 100 g solution) to molar concentration (mol/L).
///
/// `C = (percent / 100) * density * 1000 / molar_mass`
pub fn molar_concentration(percent: f64, acid: &AcidProfile) -> f64 {
    (percent / 100.0) * acid.density * ML_PER_L / acid.molar_mass
}

/// `[H+] ≈ sqrt(Ka * C)`, valid while dissociation is small relative to C.
pub fn hydrogen_ion_approx(ka: f64, c: f64) -> f64 {
    (ka * c).sqrt()
}

/// Below this `C / Ka` ratio the subtraction in the quadratic root loses too many digits.
pub const EXACT_CANCELLATION_RATIO: f64 = 1e-6;

/// Positive root of `Ka = H² / (C - H)`: `[H+] = (sqrt(Ka² + 4·Ka·C) - Ka) / 2`.
///
/// When `C / Ka < EXACT_CANCELLATION_RATIO` the equivalent `2·Ka·C / (sqrt(Ka² + 4·Ka·C) + Ka)`
/// is used instead, since the subtraction would round the root to zero.
pub fn hydrogen_ion_exact(ka: f64, c: f64) -> f64 {
    let disc = (ka * ka + 4.0 * ka * c).sqrt();
    if c >= ka * EXACT_CANCELLATION_RATIO {
        (disc - ka) / 2.0
    } else {
        2.0 * ka * c / (disc + ka)
    }
}

/// `-log10([H+])`
pub fn ph_from_hydrogen_ion(h: f64) -> f64 {
    -h.log10()
}

/// Round toward negative infinity at the given number of decimal digits.
///
/// `floor_to(3.27, 1) == 3.2`. This is spreadsheet ROUNDDOWN for positive values,
/// not round-to-nearest.
pub fn floor_to(x: f64, digits: i32) -> f64 {
    let p = 10f64.powi(digits);
    (x * p).floor() / p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keys_are_unique() {
        for (i, a) in ACIDS.iter().enumerate() {
            assert!(ACIDS[i + 1..].iter().all(|b| b.id != a.id), "duplicate {}", a.id);
        }
    }

    #[test]
    fn catalog_constants_are_positive() {
        for a in &ACIDS {
            assert!(a.ka > 0.0 && a.molar_mass > 0.0 && a.density > 0.0, "{}", a.id);
        }
    }

    #[test]
    fn unknown_key_selects_first_entry() {
        assert!(find_acid("sulfuric").is_none());
        assert_eq!(select_acid("sulfuric").id, "citric");
        assert_eq!(select_acid("acetic").id, "acetic");
    }

    #[test]
    fn floor_to_rounds_down() {
        assert_eq!(floor_to(3.27, 1), 3.2);
        assert_eq!(floor_to(3.2999, 1), 3.2);
        assert_eq!(floor_to(1.853, 1), 1.8);
    }

    #[test]
    fn exact_root_satisfies_equilibrium() {
        let (ka, c) = (7.4e-4, 0.2656);
        let h = hydrogen_ion_exact(ka, c);
        assert!((h * h / (c - h) - ka).abs() < 1e-12);
        assert!(h < hydrogen_ion_approx(ka, c));
    }

    #[test]
    fn exact_root_uses_quadratic_form_for_normal_concentrations() {
        for (ka, c) in [(7.4e-4_f64, 0.2656_f64), (1.75e-5, 1.5), (9.6e-4, 1e-4)] {
            let quadratic = ((ka * ka + 4.0 * ka * c).sqrt() - ka) / 2.0;
            assert_eq!(hydrogen_ion_exact(ka, c), quadratic);
        }
    }

    #[test]
    fn exact_root_survives_tiny_concentrations() {
        let h = hydrogen_ion_exact(7.4e-4, 1e-30);
        assert!(h > 0.0);
        assert!((h / 1e-30 - 1.0).abs() < 1e-9);
    }
}

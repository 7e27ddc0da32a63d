use tracing::debug;

use crate::models::{Advisory, DilutionResult};
use crate::parse::parse_number;

/// Amount of water to add to bring a solution from `current` to `target` concentration.
///
/// Solute is conserved: `current * amount = target * (amount + water)`, so
/// `water = current * amount / target - amount`.
///
/// - Any field that is not a strictly positive number: `water = 0`, no advisory.
/// - `target >= current`: `water = 0` with [`Advisory::ConcentrationIncrease`].
///
/// The result is unit-agnostic. One unit of water is taken as one unit of the current
/// amount, which only holds for volumes of aqueous solutions near unit density.
pub fn compute_dilution(amount_text: &str, current_text: &str, target_text: &str) -> DilutionResult {
    let (Some(amount), Some(current), Some(target)) = (
        parse_number(amount_text).positive(),
        parse_number(current_text).positive(),
        parse_number(target_text).positive(),
    ) else {
        return DilutionResult::empty();
    };

    if target >= current {
        debug!(current, target, "refused dilution towards higher concentration");
        return DilutionResult {
            water: 0.0,
            advisory: Some(Advisory::ConcentrationIncrease),
        };
    }

    // Unreachable for target < current, kept so a negative amount can never surface.
    let water = (current * amount / target - amount).max(0.0);
    debug!(amount, current, target, water, "computed dilution");

    DilutionResult {
        water,
        advisory: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halving_concentration_doubles_volume() {
        let r = compute_dilution("100", "10", "5");
        assert_eq!(r.water, 100.0);
        assert_eq!(r.advisory, None);
    }

    #[test]
    fn equal_or_higher_target_is_refused() {
        for target in ["10", "20", "10,0"] {
            let r = compute_dilution("100", "10", target);
            assert_eq!(r.water, 0.0);
            assert_eq!(r.advisory, Some(Advisory::ConcentrationIncrease));
        }
    }

    #[test]
    fn missing_field_is_silent_zero() {
        assert_eq!(compute_dilution("", "10", "5"), DilutionResult::empty());
        assert_eq!(compute_dilution("100", "x", "5"), DilutionResult::empty());
        assert_eq!(compute_dilution("100", "10", "0"), DilutionResult::empty());
        assert_eq!(compute_dilution("-100", "10", "5"), DilutionResult::empty());
    }

    #[test]
    fn domain_check_runs_before_ordering_check() {
        // target is larger but amount is invalid: no advisory
        assert_eq!(compute_dilution("0", "10", "20"), DilutionResult::empty());
    }

    #[test]
    fn accepts_locale_formatted_amounts() {
        let r = compute_dilution("1 000", "9,6", "1,2");
        assert!((r.water - 7000.0).abs() < 1e-9);
    }
}

//! Derived yes/no facts about a record.
//!
//! These are coarse proxies over the published columns, not exact
//! determinations. They are kept out of the dimension table so they can be
//! checked on their own.

use crate::parser::coerce::is_reported;
use crate::university::University;

const NEED_MET_THRESHOLD: f64 = 50.0;
const LOW_SUBMISSION_THRESHOLD: f64 = 30.0;

/// Strong aid: more than half of need met, or any reported international
/// acceptance rate. Says nothing about actual award size.
pub fn aid_available(u: &University) -> bool {
    if u.percent_need_met.value.is_some_and(|p| p > NEED_MET_THRESHOLD) {
        return true;
    }
    is_reported(&u.international_acceptance_rate)
}

/// Test optional: either submission column says "blind", or fewer than 30%
/// of enrollees submitted both SAT and ACT scores.
pub fn test_optional(u: &University) -> bool {
    let sat = &u.percent_submitting_sat;
    let act = &u.percent_submitting_act;
    if sat.raw.to_lowercase().contains("blind") || act.raw.to_lowercase().contains("blind") {
        return true;
    }
    matches!(
        (sat.value, act.value),
        (Some(s), Some(a)) if s < LOW_SUBMISSION_THRESHOLD && a < LOW_SUBMISSION_THRESHOLD
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::coerce::parse_percent;
    use crate::university::Field;

    fn pct(raw: &str) -> Field<f64> {
        Field::new(raw, parse_percent(raw))
    }

    #[test]
    fn aid_from_need_met() {
        let mut u = University {
            percent_need_met: pct("51%"),
            international_acceptance_rate: "N/A".into(),
            ..Default::default()
        };
        assert!(aid_available(&u));
        u.percent_need_met = pct("50%");
        assert!(!aid_available(&u));
        u.percent_need_met = pct("Not Reported");
        assert!(!aid_available(&u));
    }

    #[test]
    fn aid_from_international_rate() {
        let u = University {
            international_acceptance_rate: "12%".into(),
            ..Default::default()
        };
        assert!(aid_available(&u));
        for sentinel in ["", "-", "N/A", "Not Reported"] {
            let u = University {
                international_acceptance_rate: sentinel.into(),
                ..Default::default()
            };
            assert!(!aid_available(&u), "{:?}", sentinel);
        }
    }

    #[test]
    fn blind_marker() {
        let u = University {
            percent_submitting_sat: pct("Test Blind"),
            percent_submitting_act: pct("60%"),
            ..Default::default()
        };
        assert!(test_optional(&u));
    }

    #[test]
    fn low_submission_needs_both() {
        let mut u = University {
            percent_submitting_sat: pct("25%"),
            percent_submitting_act: pct("10%"),
            ..Default::default()
        };
        assert!(test_optional(&u));
        u.percent_submitting_act = pct("30%");
        assert!(!test_optional(&u));
        u.percent_submitting_act = pct("N/A");
        assert!(!test_optional(&u));
    }
}

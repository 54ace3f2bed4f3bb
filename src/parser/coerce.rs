//! Field coercion: raw CSV tokens to analytic numbers.
//!
//! Every function is total. Empty text and the "not reported" sentinels
//! always come back as `None`, whatever the column.

use std::sync::LazyLock;

use regex::Regex;

use crate::university::ScoreRange;

static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());
static LEADING_INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?\d+").unwrap());
static SCORE_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*[-–]\s*(\d+)").unwrap());
static TEMPERATURE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(-?\d+)\s*°").unwrap());

pub const SENTINELS: &[&str] = &["-", "N/A", "Not Reported"];

/// True for empty text or one of the sentinels.
pub fn is_missing(text: &str) -> bool {
    let t = text.trim();
    t.is_empty() || SENTINELS.contains(&t)
}

/// True when the field holds an actual value.
pub fn is_reported(text: &str) -> bool {
    !is_missing(text)
}

/// "62%" -> 62. First run of digits wins.
pub fn parse_percent(text: &str) -> Option<f64> {
    if is_missing(text) {
        return None;
    }
    first_digits(text)
}

/// "$68,622" -> 68622. For "$24,997 (IS) / $43,287 (OS)" only the part before `/` counts.
pub fn parse_currency(text: &str) -> Option<f64> {
    if is_missing(text) {
        return None;
    }
    let first = text.split('/').next().unwrap_or_default().trim();
    let cleaned = first.replace(['$', ','], "");
    first_digits(&cleaned)
}

/// "1,171" -> 1171. The text must start with an integer once separators are gone.
pub fn parse_count(text: &str) -> Option<f64> {
    if is_missing(text) {
        return None;
    }
    let cleaned = text.trim().replace(',', "");
    LEADING_INT_RE
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .map(|n| n as f64)
}

/// "540-640" or "540 – 640" -> (540, 640). Both sides absent when nothing matches.
pub fn parse_score_range(text: &str) -> ScoreRange {
    if is_missing(text) {
        return ScoreRange::default();
    }
    match SCORE_RANGE_RE.captures(text) {
        Some(caps) => ScoreRange {
            low: caps[1].parse::<f64>().ok(),
            high: caps[2].parse::<f64>().ok(),
        },
        None => ScoreRange::default(),
    }
}

/// "52°/33°" -> 52 (the high).
pub fn parse_temperature(text: &str) -> Option<f64> {
    if is_missing(text) {
        return None;
    }
    TEMPERATURE_RE
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
}

fn first_digits(text: &str) -> Option<f64> {
    DIGITS_RE
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &[&str] = &["", "-", "N/A", "Not Reported", "  N/A "];

    #[test]
    fn sentinels_are_absent_everywhere() {
        for t in MISSING {
            assert_eq!(parse_percent(t), None, "percent {:?}", t);
            assert_eq!(parse_currency(t), None, "currency {:?}", t);
            assert_eq!(parse_count(t), None, "count {:?}", t);
            assert_eq!(parse_score_range(t), ScoreRange::default(), "range {:?}", t);
            assert_eq!(parse_temperature(t), None, "temp {:?}", t);
        }
    }

    #[test]
    fn percent() {
        assert_eq!(parse_percent("62%"), Some(62.0));
        assert_eq!(parse_percent("~7% (est.)"), Some(7.0));
        assert_eq!(parse_percent("Test Blind"), None);
    }

    #[test]
    fn currency_takes_first_segment() {
        assert_eq!(parse_currency("$24,997 (IS) / $43,287 (OS)"), Some(24997.0));
        assert_eq!(parse_currency("$68,622"), Some(68622.0));
        assert_eq!(parse_currency("Varies"), None);
    }

    #[test]
    fn count_strips_separators() {
        assert_eq!(parse_count("1,171"), Some(1171.0));
        assert_eq!(parse_count("245 days"), Some(245.0));
        assert_eq!(parse_count("about 200"), None);
    }

    #[test]
    fn score_ranges() {
        assert_eq!(
            parse_score_range("540-640"),
            ScoreRange { low: Some(540.0), high: Some(640.0) }
        );
        assert_eq!(
            parse_score_range("33 – 35"),
            ScoreRange { low: Some(33.0), high: Some(35.0) }
        );
        assert_eq!(parse_score_range("N/A"), ScoreRange::default());
        assert_eq!(parse_score_range("Test Blind"), ScoreRange::default());
    }

    #[test]
    fn temperature_takes_high() {
        assert_eq!(parse_temperature("52°/33°"), Some(52.0));
        assert_eq!(parse_temperature("-5°/-18°"), Some(-5.0));
        assert_eq!(parse_temperature("52"), None);
    }

    #[test]
    fn pure() {
        for t in ["62%", "$1,000 / $2", "1,171", "540-640", "52°/33°", "junk"] {
            assert_eq!(parse_percent(t), parse_percent(t));
            assert_eq!(parse_currency(t), parse_currency(t));
            assert_eq!(parse_count(t), parse_count(t));
            assert_eq!(parse_score_range(t), parse_score_range(t));
            assert_eq!(parse_temperature(t), parse_temperature(t));
        }
    }

    #[test]
    fn reported() {
        assert!(is_reported("Nov 1"));
        assert!(!is_reported("Not Reported"));
        assert!(!is_reported("   "));
    }
}

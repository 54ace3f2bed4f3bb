use tracing::{debug, warn};

use super::coerce::{
    parse_count, parse_currency, parse_percent, parse_score_range, parse_temperature,
};
use super::columns as col;
use super::csv_line::{content_lines, split_line};
use crate::university::{derive_id, Field, ScoreRange, University};

/// Records parsed from one primary source, plus how many rows were thrown away.
#[derive(Debug, Default)]
pub struct ParsedSource {
    pub universities: Vec<University>,
    pub dropped_rows: usize,
}

/// Parse one primary CSV document. The header line is skipped, never read for names.
pub fn parse_primary(text: &str) -> ParsedSource {
    let lines = content_lines(text);
    if lines.len() < 2 {
        return ParsedSource::default();
    }

    let header_width = split_line(lines[0]).len();
    if header_width != col::WIDTH {
        warn!(
            "Primary header has {} columns, expected {}; reading positionally anyway",
            header_width,
            col::WIDTH
        );
    }

    let mut out = ParsedSource::default();
    for line in &lines[1..] {
        let values = split_line(line);
        match build_university(&values) {
            Some(u) => out.universities.push(u),
            None => out.dropped_rows += 1,
        }
    }

    if out.dropped_rows > 0 {
        debug!("Dropped {} malformed rows", out.dropped_rows);
    }
    out
}

/// Map one split row to a record; `None` when the row is malformed.
pub fn build_university(values: &[String]) -> Option<University> {
    if values.len() < col::MIN_ROW_WIDTH || values[col::INSTITUTION].is_empty() {
        return None;
    }

    let get = |i: usize| values.get(i).cloned().unwrap_or_default();
    let percent = |i: usize| {
        let raw = get(i);
        let value = parse_percent(&raw);
        Field::new(raw, value)
    };
    let currency = |i: usize| {
        let raw = get(i);
        let value = parse_currency(&raw);
        Field::new(raw, value)
    };
    let count = |i: usize| {
        let raw = get(i);
        let value = parse_count(&raw);
        Field::new(raw, value)
    };
    let range = |i: usize| -> Field<ScoreRange> {
        let raw = get(i);
        let value = parse_score_range(&raw);
        let value = (value.low.is_some() || value.high.is_some()).then_some(value);
        Field::new(raw, value)
    };
    let temperature = |i: usize| {
        let raw = get(i);
        let value = parse_temperature(&raw);
        Field::new(raw, value)
    };

    let institution = get(col::INSTITUTION);
    Some(University {
        id: derive_id(&institution),
        institution,
        ed_acceptance_rate: percent(col::ED_ACCEPTANCE_RATE),
        overall_acceptance_rate: percent(col::OVERALL_ACCEPTANCE_RATE),
        regular_acceptance_rate: percent(col::REGULAR_ACCEPTANCE_RATE),
        percent_submitting_sat: percent(col::PERCENT_SUBMITTING_SAT),
        percent_submitting_act: percent(col::PERCENT_SUBMITTING_ACT),
        sat_math: range(col::SAT_MATH),
        sat_rw: range(col::SAT_RW),
        act: range(col::ACT),
        international_acceptance_rate: get(col::INTERNATIONAL_ACCEPTANCE_RATE),
        demonstrated_interest: get(col::DEMONSTRATED_INTEREST),
        early_decision_i: get(col::EARLY_DECISION_I),
        early_decision_ii: get(col::EARLY_DECISION_II),
        early_action_i: get(col::EARLY_ACTION_I),
        early_action_ii: get(col::EARLY_ACTION_II),
        regular_decision: get(col::REGULAR_DECISION),
        cost_of_attendance: currency(col::COST_OF_ATTENDANCE),
        percent_merit_aid: percent(col::PERCENT_MERIT_AID),
        avg_merit_award: currency(col::AVG_MERIT_AWARD),
        percent_need_met: percent(col::PERCENT_NEED_MET),
        avg_need_based_grant: get(col::AVG_NEED_BASED_GRANT),
        percent_on_campus: percent(col::PERCENT_ON_CAMPUS),
        housing_requirement: get(col::HOUSING_REQUIREMENT),
        median_earnings_6_years: get(col::MEDIAN_EARNINGS_6_YEARS),
        median_earnings_10_years: currency(col::MEDIAN_EARNINGS_10_YEARS),
        net_roi_20_years: currency(col::NET_ROI_20_YEARS),
        freshman_retention: percent(col::FRESHMAN_RETENTION),
        graduation_rate_4_year: percent(col::GRADUATION_RATE_4_YEAR),
        graduation_rate_6_year: percent(col::GRADUATION_RATE_6_YEAR),
        notable_scholarships: get(col::NOTABLE_SCHOLARSHIPS),
        cs_median_salary: get(col::CS_MEDIAN_SALARY),
        city: get(col::CITY),
        state: get(col::STATE),
        avg_jan_temp: temperature(col::AVG_JAN_TEMP),
        avg_april_temp: get(col::AVG_APRIL_TEMP),
        avg_july_temp: get(col::AVG_JULY_TEMP),
        avg_oct_temp: get(col::AVG_OCT_TEMP),
        days_with_precipitation: count(col::DAYS_WITH_PRECIPITATION),
        sunny_days: count(col::SUNNY_DAYS),
        total_enrollment: count(col::TOTAL_ENROLLMENT),
        percent_female: get(col::PERCENT_FEMALE),
        percent_male: get(col::PERCENT_MALE),
        percent_african_american: get(col::PERCENT_AFRICAN_AMERICAN),
        percent_asian: get(col::PERCENT_ASIAN),
        percent_hispanic: get(col::PERCENT_HISPANIC),
        percent_white: get(col::PERCENT_WHITE),
        percent_unknown: get(col::PERCENT_UNKNOWN),
        percent_international: percent(col::PERCENT_INTERNATIONAL),
        no_supplemental_essays: None,
        free_application: None,
    })
}

// ── Tests ──

use serde::Serialize;

/// A display string paired with its coerced analytic value.
///
/// `value` is only present when `raw` was unambiguously parseable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Field<T> {
    pub raw: String,
    pub value: Option<T>,
}

impl<T> Field<T> {
    pub fn new(raw: impl Into<String>, value: Option<T>) -> Self {
        Self {
            raw: raw.into(),
            value,
        }
    }
}

/// Low/high pair from a "540-640" style score range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreRange {
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl ScoreRange {
    pub fn both(&self) -> Option<(f64, f64)> {
        Some((self.low?, self.high?))
    }
}

/// The five application deadline columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeadlineKind {
    EarlyDecision1,
    EarlyDecision2,
    EarlyAction1,
    EarlyAction2,
    Regular,
}

impl DeadlineKind {
    pub const ALL: [DeadlineKind; 5] = [
        DeadlineKind::EarlyDecision1,
        DeadlineKind::EarlyDecision2,
        DeadlineKind::EarlyAction1,
        DeadlineKind::EarlyAction2,
        DeadlineKind::Regular,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DeadlineKind::EarlyDecision1 => "ED I",
            DeadlineKind::EarlyDecision2 => "ED II",
            DeadlineKind::EarlyAction1 => "EA I",
            DeadlineKind::EarlyAction2 => "EA II",
            DeadlineKind::Regular => "RD",
        }
    }
}

/// One institution, as assembled from the primary sources plus the extras overlay.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: String,
    pub institution: String,

    // Admissions
    pub ed_acceptance_rate: Field<f64>,
    pub overall_acceptance_rate: Field<f64>,
    pub regular_acceptance_rate: Field<f64>,
    #[serde(rename = "percentSubmittingSAT")]
    pub percent_submitting_sat: Field<f64>,
    #[serde(rename = "percentSubmittingACT")]
    pub percent_submitting_act: Field<f64>,
    pub sat_math: Field<ScoreRange>,
    #[serde(rename = "satRW")]
    pub sat_rw: Field<ScoreRange>,
    pub act: Field<ScoreRange>,
    pub international_acceptance_rate: String,
    pub demonstrated_interest: String,

    // Deadlines
    pub early_decision_i: String,
    #[serde(rename = "earlyDecisionII")]
    pub early_decision_ii: String,
    pub early_action_i: String,
    #[serde(rename = "earlyActionII")]
    pub early_action_ii: String,
    pub regular_decision: String,

    // Cost and aid
    pub cost_of_attendance: Field<f64>,
    pub percent_merit_aid: Field<f64>,
    pub avg_merit_award: Field<f64>,
    pub percent_need_met: Field<f64>,
    pub avg_need_based_grant: String,

    // Campus life
    pub percent_on_campus: Field<f64>,
    pub housing_requirement: String,

    // Outcomes
    pub median_earnings_6_years: String,
    pub median_earnings_10_years: Field<f64>,
    #[serde(rename = "netROI20Years")]
    pub net_roi_20_years: Field<f64>,
    pub freshman_retention: Field<f64>,
    pub graduation_rate_4_year: Field<f64>,
    pub graduation_rate_6_year: Field<f64>,
    pub notable_scholarships: String,
    pub cs_median_salary: String,

    // Location and climate
    pub city: String,
    pub state: String,
    pub avg_jan_temp: Field<f64>,
    pub avg_april_temp: String,
    pub avg_july_temp: String,
    pub avg_oct_temp: String,
    pub days_with_precipitation: Field<f64>,
    pub sunny_days: Field<f64>,

    // Student body
    pub total_enrollment: Field<f64>,
    pub percent_female: String,
    pub percent_male: String,
    pub percent_african_american: String,
    pub percent_asian: String,
    pub percent_hispanic: String,
    pub percent_white: String,
    pub percent_unknown: String,
    pub percent_international: Field<f64>,

    // Extras overlay; unset when the extras source has no row for this name
    pub no_supplemental_essays: Option<bool>,
    pub free_application: Option<bool>,
}

impl University {
    pub fn deadline(&self, kind: DeadlineKind) -> &str {
        match kind {
            DeadlineKind::EarlyDecision1 => &self.early_decision_i,
            DeadlineKind::EarlyDecision2 => &self.early_decision_ii,
            DeadlineKind::EarlyAction1 => &self.early_action_i,
            DeadlineKind::EarlyAction2 => &self.early_action_ii,
            DeadlineKind::Regular => &self.regular_decision,
        }
    }

    /// Lowercased, trimmed name used to join against the extras source.
    pub fn match_key(&self) -> String {
        self.institution.trim().to_lowercase()
    }
}

/// Slug identity: lowercase, non-alphanumeric runs collapsed to `-`, ends trimmed.
pub fn derive_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !id.is_empty() {
                id.push('-');
            }
            pending_dash = false;
            id.push(c);
        } else {
            pending_dash = true;
        }
    }
    id
}

// ── Tests ──

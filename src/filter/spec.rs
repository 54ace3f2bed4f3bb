use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::deadline::DeadlineWindow;
use crate::error::SpecError;

/// Every filter dimension the engine understands.
///
/// `None` means the dimension imposes nothing. The struct is always complete:
/// JSON input fills unspecified keys with `None` and rejects unknown ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterSpec {
    pub search: String,

    // Deadlines
    pub deadline_range: Option<DeadlineWindow>,
    #[serde(rename = "hasED1")]
    pub has_ed1: Option<bool>,
    #[serde(rename = "hasED2")]
    pub has_ed2: Option<bool>,
    #[serde(rename = "hasEA1")]
    pub has_ea1: Option<bool>,
    #[serde(rename = "hasEA2")]
    pub has_ea2: Option<bool>,

    // Admissions and selectivity
    pub acceptance_rate_min: Option<f64>,
    pub acceptance_rate_max: Option<f64>,
    pub sat_score_min: Option<f64>,
    pub sat_score_max: Option<f64>,
    pub act_score_min: Option<f64>,
    pub act_score_max: Option<f64>,
    pub test_optional: Option<bool>,
    pub demonstrated_interest: Option<Vec<InterestLevel>>,

    // Financials
    pub cost_of_attendance_max: Option<f64>,
    pub percent_need_met_min: Option<f64>,
    pub avg_merit_award_min: Option<f64>,
    pub percent_merit_aid_min: Option<f64>,
    #[serde(rename = "netROIMin")]
    pub net_roi_min: Option<f64>,
    pub median_earnings_10_years_min: Option<f64>,

    // Location
    pub state: Option<String>,
    pub sunny_days_min: Option<f64>,
    pub precipitation_days_max: Option<f64>,
    pub jan_temp_min: Option<f64>,

    // Student body
    pub enrollment_min: Option<f64>,
    pub enrollment_max: Option<f64>,
    pub percent_international_min: Option<f64>,

    // Outcomes
    pub graduation_rate_4_year_min: Option<f64>,
    pub freshman_retention_min: Option<f64>,

    // Campus life
    pub housing_requirement: Option<HousingRequirement>,
    pub percent_on_campus_min: Option<f64>,

    // Quick toggles
    pub aid_available: Option<bool>,
    pub free_application: Option<bool>,
    pub no_essays: Option<bool>,
}

impl FilterSpec {
    /// Same search text, every other dimension cleared.
    pub fn clear_filters(&self) -> FilterSpec {
        FilterSpec {
            search: self.search.clone(),
            ..Default::default()
        }
    }

    /// Turn a quick filter on, or off again if it is already on.
    pub fn toggle_quick(&mut self, quick: QuickFilter) {
        match quick {
            QuickFilter::Free => toggle(&mut self.free_application, true),
            QuickFilter::NoEssays => toggle(&mut self.no_essays, true),
            QuickFilter::Aid => toggle(&mut self.aid_available, true),
            QuickFilter::Ed2 => toggle(&mut self.has_ed2, true),
            QuickFilter::International => {
                toggle(&mut self.percent_international_min, INTERNATIONAL_FRIENDLY_MIN)
            }
        }
    }

    pub fn with_quick(mut self, quick: QuickFilter) -> Self {
        if !quick.is_on(&self) {
            self.toggle_quick(quick);
        }
        self
    }
}

fn toggle<T>(slot: &mut Option<T>, on: T) {
    *slot = match slot.take() {
        Some(_) => None,
        None => Some(on),
    };
}

/// Minimum international share for the "international friendly" preset.
pub const INTERNATIONAL_FRIENDLY_MIN: f64 = 5.0;

/// One-tap presets from the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickFilter {
    Free,
    NoEssays,
    Aid,
    Ed2,
    International,
}

impl QuickFilter {
    pub fn is_on(&self, spec: &FilterSpec) -> bool {
        match self {
            QuickFilter::Free => spec.free_application == Some(true),
            QuickFilter::NoEssays => spec.no_essays == Some(true),
            QuickFilter::Aid => spec.aid_available == Some(true),
            QuickFilter::Ed2 => spec.has_ed2 == Some(true),
            QuickFilter::International => spec.percent_international_min.is_some_and(|v| v > 0.0),
        }
    }
}

impl FromStr for QuickFilter {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(QuickFilter::Free),
            "noessays" => Ok(QuickFilter::NoEssays),
            "aid" => Ok(QuickFilter::Aid),
            "ed2" => Ok(QuickFilter::Ed2),
            "intl" => Ok(QuickFilter::International),
            _ => Err(SpecError::UnknownQuickFilter(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterestLevel {
    #[serde(rename = "Very Important")]
    VeryImportant,
    #[serde(rename = "Important")]
    Important,
    #[serde(rename = "Considered")]
    Considered,
    #[serde(rename = "Not Considered")]
    NotConsidered,
}

impl InterestLevel {
    pub const ALL: [InterestLevel; 4] = [
        InterestLevel::VeryImportant,
        InterestLevel::Important,
        InterestLevel::Considered,
        InterestLevel::NotConsidered,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InterestLevel::VeryImportant => "Very Important",
            InterestLevel::Important => "Important",
            InterestLevel::Considered => "Considered",
            InterestLevel::NotConsidered => "Not Considered",
        }
    }
}

impl fmt::Display for InterestLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InterestLevel {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InterestLevel::ALL
            .into_iter()
            .find(|l| l.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SpecError::UnknownInterestLevel(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HousingRequirement {
    #[serde(rename = "Through Freshman Year")]
    FreshmanYear,
    #[serde(rename = "Through Sophomore Year")]
    SophomoreYear,
    #[serde(rename = "Through Junior Year")]
    JuniorYear,
    #[serde(rename = "Through Senior Year")]
    SeniorYear,
}

impl HousingRequirement {
    pub const ALL: [HousingRequirement; 4] = [
        HousingRequirement::FreshmanYear,
        HousingRequirement::SophomoreYear,
        HousingRequirement::JuniorYear,
        HousingRequirement::SeniorYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HousingRequirement::FreshmanYear => "Through Freshman Year",
            HousingRequirement::SophomoreYear => "Through Sophomore Year",
            HousingRequirement::JuniorYear => "Through Junior Year",
            HousingRequirement::SeniorYear => "Through Senior Year",
        }
    }
}

impl fmt::Display for HousingRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HousingRequirement {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HousingRequirement::ALL
            .into_iter()
            .find(|h| h.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SpecError::UnknownHousingRequirement(s.to_string()))
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_fully_defined_default() {
        let spec: FilterSpec = serde_json::from_str("{}").unwrap();
        assert_eq!(spec, FilterSpec::default());
    }

    #[test]
    fn json_keys_are_camel_case() {
        let spec: FilterSpec = serde_json::from_str(
            r#"{
                "search": "tech",
                "deadlineRange": "Jan 1 – Jan 5",
                "hasED2": true,
                "costOfAttendanceMax": 50000,
                "netROIMin": 100000,
                "graduationRate4YearMin": 70,
                "demonstratedInterest": ["Considered", "Not Considered"],
                "housingRequirement": "Through Junior Year",
                "freeApplication": null
            }"#,
        )
        .unwrap();
        assert_eq!(spec.search, "tech");
        assert_eq!(spec.deadline_range, Some(DeadlineWindow::Jan1To5));
        assert_eq!(spec.has_ed2, Some(true));
        assert_eq!(spec.cost_of_attendance_max, Some(50_000.0));
        assert_eq!(spec.net_roi_min, Some(100_000.0));
        assert_eq!(spec.graduation_rate_4_year_min, Some(70.0));
        assert_eq!(
            spec.demonstrated_interest,
            Some(vec![InterestLevel::Considered, InterestLevel::NotConsidered])
        );
        assert_eq!(spec.housing_requirement, Some(HousingRequirement::JuniorYear));
        assert_eq!(spec.free_application, None);
    }

    #[test]
    fn unknown_keys_and_labels_rejected() {
        assert!(serde_json::from_str::<FilterSpec>(r#"{"costMax": 1}"#).is_err());
        assert!(serde_json::from_str::<FilterSpec>(r#"{"deadlineRange": "Mar 1 – Mar 9"}"#).is_err());
        assert!(serde_json::from_str::<FilterSpec>(r#"{"housingRequirement": "Forever"}"#).is_err());
    }

    #[test]
    fn quick_filters_toggle() {
        let mut spec = FilterSpec::default();
        spec.toggle_quick(QuickFilter::International);
        assert_eq!(spec.percent_international_min, Some(5.0));
        spec.toggle_quick(QuickFilter::International);
        assert_eq!(spec.percent_international_min, None);

        let spec = FilterSpec::default().with_quick(QuickFilter::Ed2).with_quick(QuickFilter::Ed2);
        assert_eq!(spec.has_ed2, Some(true));
    }

    #[test]
    fn quick_filter_names() {
        assert_eq!("noessays".parse::<QuickFilter>(), Ok(QuickFilter::NoEssays));
        assert_eq!("INTL".parse::<QuickFilter>(), Ok(QuickFilter::International));
        assert!("cheap".parse::<QuickFilter>().is_err());
    }

    #[test]
    fn clear_keeps_search() {
        let spec = FilterSpec {
            search: "boston".into(),
            state: Some("MA".into()),
            no_essays: Some(true),
            ..Default::default()
        };
        let cleared = spec.clear_filters();
        assert_eq!(cleared.search, "boston");
        assert_eq!(cleared.state, None);
        assert_eq!(cleared.no_essays, None);
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!("very important".parse::<InterestLevel>(), Ok(InterestLevel::VeryImportant));
        assert_eq!(
            "through senior year".parse::<HousingRequirement>(),
            Ok(HousingRequirement::SeniorYear)
        );
    }
}

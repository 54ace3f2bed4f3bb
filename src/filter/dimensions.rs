//! Table of filter dimensions.
//!
//! Each set key of a [`FilterSpec`] becomes one [`Predicate`]; the engine
//! only ever loops over those. Adding a dimension means adding a row here.

use super::heuristics::{aid_available, test_optional};
use super::metric::{Bound, Metric};
use super::spec::FilterSpec;
use crate::parser::coerce::is_reported;
use crate::university::{DeadlineKind, University};

pub const SEARCH_KEY: &str = "search";

/// One active dimension, bound to the values from a specification.
pub struct Predicate<'a> {
    pub key: &'static str,
    test: Box<dyn Fn(&University) -> bool + 'a>,
}

impl<'a> Predicate<'a> {
    fn new(key: &'static str, test: impl Fn(&University) -> bool + 'a) -> Self {
        Self {
            key,
            test: Box::new(test),
        }
    }

    pub fn test(&self, u: &University) -> bool {
        (self.test)(u)
    }
}

struct RangeDimension {
    key: &'static str,
    limit: fn(&FilterSpec) -> Option<f64>,
    metric: Metric,
    bound: Bound,
}

struct FlagDimension {
    key: &'static str,
    wanted: fn(&FilterSpec) -> Option<bool>,
    holds: fn(&University) -> bool,
}

const RANGES: &[RangeDimension] = &[
    RangeDimension { key: "acceptanceRateMin", limit: |s| s.acceptance_rate_min, metric: Metric::AcceptanceRate, bound: Bound::Min },
    RangeDimension { key: "acceptanceRateMax", limit: |s| s.acceptance_rate_max, metric: Metric::AcceptanceRate, bound: Bound::Max },
    RangeDimension { key: "satScoreMin", limit: |s| s.sat_score_min, metric: Metric::SatScore, bound: Bound::Min },
    RangeDimension { key: "satScoreMax", limit: |s| s.sat_score_max, metric: Metric::SatScore, bound: Bound::Max },
    RangeDimension { key: "actScoreMin", limit: |s| s.act_score_min, metric: Metric::ActScore, bound: Bound::Min },
    RangeDimension { key: "actScoreMax", limit: |s| s.act_score_max, metric: Metric::ActScore, bound: Bound::Max },
    RangeDimension { key: "costOfAttendanceMax", limit: |s| s.cost_of_attendance_max, metric: Metric::CostOfAttendance, bound: Bound::Max },
    RangeDimension { key: "percentNeedMetMin", limit: |s| s.percent_need_met_min, metric: Metric::PercentNeedMet, bound: Bound::Min },
    RangeDimension { key: "avgMeritAwardMin", limit: |s| s.avg_merit_award_min, metric: Metric::AvgMeritAward, bound: Bound::Min },
    RangeDimension { key: "percentMeritAidMin", limit: |s| s.percent_merit_aid_min, metric: Metric::PercentMeritAid, bound: Bound::Min },
    RangeDimension { key: "netROIMin", limit: |s| s.net_roi_min, metric: Metric::NetRoi, bound: Bound::Min },
    RangeDimension { key: "medianEarnings10YearsMin", limit: |s| s.median_earnings_10_years_min, metric: Metric::MedianEarnings10Years, bound: Bound::Min },
    RangeDimension { key: "sunnyDaysMin", limit: |s| s.sunny_days_min, metric: Metric::SunnyDays, bound: Bound::Min },
    RangeDimension { key: "precipitationDaysMax", limit: |s| s.precipitation_days_max, metric: Metric::PrecipitationDays, bound: Bound::Max },
    RangeDimension { key: "janTempMin", limit: |s| s.jan_temp_min, metric: Metric::JanTemp, bound: Bound::Min },
    RangeDimension { key: "enrollmentMin", limit: |s| s.enrollment_min, metric: Metric::Enrollment, bound: Bound::Min },
    RangeDimension { key: "enrollmentMax", limit: |s| s.enrollment_max, metric: Metric::Enrollment, bound: Bound::Max },
    RangeDimension { key: "percentInternationalMin", limit: |s| s.percent_international_min, metric: Metric::PercentInternational, bound: Bound::Min },
    RangeDimension { key: "graduationRate4YearMin", limit: |s| s.graduation_rate_4_year_min, metric: Metric::GraduationRate4Year, bound: Bound::Min },
    RangeDimension { key: "freshmanRetentionMin", limit: |s| s.freshman_retention_min, metric: Metric::FreshmanRetention, bound: Bound::Min },
    RangeDimension { key: "percentOnCampusMin", limit: |s| s.percent_on_campus_min, metric: Metric::PercentOnCampus, bound: Bound::Min },
];

const FLAGS: &[FlagDimension] = &[
    FlagDimension { key: "hasED1", wanted: |s| s.has_ed1, holds: |u| has_deadline(u, DeadlineKind::EarlyDecision1) },
    FlagDimension { key: "hasED2", wanted: |s| s.has_ed2, holds: |u| has_deadline(u, DeadlineKind::EarlyDecision2) },
    FlagDimension { key: "hasEA1", wanted: |s| s.has_ea1, holds: |u| has_deadline(u, DeadlineKind::EarlyAction1) },
    FlagDimension { key: "hasEA2", wanted: |s| s.has_ea2, holds: |u| has_deadline(u, DeadlineKind::EarlyAction2) },
    FlagDimension { key: "testOptional", wanted: |s| s.test_optional, holds: test_optional },
    FlagDimension { key: "aidAvailable", wanted: |s| s.aid_available, holds: aid_available },
    FlagDimension { key: "freeApplication", wanted: |s| s.free_application, holds: |u| u.free_application == Some(true) },
    FlagDimension { key: "noEssays", wanted: |s| s.no_essays, holds: |u| u.no_supplemental_essays == Some(true) },
];

fn has_deadline(u: &University, kind: DeadlineKind) -> bool {
    is_reported(u.deadline(kind))
}

/// Build one predicate per constrained dimension of `spec`.
pub fn active_predicates(spec: &FilterSpec) -> Vec<Predicate<'_>> {
    let mut out = Vec::new();

    let needle = spec.search.trim().to_lowercase();
    if !needle.is_empty() {
        out.push(Predicate::new(SEARCH_KEY, move |u: &University| {
            [&u.institution, &u.city, &u.state]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        }));
    }

    if let Some(window) = spec.deadline_range {
        out.push(Predicate::new("deadlineRange", move |u: &University| window.matches(u)));
    }

    for dim in FLAGS {
        if let Some(wanted) = (dim.wanted)(spec) {
            let holds = dim.holds;
            out.push(Predicate::new(dim.key, move |u: &University| holds(u) == wanted));
        }
    }

    for dim in RANGES {
        if let Some(limit) = (dim.limit)(spec) {
            let (metric, bound) = (dim.metric, dim.bound);
            out.push(Predicate::new(dim.key, move |u: &University| bound.admits(metric, limit, u)));
        }
    }

    if let Some(levels) = spec.demonstrated_interest.as_deref().filter(|l| !l.is_empty()) {
        out.push(Predicate::new("demonstratedInterest", move |u: &University| {
            levels.iter().any(|l| l.label() == u.demonstrated_interest)
        }));
    }

    if let Some(state) = spec.state.as_deref() {
        out.push(Predicate::new("state", move |u: &University| u.state == state));
    }

    if let Some(housing) = spec.housing_requirement {
        out.push(Predicate::new("housingRequirement", move |u: &University| {
            u.housing_requirement == housing.label()
        }));
    }

    out
}

use std::collections::BTreeMap;

use serde::Serialize;

use crate::university::University;

/// A numeric quantity that range filters and sliders work on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    AcceptanceRate,
    SatScore,
    ActScore,
    CostOfAttendance,
    PercentNeedMet,
    AvgMeritAward,
    PercentMeritAid,
    NetRoi,
    MedianEarnings10Years,
    SunnyDays,
    PrecipitationDays,
    JanTemp,
    Enrollment,
    PercentInternational,
    GraduationRate4Year,
    FreshmanRetention,
    PercentOnCampus,
}

impl Metric {
    pub const ALL: [Metric; 17] = [
        Metric::AcceptanceRate,
        Metric::SatScore,
        Metric::ActScore,
        Metric::CostOfAttendance,
        Metric::PercentNeedMet,
        Metric::AvgMeritAward,
        Metric::PercentMeritAid,
        Metric::NetRoi,
        Metric::MedianEarnings10Years,
        Metric::SunnyDays,
        Metric::PrecipitationDays,
        Metric::JanTemp,
        Metric::Enrollment,
        Metric::PercentInternational,
        Metric::GraduationRate4Year,
        Metric::FreshmanRetention,
        Metric::PercentOnCampus,
    ];

    /// Slider step; bounds are rounded up to a multiple of this.
    pub fn increment(&self) -> f64 {
        match self {
            Metric::SatScore => 100.0,
            Metric::ActScore => 1.0,
            Metric::CostOfAttendance => 10_000.0,
            Metric::AvgMeritAward => 5_000.0,
            Metric::NetRoi => 100_000.0,
            Metric::MedianEarnings10Years => 10_000.0,
            Metric::Enrollment => 1_000.0,
            Metric::AcceptanceRate
            | Metric::PercentNeedMet
            | Metric::PercentMeritAid
            | Metric::SunnyDays
            | Metric::PrecipitationDays
            | Metric::JanTemp
            | Metric::PercentInternational
            | Metric::GraduationRate4Year
            | Metric::FreshmanRetention
            | Metric::PercentOnCampus => 10.0,
        }
    }

    /// The record's (low, high) for this metric. Scalars give (v, v).
    pub fn range(&self, u: &University) -> Option<(f64, f64)> {
        let scalar = |v: Option<f64>| v.map(|v| (v, v));
        match self {
            Metric::AcceptanceRate => scalar(u.overall_acceptance_rate.value),
            Metric::SatScore => {
                let (math_low, math_high) = u.sat_math.value?.both()?;
                let (rw_low, rw_high) = u.sat_rw.value?.both()?;
                Some((math_low + rw_low, math_high + rw_high))
            }
            Metric::ActScore => u.act.value?.both(),
            Metric::CostOfAttendance => scalar(u.cost_of_attendance.value),
            Metric::PercentNeedMet => scalar(u.percent_need_met.value),
            Metric::AvgMeritAward => scalar(u.avg_merit_award.value),
            Metric::PercentMeritAid => scalar(u.percent_merit_aid.value),
            Metric::NetRoi => scalar(u.net_roi_20_years.value),
            Metric::MedianEarnings10Years => scalar(u.median_earnings_10_years.value),
            Metric::SunnyDays => scalar(u.sunny_days.value),
            Metric::PrecipitationDays => scalar(u.days_with_precipitation.value),
            Metric::JanTemp => scalar(u.avg_jan_temp.value),
            Metric::Enrollment => scalar(u.total_enrollment.value),
            Metric::PercentInternational => scalar(u.percent_international.value),
            Metric::GraduationRate4Year => scalar(u.graduation_rate_4_year.value),
            Metric::FreshmanRetention => scalar(u.freshman_retention.value),
            Metric::PercentOnCampus => scalar(u.percent_on_campus.value),
        }
    }

    /// Largest value the record can report for this metric.
    pub fn high(&self, u: &University) -> Option<f64> {
        self.range(u).map(|(_, high)| high)
    }
}

/// Which side of a range filter a bound sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

impl Bound {
    /// Fail-closed: a record without a value for the metric never passes.
    pub fn admits(&self, metric: Metric, limit: f64, u: &University) -> bool {
        match (self, metric.range(u)) {
            (_, None) => false,
            (Bound::Min, Some((_, high))) => high >= limit,
            (Bound::Max, Some((low, _))) => low <= limit,
        }
    }
}

/// `ceil(max / step) * step`, never below one step.
pub fn round_up(max: f64, step: f64) -> f64 {
    ((max / step).ceil() * step).max(step)
}

/// Upper slider bound per metric over the given records.
pub fn bounds<'a>(universities: impl IntoIterator<Item = &'a University>) -> BTreeMap<Metric, f64> {
    let mut maxima: BTreeMap<Metric, f64> = BTreeMap::new();
    for u in universities {
        for metric in Metric::ALL {
            if let Some(v) = metric.high(u) {
                maxima
                    .entry(metric)
                    .and_modify(|m| *m = m.max(v))
                    .or_insert(v);
            }
        }
    }
    Metric::ALL
        .into_iter()
        .map(|m| {
            let max = maxima.get(&m).copied().unwrap_or(0.0);
            (m, round_up(max, m.increment()))
        })
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::university::{Field, ScoreRange};

    fn costing(cost: Option<f64>) -> University {
        University {
            cost_of_attendance: Field::new("", cost),
            ..Default::default()
        }
    }

    #[test]
    fn rounding() {
        assert_eq!(round_up(89_252.0, 10_000.0), 90_000.0);
        assert_eq!(round_up(90_000.0, 10_000.0), 90_000.0);
        assert_eq!(round_up(13_293.0, 1_000.0), 14_000.0);
        assert_eq!(round_up(0.0, 1_000.0), 1_000.0);
        assert_eq!(round_up(-5.0, 10.0), 10.0);
    }

    #[test]
    fn bounds_use_max_observed() {
        let us = [costing(Some(40_000.0)), costing(Some(81_000.0)), costing(None)];
        let b = bounds(&us);
        assert_eq!(b[&Metric::CostOfAttendance], 90_000.0);
        assert_eq!(b[&Metric::Enrollment], 1_000.0);
        assert_eq!(b.len(), Metric::ALL.len());
    }

    #[test]
    fn fail_closed_on_missing() {
        let u = costing(None);
        assert!(!Bound::Max.admits(Metric::CostOfAttendance, 1e12, &u));
        assert!(!Bound::Min.admits(Metric::CostOfAttendance, 0.0, &u));
    }

    #[test]
    fn scalar_bounds() {
        let u = costing(Some(40_000.0));
        assert!(Bound::Max.admits(Metric::CostOfAttendance, 40_000.0, &u));
        assert!(!Bound::Max.admits(Metric::CostOfAttendance, 39_999.0, &u));
        assert!(Bound::Min.admits(Metric::CostOfAttendance, 40_000.0, &u));
        assert!(!Bound::Min.admits(Metric::CostOfAttendance, 40_001.0, &u));
    }

    #[test]
    fn sat_composite_overlaps() {
        let range = |low, high| Field::new("", Some(ScoreRange { low: Some(low), high: Some(high) }));
        let u = University {
            sat_math: range(600.0, 700.0),
            sat_rw: range(580.0, 680.0),
            ..Default::default()
        };
        assert_eq!(Metric::SatScore.range(&u), Some((1180.0, 1380.0)));
        assert!(Bound::Min.admits(Metric::SatScore, 1300.0, &u));
        assert!(!Bound::Min.admits(Metric::SatScore, 1400.0, &u));
        assert!(Bound::Max.admits(Metric::SatScore, 1200.0, &u));
        assert!(!Bound::Max.admits(Metric::SatScore, 1100.0, &u));
    }

    #[test]
    fn sat_needs_both_sections() {
        let u = University {
            sat_math: Field::new("600-700", Some(ScoreRange { low: Some(600.0), high: Some(700.0) })),
            ..Default::default()
        };
        assert_eq!(Metric::SatScore.range(&u), None);
    }
}

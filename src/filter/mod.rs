pub mod deadline;
pub mod dimensions;
pub mod heuristics;
pub mod metric;
pub mod spec;

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::Catalog;
use crate::university::University;
use dimensions::{active_predicates, SEARCH_KEY};

pub use deadline::DeadlineWindow;
pub use metric::Metric;
pub use spec::{FilterSpec, HousingRequirement, InterestLevel, QuickFilter};

/// Records satisfying every constrained dimension, in catalog order.
pub fn filter<'a>(catalog: &'a Catalog, spec: &FilterSpec) -> Vec<&'a University> {
    filter_records(catalog.universities(), spec)
}

pub fn filter_records<'a>(records: &'a [University], spec: &FilterSpec) -> Vec<&'a University> {
    let predicates = active_predicates(spec);
    records
        .iter()
        .filter(|u| predicates.iter().all(|p| p.test(u)))
        .collect()
}

/// Sorted, distinct, non-empty state values.
pub fn distinct_states(catalog: &Catalog) -> Vec<String> {
    catalog
        .universities()
        .iter()
        .map(|u| u.state.trim())
        .filter(|s| !s.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Slider upper bound per metric.
pub fn filter_bounds(catalog: &Catalog) -> BTreeMap<Metric, f64> {
    metric::bounds(catalog.universities())
}

/// Number of constrained dimensions, not counting free-text search.
pub fn active_dimension_count(spec: &FilterSpec) -> usize {
    active_predicates(spec)
        .iter()
        .filter(|p| p.key != SEARCH_KEY)
        .count()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::coerce::{parse_currency, parse_percent};
    use crate::university::{derive_id, Field};

    fn uni(name: &str, state: &str, cost: &str) -> University {
        University {
            id: derive_id(name),
            institution: name.to_string(),
            city: "Springfield".to_string(),
            state: state.to_string(),
            cost_of_attendance: Field::new(cost, parse_currency(cost)),
            ..Default::default()
        }
    }

    fn records() -> Vec<University> {
        vec![
            uni("Alpha College", "MA", "$40,000"),
            uni("Beta University", "NY", "$80,000"),
            uni("Gamma Institute", "ma ", "N/A"),
        ]
    }

    fn names(found: &[&University]) -> Vec<String> {
        found.iter().map(|u| u.institution.clone()).collect()
    }

    #[test]
    fn empty_spec_returns_everything_in_order() {
        let rs = records();
        let found = filter_records(&rs, &FilterSpec::default());
        assert_eq!(names(&found), vec!["Alpha College", "Beta University", "Gamma Institute"]);
    }

    #[test]
    fn search_matches_name_city_or_state() {
        let rs = records();
        let by_name = FilterSpec { search: "BETA".into(), ..Default::default() };
        assert_eq!(names(&filter_records(&rs, &by_name)), vec!["Beta University"]);

        let by_state = FilterSpec { search: "ny".into(), ..Default::default() };
        assert_eq!(names(&filter_records(&rs, &by_state)), vec!["Beta University"]);

        let by_city = FilterSpec { search: "springf".into(), ..Default::default() };
        assert_eq!(filter_records(&rs, &by_city).len(), 3);
    }

    #[test]
    fn cost_max_fails_closed() {
        let rs = records();
        let spec = FilterSpec { cost_of_attendance_max: Some(1e9), ..Default::default() };
        assert_eq!(names(&filter_records(&rs, &spec)), vec!["Alpha College", "Beta University"]);
    }

    #[test]
    fn state_is_exact() {
        let rs = records();
        let spec = FilterSpec { state: Some("MA".into()), ..Default::default() };
        assert_eq!(names(&filter_records(&rs, &spec)), vec!["Alpha College"]);
    }

    #[test]
    fn more_dimensions_never_grow_the_result() {
        let rs = records();
        let s1 = FilterSpec { cost_of_attendance_max: Some(90_000.0), ..Default::default() };
        let s2 = FilterSpec { search: "a".into(), state: Some("NY".into()), ..s1.clone() };
        let r1 = filter_records(&rs, &s1);
        let r2 = filter_records(&rs, &s2);
        assert!(r2.iter().all(|u| r1.iter().any(|v| v.id == u.id)));
        assert!(r2.len() <= r1.len());
    }

    #[test]
    fn counts_exclude_search() {
        let spec = FilterSpec {
            search: "tech".into(),
            acceptance_rate_min: Some(10.0),
            acceptance_rate_max: Some(20.0),
            no_essays: Some(true),
            state: Some("CA".into()),
            ..Default::default()
        };
        assert_eq!(active_dimension_count(&spec), 4);
        assert_eq!(active_dimension_count(&FilterSpec::default()), 0);
    }

    #[test]
    fn aid_toggle_uses_heuristic() {
        let mut rich = uni("Rich U", "CT", "$90,000");
        rich.percent_need_met = Field::new("100%", parse_percent("100%"));
        let rs = vec![rich, uni("Plain U", "CT", "$10,000")];
        let spec = FilterSpec { aid_available: Some(true), ..Default::default() };
        assert_eq!(names(&filter_records(&rs, &spec)), vec!["Rich U"]);
    }
}

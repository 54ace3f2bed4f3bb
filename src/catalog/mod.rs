pub mod collate;
pub mod dedup;
pub mod fetch;

use serde::Serialize;
use tracing::info;

use crate::config::SourceSettings;
use crate::error::CatalogError;
use crate::parser::{merge_extras, parse_extras, parse_primary};
use crate::university::University;
pub use collate::locale_cmp;
use dedup::dedup_by_id;
use fetch::{fetch_all, FetchedSources};

/// Per-source parse outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceStats {
    pub name: String,
    pub records: usize,
    pub dropped_rows: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub sources: Vec<SourceStats>,
    pub extras_entries: usize,
    pub overlay_matches: usize,
    pub duplicates_removed: usize,
    pub total: usize,
}

/// The session's canonical record set. Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    universities: Vec<University>,
    stats: CatalogStats,
}

impl Catalog {
    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    pub fn stats(&self) -> &CatalogStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.universities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }

    /// Look a record up by its derived id.
    pub fn get(&self, id: &str) -> Option<&University> {
        self.universities.iter().find(|u| u.id == id)
    }
}

/// Fetch every source, then build the catalog. Any fetch failure aborts.
pub async fn load_catalog(settings: &SourceSettings) -> Result<Catalog, CatalogError> {
    let fetched = fetch_all(settings).await?;
    let catalog = assemble(&fetched);
    info!(
        "Catalog ready: {} universities ({} duplicates removed, {} with extras)",
        catalog.stats.total, catalog.stats.duplicates_removed, catalog.stats.overlay_matches
    );
    Ok(catalog)
}

/// Parse, merge, deduplicate and sort already-fetched source text.
pub fn assemble(fetched: &FetchedSources) -> Catalog {
    let mut stats = CatalogStats::default();
    let mut all = Vec::new();

    for (name, text) in &fetched.primary {
        let parsed = parse_primary(text);
        stats.sources.push(SourceStats {
            name: name.clone(),
            records: parsed.universities.len(),
            dropped_rows: parsed.dropped_rows,
        });
        all.extend(parsed.universities);
    }

    let extras = parse_extras(&fetched.extras);
    stats.extras_entries = extras.len();

    let merged = merge_extras(&all, &extras);
    let before = merged.len();
    let mut universities = dedup_by_id(merged);
    stats.duplicates_removed = before - universities.len();
    stats.overlay_matches = universities
        .iter()
        .filter(|u| u.free_application.is_some())
        .count();

    universities.sort_by(|a, b| locale_cmp(&a.institution, &b.institution));
    stats.total = universities.len();

    Catalog {
        universities,
        stats,
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, rd: &str, cost: &str) -> String {
        // 17 columns: name .. cost of attendance
        format!("{name},-,-,-,-,-,-,-,-,-,-,-,-,-,-,{rd},\"{cost}\"")
    }

    fn sources(primary: &[&[String]], extras: &str) -> FetchedSources {
        FetchedSources {
            primary: primary
                .iter()
                .enumerate()
                .map(|(i, rows)| (format!("s{}.csv", i + 1), format!("header\n{}\n", rows.join("\n"))))
                .collect(),
            extras: extras.to_string(),
        }
    }

    #[test]
    fn duplicate_across_sources_keeps_first() {
        let fetched = sources(
            &[
                &[row("Alpha College", "Jan 3", "$40,000")],
                &[row("ALPHA COLLEGE", "Jan 3", "$10")],
            ],
            "h\n",
        );
        let catalog = assemble(&fetched);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.universities()[0].cost_of_attendance.value, Some(40_000.0));
        assert_eq!(catalog.stats().duplicates_removed, 1);
    }

    #[test]
    fn sorted_by_name_case_insensitively() {
        let fetched = sources(
            &[&[row("beta University", "-", "-"), row("Alpha College", "-", "-")], &[row("Zeta", "-", "-")]],
            "h\n",
        );
        let catalog = assemble(&fetched);
        let names: Vec<_> = catalog.universities().iter().map(|u| u.institution.as_str()).collect();
        assert_eq!(names, vec!["Alpha College", "beta University", "Zeta"]);
    }

    #[test]
    fn stats_track_sources_and_overlays() {
        let fetched = sources(
            &[&[row("Alpha College", "-", "-"), "Broken,1".to_string()], &[row("Beta", "-", "-")]],
            "h\nalpha college,no,yes\nGhost,yes,yes\n",
        );
        let catalog = assemble(&fetched);
        let stats = catalog.stats();
        assert_eq!(stats.sources[0], SourceStats { name: "s1.csv".into(), records: 1, dropped_rows: 1 });
        assert_eq!(stats.extras_entries, 2);
        assert_eq!(stats.overlay_matches, 1);
        assert_eq!(stats.total, 2);
        assert_eq!(catalog.get("alpha-college").and_then(|u| u.free_application), Some(true));
        assert!(catalog.get("ghost").is_none());
    }

    #[test]
    fn accented_name_sorts_among_ascii_names() {
        let fetched = sources(
            &[&[row("Yale University", "-", "-"), row("École Polytechnique", "-", "-")], &[row("Emory University", "-", "-")]],
            "h\n",
        );
        let catalog = assemble(&fetched);
        let names: Vec<_> = catalog.universities().iter().map(|u| u.institution.as_str()).collect();
        assert_eq!(names, vec!["École Polytechnique", "Emory University", "Yale University"]);
    }
}

use std::collections::HashMap;

use super::columns::extras as col;
use super::csv_line::{content_lines, split_line};
use crate::university::University;

/// Overlay flags for one institution from the extras source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay {
    pub no_essays: bool,
    pub free_application: bool,
}

/// Lowercased, trimmed institution name -> overlay flags.
pub type ExtrasIndex = HashMap<String, Overlay>;

/// Parse the extras CSV. Only a literal "yes" (any case) sets a flag.
pub fn parse_extras(text: &str) -> ExtrasIndex {
    let mut index = ExtrasIndex::new();
    for line in content_lines(text).iter().skip(1) {
        let values = split_line(line);
        let name = values[col::INSTITUTION].to_lowercase();
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let flag = |i: usize| {
            values
                .get(i)
                .is_some_and(|v| v.to_lowercase() == "yes")
        };
        index.insert(
            name.to_string(),
            Overlay {
                no_essays: flag(col::NO_ESSAYS),
                free_application: flag(col::FREE_APPLICATION),
            },
        );
    }
    index
}

/// Overlay extras onto copies of the primary records.
///
/// Records without a matching name pass through with both flags unset.
pub fn merge_extras(universities: &[University], extras: &ExtrasIndex) -> Vec<University> {
    universities
        .iter()
        .map(|u| match extras.get(&u.match_key()) {
            Some(overlay) => University {
                no_supplemental_essays: Some(overlay.no_essays),
                free_application: Some(overlay.free_application),
                ..u.clone()
            },
            None => u.clone(),
        })
        .collect()
}

// ── Tests ──

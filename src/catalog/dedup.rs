use std::collections::HashSet;

use crate::university::University;

/// Keep the first record for each id, preserving first-seen order.
pub fn dedup_by_id(universities: Vec<University>) -> Vec<University> {
    let mut seen = HashSet::new();
    universities
        .into_iter()
        .filter(|u| seen.insert(u.id.clone()))
        .collect()
}

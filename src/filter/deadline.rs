use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SpecError;
use crate::parser::coerce::is_missing;
use crate::university::{DeadlineKind, University};

/// Placeholder year; only month and day take part in comparisons.
const REFERENCE_YEAR: i32 = 2025;

static DEADLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z]+)\s+(\d+)").unwrap());

const MONTHS: &[&str] = &[
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// The five named deadline windows, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeadlineWindow {
    Jan1To5,
    Jan6To10,
    Jan11To15,
    Jan16ToFeb1,
    Feb1ToLate,
}

impl DeadlineWindow {
    pub const ALL: [DeadlineWindow; 5] = [
        DeadlineWindow::Jan1To5,
        DeadlineWindow::Jan6To10,
        DeadlineWindow::Jan11To15,
        DeadlineWindow::Jan16ToFeb1,
        DeadlineWindow::Feb1ToLate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DeadlineWindow::Jan1To5 => "Jan 1 – Jan 5",
            DeadlineWindow::Jan6To10 => "Jan 6 – Jan 10",
            DeadlineWindow::Jan11To15 => "Jan 11 – Jan 15",
            DeadlineWindow::Jan16ToFeb1 => "Jan 16 – Feb 1",
            DeadlineWindow::Feb1ToLate => "Feb 1 – Late",
        }
    }

    /// Inclusive (month, day) bounds.
    fn bounds(&self) -> ((u32, u32), (u32, u32)) {
        match self {
            DeadlineWindow::Jan1To5 => ((1, 1), (1, 5)),
            DeadlineWindow::Jan6To10 => ((1, 6), (1, 10)),
            DeadlineWindow::Jan11To15 => ((1, 11), (1, 15)),
            DeadlineWindow::Jan16ToFeb1 => ((1, 16), (2, 1)),
            DeadlineWindow::Feb1ToLate => ((2, 1), (12, 31)),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let ((sm, sd), (em, ed)) = self.bounds();
        let key = (date.month(), date.day());
        key >= (sm, sd) && key <= (em, ed)
    }

    /// True when any of the record's five deadlines falls in this window.
    pub fn matches(&self, u: &University) -> bool {
        DeadlineKind::ALL
            .iter()
            .filter_map(|&k| parse_deadline(u.deadline(k)))
            .any(|d| self.contains(d))
    }
}

impl fmt::Display for DeadlineWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DeadlineWindow {
    type Err = SpecError;

    /// Accepts the canonical label; a plain hyphen in place of the en-dash is tolerated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(" - ", " – ");
        DeadlineWindow::ALL
            .into_iter()
            .find(|w| w.label() == wanted)
            .ok_or_else(|| SpecError::UnknownDeadlineWindow(s.to_string()))
    }
}

impl Serialize for DeadlineWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for DeadlineWindow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// "Nov 1" -> Nov 1 of the reference year. `None` for sentinels or anything unrecognized.
pub fn parse_deadline(text: &str) -> Option<NaiveDate> {
    if is_missing(text) {
        return None;
    }
    let caps = DEADLINE_RE.captures(text)?;
    let word = caps[1].to_lowercase();
    let month = MONTHS.iter().position(|m| *m == word)? as u32 + 1;
    let day = caps[2].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day)
}

// ── Tests ──

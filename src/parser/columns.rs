//! Positional layout of the primary CSV sources.

pub const INSTITUTION: usize = 0;
pub const ED_ACCEPTANCE_RATE: usize = 1;
pub const OVERALL_ACCEPTANCE_RATE: usize = 2;
pub const REGULAR_ACCEPTANCE_RATE: usize = 3;
pub const PERCENT_SUBMITTING_SAT: usize = 4;
pub const PERCENT_SUBMITTING_ACT: usize = 5;
pub const SAT_MATH: usize = 6;
pub const SAT_RW: usize = 7;
pub const ACT: usize = 8;
pub const INTERNATIONAL_ACCEPTANCE_RATE: usize = 9;
pub const DEMONSTRATED_INTEREST: usize = 10;
pub const EARLY_DECISION_I: usize = 11;
pub const EARLY_DECISION_II: usize = 12;
pub const EARLY_ACTION_I: usize = 13;
pub const EARLY_ACTION_II: usize = 14;
pub const REGULAR_DECISION: usize = 15;
pub const COST_OF_ATTENDANCE: usize = 16;
pub const PERCENT_MERIT_AID: usize = 17;
pub const AVG_MERIT_AWARD: usize = 18;
pub const PERCENT_NEED_MET: usize = 19;
pub const AVG_NEED_BASED_GRANT: usize = 20;
pub const PERCENT_ON_CAMPUS: usize = 21;
pub const HOUSING_REQUIREMENT: usize = 22;
pub const MEDIAN_EARNINGS_6_YEARS: usize = 23;
pub const MEDIAN_EARNINGS_10_YEARS: usize = 24;
pub const NET_ROI_20_YEARS: usize = 25;
pub const FRESHMAN_RETENTION: usize = 26;
pub const GRADUATION_RATE_4_YEAR: usize = 27;
pub const GRADUATION_RATE_6_YEAR: usize = 28;
pub const NOTABLE_SCHOLARSHIPS: usize = 29;
pub const CS_MEDIAN_SALARY: usize = 30;
pub const CITY: usize = 31;
pub const STATE: usize = 32;
pub const AVG_JAN_TEMP: usize = 33;
pub const AVG_APRIL_TEMP: usize = 34;
pub const AVG_JULY_TEMP: usize = 35;
pub const AVG_OCT_TEMP: usize = 36;
pub const DAYS_WITH_PRECIPITATION: usize = 37;
pub const SUNNY_DAYS: usize = 38;
pub const TOTAL_ENROLLMENT: usize = 39;
pub const PERCENT_FEMALE: usize = 40;
pub const PERCENT_MALE: usize = 41;
pub const PERCENT_AFRICAN_AMERICAN: usize = 42;
pub const PERCENT_ASIAN: usize = 43;
pub const PERCENT_HISPANIC: usize = 44;
pub const PERCENT_WHITE: usize = 45;
pub const PERCENT_UNKNOWN: usize = 46;
pub const PERCENT_INTERNATIONAL: usize = 47;

/// Full width of a primary row.
pub const WIDTH: usize = 48;

/// Rows narrower than this are malformed and dropped.
pub const MIN_ROW_WIDTH: usize = 10;

/// Extras source layout.
pub mod extras {
    pub const INSTITUTION: usize = 0;
    pub const NO_ESSAYS: usize = 1;
    pub const FREE_APPLICATION: usize = 2;
}

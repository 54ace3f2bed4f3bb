pub mod coerce;
pub mod columns;
pub mod csv_line;
pub mod extras;
pub mod rows;

pub use extras::{merge_extras, parse_extras, ExtrasIndex, Overlay};
pub use rows::{parse_primary, ParsedSource};

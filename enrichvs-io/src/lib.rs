//! File formats for the enrichvs virtual screening toolkit.
//!
//! - **CSV/TSV** — screening results as `identifier, score, hit flag` rows ([`csv`])
//! - **JSON** — metric reports and evaluation parameters ([`report`])

pub mod csv;
pub mod report;

pub use self::csv::{load_screening, load_screening_delimited, read_screening, ScreeningData, ScreeningRecord};
pub use report::{load_params, parse_params, summary_json};

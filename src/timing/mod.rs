//! Loading of `timing_results.json` (per-day execution times for two parts).

pub mod error;
pub mod load;
pub mod record;

pub use error::TimingError;
pub use load::{TIMING_RESULTS_PATH, load_timing_file, parse_timing_str};
pub use record::{DayId, Part, TimingRecord};

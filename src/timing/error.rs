use crate::timing::record::{DayId, Part};
use thiserror::Error;

/// Everything that can go wrong between the file on disk and the two series.
#[derive(Error, Debug)]
pub enum TimingError {
    #[error("cannot read timing file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid timing JSON")]
    Parse(#[from] serde_json::Error),

    #[error("record {record} (day {day}) has no times[\"{part}\"]")]
    MissingPart { record: usize, day: DayId, part: Part },

    #[error("record {record} (day {day}) times[\"{part}\"] is malformed: {reason}")]
    MalformedPart {
        record: usize,
        day: DayId,
        part: Part,
        reason: &'static str,
    },
}

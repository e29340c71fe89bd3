use crate::timing::TimingError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Day identifier as written by the producer: usually an integer, sometimes a string.
///
/// Numbers are kept as `serde_json::Number` so they print exactly as they
/// appeared (`1` stays `1`, `1.5` stays `1.5`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DayId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayId::Number(n) => write!(f, "{}", n),
            DayId::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
impl From<u64> for DayId {
    fn from(n: u64) -> Self {
        DayId::Number(n.into())
    }
}

/// Which of the two charted parts to read from `times`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub fn key(self) -> &'static str {
        match self {
            Part::One => "1",
            Part::Two => "2",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One entry of `timing_results.json`.
///
/// JSON shape:
/// {"day": 1, "times": {"1": [<result>, 0.0123], "2": [<result>, 0.0456]}}
///
/// Other keys in `times` (the producer also writes "3") and other top-level
/// fields (`year`) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimingRecord {
    pub day: DayId,
    pub times: BTreeMap<String, serde_json::Value>,
}

impl TimingRecord {
    /// Duration in seconds for `part`: element 1 of `times[part]`.
    ///
    /// `record` is the record's position in the file, used for diagnostics only.
    pub fn seconds(&self, record: usize, part: Part) -> Result<f64, TimingError> {
        let malformed = |reason: &'static str| TimingError::MalformedPart {
            record,
            day: self.day.clone(),
            part,
            reason,
        };

        let entry = self
            .times
            .get(part.key())
            .ok_or_else(|| TimingError::MissingPart {
                record,
                day: self.day.clone(),
                part,
            })?;

        let pair = entry.as_array().ok_or_else(|| malformed("not an array"))?;
        let seconds = pair.get(1).ok_or_else(|| malformed("fewer than 2 elements"))?;
        seconds
            .as_f64()
            .ok_or_else(|| malformed("element 1 is not a number"))
    }
}

//! Transformer: project timing records into the two charted series.

use crate::timing::{DayId, Part, TimingError, TimingRecord};

/// Three index-aligned sequences, one entry per input record.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingSeries {
    pub days: Vec<DayId>,
    pub part1_ms: Vec<f64>,
    pub part2_ms: Vec<f64>,
}

impl TimingSeries {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Category labels, `"Day {day}"`, in record order.
    pub fn labels(&self) -> Vec<String> {
        self.days.iter().map(|d| format!("Day {}", d)).collect()
    }
}

/// Build the series. Seconds become milliseconds (`* 1000`, no rounding).
///
/// Fails on the first record lacking a usable `times["1"]` or `times["2"]`.
pub fn build_series(records: &[TimingRecord]) -> Result<TimingSeries, TimingError> {
    let mut series = TimingSeries {
        days: Vec::with_capacity(records.len()),
        part1_ms: Vec::with_capacity(records.len()),
        part2_ms: Vec::with_capacity(records.len()),
    };

    for (i, record) in records.iter().enumerate() {
        let part1 = record.seconds(i, Part::One)?;
        let part2 = record.seconds(i, Part::Two)?;

        series.days.push(record.day.clone());
        series.part1_ms.push(part1 * 1000.0);
        series.part2_ms.push(part2 * 1000.0);
    }

    Ok(series)
}

use crate::timing::{TimingError, TimingRecord};
use std::fs;
use tracing::debug;

/// Fixed input location, relative to the working directory.
pub const TIMING_RESULTS_PATH: &str = "timing_results.json";

/// Read and parse a timing file. Record order is preserved.
pub fn load_timing_file(path: &str) -> Result<Vec<TimingRecord>, TimingError> {
    let text = fs::read_to_string(path).map_err(|source| TimingError::Io {
        path: path.to_string(),
        source,
    })?;
    debug!(path, bytes = text.len(), "read timing file");
    parse_timing_str(&text)
}

/// Parse a JSON array of timing records.
pub fn parse_timing_str(text: &str) -> Result<Vec<TimingRecord>, TimingError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::DayId;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn keeps_file_order() {
        let records = parse_timing_str(
            r#"[
                {"day": 5, "year": 24, "times": {"1": ["a", 0.1], "2": ["b", 0.2]}},
                {"day": 2, "year": 24, "times": {"1": ["c", 0.3], "2": ["d", 0.4]}}
            ]"#,
        )
        .unwrap();
        let days: Vec<DayId> = records.into_iter().map(|r| r.day).collect();
        assert_eq!(days, vec![DayId::from(5), DayId::from(2)]);
    }

    #[test]
    fn empty_array() {
        assert!(parse_timing_str("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_json() {
        assert!(matches!(
            parse_timing_str("[{\"day\": 1,"),
            Err(TimingError::Parse(_))
        ));
        // Valid JSON, wrong shape.
        assert!(matches!(
            parse_timing_str(r#"{"day": 1}"#),
            Err(TimingError::Parse(_))
        ));
        assert!(matches!(
            parse_timing_str(r#"[{"times": {}}]"#),
            Err(TimingError::Parse(_))
        ));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let path = path.to_str().unwrap();
        match load_timing_file(path) {
            Err(TimingError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"day": 1, "times": {{"1": [0, 0.5], "2": [0, 1.2]}}}}]"#).unwrap();
        let records = load_timing_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].day, DayId::from(1));
    }
}

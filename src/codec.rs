//! JSON encoding for schedule data.
//!
//! Interval lists, availability records, and results cross the persistence
//! boundary as JSON with ISO-8601 instants. Decoding never falls back to an
//! empty list: malformed input and inverted ranges surface as
//! [`ScheduleError`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ScheduleError;
use crate::models::{AvailabilityRecord, GapInfo, ScheduleResult, TimeRange};

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, ScheduleError> {
    Ok(serde_json::to_string(value)?)
}

fn decode<T: DeserializeOwned>(json: &str) -> Result<T, ScheduleError> {
    Ok(serde_json::from_str(json)?)
}

/// Encodes a list of ranges.
pub fn encode_ranges(ranges: &[TimeRange]) -> Result<String, ScheduleError> {
    encode(ranges)
}

/// Decodes a list of ranges, rejecting inverted ones.
pub fn decode_ranges(json: &str) -> Result<Vec<TimeRange>, ScheduleError> {
    decode(json)
}

/// Encodes a list of gaps.
pub fn encode_gaps(gaps: &[GapInfo]) -> Result<String, ScheduleError> {
    encode(gaps)
}

/// Decodes a list of gaps.
pub fn decode_gaps(json: &str) -> Result<Vec<GapInfo>, ScheduleError> {
    decode(json)
}

/// Decodes availability records.
pub fn decode_records(json: &str) -> Result<Vec<AvailabilityRecord>, ScheduleError> {
    decode(json)
}

/// Encodes a schedule result.
pub fn encode_result(result: &ScheduleResult) -> Result<String, ScheduleError> {
    encode(result)
}

/// Decodes a schedule result.
pub fn decode_result(json: &str) -> Result<ScheduleResult, ScheduleError> {
    decode(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleSlot;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn range(from: u32, to: u32) -> TimeRange {
        TimeRange::new(
            Utc.with_ymd_and_hms(2025, 12, 22, from, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 12, 22, to, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_ranges_round_trip() {
        let ranges = vec![range(9, 12), range(14, 18)];
        let json = encode_ranges(&ranges).unwrap();
        assert_eq!(decode_ranges(&json).unwrap(), ranges);
    }

    #[test]
    fn test_empty_list_is_not_an_error() {
        assert!(decode_ranges("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        assert!(matches!(decode_ranges(""), Err(ScheduleError::Json(_))));
        assert!(matches!(
            decode_ranges(r#"[{"start": "yesterday", "end": "today"}]"#),
            Err(ScheduleError::Json(_))
        ));
    }

    #[test]
    fn test_inverted_range_is_an_error() {
        let json = r#"[{"start":"2025-12-22T12:00:00Z","end":"2025-12-22T09:00:00Z"}]"#;
        let err = decode_ranges(json).unwrap_err();
        assert!(err.to_string().contains("invalid time range"));
    }

    #[test]
    fn test_decode_records() {
        let json = r#"[
            {"person_id": "alice", "tent_id": "tent-1", "week_start": "2025-12-22",
             "ranges": [{"start": "2025-12-22T09:00:00Z", "end": "2025-12-22T12:00:00Z"}],
             "status": "submitted"},
            {"person_id": "bob", "tent_id": "tent-1", "week_start": "2025-12-22", "ranges": []}
        ]"#;
        let records = decode_records(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ranges, vec![range(9, 12)]);
        assert!(records[1].ranges.is_empty());
    }

    #[test]
    fn test_result_round_trip() {
        let day = NaiveDate::from_ymd_opt(2025, 12, 22).unwrap();
        let result = ScheduleResult::new(
            vec![ScheduleSlot::new(range(9, 12), 2).with_assigned(vec!["alice".into()])],
            vec![GapInfo::new(range(9, 12), day, 2, 1)],
        );
        let json = encode_result(&result).unwrap();
        assert!(json.contains(r#""date":"2025-12-22""#));
        assert_eq!(decode_result(&json).unwrap(), result);

        let gaps_json = encode_gaps(&result.gaps).unwrap();
        assert_eq!(decode_gaps(&gaps_json).unwrap(), result.gaps);
    }
}

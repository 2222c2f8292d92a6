//! Conversion of raw meeting-form values into stored representations.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use agenda_types::{AppError, Result, model::EntityId};

/// Shapes produced by an HTML `datetime-local` input.
const DATETIME_LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Parse a submitted meeting time into an absolute timestamp.
///
/// RFC 3339 input keeps its offset. `datetime-local` input has none and is
/// read in the local time zone; inside a DST gap it fails.
pub fn parse_meeting_time(input: &str) -> Result<DateTime<Utc>> {
    let s = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in DATETIME_LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| AppError::InvalidTime(input.to_string()));
        }
    }
    Err(AppError::InvalidTime(input.to_string()))
}

/// Render a timestamp the way a `datetime-local` input expects it.
pub fn to_datetime_local(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%Y-%m-%dT%H:%M").to_string()
}

/// Parse a submitted duration into a positive number of minutes.
pub fn parse_duration_minutes(input: &str) -> Result<u32> {
    match input.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(AppError::InvalidDuration(input.to_string())),
        Ok(minutes) => Ok(minutes),
    }
}

/// Drop repeated ids, keeping first occurrences in order.
pub fn dedup_ids(ids: Vec<EntityId>) -> Vec<EntityId> {
    let mut out: Vec<EntityId> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

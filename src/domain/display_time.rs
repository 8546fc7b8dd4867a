//! Display-time normalization.
//!
//! The backend stores display times as absolute instants. Whatever the user
//! typed is parsed here and rendered as `YYYY-MM-DDTHH:MM:SS.mmmZ` before it is
//! sent, so the wire value never depends on the caller's input format.

use thiserror::Error;
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset,
    format_description::{
        FormatItem,
        well_known::{Rfc2822, Rfc3339},
    },
    macros::format_description,
};

const CANONICAL_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

// Offset-less inputs, e.g. from an HTML datetime-local field. Read as UTC.
const LOCAL_FORMATS: &[&[FormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DisplayTimeError {
    #[error("display time is empty")]
    Empty,
    #[error("unrecognised display time `{input}`")]
    Unparseable { input: String },
    #[error("display time `{input}` cannot be represented")]
    OutOfRange { input: String },
}

/// Parse any supported representation into an absolute instant.
pub fn parse(input: &str) -> Result<OffsetDateTime, DisplayTimeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DisplayTimeError::Empty);
    }

    if let Ok(value) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(value);
    }
    if let Ok(value) = OffsetDateTime::parse(trimmed, &Rfc2822) {
        return Ok(value);
    }
    for format in LOCAL_FORMATS {
        if let Ok(value) = PrimitiveDateTime::parse(trimmed, *format) {
            return Ok(value.assume_utc());
        }
    }
    if let Ok(date) = Date::parse(trimmed, DATE_FORMAT) {
        return Ok(PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_utc());
    }

    Err(DisplayTimeError::Unparseable {
        input: trimmed.to_string(),
    })
}

/// Render an instant in canonical UTC form with millisecond precision.
pub fn format_canonical(value: OffsetDateTime) -> Result<String, DisplayTimeError> {
    value
        .to_offset(UtcOffset::UTC)
        .format(CANONICAL_FORMAT)
        .map_err(|_| DisplayTimeError::OutOfRange {
            input: value.to_string(),
        })
}

/// Parse `input` and render it canonically. Idempotent on canonical input.
pub fn normalize(input: &str) -> Result<String, DisplayTimeError> {
    let parsed = parse(input)?;
    format_canonical(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_input_is_shifted_to_utc() {
        let out = normalize("2024-06-01T12:30:00+02:00").expect("normalize");
        assert_eq!(out, "2024-06-01T10:30:00.000Z");
    }

    #[test]
    fn datetime_local_input_is_read_as_utc() {
        assert_eq!(
            normalize("2024-06-01T09:15").expect("normalize"),
            "2024-06-01T09:15:00.000Z"
        );
        assert_eq!(
            normalize("2024-06-01 09:15:42").expect("normalize"),
            "2024-06-01T09:15:42.000Z"
        );
    }

    #[test]
    fn date_only_input_is_utc_midnight() {
        assert_eq!(
            normalize("2024-02-29").expect("normalize"),
            "2024-02-29T00:00:00.000Z"
        );
    }

    #[test]
    fn rfc2822_input_is_accepted() {
        assert_eq!(
            normalize("Sat, 01 Jun 2024 12:00:00 +0000").expect("normalize"),
            "2024-06-01T12:00:00.000Z"
        );
    }

    #[test]
    fn sub_millisecond_precision_is_truncated() {
        assert_eq!(
            normalize("2024-06-01T12:00:00.123456789Z").expect("normalize"),
            "2024-06-01T12:00:00.123Z"
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        for input in [
            "2024-06-01T12:30:00+02:00",
            "2024-06-01T09:15",
            "2023-12-31",
            "2024-06-01T12:00:00.987654Z",
        ] {
            let once = normalize(input).expect("first pass");
            let twice = normalize(&once).expect("second pass");
            assert_eq!(once, twice, "input {input}");
        }
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert_eq!(normalize("   "), Err(DisplayTimeError::Empty));
        assert!(matches!(
            normalize("next tuesday"),
            Err(DisplayTimeError::Unparseable { .. })
        ));
    }
}

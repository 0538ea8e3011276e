// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date and timestamp parsing for the engine's external interface.
//!
//! Business dates arrive as ISO calendar dates without a time component.
//! Audit timestamps arrive as RFC 3339; a trailing `Z` UTC marker is
//! tolerated, as is a bare datetime without an offset (assumed UTC).

use crate::error::DomainError;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Parses an ISO calendar date (`2026-03-01`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// calendar date.
pub fn parse_date(s: &str) -> Result<Date, DomainError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(s, &format).map_err(|e| DomainError::DateParseError {
        date_string: s.to_string(),
        error: e.to_string(),
    })
}

/// Formats a calendar date back to its ISO representation.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.to_string()
}

/// Parses an RFC 3339 timestamp (`2026-03-01T09:30:00Z`).
///
/// A bare datetime without an offset is accepted and assumed UTC.
///
/// # Errors
///
/// Returns `DomainError::TimestampParseError` if the string parses under
/// neither form.
pub fn parse_timestamp(s: &str) -> Result<OffsetDateTime, DomainError> {
    if let Ok(parsed) = OffsetDateTime::parse(s, &Rfc3339) {
        return Ok(parsed);
    }

    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    PrimitiveDateTime::parse(s, &format)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|e| DomainError::TimestampParseError {
            timestamp_string: s.to_string(),
            error: e.to_string(),
        })
}

/// Formats a timestamp as RFC 3339 for persistence and API serialization.
///
/// # Errors
///
/// Returns `DomainError::TimestampFormatError` if the timestamp cannot be
/// represented in RFC 3339.
pub fn format_timestamp(timestamp: OffsetDateTime) -> Result<String, DomainError> {
    timestamp
        .format(&Rfc3339)
        .map_err(|e| DomainError::TimestampFormatError {
            error: e.to_string(),
        })
}

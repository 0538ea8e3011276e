// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Input parsing helpers shared by the operation modules.
//!
//! Values are normalized on the way in: dates and timestamps are parsed and
//! re-encoded so the store only ever holds canonical representations.

use crate::error::EngineError;
use intern_track_domain::{format_date, format_timestamp, parse_date, parse_timestamp};

/// Parses an optional ISO calendar date and re-encodes it for storage.
pub(crate) fn optional_business_date(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<String>, EngineError> {
    value
        .map(|s| {
            parse_date(s)
                .map(format_date)
                .map_err(|e| EngineError::InvalidArgument {
                    field: field.to_string(),
                    message: e.to_string(),
                })
        })
        .transpose()
}

/// Parses an optional RFC 3339 timestamp (trailing `Z` tolerated, bare
/// datetimes assumed UTC) and re-encodes it for storage.
pub(crate) fn optional_timestamp(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<String>, EngineError> {
    value
        .map(|s| {
            let parsed = parse_timestamp(s).map_err(|e| EngineError::InvalidArgument {
                field: field.to_string(),
                message: e.to_string(),
            })?;
            format_timestamp(parsed).map_err(|e| EngineError::Internal {
                message: e.to_string(),
            })
        })
        .transpose()
}

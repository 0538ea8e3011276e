// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Call-time stamps for transition side effects.

use crate::error::EngineError;
use intern_track_domain::format_timestamp;
use time::{Date, OffsetDateTime};

/// Returns today's UTC calendar date.
pub(crate) fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Returns the current UTC instant as an RFC 3339 string.
pub(crate) fn now_timestamp() -> Result<String, EngineError> {
    format_timestamp(OffsetDateTime::now_utc()).map_err(|e| EngineError::Internal {
        message: e.to_string(),
    })
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the shared validation rules.

use crate::error::DomainError;
use crate::{validate_progress_percent, validate_score, validate_week_number};

#[test]
fn test_validate_score_accepts_bounds() {
    assert!(validate_score(0.0).is_ok());
    assert!(validate_score(5.5).is_ok());
    assert!(validate_score(10.0).is_ok());
}

#[test]
fn test_validate_score_rejects_out_of_scale() {
    assert!(matches!(
        validate_score(10.5),
        Err(DomainError::InvalidScore { .. })
    ));
    assert!(matches!(
        validate_score(-0.1),
        Err(DomainError::InvalidScore { .. })
    ));
}

#[test]
fn test_validate_score_rejects_non_finite() {
    assert!(validate_score(f64::NAN).is_err());
    assert!(validate_score(f64::INFINITY).is_err());
}

#[test]
fn test_validate_week_number() {
    assert!(validate_week_number(1).is_ok());
    assert!(validate_week_number(52).is_ok());
    assert!(matches!(
        validate_week_number(0),
        Err(DomainError::InvalidWeekNumber { week: 0 })
    ));
    assert!(validate_week_number(-3).is_err());
}

#[test]
fn test_validate_progress_percent() {
    assert!(validate_progress_percent(0.0).is_ok());
    assert!(validate_progress_percent(55.0).is_ok());
    assert!(validate_progress_percent(100.0).is_ok());
    assert!(matches!(
        validate_progress_percent(100.1),
        Err(DomainError::InvalidProgressPercent { .. })
    ));
    assert!(validate_progress_percent(-1.0).is_err());
}

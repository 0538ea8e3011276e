// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report types, statuses, and the dual-approval rule.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Report kinds. Week numbers are only meaningful for weekly reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    Weekly,
    Monthly,
    Final,
}

impl ReportType {
    /// Returns the string representation of the type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Final => "FINAL",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "WEEKLY" => Ok(Self::Weekly),
            "MONTHLY" => Ok(Self::Monthly),
            "FINAL" => Ok(Self::Final),
            _ => Err(DomainError::InvalidReportType(s.to_string())),
        }
    }
}

impl FromStr for ReportType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Report review states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    /// Submitted and awaiting review.
    #[default]
    Pending,
    /// Accepted by a reviewer.
    Approved,
    /// Declined by a reviewer.
    Rejected,
    /// Not yet submitted.
    Draft,
}

impl ReportStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Draft => "DRAFT",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "DRAFT" => Ok(Self::Draft),
            _ => Err(DomainError::InvalidReportStatus(s.to_string())),
        }
    }

    /// Returns true when entering this status concludes a review.
    ///
    /// Used to decide whether `reviewed_at` should be stamped.
    #[must_use]
    pub const fn is_reviewed(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl FromStr for ReportStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A weekly, monthly, or final report belonging to one internship.
///
/// The student is reached through the internship; reports carry no student
/// column of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub report_id: i64,
    pub internship_id: i64,
    pub title: String,
    pub report_type: ReportType,
    /// Only meaningful for weekly reports.
    pub week_number: Option<i32>,
    pub status: ReportStatus,
    pub report_date: Option<Date>,
    /// RFC 3339 timestamp of submission.
    pub submitted_at: Option<String>,
    /// RFC 3339 timestamp of the concluding review, when any.
    pub reviewed_at: Option<String>,
    pub grade: Option<f64>,
    pub is_approved_by_teacher: bool,
    pub is_approved_by_mentor: bool,
    pub feedback: Option<String>,
    pub comments: Option<String>,
}

impl Report {
    /// Returns whether the report counts as approved overall.
    ///
    /// Either reviewer's approval suffices; the flags are independent and a
    /// single one is enough.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        self.is_approved_by_teacher || self.is_approved_by_mentor
    }
}

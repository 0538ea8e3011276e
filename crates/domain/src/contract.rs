// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contract lifecycle statuses.
//!
//! A contract carries three independent status axes: the lifecycle status,
//! the payment sub-status, and the approval sub-status. They are not required
//! to move in lock-step; the one coupling rule is that moving the lifecycle
//! status to `Paid` forces the payment sub-status to `Paid` as well.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Contract lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractStatus {
    /// Initial state after creation.
    #[default]
    Draft,
    /// Awaiting processing.
    Pending,
    /// Sent out for signature.
    Sent,
    /// Signed by the parties.
    Signed,
    /// In force.
    Active,
    /// Paid out.
    Paid,
    /// Declined during approval.
    Rejected,
    /// Lapsed without completion.
    Expired,
    /// Ended before its term.
    Terminated,
}

impl ContractStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Pending => "PENDING",
            Self::Sent => "SENT",
            Self::Signed => "SIGNED",
            Self::Active => "ACTIVE",
            Self::Paid => "PAID",
            Self::Rejected => "REJECTED",
            Self::Expired => "EXPIRED",
            Self::Terminated => "TERMINATED",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "PENDING" => Ok(Self::Pending),
            "SENT" => Ok(Self::Sent),
            "SIGNED" => Ok(Self::Signed),
            "ACTIVE" => Ok(Self::Active),
            "PAID" => Ok(Self::Paid),
            "REJECTED" => Ok(Self::Rejected),
            "EXPIRED" => Ok(Self::Expired),
            "TERMINATED" => Ok(Self::Terminated),
            _ => Err(DomainError::InvalidContractStatus(s.to_string())),
        }
    }
}

impl FromStr for ContractStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment sub-status, independent of the lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Payment not yet made.
    #[default]
    Pending,
    /// Payment completed.
    Paid,
    /// Payment past due.
    Overdue,
}

impl PaymentStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Overdue => "OVERDUE",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "PAID" => Ok(Self::Paid),
            "OVERDUE" => Ok(Self::Overdue),
            _ => Err(DomainError::InvalidPaymentStatus(s.to_string())),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Approval sub-status, independent of the lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    /// Awaiting an approval decision.
    #[default]
    Pending,
    /// Approved.
    Approved,
    /// Rejected.
    Rejected,
}

impl ApprovalStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidApprovalStatus(s.to_string())),
        }
    }
}

impl FromStr for ApprovalStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A contract, optionally bound 1:1 to an internship.
///
/// Contracts without an internship are templates or teacher-originated
/// support contracts; they may outlive or predate the placement itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub contract_id: i64,
    pub internship_id: Option<i64>,
    /// Unique contract code, generated when the caller supplies none.
    pub code: String,
    pub title: Option<String>,
    pub terms: Option<String>,
    pub amount: Option<f64>,
    pub status: ContractStatus,
    pub payment_status: PaymentStatus,
    pub approval_status: ApprovalStatus,
    pub signed_date: Option<Date>,
    pub payment_date: Option<Date>,
    pub approval_date: Option<Date>,
    pub approved_by_teacher_id: Option<i64>,
    /// Teacher who originated a support contract, when any.
    pub created_by_teacher_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_status_round_trip() {
        let statuses = vec![
            ContractStatus::Draft,
            ContractStatus::Pending,
            ContractStatus::Sent,
            ContractStatus::Signed,
            ContractStatus::Active,
            ContractStatus::Paid,
            ContractStatus::Rejected,
            ContractStatus::Expired,
            ContractStatus::Terminated,
        ];

        for status in statuses {
            let s = status.as_str();
            match ContractStatus::parse_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_contract_status_string() {
        assert!(ContractStatus::parse_str("VOID").is_err());
    }

    #[test]
    fn test_payment_status_round_trip() {
        for status in [
            PaymentStatus::Pending,
            PaymentStatus::Paid,
            PaymentStatus::Overdue,
        ] {
            assert_eq!(PaymentStatus::parse_str(status.as_str()), Ok(status));
        }
    }

    #[test]
    fn test_approval_status_round_trip() {
        for status in [
            ApprovalStatus::Pending,
            ApprovalStatus::Approved,
            ApprovalStatus::Rejected,
        ] {
            assert_eq!(ApprovalStatus::parse_str(status.as_str()), Ok(status));
        }
    }

    #[test]
    fn test_default_statuses() {
        assert_eq!(ContractStatus::default(), ContractStatus::Draft);
        assert_eq!(PaymentStatus::default(), PaymentStatus::Pending);
        assert_eq!(ApprovalStatus::default(), ApprovalStatus::Pending);
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{BillingError, Result};

/// unique identifier for a transaction
pub type TransactionId = Uuid;

/// unique identifier for a lease
pub type LeaseId = Uuid;

/// unique identifier for a unit
pub type UnitId = Uuid;

/// transaction types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Rent,
    Fee,
    Fine,
    Other,
}

/// transaction status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// not yet due, awaiting payment
    Pending,
    /// payment received
    Paid,
    /// past due date and unpaid
    Overdue,
    /// explicitly cancelled, terminal
    Cancelled,
}

/// lease status, always derived from dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaseStatus {
    /// start date still in the future
    Pending,
    /// between start and end date, inclusive both ends
    Active,
    /// past the end date
    Expired,
}

/// unit occupancy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitStatus {
    Available,
    Occupied,
    Maintenance,
    Reserved,
}

/// a billing transaction attached to a lease
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub lease_id: LeaseId,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub description: String,
    pub amount: Money,
    pub discount: Money,
    pub fine: Money,
    pub interest: Money,
    pub due_date: DateTime<Utc>,
    pub payment_date: Option<DateTime<Utc>>,
    pub status: TransactionStatus,
    pub created_by: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Transaction {
    /// total = amount - discount + fine + interest, at centavo precision.
    /// Negative totals are allowed and returned as-is.
    pub fn total(&self) -> Money {
        crate::charges::calculate_transaction_total(
            self.amount,
            self.discount,
            self.fine,
            self.interest,
        )
    }
}

/// a not-yet-persisted transaction produced by the recurring generator;
/// the storage layer assigns the id and author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub lease_id: LeaseId,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub description: String,
    pub amount: Money,
    pub discount: Money,
    pub fine: Money,
    pub interest: Money,
    pub due_date: DateTime<Utc>,
    pub status: TransactionStatus,
    pub metadata: Map<String, Value>,
}

/// a lease over a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lease {
    pub id: LeaseId,
    pub unit_id: UnitId,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub monthly_rent: Money,
}

impl Lease {
    /// check the invariants the lease form enforces upstream
    pub fn validate(&self) -> Result<()> {
        if self.end_date < self.start_date {
            return Err(BillingError::InvalidDateRange {
                message: format!(
                    "end date {} precedes start date {}",
                    self.end_date, self.start_date
                ),
            });
        }
        if !self.monthly_rent.is_positive() {
            return Err(BillingError::InvalidAmount {
                amount: self.monthly_rent,
            });
        }
        Ok(())
    }
}

/// a residential unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: UnitId,
    /// normalized code, e.g. "10A"
    pub code: String,
    pub status: UnitStatus,
}

impl Unit {
    /// a unit can only transition into a lease while available
    pub fn ensure_leasable(&self) -> Result<()> {
        match self.status {
            UnitStatus::Available => Ok(()),
            status => Err(BillingError::UnitNotAvailable { status }),
        }
    }
}

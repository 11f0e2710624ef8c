use chrono::{DateTime, Duration, Utc};

use crate::types::{LeaseStatus, Transaction, TransactionStatus};

/// re-derive a transaction's status from its dates, in strict priority order:
/// a recorded payment always wins, explicit cancellation is terminal, and only
/// then does the due date decide between overdue and pending.
///
/// Pure re-derivation; the caller decides whether to persist the result.
pub fn transaction_status(
    transaction: &Transaction,
    current_date: DateTime<Utc>,
) -> TransactionStatus {
    if transaction.payment_date.is_some() {
        return TransactionStatus::Paid;
    }
    if transaction.status == TransactionStatus::Cancelled {
        return TransactionStatus::Cancelled;
    }
    if current_date > transaction.due_date {
        return TransactionStatus::Overdue;
    }
    TransactionStatus::Pending
}

/// lease status as a pure function of its date range.
/// A lease is active on the start date and on the end date, inclusive both ends.
pub fn lease_status(
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    current_date: DateTime<Utc>,
) -> LeaseStatus {
    if current_date < start_date {
        return LeaseStatus::Pending;
    }
    if current_date > end_date {
        return LeaseStatus::Expired;
    }
    LeaseStatus::Active
}

/// true iff now falls within [end_date - warning_days, end_date], inclusive
pub fn is_lease_expiring_soon(
    end_date: DateTime<Utc>,
    warning_days: u32,
    now: DateTime<Utc>,
) -> bool {
    let window_start = end_date - Duration::days(warning_days as i64);
    now >= window_start && now <= end_date
}

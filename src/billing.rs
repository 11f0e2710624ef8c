use hourglass_rs::SafeTimeProvider;

use crate::charges::{LateChargeConfig, LateChargeEngine, OverdueCharges};
use crate::recurring::{generate_next_rent_payment, DEFAULT_RENT_DUE_DAY};
use crate::status;
use crate::types::{Lease, LeaseStatus, Transaction, TransactionDraft, TransactionStatus};

/// Time-aware front door over the pure billing rules.
///
/// Every rule stays a pure function taking an explicit reference date; this
/// facade only supplies "now" from the injected time provider, so tests drive
/// it with `TimeSource::Test` and production uses the system clock.
pub struct BillingEngine {
    time: SafeTimeProvider,
    charges: LateChargeEngine,
}

impl BillingEngine {
    /// create with the standard late-charge rates
    pub fn new(time: SafeTimeProvider) -> Self {
        Self {
            time,
            charges: LateChargeEngine::default(),
        }
    }

    /// create with custom late-charge rates
    pub fn with_charge_config(time: SafeTimeProvider, config: LateChargeConfig) -> Self {
        Self {
            time,
            charges: LateChargeEngine::new(config),
        }
    }

    pub fn time(&self) -> &SafeTimeProvider {
        &self.time
    }

    /// current status of a transaction
    pub fn transaction_status(&self, transaction: &Transaction) -> TransactionStatus {
        status::transaction_status(transaction, self.time.now())
    }

    /// current status of a lease
    pub fn lease_status(&self, lease: &Lease) -> LeaseStatus {
        status::lease_status(lease.start_date, lease.end_date, self.time.now())
    }

    /// whether a lease ends within the warning window
    pub fn is_lease_expiring_soon(&self, lease: &Lease, warning_days: u32) -> bool {
        status::is_lease_expiring_soon(lease.end_date, warning_days, self.time.now())
    }

    /// fine and interest accrued on a transaction as of now
    pub fn overdue_charges(&self, transaction: &Transaction) -> OverdueCharges {
        self.charges
            .calculate(transaction.amount, transaction.due_date, self.time.now())
    }

    /// Recompute a transaction's derived fields against the clock, returning a
    /// fresh value. The input is never mutated; persisting the result is the
    /// caller's decision. Paid and cancelled transactions keep their stored
    /// fine and interest.
    pub fn refresh_transaction(&self, transaction: &Transaction) -> Transaction {
        let now = self.time.now();
        let status = status::transaction_status(transaction, now);

        let mut refreshed = transaction.clone();
        refreshed.status = status;
        if status == TransactionStatus::Overdue {
            let charges = self
                .charges
                .calculate(transaction.amount, transaction.due_date, now);
            refreshed.fine = charges.fine;
            refreshed.interest = charges.interest;
        }
        refreshed
    }

    /// next month's rent draft for a lease, due on the standard day
    pub fn next_rent_payment(&self, lease: &Lease) -> TransactionDraft {
        self.next_rent_payment_on(lease, DEFAULT_RENT_DUE_DAY)
    }

    /// next month's rent draft for a lease, due on a specific day
    pub fn next_rent_payment_on(&self, lease: &Lease, due_day: u32) -> TransactionDraft {
        generate_next_rent_payment(lease.id, lease.monthly_rent, due_day, self.time.now())
    }
}

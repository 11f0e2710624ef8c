use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// late charge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LateChargeConfig {
    /// flat one-time fine on the original amount
    pub fine_rate: Rate,
    /// simple (non-compounding) daily interest on the original amount
    pub daily_interest_rate: Rate,
}

impl Default for LateChargeConfig {
    fn default() -> Self {
        Self {
            fine_rate: Rate::from_decimal(dec!(0.02)),
            daily_interest_rate: Rate::from_decimal(dec!(0.001)),
        }
    }
}

/// overdue charge calculation result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverdueCharges {
    pub fine: Money,
    pub interest: Money,
    pub days_past_due: u32,
}

impl OverdueCharges {
    pub const NONE: OverdueCharges = OverdueCharges {
        fine: Money::ZERO,
        interest: Money::ZERO,
        days_past_due: 0,
    };
}

/// engine for calculating overdue fines and interest
#[derive(Debug, Clone, Default)]
pub struct LateChargeEngine {
    pub config: LateChargeConfig,
}

impl LateChargeEngine {
    pub fn new(config: LateChargeConfig) -> Self {
        Self { config }
    }

    /// calculate the fine and accumulated interest on an overdue amount.
    /// Nothing accrues while the transaction is not yet due or due today.
    pub fn calculate(
        &self,
        original_amount: Money,
        due_date: DateTime<Utc>,
        current_date: DateTime<Utc>,
    ) -> OverdueCharges {
        let days = days_past_due(due_date, current_date);
        if days <= 0 {
            return OverdueCharges::NONE;
        }

        let fine = original_amount.apply_rate(self.config.fine_rate);
        let interest = Money::from_decimal(
            original_amount.as_decimal()
                * self.config.daily_interest_rate.as_decimal()
                * Decimal::from(days),
        );

        OverdueCharges {
            fine,
            interest,
            days_past_due: days as u32,
        }
    }
}

/// whole days elapsed since the due date, floored.
/// Naive millisecond arithmetic, not calendar-day counting: a partial day
/// rounds down, so downstream interest figures depend on this exact flooring.
pub fn days_past_due(due_date: DateTime<Utc>, current_date: DateTime<Utc>) -> i64 {
    (current_date - due_date)
        .num_milliseconds()
        .div_euclid(MILLIS_PER_DAY)
}

/// calculate overdue charges with the standard rates (2% fine, 0.1% per day)
pub fn calculate_overdue_charges(
    original_amount: Money,
    due_date: DateTime<Utc>,
    current_date: DateTime<Utc>,
) -> OverdueCharges {
    LateChargeEngine::default().calculate(original_amount, due_date, current_date)
}

/// total = amount - discount + fine + interest, rounded once at the cent
/// boundary. Totals are not clamped: a discount larger than the rest yields
/// a negative total.
pub fn calculate_transaction_total(
    amount: Money,
    discount: Money,
    fine: Money,
    interest: Money,
) -> Money {
    Money::from_decimal(
        amount.as_decimal() - discount.as_decimal() + fine.as_decimal() + interest.as_decimal(),
    )
}

use thiserror::Error;

use crate::decimal::Money;
use crate::types::UnitStatus;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BillingError {
    /// user-facing message, surfaced as a field-level form error
    #[error("código de unidade inválido: \"{code}\" (use o formato número + letra de A a G, ex.: 10A)")]
    InvalidUnitCode {
        code: String,
    },

    #[error("unit not available for lease: current status is {status:?}")]
    UnitNotAvailable {
        status: UnitStatus,
    },

    #[error("invalid date range: {message}")]
    InvalidDateRange {
        message: String,
    },

    #[error("invalid amount: {amount}")]
    InvalidAmount {
        amount: Money,
    },
}

pub type Result<T> = std::result::Result<T, BillingError>;

pub mod billing;
pub mod charges;
pub mod decimal;
pub mod errors;
pub mod format;
pub mod recurring;
pub mod status;
pub mod types;
pub mod validate;

// re-export key types
pub use billing::BillingEngine;
pub use charges::{
    calculate_overdue_charges, calculate_transaction_total, days_past_due, LateChargeConfig,
    LateChargeEngine, OverdueCharges,
};
pub use decimal::{Money, Rate};
pub use errors::{BillingError, Result};
pub use format::{format_cpf, format_currency, format_date, format_date_time, format_phone};
pub use recurring::{generate_next_rent_payment, DEFAULT_RENT_DUE_DAY};
pub use status::{is_lease_expiring_soon, lease_status, transaction_status};
pub use types::{
    Lease, LeaseId, LeaseStatus, Transaction, TransactionDraft, TransactionId, TransactionStatus,
    TransactionType, Unit, UnitId, UnitStatus,
};
pub use validate::{
    is_valid_cpf, is_valid_email, is_valid_phone, is_valid_unit_code, normalize_unit_code,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;

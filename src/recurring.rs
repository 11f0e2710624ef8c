use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Utc};
use serde_json::{Map, Value};

use crate::decimal::Money;
use crate::types::{LeaseId, TransactionDraft, TransactionStatus, TransactionType};

/// day of the month rent falls due when the lease does not say otherwise
pub const DEFAULT_RENT_DUE_DAY: u32 = 5;

const MONTH_NAMES_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Build the rent transaction skeleton for the month after `reference`.
///
/// The draft carries `metadata.recurringId = "rent_{lease_id}"` as a stable
/// idempotency key; the generator itself never checks for duplicates, the
/// scheduling caller does.
pub fn generate_next_rent_payment(
    lease_id: LeaseId,
    monthly_rent: Money,
    due_day: u32,
    reference: DateTime<Utc>,
) -> TransactionDraft {
    let due_date = next_month_due_date(reference, due_day);

    let mut metadata = Map::new();
    metadata.insert(
        "recurringId".to_string(),
        Value::String(format!("rent_{lease_id}")),
    );

    TransactionDraft {
        lease_id,
        transaction_type: TransactionType::Rent,
        description: rent_description(due_date),
        amount: monthly_rent,
        discount: Money::ZERO,
        fine: Money::ZERO,
        interest: Money::ZERO,
        due_date,
        status: TransactionStatus::Pending,
        metadata,
    }
}

/// day `due_day` of the month following `reference`, at midnight utc.
/// A due day past the month's length rolls forward, mirroring naive date
/// arithmetic (e.g. day 31 in a 30-day month lands on the 1st).
fn next_month_due_date(reference: DateTime<Utc>, due_day: u32) -> DateTime<Utc> {
    let (year, month) = if reference.month() == 12 {
        (reference.year() + 1, 1)
    } else {
        (reference.year(), reference.month() + 1)
    };

    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| reference.date_naive());
    let due = first_of_month
        .checked_add_days(Days::new(due_day.saturating_sub(1) as u64))
        .unwrap_or(first_of_month);

    Utc.from_utc_datetime(&due.and_hms_opt(0, 0, 0).unwrap_or_default())
}

/// "Aluguel referente a setembro de 2026"
fn rent_description(due_date: DateTime<Utc>) -> String {
    let month_name = MONTH_NAMES_PT[due_date.month0() as usize];
    format!("Aluguel referente a {} de {}", month_name, due_date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_draft_shape() {
        let lease_id = Uuid::new_v4();
        let draft = generate_next_rent_payment(
            lease_id,
            Money::from_major(1_500),
            DEFAULT_RENT_DUE_DAY,
            at(2026, 8, 27),
        );

        assert_eq!(draft.lease_id, lease_id);
        assert_eq!(draft.transaction_type, TransactionType::Rent);
        assert_eq!(draft.status, TransactionStatus::Pending);
        assert_eq!(draft.amount, Money::from_major(1_500));
        assert_eq!(draft.discount, Money::ZERO);
        assert_eq!(draft.fine, Money::ZERO);
        assert_eq!(draft.interest, Money::ZERO);
        assert_eq!(draft.due_date, at(2026, 9, 5));
        assert_eq!(draft.description, "Aluguel referente a setembro de 2026");
    }

    #[test]
    fn test_idempotency_key() {
        let lease_id = Uuid::new_v4();
        let draft =
            generate_next_rent_payment(lease_id, Money::from_major(900), 5, at(2026, 8, 27));

        assert_eq!(
            draft.metadata.get("recurringId"),
            Some(&Value::String(format!("rent_{lease_id}")))
        );
    }

    #[test]
    fn test_year_rollover() {
        let draft = generate_next_rent_payment(
            Uuid::new_v4(),
            Money::from_major(1_200),
            10,
            at(2026, 12, 15),
        );

        assert_eq!(draft.due_date, at(2027, 1, 10));
        assert_eq!(draft.description, "Aluguel referente a janeiro de 2027");
    }

    #[test]
    fn test_due_day_overflow_rolls_forward() {
        // january reference, due day 31 in february rolls into march
        let draft = generate_next_rent_payment(
            Uuid::new_v4(),
            Money::from_major(1_000),
            31,
            at(2026, 1, 20),
        );

        assert_eq!(draft.due_date, at(2026, 3, 3));
    }
}

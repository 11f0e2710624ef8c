use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::decimal::Money;

/// Display formatters fixed to the pt-BR locale. Output is byte-exact: the
/// dashboard's snapshot tests compare rendered strings literally.

/// "R$ 1.234,50" — dot thousands grouping, comma decimals, always two
/// fraction digits. Negative amounts render as "-R$ 1.234,50".
pub fn format_currency(amount: Money) -> String {
    let value = amount.as_decimal();
    let total_centavos = (value.abs() * Decimal::from(100))
        .round()
        .to_i128()
        .unwrap_or(0);

    let reais = total_centavos / 100;
    let centavos = total_centavos % 100;
    let sign = if value.is_sign_negative() && total_centavos != 0 {
        "-"
    } else {
        ""
    };

    format!(
        "{}R$ {},{:02}",
        sign,
        group_thousands(&reais.to_string()),
        centavos
    )
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// "###.###.###-##"; anything that is not 11 digits comes back unchanged
pub fn format_cpf(cpf: &str) -> String {
    let digits: String = cpf.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 11 {
        return cpf.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

/// "(##) ####-####" for 10 digits, "(##) #####-####" for 11;
/// anything else comes back unchanged
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[0..2], &digits[2..6], &digits[6..10]),
        11 => format!("({}) {}-{}", &digits[0..2], &digits[2..7], &digits[7..11]),
        _ => phone.to_string(),
    }
}

/// "dd/MM/yyyy" in Brasília time
pub fn format_date(instant: DateTime<Utc>) -> String {
    brasilia_local(instant).format("%d/%m/%Y").to_string()
}

/// "dd/MM/yyyy HH:mm" in Brasília time
pub fn format_date_time(instant: DateTime<Utc>) -> String {
    brasilia_local(instant).format("%d/%m/%Y %H:%M").to_string()
}

// fixed UTC-3; Brazil dropped daylight saving in 2019
fn brasilia_local(instant: DateTime<Utc>) -> NaiveDateTime {
    (instant - Duration::hours(3)).naive_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_grouping_and_decimals() {
        assert_eq!(
            format_currency(Money::from_decimal(dec!(1234.5))),
            "R$ 1.234,50"
        );
        assert_eq!(format_currency(Money::ZERO), "R$ 0,00");
        assert_eq!(format_currency(Money::from_centavos(50)), "R$ 0,50");
        assert_eq!(format_currency(Money::from_major(999)), "R$ 999,00");
        assert_eq!(
            format_currency(Money::from_major(1_000_000)),
            "R$ 1.000.000,00"
        );
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(
            format_currency(Money::from_decimal(dec!(-10))),
            "-R$ 10,00"
        );
    }

    #[test]
    fn test_cpf_mask() {
        assert_eq!(format_cpf("52998224725"), "529.982.247-25");
        // not 11 digits: unchanged
        assert_eq!(format_cpf("1234"), "1234");
        assert_eq!(format_cpf(""), "");
    }

    #[test]
    fn test_phone_mask_selection() {
        assert_eq!(format_phone("8533334444"), "(85) 3333-4444");
        assert_eq!(format_phone("85999998888"), "(85) 99999-8888");
        assert_eq!(format_phone("853333"), "853333");
    }

    #[test]
    fn test_dates_render_in_brasilia_time() {
        let noon_utc = Utc.with_ymd_and_hms(2025, 6, 5, 12, 0, 0).unwrap();
        assert_eq!(format_date(noon_utc), "05/06/2025");
        assert_eq!(format_date_time(noon_utc), "05/06/2025 09:00");

        // midnight utc is still the previous day in brasília
        let midnight_utc = Utc.with_ymd_and_hms(2025, 6, 5, 0, 0, 0).unwrap();
        assert_eq!(format_date(midnight_utc), "04/06/2025");
    }
}

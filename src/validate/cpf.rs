/// Validate a Brazilian CPF using the official check-digit algorithm.
///
/// Non-digit characters are stripped first, so formatted input
/// ("529.982.247-25") is accepted. Sequences of a single repeated digit pass
/// the arithmetic but are not real CPFs and are rejected.
pub fn is_valid_cpf(cpf: &str) -> bool {
    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 11 {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// weighted sum mod 11: weights run from len+1 down to 2, and the digit is
/// zero when the remainder lands on 10 or 11
fn check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (digits.len() as u32 + 1 - i as u32))
        .sum();
    let remainder = (sum * 10) % 11;
    if remainder >= 10 {
        0
    } else {
        remainder
    }
}

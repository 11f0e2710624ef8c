/// true iff the digit-only length is 10 (landline) or 11 (mobile)
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    digits == 10 || digits == 11
}

/// UX-level email check: single `@`, non-empty local and domain parts, and a
/// dot somewhere in the domain. Deliberately permissive, not a security
/// boundary.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && domain.contains('.')
        }
        _ => false,
    }
}

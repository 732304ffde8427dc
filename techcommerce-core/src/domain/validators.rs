// techcommerce-core/src/domain/validators.rs
//
// Pure field predicates. None of these touch the wall clock or any dataset:
// temporal checks take an explicit reference date supplied by the caller.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

// Word-char local part and domain, at least one literal dot before the TLD.
#[allow(clippy::expect_used)] // pattern is a literal, covered by tests below
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("hardcoded email pattern"));

/// The 27 Brazilian federative units.
pub const UFS_VALIDAS: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// A phone number is valid when exactly 11 digits remain after stripping
/// every non-digit character.
pub const TELEFONE_DIGITOS: usize = 11;

pub fn is_valid_email(email: Option<&str>) -> bool {
    email.is_some_and(|e| EMAIL_RE.is_match(e))
}

/// Keeps only ASCII digits.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

pub fn is_valid_phone(phone: Option<&str>) -> bool {
    phone.is_some_and(|p| normalize_phone(p).len() == TELEFONE_DIGITOS)
}

/// Case-insensitive membership in the UF set. The stored casing is the
/// caller's business.
pub fn is_valid_state(uf: Option<&str>) -> bool {
    uf.is_some_and(|s| UFS_VALIDAS.contains(&s.to_uppercase().as_str()))
}

pub fn is_future_date(date: NaiveDate, reference: NaiveDate) -> bool {
    date > reference
}

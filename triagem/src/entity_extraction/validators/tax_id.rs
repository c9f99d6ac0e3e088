//! CPF and CNPJ checksum validation.
//!
//! Both ids end in two mod-11 check digits. Each check digit is the weighted
//! sum of the digits before it, reduced as `r = sum % 11`, then `0` when
//! `r < 2` and `11 - r` otherwise. Ids made of one repeated digit pass that
//! arithmetic but are not issued, so they are rejected up front.

/// Weights for the first CNPJ check digit (over the first 12 digits).
const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second CNPJ check digit (over the first 13 digits).
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

pub const CPF_LEN: usize = 11;
pub const CNPJ_LEN: usize = 14;

/// Keep only the ASCII digits of `text`, as numbers.
pub fn digits_of(text: &str) -> Vec<u32> {
    text.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Keep only the ASCII digits of `text`.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

/// Mod-11 check digit of `digits` under `weights`, pairwise.
fn check_digit(digits: &[u32], weights: impl IntoIterator<Item = u32>) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}

/// Validate a CPF. Punctuation is ignored; anything that is not exactly
/// 11 digits is invalid.
pub fn validate_cpf(text: &str) -> bool {
    let digits = digits_of(text);
    if digits.len() != CPF_LEN || all_same(&digits) {
        return false;
    }

    let first = check_digit(&digits[..9], (2..=10).rev());
    let second = check_digit(&digits[..10], (2..=11).rev());

    digits[9] == first && digits[10] == second
}

/// Validate a CNPJ. Punctuation is ignored; anything that is not exactly
/// 14 digits is invalid.
pub fn validate_cnpj(text: &str) -> bool {
    let digits = digits_of(text);
    if digits.len() != CNPJ_LEN || all_same(&digits) {
        return false;
    }

    let first = check_digit(&digits[..12], CNPJ_FIRST_WEIGHTS);
    let second = check_digit(&digits[..13], CNPJ_SECOND_WEIGHTS);

    digits[12] == first && digits[13] == second
}

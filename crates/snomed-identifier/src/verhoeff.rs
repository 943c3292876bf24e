//! Verhoeff check digit calculation.
//!
//! Every SCTID ends in a single Verhoeff check digit computed over all
//! preceding digits. The scheme detects every single-digit error and every
//! adjacent transposition, which plain mod-10 schemes miss.
//!
//! The algorithm walks the digits from least to most significant, permuting
//! each digit through a position-dependent row of the permutation table and
//! folding the results through the dihedral group D5 multiplication table.
//! The check digit is the group inverse of the final accumulator. The tables
//! below are the published standard tables; they must never be re-derived or
//! altered, or existing identifiers stop validating.

/// Dihedral group D5 multiplication table.
const D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position-dependent permutation table, indexed by position mod 8.
const P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Multiplicative inverse table for D5.
const INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Computes the check digit for a numeral string.
///
/// The numeral is the identifier without its check digit. Returns `None` if
/// any byte is not an ASCII decimal digit.
///
/// # Examples
///
/// ```
/// use snomed_identifier::verhoeff;
///
/// // 73211009 (Diabetes mellitus) is "7321100" plus its check digit.
/// assert_eq!(verhoeff::check_digit("7321100"), Some(9));
/// assert_eq!(verhoeff::check_digit("12x4"), None);
/// ```
pub fn check_digit(numeral: &str) -> Option<u8> {
    let mut c = 0u8;
    for (i, byte) in numeral.bytes().rev().enumerate() {
        let digit = digit_value(byte)?;
        // Position 0 is reserved for the check digit itself.
        c = D[c as usize][P[(i + 1) % 8][digit as usize] as usize];
    }
    Some(INV[c as usize])
}

/// Validates an identifier whose last digit is its check digit.
///
/// Returns false for non-digit input or an identifier shorter than two
/// digits.
///
/// # Examples
///
/// ```
/// use snomed_identifier::verhoeff;
///
/// assert!(verhoeff::validate("116680003")); // IS_A
/// assert!(!verhoeff::validate("116680004"));
/// ```
pub fn validate(identifier: &str) -> bool {
    if identifier.len() < 2 {
        return false;
    }
    let mut c = 0u8;
    for (i, byte) in identifier.bytes().rev().enumerate() {
        let Some(digit) = digit_value(byte) else {
            return false;
        };
        c = D[c as usize][P[i % 8][digit as usize] as usize];
    }
    c == 0
}

fn digit_value(byte: u8) -> Option<u8> {
    byte.is_ascii_digit().then(|| byte - b'0')
}

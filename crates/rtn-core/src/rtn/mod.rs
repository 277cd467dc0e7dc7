//! ABA routing transit number checksum engine.
//!
//! An RTN is 9 decimal digits whose weighted sum (weights 3, 7, 1 repeated by
//! position) is a multiple of 10. Since every weight is coprime to 10, a single
//! unknown digit is always uniquely determined by the other eight.

mod error;
mod number;

pub use error::RtnError;
pub use number::Rtn;

/// Number of digits in an RTN.
pub const RTN_LEN: usize = 9;

/// Character marking the unknown digit in a repair candidate.
pub const PLACEHOLDER: char = 'X';

/// MICR checksum weights, indexed by position modulo 3.
pub const WEIGHTS: [u32; 3] = [3, 7, 1];

fn weight(position: usize) -> u32 {
    WEIGHTS[position % WEIGHTS.len()]
}

/// Map `'0'..='9'` to its value. Anything else, including non-ASCII digits, is rejected.
fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        _ => None,
    }
}

/// Length is in bytes; any multibyte character then fails as `InvalidCharacter`.
fn check_length(candidate: &str) -> Result<(), RtnError> {
    if candidate.len() != RTN_LEN {
        return Err(RtnError::IncorrectLength);
    }
    Ok(())
}

/// Check that `candidate` is 9 decimal digits with a correct check digit.
pub fn validate(candidate: &str) -> Result<(), RtnError> {
    check_length(candidate)?;

    let mut checksum = 0u32;
    for (i, c) in candidate.chars().enumerate() {
        let digit = digit_value(c).ok_or(RtnError::InvalidCharacter)?;
        checksum += digit * weight(i);
    }

    tracing::trace!(candidate, checksum, "rtn checksum");

    if checksum % 10 != 0 {
        return Err(RtnError::ChecksumMismatch);
    }
    Ok(())
}

/// Recover the digit hidden behind [`PLACEHOLDER`] in `candidate`.
///
/// Exactly one position must hold the placeholder; the others must be digits.
pub fn get_missing_digit(candidate: &str) -> Result<u8, RtnError> {
    get_missing_digit_with(candidate, PLACEHOLDER)
}

/// Like [`get_missing_digit`], with a caller-chosen placeholder character.
///
/// The placeholder must be a non-digit ASCII character.
///
/// Errors surface in scan order: the first offending position decides between
/// `InvalidCharacter` and `TooManyMissingDigits`.
pub fn get_missing_digit_with(candidate: &str, placeholder: char) -> Result<u8, RtnError> {
    if !placeholder.is_ascii() || digit_value(placeholder).is_some() {
        return Err(RtnError::InvalidPlaceholder);
    }
    check_length(candidate)?;

    let mut checksum = 0u32;
    let mut missing_weight: Option<u32> = None;
    for (i, c) in candidate.chars().enumerate() {
        if c == placeholder {
            if missing_weight.is_some() {
                return Err(RtnError::TooManyMissingDigits);
            }
            missing_weight = Some(weight(i));
            continue;
        }
        let digit = digit_value(c).ok_or(RtnError::InvalidCharacter)?;
        checksum += digit * weight(i);
    }

    let missing_weight = missing_weight.ok_or(RtnError::NoMissingDigits)?;

    // Weights are coprime to 10, so exactly one d in 0..=9 closes the sum.
    let digit = (0..=9u8)
        .find(|&d| (checksum + missing_weight * u32::from(d)) % 10 == 0)
        .unwrap_or(9);

    tracing::trace!(candidate, checksum, missing_weight, digit, "recovered rtn digit");
    Ok(digit)
}

/// Fill the placeholder in `candidate` and return the completed number.
pub fn repair(candidate: &str) -> Result<Rtn, RtnError> {
    repair_with(candidate, PLACEHOLDER)
}

/// Like [`repair`], with a caller-chosen placeholder character.
pub fn repair_with(candidate: &str, placeholder: char) -> Result<Rtn, RtnError> {
    repair_digit_with(candidate, placeholder).map(|(_, rtn)| rtn)
}

/// Fill the placeholder in `candidate`, returning the recovered digit and the completed number.
pub fn repair_digit(candidate: &str) -> Result<(u8, Rtn), RtnError> {
    repair_digit_with(candidate, PLACEHOLDER)
}

/// Like [`repair_digit`], with a caller-chosen placeholder character.
pub fn repair_digit_with(candidate: &str, placeholder: char) -> Result<(u8, Rtn), RtnError> {
    let digit = get_missing_digit_with(candidate, placeholder)?;
    let fill = char::from(b'0' + digit);
    // The scan above guarantees 9 ASCII digits plus one placeholder with a closing checksum.
    let completed: String = candidate
        .chars()
        .map(|c| if c == placeholder { fill } else { c })
        .collect();
    Ok((digit, Rtn::from_checked(completed)))
}

//! Integration test: recovery agrees with validation across many numbers.
//!
//! Builds valid RTNs from a deterministic sweep of 8-digit prefixes, then
//! checks that every single-position blank is recovered, and that exactly one
//! digit closes the checksum at every position.

use rtn_core::{get_missing_digit, repair, validate, RtnError, PLACEHOLDER};

/// Deterministic spread over 0..10^8, rendered as 8 zero-padded digits.
fn prefixes() -> impl Iterator<Item = String> {
    (0u64..2_000).map(|i| format!("{:08}", (i * 48_271 + 11) % 100_000_000))
}

fn with_char_at(s: &str, pos: usize, c: char) -> String {
    s.chars()
        .enumerate()
        .map(|(i, orig)| if i == pos { c } else { orig })
        .collect()
}

#[test]
fn completed_prefixes_validate() {
    for prefix in prefixes() {
        let candidate = format!("{prefix}{PLACEHOLDER}");
        let rtn = repair(&candidate).unwrap();
        assert_eq!(validate(rtn.as_str()), Ok(()), "{rtn}");
        assert!(rtn.as_str().starts_with(&prefix));
    }
}

#[test]
fn blanking_any_position_recovers_original_digit() {
    for prefix in prefixes() {
        let rtn = repair(&format!("{prefix}{PLACEHOLDER}")).unwrap();
        for (pos, expected) in rtn.digits().into_iter().enumerate() {
            let blanked = with_char_at(rtn.as_str(), pos, PLACEHOLDER);
            assert_eq!(get_missing_digit(&blanked), Ok(expected), "{blanked}");
        }
    }
}

#[test]
fn exactly_one_digit_satisfies_checksum() {
    for prefix in prefixes() {
        // Any 9-digit base works; the digit at `pos` is overwritten below.
        let base = format!("{prefix}0");
        for pos in 0..9 {
            let valid: Vec<u8> = (0..=9u8)
                .filter(|&d| {
                    let candidate = with_char_at(&base, pos, char::from(b'0' + d));
                    validate(&candidate).is_ok()
                })
                .collect();
            assert_eq!(valid.len(), 1, "{base} pos {pos}: {valid:?}");

            let blanked = with_char_at(&base, pos, PLACEHOLDER);
            assert_eq!(get_missing_digit(&blanked), Ok(valid[0]));
        }
    }
}

#[test]
fn wrong_length_fails_both_operations() {
    for len in (0..20).filter(|&n| n != 9) {
        let digits = "1".repeat(len);
        assert_eq!(validate(&digits), Err(RtnError::IncorrectLength));
        assert_eq!(get_missing_digit(&digits), Err(RtnError::IncorrectLength));
    }
}

#[test]
fn any_non_digit_fails_validation() {
    let valid = "322286188";
    for bad in ['a', 'Z', 'X', ' ', '-', '.', '\n', '\0'] {
        for pos in 0..9 {
            let candidate = with_char_at(valid, pos, bad);
            assert_eq!(
                validate(&candidate),
                Err(RtnError::InvalidCharacter),
                "{candidate:?}"
            );
        }
    }
}

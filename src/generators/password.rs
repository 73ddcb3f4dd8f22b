// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use thiserror::Error;

use crate::models::GenerationOptions;

// Fixed character classes. The symbol set is the one shown in the UI and is
// narrower than the set the strength scorer recognizes (see strength.rs).
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("At least one character type must be included")]
    InvalidOptions,
}

/// Concatenate the enabled character classes, in the fixed order uppercase,
/// lowercase, digits, symbols. Built fresh on every call.
pub fn build_alphabet(options: &GenerationOptions) -> Vec<u8> {
    let mut chars = Vec::new();

    if options.include_uppercase {
        chars.extend_from_slice(UPPERCASE);
    }
    if options.include_lowercase {
        chars.extend_from_slice(LOWERCASE);
    }
    if options.include_digits {
        chars.extend_from_slice(DIGITS);
    }
    if options.include_symbols {
        chars.extend_from_slice(SYMBOLS);
    }

    chars
}

/// Generate a random password of exactly `options.length` characters, each
/// drawn independently and uniformly from the enabled classes.
///
/// Fails only when no character class is enabled.
pub fn generate_password(options: &GenerationOptions) -> Result<String, GeneratorError> {
    let chars = build_alphabet(options);

    if chars.is_empty() {
        return Err(GeneratorError::InvalidOptions);
    }

    let mut rng = rand::thread_rng();
    let dist = Uniform::from(0..chars.len());

    let password = (0..options.length)
        .map(|_| chars[dist.sample(&mut rng)] as char)
        .collect();

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(
        length: usize,
        upper: bool,
        lower: bool,
        digits: bool,
        symbols: bool,
    ) -> GenerationOptions {
        GenerationOptions {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_digits: digits,
            include_symbols: symbols,
        }
    }

    #[test]
    fn generated_length_is_exact() {
        for length in [1, 8, 16, 64, 200] {
            let password = generate_password(&options(length, true, true, true, true)).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn alphabet_preserves_class_order() {
        let alphabet = build_alphabet(&GenerationOptions::default());
        let mut expected = Vec::new();
        expected.extend_from_slice(UPPERCASE);
        expected.extend_from_slice(LOWERCASE);
        expected.extend_from_slice(DIGITS);
        expected.extend_from_slice(SYMBOLS);
        assert_eq!(alphabet, expected);
        assert_eq!(alphabet.len(), 88);
    }

    #[test]
    fn digits_only_yields_only_digits() {
        let password = generate_password(&options(64, false, false, true, false)).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn disabled_classes_never_appear() {
        // Letters only: no digit or symbol may sneak in.
        let password = generate_password(&options(256, true, true, false, false)).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_alphabetic()));

        // Symbols only: every character must come from the symbol class.
        let password = generate_password(&options(256, false, false, false, true)).unwrap();
        assert!(password.bytes().all(|b| SYMBOLS.contains(&b)));
    }

    #[test]
    fn no_class_selected_is_an_error() {
        for length in [1, 16, 64] {
            let result = generate_password(&options(length, false, false, false, false));
            assert_eq!(result, Err(GeneratorError::InvalidOptions));
        }
    }

    #[test]
    fn draws_are_roughly_uniform_across_classes() {
        // With all classes enabled each class should appear in proportion to
        // its size relative to the 88-character alphabet. 64k draws keep the
        // sampling error well below the 3% absolute tolerance used here.
        let opts = GenerationOptions {
            length: 64,
            ..GenerationOptions::default()
        };

        let mut upper = 0usize;
        let mut lower = 0usize;
        let mut digits = 0usize;
        let mut symbols = 0usize;
        let mut total = 0usize;

        for _ in 0..1000 {
            let password = generate_password(&opts).unwrap();
            for c in password.chars() {
                total += 1;
                if c.is_ascii_uppercase() {
                    upper += 1;
                } else if c.is_ascii_lowercase() {
                    lower += 1;
                } else if c.is_ascii_digit() {
                    digits += 1;
                } else {
                    symbols += 1;
                }
            }
        }

        let expect = |class_len: usize| class_len as f64 / 88.0;
        let within = |count: usize, expected: f64| {
            let freq = count as f64 / total as f64;
            (freq - expected).abs() < 0.03
        };

        assert!(within(upper, expect(UPPERCASE.len())));
        assert!(within(lower, expect(LOWERCASE.len())));
        assert!(within(digits, expect(DIGITS.len())));
        assert!(within(symbols, expect(SYMBOLS.len())));
    }
}

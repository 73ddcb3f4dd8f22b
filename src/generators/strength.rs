// src/generators/strength.rs
use crate::models::{StrengthChecks, StrengthLabel, StrengthReport};

/// Symbols the scorer recognizes. Wider than the generator's symbol class:
/// quote, double-quote, backslash and slash count here even though they are
/// never generated. Kept as-is so displayed scores stay stable.
pub const SCORED_SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Evaluate the seven predicates behind the strength checklist.
pub fn run_checks(password: &str) -> StrengthChecks {
    let length = password.chars().count();

    StrengthChecks {
        min_length: length >= 8,
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        digits: password.chars().any(|c| c.is_ascii_digit()),
        symbols: password.chars().any(|c| SCORED_SYMBOLS.contains(c)),
        length_12: length >= 12,
        length_16: length >= 16,
    }
}

/// Score a password: one point per satisfied predicate, 0-7, mapped to a
/// discrete label. The empty string scores zero with no label.
///
/// Pure function; safe to call on every keystroke.
pub fn score_password(password: &str) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport {
            score: 0,
            label: StrengthLabel::None,
        };
    }

    let checks = run_checks(password);
    let score = [
        checks.min_length,
        checks.lowercase,
        checks.uppercase,
        checks.digits,
        checks.symbols,
        checks.length_12,
        checks.length_16,
    ]
    .iter()
    .filter(|passed| **passed)
    .count() as u8;

    let label = if score <= 2 {
        StrengthLabel::Weak
    } else if score <= 4 {
        StrengthLabel::Fair
    } else if score <= 6 {
        StrengthLabel::Good
    } else {
        StrengthLabel::Strong
    };

    StrengthReport { score, label }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_scores_zero_with_no_label() {
        let report = score_password("");
        assert_eq!(report.score, 0);
        assert_eq!(report.label, StrengthLabel::None);
    }

    #[test]
    fn single_lowercase_letter_is_weak() {
        let report = score_password("a");
        assert_eq!(report.score, 1);
        assert_eq!(report.label, StrengthLabel::Weak);
    }

    #[test]
    fn eight_mixed_case_letters_are_fair() {
        // length >= 8, lowercase, uppercase
        let report = score_password("Abcdefgh");
        assert_eq!(report.score, 3);
        assert_eq!(report.label, StrengthLabel::Fair);
    }

    #[test]
    fn twelve_chars_with_all_classes_are_good() {
        // Everything but the 16+ bonus
        let report = score_password("Abc12345!@#$");
        assert_eq!(report.score, 6);
        assert_eq!(report.label, StrengthLabel::Good);
    }

    #[test]
    fn sixteen_chars_with_all_classes_are_strong() {
        let report = score_password("Abcdefghij12345!");
        assert_eq!(report.score, 7);
        assert_eq!(report.label, StrengthLabel::Strong);
    }

    #[test]
    fn scoring_is_idempotent() {
        let password = "Tr0ub4dor&3";
        assert_eq!(score_password(password), score_password(password));
    }

    #[test]
    fn quote_backslash_and_slash_count_as_symbols() {
        // These are never generated but the scorer still credits them.
        for password in ["aaaa'aaa", "aaaa\"aaa", "aaaa\\aaa", "aaaa/aaa"] {
            assert!(run_checks(password).symbols, "{password:?}");
        }
    }

    #[test]
    fn checklist_matches_score() {
        let checks = run_checks("Abc12345!@#$");
        assert!(checks.min_length);
        assert!(checks.lowercase);
        assert!(checks.uppercase);
        assert!(checks.digits);
        assert!(checks.symbols);
        assert!(checks.length_12);
        assert!(!checks.length_16);
    }

    #[test]
    fn label_boundaries() {
        // score 2 -> Weak
        assert_eq!(score_password("aB").label, StrengthLabel::Weak);
        // score 4 -> Fair (length >= 8, lower, upper, digit)
        assert_eq!(score_password("Abcdefg1").label, StrengthLabel::Fair);
        // score 5 -> Good (adds a symbol)
        assert_eq!(score_password("Abcdef1!").label, StrengthLabel::Good);
    }
}

// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

/// Discrete strength label derived from the heuristic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthLabel {
    None,
    Weak,
    Fair,
    Good,
    Strong,
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLabel::None => write!(f, ""),
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Fair => write!(f, "Fair"),
            StrengthLabel::Good => write!(f, "Good"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

/// Result of scoring a password: 0-7 points plus the mapped label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthReport {
    /// Number of satisfied predicates (out of 7)
    pub score: u8,
    pub label: StrengthLabel,
}

/// Per-predicate breakdown, matching the checklist shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthChecks {
    /// 8+ characters
    pub min_length: bool,
    /// Contains a lowercase letter
    pub lowercase: bool,
    /// Contains an uppercase letter
    pub uppercase: bool,
    /// Contains a digit
    pub digits: bool,
    /// Contains a symbol
    pub symbols: bool,
    /// 12+ characters
    pub length_12: bool,
    /// 16+ characters
    pub length_16: bool,
}

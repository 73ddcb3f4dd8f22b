// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::core::auth::User;
use crate::models::{StrengthChecks, StrengthReport};

// Password generation types
#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerationRequest {
    /// Password length (default: 16, allowed range 8-64)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include digits (default: true)
    pub include_digits: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Strength report for the generated password
    pub strength: Option<StrengthReport>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Strength report for the analyzed password
    pub strength: Option<StrengthReport>,
    /// Per-predicate checklist, as shown in the UI
    pub checks: Option<StrengthChecks>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Authentication types
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CredentialsRequest {
    /// Email address
    pub email: String,
    /// Account password
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Signed-in user (only present on success)
    pub user: Option<User>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CurrentUserResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Whether a user is signed in
    pub authenticated: bool,
    /// The signed-in user, if any
    pub user: Option<User>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Success message (only present on success)
    pub message: Option<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

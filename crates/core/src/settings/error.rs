//! Settings error types.

use cashflow_shared::AppError;
use thiserror::Error;

/// Settings validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Display name is blank.
    #[error("Name cannot be empty")]
    InvalidName,

    /// Email address is malformed.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Phone number is malformed.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// Locale tag is malformed.
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// WhatsApp notifications need a phone number on the profile.
    #[error("A phone number is required for WhatsApp notifications")]
    PhoneRequired,
}

impl From<SettingsError> for AppError {
    fn from(err: SettingsError) -> Self {
        Self::Validation(err.to_string())
    }
}

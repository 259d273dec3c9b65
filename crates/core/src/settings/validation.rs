//! Field validation rules for settings.

use garde::Validate;

use super::error::SettingsError;
use super::types::Profile;

/// Minimum digits in a phone number, country code included.
const PHONE_MIN_DIGITS: usize = 8;

/// Maximum digits in a phone number (E.164).
const PHONE_MAX_DIGITS: usize = 15;

/// Rejects a blank display name.
pub(crate) fn not_blank(value: &str, _context: &()) -> garde::Result {
    if value.trim().is_empty() {
        return Err(garde::Error::new("cannot be blank"));
    }
    Ok(())
}

/// Validates a profile: a non-blank name, a well-formed email, and the phone
/// format when a phone is set.
///
/// # Errors
///
/// Returns `SettingsError::InvalidEmail`, `SettingsError::InvalidName` or
/// `SettingsError::InvalidPhone`, in that order of precedence.
pub fn validate_profile(profile: &Profile) -> Result<(), SettingsError> {
    if let Err(report) = profile.validate() {
        let email_failed = report
            .iter()
            .any(|(path, _)| path.to_string() == "email");
        return Err(if email_failed {
            SettingsError::InvalidEmail(profile.email.clone())
        } else {
            SettingsError::InvalidName
        });
    }
    match &profile.phone {
        Some(phone) => validate_phone(phone),
        None => Ok(()),
    }
}

/// Validates a phone number in international form: `+` then 8 to 15 digits.
///
/// Spaces, dashes and parentheses are accepted as separators.
///
/// # Errors
///
/// Returns `SettingsError::InvalidPhone` if the number is malformed.
pub fn validate_phone(phone: &str) -> Result<(), SettingsError> {
    let invalid = || SettingsError::InvalidPhone(phone.to_string());

    let rest = phone.trim().strip_prefix('+').ok_or_else(invalid)?;
    let mut digits = 0;
    for ch in rest.chars() {
        match ch {
            '0'..='9' => digits += 1,
            ' ' | '-' | '(' | ')' => {}
            _ => return Err(invalid()),
        }
    }
    if !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits) {
        return Err(invalid());
    }
    Ok(())
}

/// Validates a locale tag of the form `ll` or `ll-RR` (e.g. `pt-BR`).
///
/// # Errors
///
/// Returns `SettingsError::InvalidLocale` if the tag is malformed.
pub fn validate_locale(locale: &str) -> Result<(), SettingsError> {
    let invalid = || SettingsError::InvalidLocale(locale.to_string());

    let (language, region) = match locale.split_once('-') {
        Some((language, region)) => (language, Some(region)),
        None => (locale, None),
    };
    if language.len() != 2 || !language.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(invalid());
    }
    if let Some(region) = region
        && (region.len() != 2 || !region.chars().all(|c| c.is_ascii_uppercase()))
    {
        return Err(invalid());
    }
    Ok(())
}

//! Producer profile rules (display name and country).
//!
//! Registration only requires a non-empty name; these stricter rules apply
//! when a producer edits its profile.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProfileError {
    #[error("invalid producer name")]
    InvalidName,

    #[error("invalid producer country")]
    InvalidCountry,
}

/// Validate a name/country pair, name first.
///
/// - name: 3..=50 characters, ASCII letters, digits or whitespace
/// - country: 2..=50 characters, ASCII letters or whitespace
pub fn validate_profile(name: &str, country: &str) -> Result<(), ProfileError> {
    if !is_valid_name(name) {
        return Err(ProfileError::InvalidName);
    }
    if !is_valid_country(country) {
        return Err(ProfileError::InvalidCountry);
    }
    Ok(())
}

fn is_valid_name(name: &str) -> bool {
    within(name, 3, 50) && name.chars().all(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
}

fn is_valid_country(country: &str) -> bool {
    within(country, 2, 50) && country.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

fn within(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.chars().count())
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::user_details::FormField;

/// Validation failures the user details form can surface.
///
/// Every variant carries its user-facing message in the `#[error]`
/// attribute, so `to_string()` is the text shown next to the input.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum FormError {
    #[error("Username is required.")]
    EmptyUsername,

    #[error("Invalid email. Please check your email address.")]
    InvalidEmail,

    #[error("Invalid phone number. Please enter a 10-digit phone number.")]
    InvalidPhone,

    #[error("Invalid date of birth. Please enter a valid date.")]
    InvalidDateOfBirth,
}

impl FormError {
    /// The input the failure belongs to, so the message can be rendered
    /// next to the offending field rather than in one shared slot.
    pub fn field(&self) -> FormField {
        match self {
            FormError::EmptyUsername => FormField::Username,
            FormError::InvalidEmail => FormField::Email,
            FormError::InvalidPhone => FormField::Phone,
            FormError::InvalidDateOfBirth => FormField::DateOfBirth,
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;

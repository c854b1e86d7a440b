use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(r"^[0-9]{10}$").unwrap();
}

/// Wire format of the HTML date input, also used for policy bounds.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Identifies one input of the user details form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormField {
    Username,
    Email,
    Phone,
    DateOfBirth,
}

/// The record captured by the user details form.
///
/// Every field holds the raw string its input produced. Nothing is
/// rejected while typing; the rules in [`validate_fields`] run only
/// when the form is submitted.
///
/// [`validate_fields`]: UserDetails::validate_fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    /// Display name, free-form text
    pub username: String,

    /// Email address
    pub email: String,

    /// Phone number, ten digits without separators
    pub phone: String,

    /// Date of birth in the date input's `%Y-%m-%d` wire format
    pub date_of_birth: String,
}

impl UserDetails {
    /// Writes `value` into the field named by `field`, leaving the
    /// other three untouched.
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Username => self.username = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::DateOfBirth => self.date_of_birth = value,
        }
    }

    /// The date of birth parsed from the wire format, if it parses.
    pub fn parsed_date_of_birth(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date_of_birth, DATE_INPUT_FORMAT).ok()
    }

    /// Runs the submit-time checks against the caller's `today`.
    ///
    /// The rules are ordered and stop at the first failure: username
    /// must be non-empty, the email must contain `@`, the phone must be
    /// exactly ten digits, and the date of birth must parse to a date
    /// no later than `today`. Returns the failure for the first rule
    /// broken, so at most one message is ever shown at a time.
    pub fn validate_fields(&self, today: NaiveDate) -> Result<()> {
        if self.username.is_empty() {
            return Err(FormError::EmptyUsername);
        }
        if !self.email.contains('@') {
            return Err(FormError::InvalidEmail);
        }
        if !PHONE_REGEX.is_match(&self.phone) {
            return Err(FormError::InvalidPhone);
        }
        match self.parsed_date_of_birth() {
            Some(date) if date <= today => Ok(()),
            _ => Err(FormError::InvalidDateOfBirth),
        }
    }
}

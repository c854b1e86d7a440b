use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::user_details::DATE_INPUT_FORMAT;

/// The range of birth dates the form's date picker offers.
///
/// This bounds the picker only; submit-time validation keeps its own
/// rule (no future dates) so hand-typed values outside the range are
/// still caught by parsing rather than silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDatePolicy {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl Default for BirthDatePolicy {
    fn default() -> Self {
        Self {
            earliest: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap(),
            latest: NaiveDate::from_ymd_opt(2003, 12, 31).unwrap(),
        }
    }
}

impl BirthDatePolicy {
    pub fn new(earliest: NaiveDate, latest: NaiveDate) -> Self {
        Self { earliest, latest }
    }

    /// Whether `date` falls inside the offered range, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.earliest <= date && date <= self.latest
    }

    /// The range start, formatted for the date input's `min` attribute.
    pub fn min_value(&self) -> String {
        self.earliest.format(DATE_INPUT_FORMAT).to_string()
    }

    /// The range end, formatted for the date input's `max` attribute.
    pub fn max_value(&self) -> String {
        self.latest.format(DATE_INPUT_FORMAT).to_string()
    }
}

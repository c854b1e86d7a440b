pub mod models {
    pub mod user_details;
}

pub mod error;
pub mod policy;

// Re-export commonly used items
pub use error::{FormError, Result};
pub use policy::BirthDatePolicy;

// Re-export models
pub use models::user_details::{FormField, UserDetails, DATE_INPUT_FORMAT};

pub mod toast;
pub mod user_details_modal;

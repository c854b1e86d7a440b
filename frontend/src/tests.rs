#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use chrono::NaiveDate;
    use shared::{FormError, FormField, UserDetails};
    use yew::functional::Reducible;

    use crate::components::toast::Toast;
    use crate::pages::home::SUBMIT_NOTICE;
    use crate::state::{ModalAction, ModalState};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn update(field: FormField, value: &str) -> ModalAction {
        ModalAction::UpdateField {
            field,
            value: value.to_string(),
        }
    }

    fn opened() -> Rc<ModalState> {
        Rc::new(ModalState::default()).reduce(ModalAction::Open)
    }

    fn opened_with_valid_entries() -> Rc<ModalState> {
        opened()
            .reduce(update(FormField::Username, "john_doe"))
            .reduce(update(FormField::Email, "john@example.com"))
            .reduce(update(FormField::Phone, "5551234567"))
            .reduce(update(FormField::DateOfBirth, "1990-04-02"))
    }

    // Opening and closing

    #[test]
    fn test_open_shows_the_dialog() {
        let state = opened();
        assert!(state.is_open);
        assert_eq!(state.details, UserDetails::default());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_open_while_open_changes_nothing() {
        let state = opened().reduce(update(FormField::Username, "john_doe"));
        let again = state.clone().reduce(ModalAction::Open);
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn test_close_hides_and_clears_the_form() {
        let state = opened_with_valid_entries().reduce(ModalAction::Close);
        assert!(!state.is_open);
        assert_eq!(state.details, UserDetails::default());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_close_while_closed_changes_nothing() {
        let state = Rc::new(ModalState::default());
        let closed = state.clone().reduce(ModalAction::Close);
        assert!(Rc::ptr_eq(&state, &closed));
    }

    #[test]
    fn test_close_clears_a_pending_error() {
        let state = opened()
            .reduce(ModalAction::Submit { today: today() })
            .reduce(ModalAction::Close);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_reopen_starts_from_a_blank_form() {
        let state = opened_with_valid_entries()
            .reduce(ModalAction::Close)
            .reduce(ModalAction::Open);
        assert!(state.is_open);
        assert_eq!(state.details, UserDetails::default());
    }

    // Field updates

    #[test]
    fn test_update_field_writes_only_the_named_field() {
        let state = opened()
            .reduce(update(FormField::Username, "john_doe"))
            .reduce(update(FormField::Phone, "5551234567"));
        assert_eq!(state.details.username, "john_doe");
        assert_eq!(state.details.phone, "5551234567");
        assert_eq!(state.details.email, "");
        assert_eq!(state.details.date_of_birth, "");
    }

    #[test]
    fn test_update_field_overwrites_previous_value() {
        let state = opened()
            .reduce(update(FormField::Email, "old@example.com"))
            .reduce(update(FormField::Email, "new@example.com"));
        assert_eq!(state.details.email, "new@example.com");
    }

    #[test]
    fn test_update_field_while_closed_stages_the_value() {
        let state = Rc::new(ModalState::default())
            .reduce(update(FormField::Username, "john_doe"))
            .reduce(ModalAction::Open);
        assert_eq!(state.details.username, "john_doe");
    }

    #[test]
    fn test_update_field_keeps_a_pending_error_until_next_submit() {
        let state = opened()
            .reduce(ModalAction::Submit { today: today() })
            .reduce(update(FormField::Username, "john_doe"));
        assert_eq!(state.error, Some(FormError::EmptyUsername));
    }

    // Submitting

    #[test]
    fn test_submit_with_valid_entries_closes_and_reports() {
        let filled = opened_with_valid_entries();
        let entered = filled.details.clone();
        let state = filled.reduce(ModalAction::Submit { today: today() });

        assert!(!state.is_open);
        assert_eq!(state.details, UserDetails::default());
        assert_eq!(state.error, None);
        assert_eq!(state.submitted, Some(entered));
    }

    #[test]
    fn test_submit_with_empty_form_reports_missing_username() {
        let state = opened().reduce(ModalAction::Submit { today: today() });
        assert!(state.is_open);
        assert_eq!(state.error, Some(FormError::EmptyUsername));
        assert_eq!(state.submitted, None);
    }

    #[test]
    fn test_submit_failure_keeps_entries_for_correction() {
        let state = opened_with_valid_entries()
            .reduce(update(FormField::Email, "not-an-address"))
            .reduce(ModalAction::Submit { today: today() });

        assert!(state.is_open);
        assert_eq!(state.error, Some(FormError::InvalidEmail));
        assert_eq!(state.details.username, "john_doe");
        assert_eq!(state.details.email, "not-an-address");
        assert_eq!(state.details.phone, "5551234567");
    }

    #[test]
    fn test_submit_reports_first_broken_rule_only() {
        let state = opened()
            .reduce(update(FormField::Username, "john_doe"))
            .reduce(ModalAction::Submit { today: today() });
        assert_eq!(state.error, Some(FormError::InvalidEmail));
    }

    #[test]
    fn test_submit_rejects_future_date_of_birth() {
        let state = opened_with_valid_entries()
            .reduce(update(FormField::DateOfBirth, "2024-06-16"))
            .reduce(ModalAction::Submit { today: today() });
        assert_eq!(state.error, Some(FormError::InvalidDateOfBirth));
    }

    #[test]
    fn test_submit_accepts_date_of_birth_today() {
        let state = opened_with_valid_entries()
            .reduce(update(FormField::DateOfBirth, "2024-06-15"))
            .reduce(ModalAction::Submit { today: today() });
        assert!(!state.is_open);
        assert_eq!(state.error, None);
        assert!(state.submitted.is_some());
    }

    #[test]
    fn test_submit_while_closed_changes_nothing() {
        let state = Rc::new(ModalState::default());
        let after = state.clone().reduce(ModalAction::Submit { today: today() });
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn test_failed_then_corrected_submit_succeeds() {
        let state = opened_with_valid_entries()
            .reduce(update(FormField::Phone, "555"))
            .reduce(ModalAction::Submit { today: today() });
        assert_eq!(state.error, Some(FormError::InvalidPhone));

        let state = state
            .reduce(update(FormField::Phone, "5551234567"))
            .reduce(ModalAction::Submit { today: today() });
        assert!(!state.is_open);
        assert_eq!(state.error, None);
        assert!(state.submitted.is_some());
    }

    // Submission reporting

    #[test]
    fn test_report_survives_while_closed() {
        let state = opened_with_valid_entries().reduce(ModalAction::Submit { today: today() });
        let still_closed = state.clone().reduce(ModalAction::Close);
        assert!(Rc::ptr_eq(&state, &still_closed));
        assert!(state.submitted.is_some());
    }

    #[test]
    fn test_reopen_clears_the_previous_report() {
        let state = opened_with_valid_entries()
            .reduce(ModalAction::Submit { today: today() })
            .reduce(ModalAction::Open);
        assert_eq!(state.submitted, None);
    }

    #[test]
    fn test_dismissal_never_reports() {
        let state = opened_with_valid_entries().reduce(ModalAction::Close);
        assert_eq!(state.submitted, None);
    }

    // Notices

    #[test]
    fn test_submit_notice_wording_and_auto_dismiss() {
        let notice = Toast::new(SUBMIT_NOTICE);
        assert_eq!(notice.message, "Form submitted successfully.");
        assert_eq!(notice.duration, 5000);
    }

    #[test]
    fn test_each_notice_gets_its_own_id() {
        let first = Toast::new(SUBMIT_NOTICE);
        let second = Toast::new(SUBMIT_NOTICE);
        assert_ne!(first.id, second.id);
    }
}

use chrono::NaiveDate;
use shared::{FormError, FormField, UserDetails};
use std::rc::Rc;
use yew::prelude::*;

/// State of the user details modal: the visibility flag, the form
/// record, the inline failure and the last accepted submission.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ModalState {
    /// Whether the dialog is shown
    pub is_open: bool,
    /// Current field values
    pub details: UserDetails,
    /// First rule the last submit attempt broke, if any
    pub error: Option<FormError>,
    /// Details accepted by the last submit, cleared on the next open
    pub submitted: Option<UserDetails>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalAction {
    /// Show the dialog. Does nothing while already open.
    Open,
    /// Hide the dialog and clear the form. Does nothing while closed.
    Close,
    /// Write one field value. Never validates, never rejects.
    UpdateField { field: FormField, value: String },
    /// Check the record against `today`, closing the dialog on success.
    Submit { today: NaiveDate },
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ModalAction::Open => {
                if self.is_open {
                    return self;
                }
                Rc::new(Self {
                    is_open: true,
                    submitted: None,
                    ..(*self).clone()
                })
            }
            ModalAction::Close => {
                if !self.is_open {
                    return self;
                }
                Rc::new(Self {
                    is_open: false,
                    details: UserDetails::default(),
                    error: None,
                    ..(*self).clone()
                })
            }
            ModalAction::UpdateField { field, value } => {
                let mut details = self.details.clone();
                details.set_field(field, value);
                Rc::new(Self {
                    details,
                    ..(*self).clone()
                })
            }
            ModalAction::Submit { today } => {
                if !self.is_open {
                    return self;
                }
                match self.details.validate_fields(today) {
                    Ok(()) => Rc::new(Self {
                        is_open: false,
                        details: UserDetails::default(),
                        error: None,
                        submitted: Some(self.details.clone()),
                    }),
                    Err(error) => Rc::new(Self {
                        error: Some(error),
                        ..(*self).clone()
                    }),
                }
            }
        }
    }
}

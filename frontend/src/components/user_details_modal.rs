use chrono::Local;
use gloo::events::EventListener;
use log::{debug, info};
use shared::{BirthDatePolicy, FormField, UserDetails};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use crate::state::{ModalAction, ModalState};

#[derive(Properties, Clone, PartialEq)]
pub struct UserDetailsModalProps {
    /// Range offered by the date-of-birth picker.
    #[prop_or_default]
    pub policy: BirthDatePolicy,
    /// Emitted once for every accepted submission.
    #[prop_or_default]
    pub on_submitted: Callback<UserDetails>,
}

/// The "Open Form" trigger plus the modal dialog it opens.
///
/// The dialog collects username, email, phone and date of birth,
/// validates on submit and shows the first failure next to its input.
/// It closes on an accepted submission, on the close button, or on a
/// pointer press outside the panel, clearing the form either way.
#[function_component(UserDetailsModal)]
pub fn user_details_modal(props: &UserDetailsModalProps) -> Html {
    let state = use_reducer_eq(ModalState::default);
    let panel_ref = use_node_ref();

    // Report an accepted submission; the slot holds it until the next open.
    {
        let on_submitted = props.on_submitted.clone();
        use_effect_with(state.submitted.clone(), move |submitted| {
            if let Some(details) = submitted {
                info!("user details accepted for '{}'", details.username);
                on_submitted.emit(details.clone());
            }
            || ()
        });
    }

    // A document-level listener dismisses the dialog on pointer presses
    // outside the panel. It lives exactly as long as the dialog is shown;
    // the cleanup drops it on dismissal, accepted submit and unmount alike.
    {
        let state = state.clone();
        let panel_ref = panel_ref.clone();
        use_effect_with(state.is_open, move |is_open| {
            let listener = is_open.then(|| {
                debug!("dialog opened, watching for outside pointer presses");
                EventListener::new(
                    &gloo::utils::document(),
                    "pointerdown",
                    move |event: &web_sys::Event| {
                        let target = event
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                        let inside = panel_ref
                            .get()
                            .map(|panel| panel.contains(target.as_ref()))
                            .unwrap_or(false);
                        if !inside {
                            state.dispatch(ModalAction::Close);
                        }
                    },
                )
            });
            move || drop(listener)
        });
    }

    let on_open = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ModalAction::Open))
    };

    let on_close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ModalAction::Close))
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(ModalAction::Submit {
                today: Local::now().date_naive(),
            });
        })
    };

    let on_field_change = {
        let state = state.clone();
        move |field: FormField| {
            let state = state.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                state.dispatch(ModalAction::UpdateField {
                    field,
                    value: input.value(),
                });
            })
        }
    };

    let field_error = |field: FormField| -> Html {
        match &state.error {
            Some(error) if error.field() == field => html! {
                <p class="mt-1 text-sm text-red-600">{error.to_string()}</p>
            },
            _ => html! {},
        }
    };

    html! {
        <>
            <button
                onclick={on_open}
                class="px-6 py-3 bg-blue-600 text-white rounded-lg font-medium hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 transform hover:-translate-y-0.5 transition-all duration-200"
            >
                {"Open Form"}
            </button>
            if state.is_open {
                <div class="fixed inset-0 bg-black bg-opacity-50 backdrop-blur-sm flex items-center justify-center z-50">
                    <div ref={panel_ref} class="bg-white rounded-xl shadow-xl w-full max-w-md mx-4 transform transition-all">
                        <div class="flex justify-between items-center p-6 border-b border-gray-200">
                            <h2 class="text-2xl font-semibold text-gray-800">{"Fill Details"}</h2>
                            <button
                                class="text-gray-500 hover:text-gray-700 hover:bg-gray-100 rounded-full p-2 transition-colors duration-200"
                                onclick={on_close}
                            >
                                {"×"}
                            </button>
                        </div>
                        <div class="p-6">
                            <form {onsubmit} novalidate=true class="space-y-4">
                                <div>
                                    <label for="username" class="block text-sm font-medium text-gray-700 mb-1">
                                        {"Username:"}
                                    </label>
                                    <input
                                        type="text"
                                        id="username"
                                        value={state.details.username.clone()}
                                        onchange={on_field_change(FormField::Username)}
                                        class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500 bg-gray-50 focus:bg-white transition-colors duration-200"
                                    />
                                    {field_error(FormField::Username)}
                                </div>
                                <div>
                                    <label for="email" class="block text-sm font-medium text-gray-700 mb-1">
                                        {"Email:"}
                                    </label>
                                    <input
                                        type="email"
                                        id="email"
                                        value={state.details.email.clone()}
                                        onchange={on_field_change(FormField::Email)}
                                        class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500 bg-gray-50 focus:bg-white transition-colors duration-200"
                                    />
                                    {field_error(FormField::Email)}
                                </div>
                                <div>
                                    <label for="phone" class="block text-sm font-medium text-gray-700 mb-1">
                                        {"Phone Number:"}
                                    </label>
                                    <input
                                        type="tel"
                                        id="phone"
                                        value={state.details.phone.clone()}
                                        onchange={on_field_change(FormField::Phone)}
                                        class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500 bg-gray-50 focus:bg-white transition-colors duration-200"
                                    />
                                    {field_error(FormField::Phone)}
                                </div>
                                <div>
                                    <label for="dob" class="block text-sm font-medium text-gray-700 mb-1">
                                        {"Date of Birth:"}
                                    </label>
                                    <input
                                        type="date"
                                        id="dob"
                                        value={state.details.date_of_birth.clone()}
                                        onchange={on_field_change(FormField::DateOfBirth)}
                                        min={props.policy.min_value()}
                                        max={props.policy.max_value()}
                                        class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500 bg-gray-50 focus:bg-white transition-colors duration-200"
                                    />
                                    {field_error(FormField::DateOfBirth)}
                                </div>
                                <button
                                    type="submit"
                                    class="w-full mt-6 px-4 py-2 bg-blue-600 text-white rounded-lg font-medium hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 transform hover:-translate-y-0.5 transition-all duration-200"
                                >
                                    {"Submit"}
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            }
        </>
    }
}

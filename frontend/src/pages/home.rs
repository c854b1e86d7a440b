use yew::prelude::*;

use crate::components::toast::{Toast, ToastContext};
use crate::components::user_details_modal::UserDetailsModal;
use crate::config::Config;
use shared::UserDetails;

/// Wording of the submit confirmation notice.
pub const SUBMIT_NOTICE: &str = "Form submitted successfully.";

#[function_component(Home)]
pub fn home() -> Html {
    let toasts = use_context::<ToastContext>().expect("Toast context not found");

    let on_submitted = {
        let push = toasts.push.clone();
        Callback::from(move |_: UserDetails| {
            push.emit(Toast::new(SUBMIT_NOTICE));
        })
    };

    html! {
        <div class="home-page min-h-screen bg-gradient-to-br from-blue-50 via-white to-indigo-50 flex flex-col items-center justify-center px-4">
            <h1 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-gray-900 mb-8 sm:mb-12 leading-tight">
                {"User Details Modal"}
            </h1>
            <UserDetailsModal policy={Config::birth_date_policy()} {on_submitted} />
        </div>
    }
}

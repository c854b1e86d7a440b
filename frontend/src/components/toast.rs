use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

/// A transient confirmation notice shown in the top-right corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub duration: u32, // milliseconds before auto-dismiss
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            duration: 5000,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub push: Callback<Toast>,
    pub dismiss: Callback<Uuid>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_state(Vec::new);

    let push = {
        let toasts = toasts.clone();
        Callback::from(move |toast: Toast| {
            let toasts = toasts.clone();
            let toast_id = toast.id;
            let duration = toast.duration;

            toasts.set({
                let mut current = (*toasts).clone();
                current.push(toast);
                current
            });

            // Auto-dismiss once the duration elapses
            let timeout = Timeout::new(duration, move || {
                toasts.set({
                    let mut current = (*toasts).clone();
                    current.retain(|t| t.id != toast_id);
                    current
                });
            });
            timeout.forget();
        })
    };

    let dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: Uuid| {
            toasts.set({
                let mut current = (*toasts).clone();
                current.retain(|t| t.id != id);
                current
            });
        })
    };

    let context = ToastContext {
        toasts: (*toasts).clone(),
        push,
        dismiss,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <ToastList />
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastList)]
fn toast_list() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            {toast_context.toasts.iter().map(|toast| {
                let on_close = {
                    let dismiss = toast_context.dismiss.clone();
                    let toast_id = toast.id;
                    Callback::from(move |_: MouseEvent| dismiss.emit(toast_id))
                };

                html! {
                    <div
                        key={toast.id.to_string()}
                        class="flex items-center p-4 rounded-lg shadow-lg border-l-4 text-white min-w-80 max-w-md bg-green-500 border-green-600"
                    >
                        <div class="flex-shrink-0 mr-3">
                            <span class="text-lg font-bold">{"✓"}</span>
                        </div>
                        <div class="flex-1">
                            <p class="text-sm font-medium">{&toast.message}</p>
                        </div>
                        <div class="flex-shrink-0 ml-3">
                            <button
                                onclick={on_close}
                                class="text-white hover:text-gray-200 focus:outline-none focus:text-gray-200 transition-colors duration-200"
                            >
                                <span class="text-lg">{"×"}</span>
                            </button>
                        </div>
                    </div>
                }
            }).collect::<Html>()}
        </div>
    }
}

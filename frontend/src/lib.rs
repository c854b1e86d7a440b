use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::components::toast::ToastProvider;
use crate::pages::home::Home;

pub mod components;
pub mod config;
pub mod state;
pub mod pages {
    pub mod home;
}

// Unit test modules only
#[cfg(test)]
mod tests;

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <Home />
        </ToastProvider>
    }
}

#[wasm_bindgen]
pub fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    // Mount the app
    info!("Mounting application");
    yew::Renderer::<App>::new().render();

    Ok(())
}

// Add a start function that Trunk can call
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    run_app()
}

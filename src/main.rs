use log::{info, Level};
use yew::prelude::*;

mod config;
mod components {
    pub mod carousel;
    pub mod filter;
    pub mod nav;
    pub mod newsletter;
    pub mod popup;
    pub mod scroll_top;
    pub mod typewriter;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;
use log::info;

mod config;
mod fonts;
mod background {
    pub mod blobs;
    pub mod color;
    pub mod gradient;
    pub mod registry;
    pub mod styles;
    pub mod timeline;
}
mod components {
    pub mod carousel;
    pub mod font_switcher;
    pub mod gradient_display;
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
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

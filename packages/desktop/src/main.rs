use dioxus::prelude::*;
use views::{Chats, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Register {},
    #[route("/chats")]
    Chats {},
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Reads whisper.toml and .env from the working directory
    use_context_provider(ui::resolve_config);

    rsx! {
        ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

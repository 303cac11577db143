use dioxus::prelude::*;

use ui::ToastProvider;
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
    use_context_provider(ui::resolve_config);

    rsx! {
        ToastProvider {
            Router::<Route> {}
        }
    }
}

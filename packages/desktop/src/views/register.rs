use dioxus::prelude::*;

#[component]
pub fn Register() -> Element {
    rsx! {
        div {
            class: "signup-page",
            h1 { class: "signup-heading", "Whisper" }
            p { class: "signup-subtitle", "Create an account to start chatting" }
            ui::Signup {}
        }
    }
}

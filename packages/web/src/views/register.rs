//! Registration page: heading plus the shared signup form.

use dioxus::prelude::*;

/// Register page component.
#[component]
pub fn Register() -> Element {
    rsx! {
        div {
            class: "signup-page",

            h1 {
                class: "signup-heading",
                "Create Account"
            }

            p {
                class: "signup-subtitle",
                "Sign up for Whisper"
            }

            ui::Signup {}
        }
    }
}

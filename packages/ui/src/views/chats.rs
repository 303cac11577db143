use api::SessionPayload;
use dioxus::prelude::*;
use store::{ClientConfig, SessionStore};

use crate::platform::make_session_store;

const SIGNUP_CSS: Asset = asset!("/assets/styling/signup.css");

/// Landing view after registration. Greets whoever the stored session belongs to.
#[component]
pub fn ChatsView(signup_href: String) -> Element {
    let config = use_context::<ClientConfig>();

    let session = use_resource(move || {
        let key = config.session.key.clone();
        async move {
            let raw = make_session_store().get(&key).await?;
            match SessionPayload::from_json(&raw) {
                Ok(payload) => Some(payload),
                Err(e) => {
                    tracing::warn!("Ignoring unreadable session under {}: {}", key, e);
                    None
                }
            }
        }
    });

    let body = match &*session.read() {
        None => rsx! {
            p { "Loading..." }
        },
        Some(Some(payload)) => {
            let name = payload.display_name().unwrap_or("there").to_string();
            rsx! {
                h1 { "Welcome, {name}!" }
                p { "Your account is ready." }
            }
        }
        Some(None) => rsx! {
            h1 { "No session found" }
            a { href: "{signup_href}", "Create an account" }
        },
    };

    rsx! {
        document::Stylesheet { href: SIGNUP_CSS }
        div {
            class: "chats-container",
            {body}
        }
    }
}

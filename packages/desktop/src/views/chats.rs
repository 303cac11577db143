use dioxus::prelude::*;

#[component]
pub fn Chats() -> Element {
    rsx! {
        ui::ChatsView {
            signup_href: "/",
        }
    }
}

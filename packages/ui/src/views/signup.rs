//! Registration page view with name/email/password form.

use api::RegistrationClient;
use dioxus::prelude::*;
use dioxus::prelude::dioxus_router::Navigator;
use store::ClientConfig;

use crate::flow::{FormHandle, Navigate, SignupFlow, ERROR_TITLE};
use crate::form::{FormField, FormMessage, FormState};
use crate::icons::{FaEye, FaEyeSlash};
use crate::notification::{Notification, NotificationSink};
use crate::platform::make_session_store;
use crate::toast::use_toasts;
use crate::Icon;

const SIGNUP_CSS: Asset = asset!("/assets/styling/signup.css");

impl FormHandle for Signal<FormState> {
    fn snapshot(&self) -> FormState {
        self.read().clone()
    }

    fn set_submitting(&mut self, submitting: bool) {
        self.write().submitting = submitting;
    }
}

impl Navigate for Navigator {
    fn navigate(&mut self, route: &str) {
        if let Some(failure) = self.push(route) {
            tracing::warn!("Navigation to {} failed: {:?}", route, failure);
        }
    }
}

/// Signup form. Expects a [`ClientConfig`] context and a [`crate::ToastProvider`] above it.
#[component]
pub fn Signup() -> Element {
    let config = use_context::<ClientConfig>();
    let mut form = use_signal(FormState::default);
    let toasts = use_toasts();
    let navigator = use_navigator();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut toasts = toasts;

        let client = match RegistrationClient::from_config(&config.api) {
            Ok(client) => client,
            Err(e) => {
                tracing::error!("Failed to build registration client: {}", e);
                toasts.notify(
                    Notification::error(ERROR_TITLE)
                        .with_description(e.description())
                        .lasting(config.signup.notice_duration()),
                );
                return;
            }
        };

        let flow = SignupFlow::new(client, make_session_store(), &config);
        // Gate and busy flag are settled here, before the next event can be handled.
        let Ok(request) = flow.prepare(&mut form, &mut toasts) else {
            return;
        };

        // Owned by this component's scope: dropped, with any late response, on unmount.
        spawn(async move {
            let mut form = form;
            let mut toasts = toasts;
            let mut navigator = navigator;
            flow.complete(&request, &mut form, &mut toasts, &mut navigator).await;
        });
    };

    let state = form();
    let input_type = if state.password_visible { "text" } else { "password" };

    rsx! {
        document::Stylesheet { href: SIGNUP_CSS }

        form {
            class: "signup-form",
            onsubmit: handle_submit,

            div {
                class: "signup-field",
                label { r#for: "first-name", "Name" }
                input {
                    id: "first-name",
                    class: "signup-input",
                    r#type: "text",
                    placeholder: "Enter Your Name",
                    value: "{state.name}",
                    oninput: move |evt: FormEvent| {
                        form.write().apply(FormMessage::Changed(FormField::Name, evt.value()))
                    },
                }
            }

            div {
                class: "signup-field",
                label { r#for: "email", "Email Address" }
                input {
                    id: "email",
                    class: "signup-input",
                    r#type: "email",
                    placeholder: "Enter Your Email Address",
                    value: "{state.email}",
                    oninput: move |evt: FormEvent| {
                        form.write().apply(FormMessage::Changed(FormField::Email, evt.value()))
                    },
                }
            }

            PasswordField {
                id: "password",
                label: "Password",
                placeholder: "Enter Password",
                value: state.password.clone(),
                input_type: "{input_type}",
                visible: state.password_visible,
                oninput: move |value: String| {
                    form.write().apply(FormMessage::Changed(FormField::Password, value))
                },
                ontoggle: move |_| form.write().apply(FormMessage::ToggleVisibility),
            }

            PasswordField {
                id: "confirm-password",
                label: "Confirm Password",
                placeholder: "Confirm password",
                value: state.confirm_password.clone(),
                input_type: "{input_type}",
                visible: state.password_visible,
                oninput: move |value: String| {
                    form.write().apply(FormMessage::Changed(FormField::ConfirmPassword, value))
                },
                ontoggle: move |_| form.write().apply(FormMessage::ToggleVisibility),
            }

            button {
                class: "signup-submit",
                r#type: "submit",
                disabled: state.submitting,
                if state.submitting { "Signing up..." } else { "Sign Up" }
            }
        }
    }
}

#[component]
fn PasswordField(
    id: String,
    label: String,
    placeholder: String,
    value: String,
    input_type: String,
    visible: bool,
    oninput: EventHandler<String>,
    ontoggle: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "signup-field",
            label { r#for: "{id}", "{label}" }
            div {
                class: "signup-input-group",
                input {
                    id: "{id}",
                    class: "signup-input",
                    r#type: "{input_type}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
                button {
                    class: "signup-reveal",
                    r#type: "button",
                    title: if visible { "Hide passwords" } else { "Show passwords" },
                    onclick: move |_| ontoggle.call(()),
                    if visible {
                        Icon { icon: FaEyeSlash, width: 16, height: 16 }
                    } else {
                        Icon { icon: FaEye, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}

//! Toast notifications pinned to the bottom of the viewport.
//!
//! [`ToastProvider`] owns the queue and renders it; anything below it can grab a
//! [`Toasts`] handle with [`use_toasts`] and push [`Notification`]s into it.
//! Each toast removes itself once its duration has elapsed. The timers run in
//! the root scope, so a toast outlives the view that raised it.

use std::time::Duration;

use dioxus::prelude::*;
use dioxus::prelude::dioxus_core::spawn_forever;

use crate::notification::{Notification, NotificationSink};

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notification });
        id
    }

    /// Remove a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }
}

/// Handle to the toast queue provided by [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct Toasts(Signal<ToastQueue>);

impl Toasts {
    pub fn dismiss(&mut self, id: u64) {
        self.0.write().dismiss(id);
    }
}

impl NotificationSink for Toasts {
    fn notify(&mut self, notification: Notification) {
        let duration = notification.duration;
        let id = self.0.write().push(notification);

        let mut queue = self.0;
        spawn_forever(dismiss_after(duration, move || {
            queue.write().dismiss(id);
        }));
    }
}

/// Wait out a toast's duration, then run `dismiss`.
async fn dismiss_after(duration: Duration, dismiss: impl FnOnce()) {
    sleep(duration).await;
    dismiss();
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Wrap the app with this component to enable toasts.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let queue = use_signal(ToastQueue::default);
    use_context_provider(|| Toasts(queue));

    rsx! {
        {children}
        ToastList {}
    }
}

#[component]
fn ToastList() -> Element {
    let mut toasts = use_toasts();
    let entries = toasts.0.read().toasts.clone();

    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        document::Stylesheet { href: TOAST_CSS }

        div {
            class: "toast-region",
            role: "status",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: toast.notification.severity.css_class(),
                    div {
                        class: "toast-body",
                        strong { class: "toast-title", "{toast.notification.title}" }
                        if let Some(description) = toast.notification.description.clone() {
                            p { class: "toast-description", "{description}" }
                        }
                    }
                    if toast.notification.dismissible {
                        button {
                            class: "toast-close",
                            title: "Dismiss",
                            onclick: move |_| toasts.dismiss(toast.id),
                            "\u{00D7}"
                        }
                    }
                }
            }
        }
    }
}

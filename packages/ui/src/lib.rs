//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod form;
pub use form::{FormField, FormMessage, FormState, ValidationError};

pub mod flow;
pub use flow::{FormHandle, Navigate, SignupFlow, SubmitOutcome};

pub mod notification;
pub use notification::{Notification, NotificationSink, Severity};

mod toast;
pub use toast::{use_toasts, ToastProvider, Toasts};

mod platform;
pub use platform::{make_session_store, resolve_config};

pub mod views;
pub use views::{ChatsView, Signup};

//! # Signup submission
//!
//! [`SignupFlow::submit`] is the whole registration workflow, independent of
//! any rendering. It reads the form through a [`FormHandle`], reports through a
//! [`NotificationSink`] and moves on through a [`Navigate`] implementation, so
//! the same code runs inside the [`crate::Signup`] component and in tests.
//!
//! ```text
//! idle ──submit──▶ (validation fails) ──▶ warning notice ──▶ idle
//!   │
//!   └──▶ submitting ──▶ success ──▶ notice, store payload, navigate ──▶ idle
//!                  └──▶ failure ──▶ error notice ──▶ idle
//! ```
//!
//! A submit that arrives while a request is already in flight is ignored.

use std::time::Duration;

use api::{RegisterError, RegisterRequest, RegistrationApi};
use store::{ClientConfig, SessionStore};

use crate::form::{FormState, ValidationError};
use crate::notification::{Notification, NotificationSink};

pub const SUCCESS_TITLE: &str = "Registration Successful";
pub const ERROR_TITLE: &str = "Error Occurred!";
pub const SESSION_NOT_SAVED: &str = "Your account was created but the session could not be saved. Please sign in.";

/// Read access to the form plus control over its busy flag.
pub trait FormHandle {
    fn snapshot(&self) -> FormState;
    fn set_submitting(&mut self, submitting: bool);
}

impl FormHandle for FormState {
    fn snapshot(&self) -> FormState {
        self.clone()
    }

    fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }
}

/// Moves the application to another route.
pub trait Navigate {
    fn navigate(&mut self, route: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// A previous submission is still in flight.
    AlreadySubmitting,
    Invalid(ValidationError),
    Registered,
    Failed(RegisterError),
    /// The account exists but the payload could not be persisted.
    NotSaved(String),
}

pub struct SignupFlow<A, S> {
    api: A,
    session: S,
    session_key: String,
    redirect: String,
    notice_duration: Duration,
}

impl<A: RegistrationApi, S: SessionStore> SignupFlow<A, S> {
    pub fn new(api: A, session: S, config: &ClientConfig) -> Self {
        Self {
            api,
            session,
            session_key: config.session.key.clone(),
            redirect: config.signup.redirect.clone(),
            notice_duration: config.signup.notice_duration(),
        }
    }

    /// Run a whole submission: [`prepare`](Self::prepare), then
    /// [`complete`](Self::complete).
    pub async fn submit<F, N, V>(
        &self,
        form: &mut F,
        notices: &mut N,
        navigator: &mut V,
    ) -> SubmitOutcome
    where
        F: FormHandle,
        N: NotificationSink,
        V: Navigate,
    {
        match self.prepare(form, notices) {
            Ok(request) => self.complete(&request, form, notices, navigator).await,
            Err(outcome) => outcome,
        }
    }

    /// Synchronous half of a submission: gate, validate and raise the busy flag.
    ///
    /// Event handlers call this before spawning the request, so a second submit
    /// event finds the flag already raised even if the first task has not been
    /// polled yet.
    pub fn prepare<F, N>(&self, form: &mut F, notices: &mut N) -> Result<RegisterRequest, SubmitOutcome>
    where
        F: FormHandle,
        N: NotificationSink,
    {
        let state = form.snapshot();
        if state.submitting {
            tracing::debug!("signup already in flight, ignoring submit");
            return Err(SubmitOutcome::AlreadySubmitting);
        }

        let request = match state.validate() {
            Ok(request) => request,
            Err(reason) => {
                tracing::debug!(%reason, "signup rejected before sending");
                notices.notify(Notification::warning(reason.to_string()).lasting(self.notice_duration));
                return Err(SubmitOutcome::Invalid(reason));
            }
        };

        form.set_submitting(true);
        Ok(request)
    }

    /// Send a prepared request and act on the answer. Expects the busy flag to
    /// be raised and always lowers it.
    pub async fn complete<F, N, V>(
        &self,
        request: &RegisterRequest,
        form: &mut F,
        notices: &mut N,
        navigator: &mut V,
    ) -> SubmitOutcome
    where
        F: FormHandle,
        N: NotificationSink,
        V: Navigate,
    {
        tracing::info!("submitting registration");

        let payload = match self.api.register(request).await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = %err, "registration failed");
                notices.notify(
                    Notification::error(ERROR_TITLE)
                        .with_description(err.description())
                        .lasting(self.notice_duration),
                );
                form.set_submitting(false);
                return SubmitOutcome::Failed(err);
            }
        };

        notices.notify(Notification::success(SUCCESS_TITLE).lasting(self.notice_duration));

        if let Err(err) = self.session.put(&self.session_key, payload.raw()).await {
            tracing::error!(error = %err, key = %self.session_key, "failed to persist session");
            notices.notify(
                Notification::error(ERROR_TITLE)
                    .with_description(SESSION_NOT_SAVED)
                    .lasting(self.notice_duration),
            );
            form.set_submitting(false);
            return SubmitOutcome::NotSaved(err.to_string());
        }

        form.set_submitting(false);
        tracing::info!(route = %self.redirect, "registration complete");
        navigator.navigate(&self.redirect);
        SubmitOutcome::Registered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormField, FormMessage};
    use crate::notification::Severity;
    use api::SessionPayload;
    use serde_json::json;
    use std::cell::RefCell;
    use store::{MemoryStore, StoreError};

    /// Answers every call with a canned result and remembers the requests.
    struct FakeApi {
        answer: Result<SessionPayload, RegisterError>,
        calls: RefCell<Vec<RegisterRequest>>,
    }

    impl FakeApi {
        fn ok(value: serde_json::Value) -> Self {
            Self {
                answer: Ok(SessionPayload::new(value)),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn body(body: &str) -> Self {
            Self {
                answer: SessionPayload::from_json(body),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn err(err: RegisterError) -> Self {
            Self {
                answer: Err(err),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<RegisterRequest> {
            self.calls.borrow().clone()
        }
    }

    impl RegistrationApi for &FakeApi {
        async fn register(&self, request: &RegisterRequest) -> Result<SessionPayload, RegisterError> {
            self.calls.borrow_mut().push(request.clone());
            self.answer.clone()
        }
    }

    struct BrokenStore;

    impl SessionStore for BrokenStore {
        async fn get(&self, _key: &str) -> Option<String> {
            None
        }

        async fn put(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    /// Form handle that records every busy-flag transition.
    #[derive(Default)]
    struct RecordingForm {
        state: FormState,
        transitions: Vec<bool>,
    }

    impl FormHandle for RecordingForm {
        fn snapshot(&self) -> FormState {
            self.state.clone()
        }

        fn set_submitting(&mut self, submitting: bool) {
            self.transitions.push(submitting);
            self.state.submitting = submitting;
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        routes: Vec<String>,
    }

    impl Navigate for RecordingNavigator {
        fn navigate(&mut self, route: &str) {
            self.routes.push(route.to_string());
        }
    }

    fn form(name: &str, email: &str, password: &str, confirm: &str) -> RecordingForm {
        let mut state = FormState::default();
        state.apply(FormMessage::Changed(FormField::Name, name.into()));
        state.apply(FormMessage::Changed(FormField::Email, email.into()));
        state.apply(FormMessage::Changed(FormField::Password, password.into()));
        state.apply(FormMessage::Changed(FormField::ConfirmPassword, confirm.into()));
        RecordingForm {
            state,
            transitions: Vec::new(),
        }
    }

    fn alice() -> RecordingForm {
        form("Alice", "a@x.com", "p1", "p1")
    }

    #[tokio::test]
    async fn test_missing_field_warns_without_calling() {
        let api = FakeApi::ok(json!({}));
        let store = MemoryStore::new();
        let flow = SignupFlow::new(&api, store.clone(), &ClientConfig::default());

        for mut form in [
            form("", "a@x.com", "p1", "p1"),
            form("Alice", "", "p1", "p1"),
            form("Alice", "a@x.com", "", "p1"),
            form("Alice", "a@x.com", "p1", ""),
        ] {
            let mut notices = Vec::new();
            let mut nav = RecordingNavigator::default();

            let outcome = flow.submit(&mut form, &mut notices, &mut nav).await;

            assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::MissingFields));
            assert_eq!(notices.len(), 1);
            assert_eq!(notices[0].title, "Please Fill all the Fields");
            assert_eq!(notices[0].severity, Severity::Warning);
            assert!(form.transitions.is_empty());
            assert!(!form.state.submitting);
            assert!(nav.routes.is_empty());
        }

        assert!(api.calls().is_empty());
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_mismatch_warns_without_calling() {
        let api = FakeApi::ok(json!({}));
        let flow = SignupFlow::new(&api, MemoryStore::new(), &ClientConfig::default());
        let mut form = form("Alice", "a@x.com", "p1", "p2");
        let mut notices = Vec::new();
        let mut nav = RecordingNavigator::default();

        let outcome = flow.submit(&mut form, &mut notices, &mut nav).await;

        assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::PasswordMismatch));
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Passwords Do Not Match");
        assert_eq!(notices[0].severity, Severity::Warning);
        assert!(api.calls().is_empty());
        assert!(form.transitions.is_empty());
    }

    #[tokio::test]
    async fn test_success_stores_payload_and_navigates() {
        let api = FakeApi::ok(json!({"token": "T", "userId": "U1"}));
        let store = MemoryStore::new();
        let flow = SignupFlow::new(&api, store.clone(), &ClientConfig::default());
        let mut form = alice();
        let mut notices = Vec::new();
        let mut nav = RecordingNavigator::default();

        let outcome = flow.submit(&mut form, &mut notices, &mut nav).await;

        assert_eq!(outcome, SubmitOutcome::Registered);
        assert_eq!(
            api.calls(),
            vec![RegisterRequest {
                name: "Alice".into(),
                email: "a@x.com".into(),
                password: "p1".into(),
            }]
        );
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Registration Successful");
        assert_eq!(notices[0].severity, Severity::Success);

        let stored = store.get("userInformation").await.unwrap();
        let stored: serde_json::Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(stored, json!({"token": "T", "userId": "U1"}));

        assert_eq!(nav.routes, vec!["/chats".to_string()]);
        assert_eq!(form.transitions, vec![true, false]);
        assert!(!form.state.submitting);
    }

    #[tokio::test]
    async fn test_server_rejection_shows_message() {
        let api = FakeApi::err(RegisterError::Rejected {
            status: 400,
            message: "Email already in use".into(),
        });
        let store = MemoryStore::new();
        let flow = SignupFlow::new(&api, store.clone(), &ClientConfig::default());
        let mut form = alice();
        let mut notices = Vec::new();
        let mut nav = RecordingNavigator::default();

        let outcome = flow.submit(&mut form, &mut notices, &mut nav).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Error Occurred!");
        assert_eq!(notices[0].severity, Severity::Error);
        assert_eq!(notices[0].description.as_deref(), Some("Email already in use"));
        assert_eq!(store.write_count(), 0);
        assert!(nav.routes.is_empty());
        assert_eq!(form.transitions, vec![true, false]);
    }

    #[tokio::test]
    async fn test_failure_without_message_uses_fallback() {
        let api = FakeApi::err(RegisterError::Transport("connection reset".into()));
        let flow = SignupFlow::new(&api, MemoryStore::new(), &ClientConfig::default());
        let mut form = alice();
        let mut notices = Vec::new();
        let mut nav = RecordingNavigator::default();

        flow.submit(&mut form, &mut notices, &mut nav).await;

        assert_eq!(
            notices[0].description.as_deref(),
            Some(api::FALLBACK_DESCRIPTION)
        );
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_calls_again() {
        let api = FakeApi::err(RegisterError::Status { status: 503 });
        let flow = SignupFlow::new(&api, MemoryStore::new(), &ClientConfig::default());
        let mut form = alice();
        let mut notices = Vec::new();
        let mut nav = RecordingNavigator::default();

        flow.submit(&mut form, &mut notices, &mut nav).await;
        flow.submit(&mut form, &mut notices, &mut nav).await;

        assert_eq!(api.calls().len(), 2);
        assert_eq!(notices.len(), 2);
        assert_eq!(form.transitions, vec![true, false, true, false]);
    }

    #[tokio::test]
    async fn test_submit_while_busy_is_ignored() {
        let api = FakeApi::ok(json!({"token": "T"}));
        let flow = SignupFlow::new(&api, MemoryStore::new(), &ClientConfig::default());
        let mut form = alice();
        form.state.submitting = true;
        let mut notices = Vec::new();
        let mut nav = RecordingNavigator::default();

        let outcome = flow.submit(&mut form, &mut notices, &mut nav).await;

        assert_eq!(outcome, SubmitOutcome::AlreadySubmitting);
        assert!(api.calls().is_empty());
        assert!(notices.is_empty());
        assert!(form.transitions.is_empty());
    }

    #[tokio::test]
    async fn test_stored_session_is_the_body_as_received() {
        let body = r#"{"_id":"U1","name":"Alice","email":"a@x.com","isAdmin":false,"pic":"p.png","token":"T"}"#;
        let api = FakeApi::body(body);
        let store = MemoryStore::new();
        let flow = SignupFlow::new(&api, store.clone(), &ClientConfig::default());
        let mut form = alice();
        let mut notices = Vec::new();
        let mut nav = RecordingNavigator::default();

        let outcome = flow.submit(&mut form, &mut notices, &mut nav).await;

        assert_eq!(outcome, SubmitOutcome::Registered);
        assert_eq!(store.get("userInformation").await.as_deref(), Some(body));
    }

    #[tokio::test]
    async fn test_second_prepare_before_completion_is_ignored() {
        let api = FakeApi::ok(json!({"token": "T"}));
        let flow = SignupFlow::new(&api, MemoryStore::new(), &ClientConfig::default());
        let mut form = alice();
        let mut notices = Vec::new();
        let mut nav = RecordingNavigator::default();

        // Two submit events handled before the first request task runs
        let first = flow.prepare(&mut form, &mut notices);
        let second = flow.prepare(&mut form, &mut notices);

        let request = first.unwrap();
        assert_eq!(second, Err(SubmitOutcome::AlreadySubmitting));
        assert!(form.state.submitting);
        assert!(api.calls().is_empty());

        let outcome = flow.complete(&request, &mut form, &mut notices, &mut nav).await;

        assert_eq!(outcome, SubmitOutcome::Registered);
        assert_eq!(api.calls().len(), 1);
        assert_eq!(form.transitions, vec![true, false]);
        assert!(notices.iter().all(|n| n.severity == Severity::Success));
    }

    #[tokio::test]
    async fn test_store_failure_does_not_navigate() {
        let api = FakeApi::ok(json!({"token": "T"}));
        let flow = SignupFlow::new(&api, BrokenStore, &ClientConfig::default());
        let mut form = alice();
        let mut notices = Vec::new();
        let mut nav = RecordingNavigator::default();

        let outcome = flow.submit(&mut form, &mut notices, &mut nav).await;

        assert!(matches!(outcome, SubmitOutcome::NotSaved(_)));
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].severity, Severity::Success);
        assert_eq!(notices[1].severity, Severity::Error);
        assert_eq!(notices[1].description.as_deref(), Some(SESSION_NOT_SAVED));
        assert!(nav.routes.is_empty());
        assert_eq!(form.transitions, vec![true, false]);
    }

    #[tokio::test]
    async fn test_configured_key_route_and_duration() {
        let api = FakeApi::ok(json!({"token": "T"}));
        let store = MemoryStore::new();
        let mut config = ClientConfig::default()
            .with_redirect("/rooms")
            .with_session_key("session");
        config.signup.notice_duration_ms = 1500;
        let flow = SignupFlow::new(&api, store.clone(), &config);
        let mut form = alice();
        let mut notices = Vec::new();
        let mut nav = RecordingNavigator::default();

        flow.submit(&mut form, &mut notices, &mut nav).await;

        assert!(store.get("session").await.is_some());
        assert!(store.get("userInformation").await.is_none());
        assert_eq!(nav.routes, vec!["/rooms".to_string()]);
        assert_eq!(notices[0].duration, Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn test_plain_form_state_is_a_handle() {
        let api = FakeApi::err(RegisterError::Status { status: 500 });
        let flow = SignupFlow::new(&api, MemoryStore::new(), &ClientConfig::default());
        let mut state = alice().state;
        let mut notices = Vec::new();
        let mut nav = RecordingNavigator::default();

        flow.submit(&mut state, &mut notices, &mut nav).await;

        assert!(!state.submitting);
        assert_eq!(state.name, "Alice");
        assert_eq!(state.password, "p1");
    }
}

//! # HTTP registration client
//!
//! [`RegistrationClient`] sends the single account-creation request of the
//! signup flow. It is the production implementation of [`RegistrationApi`];
//! the UI only depends on the trait so that the flow can be driven against a
//! fake in tests.
//!
//! One attempt per call. There is no retry, and unless the configuration sets
//! `timeout_secs` the transport's own defaults apply.

use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use store::config::ApiConfig;

use crate::error::RegisterError;
use crate::models::{RegisterRequest, SessionPayload};

/// Something that can create an account and hand back the session payload.
pub trait RegistrationApi {
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<SessionPayload, RegisterError>>;
}

#[derive(Debug, Clone)]
pub struct RegistrationClient {
    http: reqwest::Client,
    url: String,
}

impl RegistrationClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Build a client from the `[api]` section of the configuration.
    pub fn from_config(config: &ApiConfig) -> Result<Self, RegisterError> {
        #[allow(unused_mut)]
        let mut builder = reqwest::Client::builder();
        // The fetch backend has no client-wide timeout; the browser's applies.
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            url: config.registration_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RegistrationApi for RegistrationClient {
    async fn register(&self, request: &RegisterRequest) -> Result<SessionPayload, RegisterError> {
        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RegisterError::from_response(status.as_u16(), &body));
        }

        SessionPayload::from_json(&body)
    }
}

use crate::config::ClientSettings;
use crate::models::{
    ClientConfig, HealthAssessmentRequest, MedicationCheckRequest, OperationResult, TriageRequest,
};
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Header carrying the per-call correlation id
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Errors that can occur while talking to the MedAssist service.
///
/// These never reach callers of the operation methods; they are folded into
/// [`OperationResult::Failure`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// MedAssist API client
///
/// One method per service operation. Every method returns an
/// [`OperationResult`] holding the decoded JSON body, whatever the HTTP
/// status; only transport and decode errors become failures.
pub struct ApiClient {
    config: RwLock<ClientConfig>,
    http: Client,
}

impl ApiClient {
    /// Create a client using the transport's default settings
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Create a client on top of a preconfigured `reqwest::Client`
    pub fn with_http_client(config: ClientConfig, http: Client) -> Self {
        Self {
            config: RwLock::new(config),
            http,
        }
    }

    /// Create a client from loaded settings.
    ///
    /// Applies the configured default user id, and a request timeout only
    /// when one is set.
    pub fn from_settings(config: ClientConfig, settings: &ClientSettings) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let config = config.with_default_user_id(&settings.default_user_id);
        Ok(Self::with_http_client(config, builder.build()?))
    }

    /// Current base URL
    pub fn base_url(&self) -> String {
        self.config().base_url().to_string()
    }

    /// Trim `user_id`, substituting the configured default when blank
    pub fn user_id_or_default(&self, user_id: &str) -> String {
        self.config().user_id_or_default(user_id)
    }

    /// Replace the base URL. Calls already in flight keep the old one.
    pub fn set_base_url(&self, url: &str) {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        if config.set_base_url(url) {
            tracing::debug!("Base URL set to {}", config.base_url());
        } else {
            tracing::warn!("Ignoring blank base URL, keeping {}", config.base_url());
        }
    }

    /// Submit symptoms for triage
    ///
    /// POST /triage
    pub fn triage(&self, request: &TriageRequest) -> impl Future<Output = OperationResult> + '_ {
        let body = request.normalized(self.config().default_user_id());
        self.call(Method::POST, "/triage", Some(body))
    }

    /// Check a medication list for interactions
    ///
    /// POST /medications/check
    pub fn check_medications(
        &self,
        request: &MedicationCheckRequest,
    ) -> impl Future<Output = OperationResult> + '_ {
        let body = request.normalized(self.config().default_user_id());
        self.call(Method::POST, "/medications/check", Some(body))
    }

    /// Run triage and medication checks together
    ///
    /// POST /health-assessment
    pub fn health_assessment(
        &self,
        request: &HealthAssessmentRequest,
    ) -> impl Future<Output = OperationResult> + '_ {
        let body = request.normalized(self.config().default_user_id());
        self.call(Method::POST, "/health-assessment", Some(body))
    }

    /// POST /reminders/pause
    pub fn pause_reminders(&self) -> impl Future<Output = OperationResult> + '_ {
        self.call(Method::POST, "/reminders/pause", None::<()>)
    }

    /// POST /reminders/resume
    pub fn resume_reminders(&self) -> impl Future<Output = OperationResult> + '_ {
        self.call(Method::POST, "/reminders/resume", None::<()>)
    }

    /// GET /reminders/status
    pub fn reminder_status(&self) -> impl Future<Output = OperationResult> + '_ {
        self.call(Method::GET, "/reminders/status", None::<()>)
    }

    /// GET /health
    pub fn health(&self) -> impl Future<Output = OperationResult> + '_ {
        self.call(Method::GET, "/health", None::<()>)
    }

    /// Tools the service's agents can use
    ///
    /// GET /tools
    pub fn tools(&self) -> impl Future<Output = OperationResult> + '_ {
        self.call(Method::GET, "/tools", None::<()>)
    }

    /// GET /metrics
    pub fn metrics(&self) -> impl Future<Output = OperationResult> + '_ {
        self.call(Method::GET, "/metrics", None::<()>)
    }

    /// Stored triage results for a user, newest first
    pub fn symptom_history(&self, user_id: &str) -> impl Future<Output = OperationResult> + '_ {
        self.call(Method::GET, &self.user_path(user_id, "events"), None::<()>)
    }

    /// Stored medication checks for a user, newest first
    pub fn medication_history(&self, user_id: &str) -> impl Future<Output = OperationResult> + '_ {
        self.call(Method::GET, &self.user_path(user_id, "medication-checks"), None::<()>)
    }

    /// Reminders emitted for a user, newest first
    pub fn reminder_history(&self, user_id: &str) -> impl Future<Output = OperationResult> + '_ {
        self.call(Method::GET, &self.user_path(user_id, "reminders"), None::<()>)
    }

    fn config(&self) -> RwLockReadGuard<'_, ClientConfig> {
        self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn user_path(&self, user_id: &str, resource: &str) -> String {
        let user_id = self.config().user_id_or_default(user_id);
        format!("/users/{}/{}", urlencoding::encode(&user_id), resource)
    }

    /// Resolve the URL now and return the pending request.
    ///
    /// The base URL is read when the operation is called, not when the
    /// future is first polled.
    fn call<'a, B>(
        &'a self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> impl Future<Output = OperationResult> + 'a
    where
        B: Serialize + 'a,
    {
        let url = self.config().endpoint(path);

        async move {
            let result = self.execute(method.clone(), &url, body.as_ref()).await;
            if let Err(e) = &result {
                tracing::warn!("{} {} failed: {}", method, url, e);
            }
            OperationResult::from(result)
        }
    }

    async fn execute<B>(&self, method: Method, url: &str, body: Option<&B>) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, "{} {}", method, url);

        let mut request = self
            .http
            .request(method, url)
            .header(REQUEST_ID_HEADER, request_id.to_string());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            // Error bodies are still passed through to the caller
            tracing::warn!(%request_id, "Service returned {} for {}", status, url);
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

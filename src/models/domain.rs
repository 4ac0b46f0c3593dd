use crate::models::requests::{normalize_user_id_or, DEFAULT_USER_ID};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Default service address used when nothing is configured or stored
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Client configuration held for the lifetime of an `ApiClient`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    default_user_id: String,
}

impl ClientConfig {
    /// Create a config, normalizing the base URL.
    ///
    /// A blank URL falls back to [`DEFAULT_BASE_URL`].
    pub fn new(base_url: &str) -> Self {
        let mut config = Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_user_id: DEFAULT_USER_ID.to_string(),
        };
        config.set_base_url(base_url);
        config
    }

    /// Use `user_id` in place of blank user ids on outgoing requests.
    ///
    /// A blank value keeps [`DEFAULT_USER_ID`].
    pub fn with_default_user_id(mut self, user_id: &str) -> Self {
        self.default_user_id = normalize_user_id_or(user_id, DEFAULT_USER_ID);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_user_id(&self) -> &str {
        &self.default_user_id
    }

    /// Trim `user_id`, substituting the configured default when blank
    pub fn user_id_or_default(&self, user_id: &str) -> String {
        normalize_user_id_or(user_id, &self.default_user_id)
    }

    /// Replace the base URL, stripping one trailing slash.
    ///
    /// Returns `false` and keeps the current value when `url` is blank.
    pub fn set_base_url(&mut self, url: &str) -> bool {
        if url.trim().is_empty() {
            return false;
        }
        self.base_url = strip_trailing_slash(url).to_string();
        true
    }

    /// Join the base URL and an absolute API path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn strip_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

/// Outcome of a single API call.
///
/// Transport and decode errors are folded into `Failure` so callers handle a
/// single value instead of a `Result` plus a status code.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult<T = Value> {
    Success(T),
    Failure(String),
}

impl<T> OperationResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            OperationResult::Success(value) => Some(value),
            OperationResult::Failure(_) => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            OperationResult::Success(_) => None,
            OperationResult::Failure(message) => Some(message),
        }
    }

    pub fn map<U, F>(self, f: F) -> OperationResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            OperationResult::Success(value) => OperationResult::Success(f(value)),
            OperationResult::Failure(message) => OperationResult::Failure(message),
        }
    }

    /// Convert into a standard `Result` for `?`-style callers
    pub fn into_result(self) -> Result<T, String> {
        match self {
            OperationResult::Success(value) => Ok(value),
            OperationResult::Failure(message) => Err(message),
        }
    }
}

impl OperationResult<Value> {
    /// Interpret a successful JSON body as a typed response.
    ///
    /// A body that does not fit `T` becomes a `Failure`.
    pub fn decode<T: DeserializeOwned>(self) -> OperationResult<T> {
        match self {
            OperationResult::Success(value) => match serde_json::from_value(value) {
                Ok(typed) => OperationResult::Success(typed),
                Err(e) => OperationResult::Failure(format!("Unexpected response shape: {}", e)),
            },
            OperationResult::Failure(message) => OperationResult::Failure(message),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for OperationResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => OperationResult::Success(value),
            Err(e) => OperationResult::Failure(e.to_string()),
        }
    }
}

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Placeholder user id sent when the caller leaves the id blank
pub const DEFAULT_USER_ID: &str = "demo-user";

/// Request body for `POST /triage`
///
/// The client sends whatever it is given; callers that want to refuse blank
/// symptoms run `validate()` first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TriageRequest {
    pub user_id: String,
    #[validate(length(min = 1))]
    pub symptoms: String,
    /// Serialized as `null` when absent, never omitted
    pub context: Option<String>,
}

impl TriageRequest {
    /// Build a triage request from raw form input.
    ///
    /// A blank user id becomes [`DEFAULT_USER_ID`], symptoms are trimmed and a
    /// blank context becomes `None`. Empty symptoms are kept as-is: deciding
    /// whether to send them is up to the caller.
    pub fn new(user_id: &str, symptoms: &str, context: Option<&str>) -> Self {
        Self {
            user_id: normalize_user_id(user_id),
            symptoms: symptoms.trim().to_string(),
            context: normalize_context(context),
        }
    }

    /// Copy with a blank user id replaced by `default_user` and a blank
    /// context cleared. Symptoms are sent as given.
    pub fn normalized(&self, default_user: &str) -> Self {
        Self {
            user_id: normalize_user_id_or(&self.user_id, default_user),
            symptoms: self.symptoms.clone(),
            context: normalize_context(self.context.as_deref()),
        }
    }
}

/// Request body for `POST /medications/check`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationCheckRequest {
    pub user_id: String,
    pub medications: Vec<String>,
}

impl MedicationCheckRequest {
    /// Build a medication check from a list the caller already split
    pub fn new(user_id: &str, medications: Vec<String>) -> Self {
        Self {
            user_id: normalize_user_id(user_id),
            medications,
        }
    }

    /// Build a medication check from comma-separated free text
    pub fn from_free_text(user_id: &str, text: &str) -> Self {
        Self::new(user_id, parse_medication_list(text))
    }

    /// Copy with a blank user id replaced by `default_user`
    pub fn normalized(&self, default_user: &str) -> Self {
        Self {
            user_id: normalize_user_id_or(&self.user_id, default_user),
            medications: self.medications.clone(),
        }
    }
}

/// Request body for `POST /health-assessment`
///
/// Runs triage and, when medications are given, a medication check in one
/// call. Absent optional fields are sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct HealthAssessmentRequest {
    pub user_id: String,
    #[validate(length(min = 1))]
    pub symptoms: String,
    pub medications: Option<Vec<String>>,
    pub context: Option<String>,
}

impl HealthAssessmentRequest {
    /// Build an assessment from raw form input.
    ///
    /// Medication text is split like [`MedicationCheckRequest::from_free_text`];
    /// an empty list becomes `None`.
    pub fn new(
        user_id: &str,
        symptoms: &str,
        medications: Option<&str>,
        context: Option<&str>,
    ) -> Self {
        Self {
            user_id: normalize_user_id(user_id),
            symptoms: symptoms.trim().to_string(),
            medications: normalize_medications(medications.map(parse_medication_list)),
            context: normalize_context(context),
        }
    }

    /// Copy with a blank user id replaced by `default_user`, and blank
    /// context or an empty medication list cleared
    pub fn normalized(&self, default_user: &str) -> Self {
        Self {
            user_id: normalize_user_id_or(&self.user_id, default_user),
            symptoms: self.symptoms.clone(),
            medications: normalize_medications(self.medications.clone()),
            context: normalize_context(self.context.as_deref()),
        }
    }
}

/// Trim a user id, substituting [`DEFAULT_USER_ID`] when nothing is left
pub fn normalize_user_id(user_id: &str) -> String {
    normalize_user_id_or(user_id, DEFAULT_USER_ID)
}

/// Trim a user id, substituting `default_user` when nothing is left
pub fn normalize_user_id_or(user_id: &str, default_user: &str) -> String {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        default_user.trim().to_string()
    } else {
        trimmed.to_string()
    }
}

fn normalize_context(context: Option<&str>) -> Option<String> {
    context
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

fn normalize_medications(medications: Option<Vec<String>>) -> Option<Vec<String>> {
    medications.filter(|m| !m.is_empty())
}

/// Split free text on commas, trimming entries and dropping empty ones.
///
/// Order is preserved and duplicates are kept.
pub fn parse_medication_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

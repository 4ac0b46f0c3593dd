use serde::{Deserialize, Serialize};

/// Body returned by `POST /triage`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageResponse {
    pub category: String,
    pub urgency: String,
    pub recommended_action: String,
    #[serde(default)]
    pub red_flags: Vec<String>,
    pub reasoning: String,
}

/// A single interaction or duplication found by the medication check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationConflict {
    pub medications: Vec<String>,
    pub severity: String,
    pub reason: String,
}

/// Body returned by `POST /medications/check`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationCheckResponse {
    pub risk_level: String,
    #[serde(default)]
    pub conflicts: Vec<MedicationConflict>,
    pub guidance: String,
}

/// Body returned by the pause and resume endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderToggle {
    pub status: String,
}

/// Body returned by `GET /reminders/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderStatus {
    pub running: bool,
    pub next_run_time: Option<chrono::DateTime<chrono::FixedOffset>>,
}

/// Body returned by `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Stored triage result from `GET /users/{id}/events`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomEvent {
    pub id: i64,
    pub user_id: String,
    pub symptoms: String,
    pub context: Option<String>,
    #[serde(flatten)]
    pub triage: TriageResponse,
    pub created_at: chrono::NaiveDateTime,
}

/// Error body the service returns for missing history (404)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

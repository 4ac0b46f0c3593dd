//! MedAssist Client - typed client for the MedAssist triage service
//!
//! Wraps the service's JSON HTTP API (symptom triage, medication checks and
//! reminder control) behind [`ApiClient`], whose operations always return an
//! [`OperationResult`] instead of raising transport or decode errors.

pub mod config;
pub mod models;
pub mod render;
pub mod services;

// Re-export commonly used types
pub use models::{
    parse_medication_list, ClientConfig, HealthAssessmentRequest, MedicationCheckRequest,
    OperationResult, TriageRequest,
};
pub use services::{ApiClient, BaseUrlStore, FileStore, MemoryStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let request = MedicationCheckRequest::from_free_text("", "aspirin, ibuprofen");
        assert_eq!(request.user_id, "demo-user");
        assert_eq!(parse_medication_list("aspirin, ibuprofen"), request.medications);
    }
}

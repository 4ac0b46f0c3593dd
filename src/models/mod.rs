// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ClientConfig, OperationResult, DEFAULT_BASE_URL};
pub use requests::{
    normalize_user_id, normalize_user_id_or, parse_medication_list, HealthAssessmentRequest,
    MedicationCheckRequest, TriageRequest, DEFAULT_USER_ID,
};
pub use responses::{
    ErrorDetail, HealthResponse, MedicationCheckResponse, MedicationConflict, ReminderStatus,
    ReminderToggle, SymptomEvent, TriageResponse,
};

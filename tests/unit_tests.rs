// Unit tests for request construction and client configuration

use medassist_client::models::{
    parse_medication_list, ClientConfig, MedicationCheckRequest, OperationResult, TriageRequest,
    DEFAULT_BASE_URL,
};
use medassist_client::render::render;
use serde_json::json;

const PATHS: [&str; 5] = [
    "/triage",
    "/medications/check",
    "/reminders/pause",
    "/reminders/resume",
    "/reminders/status",
];

#[test]
fn test_single_separator_for_every_path() {
    let bases = [
        "http://127.0.0.1:8000/",
        "https://medassist.example.com/",
        "https://gateway.example.com/api/v1/",
        "http://localhost/",
    ];

    for base in bases {
        let config = ClientConfig::new(base);
        for path in PATHS {
            let url = config.endpoint(path);
            let after_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap();
            assert!(!after_scheme.contains("//"), "double slash in {}", url);
            assert!(url.ends_with(path));
        }
    }
}

#[test]
fn test_default_config() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    assert_eq!(config.endpoint("/triage"), "http://127.0.0.1:8000/triage");
}

#[test]
fn test_medication_split_is_idempotent() {
    let inputs = [
        "aspirin, ibuprofen",
        " warfarin ,, aspirin ,",
        ",,,",
        "",
        "paracetamol",
        "aspirin,aspirin , ASPIRIN",
        "  ibuprofen\t,  naproxen  ",
    ];

    for input in inputs {
        let first = parse_medication_list(input);
        let second = parse_medication_list(&first.join(","));
        assert_eq!(first, second, "not idempotent for {:?}", input);
    }
}

#[test]
fn test_medication_split_preserves_order_and_duplicates() {
    let request = MedicationCheckRequest::from_free_text("u1", "warfarin, aspirin, warfarin");
    assert_eq!(request.medications, vec!["warfarin", "aspirin", "warfarin"]);
}

#[test]
fn test_medication_request_wire_format() {
    let request = MedicationCheckRequest::new("u1", vec!["aspirin".into(), "ibuprofen".into()]);
    assert_eq!(
        serde_json::to_string(&request).unwrap(),
        r#"{"user_id":"u1","medications":["aspirin","ibuprofen"]}"#
    );
}

#[test]
fn test_triage_request_normalization() {
    let request = TriageRequest::new("  ", "  sore throat  ", Some(" after travel "));
    assert_eq!(request.user_id, "demo-user");
    assert_eq!(request.symptoms, "sore throat");
    assert_eq!(request.context.as_deref(), Some("after travel"));

    let json = serde_json::to_value(TriageRequest::new("u2", "rash", None)).unwrap();
    assert!(json.get("context").unwrap().is_null());
}

#[test]
fn test_operation_result_helpers() {
    let ok: OperationResult = OperationResult::Success(json!({"status": "ok"}));
    assert!(ok.is_success());
    assert_eq!(ok.success(), Some(&json!({"status": "ok"})));
    assert_eq!(ok.failure_message(), None);

    let failed: OperationResult = OperationResult::Failure("timed out".into());
    assert!(failed.is_failure());
    assert_eq!(failed.clone().into_result(), Err("timed out".to_string()));
    assert_eq!(render(&failed), "error: timed out");

    let mapped = ok.map(|v| v["status"].as_str().unwrap_or_default().to_string());
    assert_eq!(mapped, OperationResult::Success("ok".to_string()));
}

#[test]
fn test_operation_result_from_result() {
    let parsed: Result<serde_json::Value, serde_json::Error> = serde_json::from_str("");
    let result = OperationResult::from(parsed);
    assert!(result.failure_message().unwrap().contains("EOF"));
}

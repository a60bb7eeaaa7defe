use triage_core::errors::*;

#[test]
fn service_errors_are_transient() {
    let err: TriageError = ServiceError::Timeout {
        service: "ollama".into(),
        timeout_ms: 10_000,
    }
    .into();
    assert!(err.is_transient());
    assert!(!err.is_configuration());
    assert_eq!(err.error_code(), "SERVICE_TIMEOUT");
}

#[test]
fn missing_credential_is_configuration() {
    let err: TriageError = ConfigError::MissingCredential {
        service: "generator".into(),
        hint: "set OPENAI_API_KEY".into(),
    }
    .into();
    assert!(err.is_configuration());
    assert!(!err.is_transient());
    assert_eq!(err.error_code(), "MISSING_CREDENTIAL");
}

#[test]
fn coded_string_prefixes_code() {
    let err = ValidationError::EmptyField {
        field: "subject".into(),
    };
    assert_eq!(
        err.coded_string(),
        "[VALIDATION_ERROR] field must not be empty: subject"
    );
}

#[test]
fn store_corruption_has_its_own_code() {
    let err = StoreError::Corrupt {
        path: "feedback.json".into(),
        details: "expected value".into(),
    };
    assert_eq!(err.error_code(), "STORE_CORRUPT");
    let io = StoreError::io(
        std::path::Path::new("x.json"),
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    );
    assert_eq!(io.error_code(), "STORE_ERROR");
}

#[test]
fn service_error_exposes_service_name() {
    let err = ServiceError::Status {
        service: "backend".into(),
        status: 503,
        body: "overloaded".into(),
    };
    assert_eq!(err.service(), "backend");
    assert_eq!(err.error_code(), "SERVICE_UNAVAILABLE");
}

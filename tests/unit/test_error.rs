use cloud_client::error::AppError;
use cloud_client::model::requests::ResourceType;
use std::error::Error;

#[test]
fn test_app_error_display_status_errors() {
    assert_eq!(AppError::AccessDenied.to_string(), "access denied");
    assert_eq!(AppError::NotFound.to_string(), "not found");
    assert_eq!(AppError::PayloadTooLarge.to_string(), "payload too large");
    assert_eq!(AppError::ServerError.to_string(), "server error");
    assert_eq!(AppError::AuthExpired.to_string(), "auth token expired");
}

#[test]
fn test_app_error_display_bad_request() {
    let error = AppError::BadRequest {
        code: 400,
        message: "Bad flavor".to_string(),
        details: "flavorId 99 does not exist".to_string(),
    };
    let text = error.to_string();
    assert!(text.starts_with("bad request"));
    assert!(text.contains("400"));
    assert!(text.contains("Bad flavor"));
    assert!(text.contains("flavorId 99 does not exist"));
}

#[test]
fn test_app_error_display_invalid_credentials() {
    let error = AppError::InvalidCredentials("api key is missing".to_string());
    assert_eq!(error.to_string(), "invalid credentials: api key is missing");
}

#[test]
fn test_app_error_display_missing_endpoint() {
    let error = AppError::MissingEndpoint(ResourceType::Cdn);
    assert_eq!(error.to_string(), "no endpoint discovered for cdn");
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(ref e) => {
            assert!(app_error.source().is_some());
            assert!(e.is_syntax());
        }
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_is_status_error() {
    assert!(AppError::NotFound.is_status_error());
    assert!(AppError::ServerError.is_status_error());
    assert!(
        AppError::BadRequest {
            code: 1,
            message: "m".into(),
            details: "d".into()
        }
        .is_status_error()
    );
    assert!(!AppError::AuthExpired.is_status_error());
    assert!(!AppError::ParseError("x".into()).is_status_error());
    assert!(!AppError::InvalidInput("x".into()).is_status_error());
}

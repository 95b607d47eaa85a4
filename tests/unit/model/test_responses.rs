use assert_json_diff::assert_json_eq;
use cloud_client::error::AppError;
use cloud_client::model::http::check_status;
use cloud_client::model::responses::{ApiResponse, BadRequestResponse};
use reqwest::StatusCode;
use serde_json::{Value, json};

#[test]
fn test_bad_request_body_is_decoded() {
    let fault =
        BadRequestResponse::parse(r#"{"badRequest":{"code":1,"message":"m","details":"d"}}"#)
            .unwrap();
    assert_eq!(fault.code, 1);
    assert_eq!(fault.message, "m");
    assert_eq!(fault.details, "d");
}

#[test]
fn test_bad_request_with_wrong_shape_is_parse_error() {
    let bodies = [
        r#"{"itemNotFound":{"code":404,"message":"m","details":"d"}}"#,
        r#"{"badRequest":{"code":"x","message":"m","details":"d"}}"#,
        r#"{"badRequest":{"code":1,"message":"m"}}"#,
        "not json",
    ];
    for body in bodies {
        assert!(
            matches!(BadRequestResponse::parse(body), Err(AppError::ParseError(_))),
            "body: {body}"
        );
    }
}

#[test]
fn test_check_status_maps_400() {
    let response = ApiResponse::new(
        StatusCode::BAD_REQUEST,
        r#"{"badRequest":{"code":1,"message":"m","details":"d"}}"#,
    );
    match check_status(response) {
        Err(AppError::BadRequest {
            code,
            message,
            details,
        }) => {
            assert_eq!(code, 1);
            assert_eq!(message, "m");
            assert_eq!(details, "d");
        }
        other => panic!("Expected BadRequest, got {other:?}"),
    }
}

#[test]
fn test_check_status_maps_error_codes() {
    let cases = [
        (StatusCode::FORBIDDEN, "access denied"),
        (StatusCode::NOT_FOUND, "not found"),
        (StatusCode::PAYLOAD_TOO_LARGE, "payload too large"),
        (StatusCode::INTERNAL_SERVER_ERROR, "server error"),
    ];
    for (status, expected) in cases {
        let err = check_status(ApiResponse::new(status, "")).unwrap_err();
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn test_check_status_passes_other_codes_through() {
    for status in [
        StatusCode::OK,
        StatusCode::ACCEPTED,
        StatusCode::NO_CONTENT,
        StatusCode::NON_AUTHORITATIVE_INFORMATION,
        StatusCode::CONFLICT,
        StatusCode::SERVICE_UNAVAILABLE,
    ] {
        let response = check_status(ApiResponse::new(status, "body")).unwrap();
        assert_eq!(response.status, status);
        assert_eq!(response.body, "body");
    }
}

#[test]
fn test_api_response_json() {
    let response = ApiResponse::new(StatusCode::OK, r#"{"limits":{"rate":[],"absolute":{}}}"#);
    assert!(response.is_success());
    let value: Value = response.json().unwrap();
    assert_json_eq!(value, json!({"limits": {"rate": [], "absolute": {}}}));

    let broken = ApiResponse::new(StatusCode::OK, "<html>");
    assert!(matches!(broken.json::<Value>(), Err(AppError::Json(_))));
}

use super::*;

#[derive(Debug, thiserror::Error)]
#[error("upstream hiccup")]
struct Flaky;

impl ErrorCode for Flaky {
    fn error_code(&self) -> &'static str {
        "E_FLAKY"
    }

    fn retryable(&self) -> bool {
        true
    }
}

#[tokio::test]
async fn api_error_serializes_code_message_and_retry_hint() {
    let response = ApiError::new(StatusCode::BAD_GATEWAY, &Flaky).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json, serde_json::json!({ "error": "E_FLAKY", "message": "upstream hiccup", "retryable": true }));
}

#[test]
fn plain_errors_are_not_retryable() {
    let err = ApiError::plain(StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED", "missing token");
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert!(!err.body.retryable);
    assert_eq!(err.body.message, "missing token");
}

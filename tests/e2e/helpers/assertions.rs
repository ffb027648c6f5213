use super::speech_server::CapturedRequest;

pub fn assert_speech_request(
    request: &CapturedRequest,
    expected_voice: &str,
    expected_model: &str,
    expected_format: &str,
) {
    assert_eq!(request.authorization.as_deref(), Some("Bearer sk-test"));

    let body = &request.body;
    assert_eq!(body.get("voice").and_then(|v| v.as_str()), Some(expected_voice));
    assert_eq!(body.get("model").and_then(|v| v.as_str()), Some(expected_model));
    assert_eq!(
        body.get("response_format").and_then(|v| v.as_str()),
        Some(expected_format)
    );
    assert!(body.get("input").and_then(|v| v.as_str()).is_some());
}

pub fn input_of(request: &CapturedRequest) -> &str {
    request
        .body
        .get("input")
        .and_then(|v| v.as_str())
        .expect("Missing input")
}

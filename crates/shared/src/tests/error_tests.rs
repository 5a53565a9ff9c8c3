use super::*;

#[test]
fn error_envelope_converts_into_exception() {
    let envelope: ApiError =
        serde_json::from_str(r#"{"success": false, "error": 404, "message": "Not Found"}"#)
            .expect("decode");

    let exception = ApiException::from(envelope);

    assert_eq!(exception.status, 404);
    assert_eq!(exception.to_string(), "backend error 404: Not Found");
}

#[test]
fn envelope_without_success_flag_still_decodes() {
    let envelope: ApiError =
        serde_json::from_str(r#"{"error": 500, "message": "Internal Server Error"}"#)
            .expect("decode");
    assert!(!envelope.success);
    assert_eq!(envelope.error, 500);
}

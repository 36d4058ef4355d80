use super::*;
use crate::Vehicle;

#[test]
fn empty_vehicle_list_is_a_valid_payload() {
    let raw = r#"{"statusCode":200,"success":true,"message":"ok","data":[]}"#;
    let env: ApiEnvelope<Vec<Vehicle>> = serde_json::from_str(raw).unwrap();
    let payload = env.into_payload().unwrap();
    assert!(payload.data.is_empty());
    assert!(payload.meta.is_none());
}

#[test]
fn missing_success_field_is_a_decode_failure() {
    // 合同违规：缺少 success 字段不得被静默容忍
    let raw = r#"{"statusCode":200,"data":[]}"#;
    let result: Result<ApiEnvelope<Vec<Vehicle>>, _> = serde_json::from_str(raw);
    assert!(result.is_err());
}

#[test]
fn rejected_envelope_carries_the_backend_message() {
    let raw = r#"{"statusCode":401,"success":false,"message":"password mismatch"}"#;
    let env: ApiEnvelope<Vec<Vehicle>> = serde_json::from_str(raw).unwrap();
    match env.into_payload() {
        Err(EnvelopeError::Rejected { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message.as_deref(), Some("password mismatch"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn successful_envelope_without_data_is_missing_data() {
    let raw = r#"{"statusCode":200,"success":true,"message":"ok"}"#;
    let env: ApiEnvelope<Vec<Vehicle>> = serde_json::from_str(raw).unwrap();
    assert_eq!(
        env.into_payload().unwrap_err(),
        EnvelopeError::MissingData { status: 200 }
    );
}

#[test]
fn ack_ignores_data_entirely() {
    let raw = r#"{"statusCode":200,"success":true,"message":"logged out"}"#;
    let env: ApiEnvelope<serde_json::Value> = serde_json::from_str(raw).unwrap();
    assert!(env.into_ack().is_ok());
}

#[test]
fn meta_detects_single_and_multi_page_lists() {
    let single = PageMeta {
        page: 1,
        limit: 10,
        total: 3,
        total_page: Some(1),
    };
    let multi = PageMeta {
        page: 1,
        limit: 10,
        total: 25,
        total_page: Some(3),
    };
    assert!(!single.has_multiple_pages());
    assert!(multi.has_multiple_pages());
}

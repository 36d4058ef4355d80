use super::*;

#[test]
fn decodes_fleet_user_claims() {
    let claims = decode_token(&fleet_user_token()).unwrap();
    assert_eq!(claims.role, "fleet_user");
    assert_eq!(claims.sub.as_deref(), Some("u-1"));
    assert!(claims.is_fleet_user());
}

#[test]
fn decodes_claims_without_optional_fields() {
    let claims = decode_token(&token_with_payload(r#"{"role":"admin"}"#)).unwrap();
    assert!(!claims.is_fleet_user());
    assert!(claims.email.is_none());
}

#[test]
fn rejects_tokens_without_three_segments() {
    assert_eq!(decode_token("").unwrap_err(), DecodeError::MalformedToken);
    assert_eq!(
        decode_token("onlyonesegment").unwrap_err(),
        DecodeError::MalformedToken
    );
    assert_eq!(
        decode_token("a.b.c.d").unwrap_err(),
        DecodeError::MalformedToken
    );
}

#[test]
fn rejects_non_base64_payload() {
    assert_eq!(
        decode_token("h.!!not-base64!!.s").unwrap_err(),
        DecodeError::InvalidBase64
    );
}

#[test]
fn rejects_payload_without_role() {
    let token = token_with_payload(r#"{"sub":"u-1"}"#);
    assert_eq!(decode_token(&token).unwrap_err(), DecodeError::InvalidClaims);
}

#[test]
fn rejects_payload_that_is_not_json() {
    let token = token_with_payload("plain text");
    assert_eq!(decode_token(&token).unwrap_err(), DecodeError::InvalidClaims);
}

#[test]
fn claims_or_none_treats_absence_and_garbage_identically() {
    assert_eq!(claims_or_none(None), None);
    assert_eq!(claims_or_none(Some("garbage")), None);
    assert!(claims_or_none(Some(&fleet_user_token())).is_some());
}

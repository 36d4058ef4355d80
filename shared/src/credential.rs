//! Credential decoder.
//!
//! Parses the opaque bearer credential (a compact `header.payload.signature`
//! token) into its claims. The signature is NOT verified here: the backend
//! verifies it on every request, the portal only needs the claims to decide
//! route access. Pure and deterministic, no I/O, never panics.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

/// Claims carried by the session credential.
///
/// Only `role` is load-bearing for the gate; the rest is displayed or
/// forwarded as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub role: String,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    /// 是否为车队门户的特权角色
    pub fn is_fleet_user(&self) -> bool {
        self.role == crate::FLEET_ROLE
    }
}

/// Decode failure. Callers must treat every variant as "unauthenticated";
/// none of them may propagate out of the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Token is not `header.payload.signature`.
    MalformedToken,
    /// Payload segment is not valid base64url.
    InvalidBase64,
    /// Payload decodes but is not a JSON claims object (or lacks `role`).
    InvalidClaims,
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DecodeError::MalformedToken => write!(f, "credential is not a compact token"),
            DecodeError::InvalidBase64 => write!(f, "credential payload is not base64url"),
            DecodeError::InvalidClaims => write!(f, "credential payload is not a claims object"),
        }
    }
}

/// Decode the payload segment of a compact token into [`Claims`].
pub fn decode_token(token: &str) -> Result<Claims, DecodeError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(DecodeError::MalformedToken);
    };
    if payload.is_empty() {
        return Err(DecodeError::MalformedToken);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| DecodeError::InvalidBase64)?;

    serde_json::from_slice(&bytes).map_err(|_| DecodeError::InvalidClaims)
}

/// Convenience for gate-style callers: absence and every decode failure
/// collapse to `None`.
pub fn claims_or_none(token: Option<&str>) -> Option<Claims> {
    token.and_then(|t| decode_token(t).ok())
}

/// Build an unsigned compact token around the given JSON payload.
/// gate 的测试矩阵也依赖它，所以放在父模块里共享。
#[cfg(test)]
pub(crate) fn token_with_payload(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload);
    format!("{header}.{body}.sig")
}

#[cfg(test)]
pub(crate) fn fleet_user_token() -> String {
    token_with_payload(r#"{"role":"fleet_user","sub":"u-1","email":"a@b.com","iat":1,"exp":2}"#)
}

#[cfg(test)]
mod tests;

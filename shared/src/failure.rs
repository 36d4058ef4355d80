//! API failure taxonomy.
//!
//! How a dispatched call failed, from the caller's point of view. The
//! variants mirror the envelope split: the transport never produced a
//! usable response, the response violated the envelope contract, or the
//! backend itself declared failure. Pure data, so the user-facing message
//! mapping lives here and is testable natively.

/// How an API call failed, from the caller's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiFailure {
    /// Request never produced a usable response.
    Network(String),
    /// Response arrived but violated the envelope contract.
    Contract(String),
    /// Backend answered with `success: false` or a non-2xx status.
    Api { status: u16, message: Option<String> },
}

impl ApiFailure {
    /// 面向用户的提示文案；仅 `Api` 的 message 原样透出
    pub fn user_message(&self) -> String {
        match self {
            ApiFailure::Network(_) => {
                "Network error. Please check your connection and try again.".to_string()
            }
            ApiFailure::Contract(_) => "Unexpected response from the server.".to_string(),
            ApiFailure::Api {
                message: Some(message),
                ..
            } => message.clone(),
            ApiFailure::Api { message: None, .. } => {
                "Request failed. Please try again.".to_string()
            }
        }
    }
}

impl core::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiFailure::Network(detail) => write!(f, "network failure: {detail}"),
            ApiFailure::Contract(detail) => write!(f, "contract violation: {detail}"),
            ApiFailure::Api { status, message } => {
                write!(f, "api rejection ({status}): {message:?}")
            }
        }
    }
}

/// 登录失败的友好文案：凭证错误不透出后端原话
pub fn login_failure_message(failure: &ApiFailure) -> String {
    match failure {
        ApiFailure::Api { .. } => "Invalid email or password".to_string(),
        other => other.user_message(),
    }
}

#[cfg(test)]
mod tests;

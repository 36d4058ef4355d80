//! API 客户端
//!
//! 单一调度器：固定 base URL（构建时环境变量注入）、跨域携带 cookie、
//! 严格信封解析。客户端本身从不重试，也从不触碰缓存——成功的变更由
//! 变更控制器负责作废标签。

use fleetdesk_shared::envelope::{ApiEnvelope, EnvelopeError, Payload};
use fleetdesk_shared::failure::ApiFailure;
use fleetdesk_shared::protocol::{ApiRequest, HttpMethod, PayloadEncoding};
use gloo_net::http::{Method, RequestBuilder};
use leptos::prelude::*;
use web_sys::RequestCredentials;

/// 未设置 `FLEETDESK_API_URL` 时的本地开发后端
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/v1";

fn to_gloo_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// 合同违规必须留痕，不得静默容忍
fn log_contract_violation(path: &str, detail: &str) {
    web_sys::console::error_1(&format!("[Api] contract violation at {path}: {detail}").into());
}

#[derive(Clone, Debug, PartialEq)]
pub struct FleetApi {
    pub base_url: String,
}

impl Default for FleetApi {
    fn default() -> Self {
        Self::new()
    }
}

impl FleetApi {
    pub fn new() -> Self {
        let base_url = option_env!("FLEETDESK_API_URL").unwrap_or(DEFAULT_BASE_URL);
        Self::with_base_url(base_url.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送请求并解析信封（不拆 data）
    async fn dispatch<R: ApiRequest>(
        &self,
        req: &R,
        body: Body,
    ) -> Result<ApiEnvelope<R::Response>, ApiFailure> {
        let path = req.path();
        let url = self.url(&path);

        let builder = RequestBuilder::new(&url)
            .method(to_gloo_method(R::METHOD))
            .credentials(RequestCredentials::Include);

        let request = match body {
            Body::None => builder.build(),
            Body::Json => builder.json(req),
            Body::Multipart(form) => builder.body(form),
        }
        .map_err(|e| ApiFailure::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiFailure::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiFailure::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            // 错误体若是 JSON 则透出其 message，否则给通用失败
            let message = serde_json::from_str::<serde_json::Value>(&text)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from));
            return Err(ApiFailure::Api { status, message });
        }

        serde_json::from_str::<ApiEnvelope<R::Response>>(&text).map_err(|e| {
            log_contract_violation(&path, &e.to_string());
            ApiFailure::Contract(e.to_string())
        })
    }

    fn finish_payload<T>(
        path: &str,
        envelope: ApiEnvelope<T>,
    ) -> Result<Payload<T>, ApiFailure> {
        envelope.into_payload().map_err(|e| match e {
            EnvelopeError::Rejected { status, message } => ApiFailure::Api { status, message },
            EnvelopeError::MissingData { status } => {
                log_contract_violation(path, "success without data");
                ApiFailure::Contract(format!("success without data (status {status})"))
            }
        })
    }

    /// 数据查询：要求信封携带 `data`
    pub async fn send<R: ApiRequest>(&self, req: &R) -> Result<Payload<R::Response>, ApiFailure> {
        let path = req.path();
        let envelope = self.dispatch(req, Body::for_request::<R>(None)?).await?;
        Self::finish_payload(&path, envelope)
    }

    /// 仅确认成败的变更（登出、删除、密码流程等）
    pub async fn send_ack<R: ApiRequest>(&self, req: &R) -> Result<(), ApiFailure> {
        let envelope = self.dispatch(req, Body::for_request::<R>(None)?).await?;
        envelope.into_ack().map_err(|e| match e {
            EnvelopeError::Rejected { status, message } => ApiFailure::Api { status, message },
            EnvelopeError::MissingData { status } => {
                ApiFailure::Contract(format!("success without data (status {status})"))
            }
        })
    }

    /// 携带附件的 multipart 变更
    pub async fn send_multipart_ack<R: ApiRequest>(
        &self,
        req: &R,
        form: web_sys::FormData,
    ) -> Result<(), ApiFailure> {
        let envelope = self.dispatch(req, Body::for_request::<R>(Some(form))?).await?;
        envelope.into_ack().map_err(|e| match e {
            EnvelopeError::Rejected { status, message } => ApiFailure::Api { status, message },
            EnvelopeError::MissingData { status } => {
                ApiFailure::Contract(format!("success without data (status {status})"))
            }
        })
    }
}

/// 请求体的三种形态
enum Body {
    None,
    Json,
    Multipart(web_sys::FormData),
}

impl Body {
    /// 根据端点声明选择编码；multipart 端点必须由调用方提供表单
    fn for_request<R: ApiRequest>(form: Option<web_sys::FormData>) -> Result<Body, ApiFailure> {
        match (R::METHOD, R::ENCODING, form) {
            (HttpMethod::Get, _, _) | (HttpMethod::Delete, _, None) => Ok(Body::None),
            (_, PayloadEncoding::Multipart, Some(form)) => Ok(Body::Multipart(form)),
            (_, PayloadEncoding::Multipart, None) => Err(ApiFailure::Network(
                "multipart endpoint called without a form".to_string(),
            )),
            (_, PayloadEncoding::Json, _) => Ok(Body::Json),
        }
    }
}

/// 组装 multipart 表单：标量字段 + 可选附件
pub fn multipart_form(
    fields: &[(&'static str, String)],
    files: Option<&web_sys::FileList>,
) -> Result<web_sys::FormData, ApiFailure> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiFailure::Network("failed to create form data".to_string()))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|_| ApiFailure::Network("failed to append form field".to_string()))?;
    }
    if let Some(files) = files {
        for index in 0..files.length() {
            if let Some(file) = files.get(index) {
                form.append_with_blob_and_filename("files", &file, &file.name())
                    .map_err(|_| {
                        ApiFailure::Network("failed to append attachment".to_string())
                    })?;
            }
        }
    }
    Ok(form)
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> FleetApi {
    use_context::<FleetApi>().expect("FleetApi should be provided at the app root")
}

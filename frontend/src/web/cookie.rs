//! Cookie 封装模块
//!
//! 使用 `web_sys::HtmlDocument` 直接读写 `document.cookie`，
//! 提供与 LocalStorage 封装同风格的静态接口。
//! 凭证 cookie 只允许 session 模块写入，其余代码仅读取。

use wasm_bindgen::JsCast;

/// Cookie 操作封装
pub struct CookieJar;

impl CookieJar {
    fn html_document() -> Option<web_sys::HtmlDocument> {
        web_sys::window()?.document()?.dyn_into().ok()
    }

    /// 读取指定名称的 cookie 值
    ///
    /// # 返回
    /// - `Some(String)` 如果 cookie 存在
    /// - `None` 如果不存在或无法访问 document
    pub fn get(name: &str) -> Option<String> {
        let raw = Self::html_document()?.cookie().ok()?;
        raw.split(';').find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            if key == name && !value.is_empty() {
                Some(value.to_string())
            } else {
                None
            }
        })
    }

    /// 写入 cookie（路径固定为 `/`，与网关读取范围一致）
    pub fn set(name: &str, value: &str) -> bool {
        Self::html_document()
            .and_then(|doc| doc.set_cookie(&format!("{name}={value}; path=/")).ok())
            .is_some()
    }

    /// 删除 cookie
    pub fn delete(name: &str) -> bool {
        Self::html_document()
            .and_then(|doc| {
                doc.set_cookie(&format!("{name}=; path=/; max-age=0"))
                    .ok()
            })
            .is_some()
    }
}

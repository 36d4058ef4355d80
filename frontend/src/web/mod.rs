//! 原生 Web API 封装模块
//!
//! 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
//! 以减小 WASM 二进制体积。HTTP 仍走 gloo-net（需要 credentials 支持）。

mod cookie;
pub mod route;
pub mod router;

pub use cookie::CookieJar;

//! 会话模块
//!
//! 显式的会话上下文：凭证 cookie 的写入只发生在这里——登录写入
//! `accessToken`，登出清除它（顺带清掉旧版后端可能设置的
//! `refreshToken`）。网关与 API 客户端只读不写。

use fleetdesk_shared::credential::claims_or_none;
use fleetdesk_shared::protocol::{LoginData, LogoutRequest};
use fleetdesk_shared::{ACCESS_TOKEN_COOKIE, LOGIN_PATH, REFRESH_TOKEN_COOKIE};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::FleetApi;
use crate::web::CookieJar;

/// 会话状态
#[derive(Clone, Default)]
pub struct SessionState {
    /// 当前展示用的登录邮箱（来自凭证 claims）
    pub email: Option<String>,
}

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        let ctx = Self { state, set_state };
        ctx.refresh_from_cookie();
        ctx
    }

    /// 从凭证 cookie 重新推导展示状态
    pub fn refresh_from_cookie(&self) {
        let token = CookieJar::get(ACCESS_TOKEN_COOKIE);
        let email = claims_or_none(token.as_deref()).and_then(|claims| claims.email);
        self.set_state.update(|state| state.email = email);
    }

    /// 登录成功：唯一允许写入凭证 cookie 的入口
    pub fn store_credential(&self, data: &LoginData) {
        CookieJar::set(ACCESS_TOKEN_COOKIE, &data.access_token);
        if let Some(refresh) = &data.refresh_token {
            CookieJar::set(REFRESH_TOKEN_COOKIE, refresh);
        }
        self.refresh_from_cookie();
    }

    /// 登出：通知后端、清除凭证、跳转登录页
    ///
    /// 后端调用失败不阻塞本地登出——凭证无论如何都会被清掉。
    pub fn logout(&self, api: FleetApi, navigate: impl Fn(&str) + 'static) {
        let ctx = *self;
        spawn_local(async move {
            let _ = api.send_ack(&LogoutRequest {}).await;
            CookieJar::delete(ACCESS_TOKEN_COOKIE);
            CookieJar::delete(REFRESH_TOKEN_COOKIE);
            ctx.set_state.try_update(|state| state.email = None);
            navigate(LOGIN_PATH);
        });
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

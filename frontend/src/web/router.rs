//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，实现"监听 -> 验证 -> 处理 -> 加载"的
//! 导航流程。授权网关在每次导航时无状态地重新求值：读取凭证 cookie，
//! 解码失败一律视为未认证，绝不向框架抛出异常。

use fleetdesk_shared::ACCESS_TOKEN_COOKIE;
use fleetdesk_shared::gate::{self, GateDecision};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::cookie::CookieJar;
use super::route::AppRoute;

/// 获取当前浏览器路径（含查询串，reset-password 需要 token）
fn current_path() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return "/".to_string(),
    };
    let location = window.location();
    let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
    match location.search() {
        Ok(search) if !search.is_empty() => format!("{pathname}{search}"),
        _ => pathname,
    }
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 对单次导航执行授权网关
///
/// 无状态：每次都从 cookie 重新推导。
fn evaluate_gate(path: &str) -> GateDecision {
    let token = CookieJar::get(ACCESS_TOKEN_COOKIE);
    gate::evaluate(path, token.as_deref())
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
}

impl RouterService {
    fn new() -> Self {
        let (current_route, set_route) = signal(AppRoute::default());
        Self {
            current_route,
            set_route,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Gate) -> 处理 -> 加载
    pub fn navigate(&self, path: &str) {
        self.navigate_to_path(path, true);
    }

    /// 导航到指定路径
    ///
    /// # Arguments
    /// * `path` - 目标路径（可含查询串）
    /// * `use_push` - true 使用 pushState, false 使用 replaceState
    fn navigate_to_path(&self, path: &str, use_push: bool) {
        // --- Step 1: 授权网关 ---
        if evaluate_gate(path) == GateDecision::RedirectToLogin {
            web_sys::console::log_1(&"[Router] Access denied. Redirecting to login.".into());
            let redirect = AppRoute::auth_failure_redirect();
            if use_push {
                push_history_state(&redirect.to_path());
            } else {
                replace_history_state(&redirect.to_path());
            }
            self.set_route.set(redirect);
            return;
        }

        // --- Step 2: 加载页面（更新状态） ---
        let target_route = AppRoute::from_path(path);
        if use_push {
            push_history_state(path);
        } else {
            replace_history_state(path);
        }
        self.set_route.set(target_route);
    }

    /// 初始加载：对地址栏中的路径执行相同的守卫流程
    fn init_from_location(&self) {
        let path = current_path();
        self.navigate_to_path(&path, false);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();

            // popstate 时也执行守卫逻辑
            if evaluate_gate(&path) == GateDecision::RedirectToLogin {
                let redirect = AppRoute::auth_failure_redirect();
                replace_history_state(&redirect.to_path());
                set_route.set(redirect);
            } else {
                set_route.set(AppRoute::from_path(&path));
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router() -> RouterService {
    let router = RouterService::new();

    router.init_from_location();
    router.init_popstate_listener();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// 导航函数（返回一个可调用的闭包）
pub fn use_navigate() -> impl Fn(&str) + Clone {
    let router = use_router();
    move |to: &str| {
        router.navigate(to);
    }
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router();

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 应用内链接：交给路由服务处理，避免整页刷新
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    /// CSS 类
    #[prop(into, optional)]
    class: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let href = to.clone();
    let on_click = move |ev: leptos::web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&to);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

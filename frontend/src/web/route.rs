//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 公开/受保护的划分由网关模块按路径判定，这里只负责
//! 路径与枚举之间的互相转换。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 注册页面
    Register,
    /// 忘记密码
    ForgotPassword,
    /// 重置密码（token 来自邮件链接的查询参数）
    ResetPassword {
        token: Option<String>,
    },
    /// 修改密码 (需要认证)
    ChangePassword,
    /// 首页 / 控制面板 (需要认证)
    Home,
    /// 车辆管理
    Fleet,
    /// 预约服务
    Schedule,
    /// 我的预约
    MyAppointments,
    /// 支持工单
    Support,
    /// 发票
    Invoices,
    /// 账户资料
    Account,
    /// 常见问题
    Faq,
    /// 新闻与更新
    News,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path（可含查询串）解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let (path_only, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };
        let path_only = if path_only.len() > 1 {
            path_only.trim_end_matches('/')
        } else {
            path_only
        };

        match path_only {
            "/" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/forgot-password" => Self::ForgotPassword,
            "/reset-password" => Self::ResetPassword {
                token: query.and_then(query_token),
            },
            "/change-password" => Self::ChangePassword,
            "/fleet" => Self::Fleet,
            "/schedule" => Self::Schedule,
            "/may-appointments" => Self::MyAppointments,
            "/support" => Self::Support,
            "/invoices" => Self::Invoices,
            "/account" => Self::Account,
            "/faq" => Self::Faq,
            "/news" => Self::News,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::ForgotPassword => "/forgot-password".to_string(),
            Self::ResetPassword { token: Some(token) } => {
                format!("/reset-password?token={token}")
            }
            Self::ResetPassword { token: None } => "/reset-password".to_string(),
            Self::ChangePassword => "/change-password".to_string(),
            Self::Fleet => "/fleet".to_string(),
            Self::Schedule => "/schedule".to_string(),
            Self::MyAppointments => "/may-appointments".to_string(),
            Self::Support => "/support".to_string(),
            Self::Invoices => "/invoices".to_string(),
            Self::Account => "/account".to_string(),
            Self::Faq => "/faq".to_string(),
            Self::News => "/news".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

fn query_token(query: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key == "token" && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}

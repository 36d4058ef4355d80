//! 变更控制器
//!
//! shared 的 `MutationLifecycle` 状态机的信号绑定：每个表单实例持有
//! 一个控制器，提交时走 `idle -> pending -> {succeeded|failed}`，
//! pending 期间拒绝重复提交（按钮同时禁用），成功后作废端点声明的
//! 标签并执行副作用（toast、重置、跳转）。失败原因保留展示到下一次
//! 提交。没有自动重试，也没有去重：重试永远是一次全新的用户提交。

use fleetdesk_shared::envelope::Payload;
use fleetdesk_shared::failure::ApiFailure;
use fleetdesk_shared::mutation::MutationLifecycle;
use fleetdesk_shared::protocol::ApiRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{FleetApi, use_api};
use crate::cache::{QueryCache, use_query_cache};

/// 每表单一个实例；组件卸载即随 owner 一起销毁。
/// 请求在途时组件被卸载不会中止请求（已知的悬挂在途问题）；
/// 迟到的完成通过 `try_update` 落在已销毁的信号上，安全无感。
#[derive(Clone)]
pub struct MutationController {
    lifecycle: RwSignal<MutationLifecycle>,
    api: FleetApi,
    cache: QueryCache,
}

impl MutationController {
    /// 在组件 setup 阶段创建（需要 Context 中的 API 客户端与缓存）
    pub fn new() -> Self {
        Self {
            lifecycle: RwSignal::new(MutationLifecycle::new()),
            api: use_api(),
            cache: use_query_cache(),
        }
    }

    /// 提交按钮的禁用信号
    pub fn is_pending(&self) -> Signal<bool> {
        let lifecycle = self.lifecycle;
        Signal::derive(move || lifecycle.with(|m| m.is_pending()))
    }

    /// 保留中的失败原因（展示到下一次提交）
    pub fn failure(&self) -> Signal<Option<String>> {
        let lifecycle = self.lifecycle;
        Signal::derive(move || lifecycle.with(|m| m.failure_reason().map(String::from)))
    }

    /// `idle -> pending`；pending 中的重复提交被拒绝
    fn begin(&self) -> bool {
        let mut accepted = false;
        self.lifecycle.update(|m| {
            accepted = m.begin().is_ok();
        });
        accepted
    }

    /// JSON 变更（仅确认成败）
    pub fn submit<R>(&self, req: R, on_success: impl FnOnce() + 'static)
    where
        R: ApiRequest + 'static,
    {
        if !self.begin() {
            return;
        }
        let lifecycle = self.lifecycle;
        let api = self.api.clone();
        let cache = self.cache;
        spawn_local(async move {
            match api.send_ack(&req).await {
                Ok(()) => {
                    lifecycle.try_update(|m| m.succeed());
                    cache.invalidate(R::INVALIDATES);
                    on_success();
                    lifecycle.try_update(|m| m.settle());
                }
                Err(failure) => {
                    lifecycle.try_update(|m| m.fail(failure.user_message()));
                }
            }
        });
    }

    /// multipart 变更（附件随表单上传）
    pub fn submit_multipart<R>(
        &self,
        req: R,
        form: web_sys::FormData,
        on_success: impl FnOnce() + 'static,
    ) where
        R: ApiRequest + 'static,
    {
        if !self.begin() {
            return;
        }
        let lifecycle = self.lifecycle;
        let api = self.api.clone();
        let cache = self.cache;
        spawn_local(async move {
            match api.send_multipart_ack(&req, form).await {
                Ok(()) => {
                    lifecycle.try_update(|m| m.succeed());
                    cache.invalidate(R::INVALIDATES);
                    on_success();
                    lifecycle.try_update(|m| m.settle());
                }
                Err(failure) => {
                    lifecycle.try_update(|m| m.fail(failure.user_message()));
                }
            }
        });
    }

    /// 需要消费响应数据的变更（登录），可自定义失败文案映射
    pub fn submit_payload<R>(
        &self,
        req: R,
        map_failure: impl Fn(&ApiFailure) -> String + 'static,
        on_success: impl FnOnce(Payload<R::Response>) + 'static,
    ) where
        R: ApiRequest + 'static,
    {
        if !self.begin() {
            return;
        }
        let lifecycle = self.lifecycle;
        let api = self.api.clone();
        let cache = self.cache;
        spawn_local(async move {
            match api.send(&req).await {
                Ok(payload) => {
                    lifecycle.try_update(|m| m.succeed());
                    cache.invalidate(R::INVALIDATES);
                    on_success(payload);
                    lifecycle.try_update(|m| m.settle());
                }
                Err(failure) => {
                    lifecycle.try_update(|m| m.fail(map_failure(&failure)));
                }
            }
        });
    }
}

impl Default for MutationController {
    fn default() -> Self {
        Self::new()
    }
}

//! 标签缓存的信号绑定
//!
//! shared 的 `TagVersions` 是纯粹的版本账本；这里把它包进一个
//! 进程级 RwSignal，使"作废标签 -> 订阅该标签的查询全部重新拉取"
//! 成为响应式行为。写入边界：只有变更控制器在成功后调用
//! [`QueryCache::invalidate`]，业务代码不得手写缓存。

use fleetdesk_shared::cache::TagVersions;
use fleetdesk_shared::envelope::Payload;
use fleetdesk_shared::failure::ApiFailure;
use fleetdesk_shared::protocol::{ApiRequest, ResourceTag};
use leptos::prelude::*;

use crate::api::use_api;

/// 进程级标签缓存（Context 注入）
#[derive(Clone, Copy)]
pub struct QueryCache {
    versions: RwSignal<TagVersions>,
}

impl QueryCache {
    fn new() -> Self {
        Self {
            versions: RwSignal::new(TagVersions::new()),
        }
    }

    /// 作废一组标签；订阅这些标签的查询随即重新执行
    pub fn invalidate(&self, tags: &[ResourceTag]) {
        if tags.is_empty() {
            return;
        }
        // 变更可能在组件卸载后才完成，迟到的作废静默落空
        self.versions.try_update(|versions| {
            versions.invalidate(tags);
        });
    }

    /// 一组标签的版本戳信号（查询以此订阅作废事件）
    pub fn stamp(&self, tags: &'static [ResourceTag]) -> Signal<u64> {
        let versions = self.versions;
        Signal::derive(move || versions.with(|v| v.stamp(tags)))
    }
}

/// 提供缓存到 Context
pub fn provide_query_cache() {
    provide_context(QueryCache::new());
}

/// 从 Context 获取缓存
pub fn use_query_cache() -> QueryCache {
    use_context::<QueryCache>().expect("QueryCache should be provided at the app root")
}

/// 查询结果别名：信封拆出的 data + 分页 meta
pub type QueryResult<T> = Result<Payload<T>, ApiFailure>;

/// **标签化查询**
///
/// 返回一个 LocalResource：除自身参数变化外，还订阅端点声明的
/// PROVIDES 标签——任一标签被作废，查询立即重新拉取。
/// 这是门户唯一的缓存失效机制（无 TTL、无手动逐出）。
pub fn use_tagged_query<R, F>(make_request: F) -> LocalResource<QueryResult<R::Response>>
where
    R: ApiRequest + 'static,
    R::Response: Clone + 'static,
    F: Fn() -> R + 'static,
{
    let api = use_api();
    let cache = use_query_cache();
    let stamp = cache.stamp(R::PROVIDES);

    LocalResource::new(move || {
        // 订阅标签版本：作废 => 重新执行
        let _version = stamp.get();
        let request = make_request();
        let api = api.clone();
        async move { api.send(&request).await }
    })
}

//! 新闻页面
//!
//! 只读分页列表。只有一页时隐藏分页控件。

use fleetdesk_shared::protocol::ListNewsRequest;
use leptos::prelude::*;

use crate::cache::use_tagged_query;
use crate::components::icons::Newspaper;

const PAGE_SIZE: u64 = 10;

#[component]
pub fn NewsPage() -> impl IntoView {
    let (page, set_page) = signal(1u64);

    let news = use_tagged_query(move || ListNewsRequest {
        page: page.get(),
        limit: PAGE_SIZE,
    });

    view! {
        <div class="space-y-6 max-w-3xl mx-auto">
            <h1 class="text-3xl font-bold">"News & Updates"</h1>

            {move || match news.get() {
                None => view! {
                    <div class="flex justify-center py-12">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }.into_any(),
                Some(Err(failure)) => view! {
                    <div role="alert" class="alert alert-error">
                        <span>{failure.user_message()}</span>
                    </div>
                }.into_any(),
                Some(Ok(payload)) if payload.data.is_empty() => view! {
                    <div class="flex flex-col items-center gap-3 py-12 text-base-content/60">
                        <Newspaper class="h-12 w-12" />
                        <p>"Nothing here yet. Check back soon."</p>
                    </div>
                }.into_any(),
                Some(Ok(payload)) => {
                    let paging = payload.meta.clone();
                    view! {
                        <div class="space-y-4">
                            {payload
                                .data
                                .into_iter()
                                .map(|item| view! {
                                    <article class="card bg-base-100 shadow">
                                        <div class="card-body">
                                            <h2 class="card-title">{item.title.clone()}</h2>
                                            {item.created_at.clone().map(|at| view! {
                                                <p class="text-xs text-base-content/50">{at}</p>
                                            })}
                                            <p class="text-base-content/80">{item.content.clone()}</p>
                                        </div>
                                    </article>
                                })
                                .collect_view()}

                            // 单页时不渲染分页
                            {paging
                                .filter(|meta| meta.has_multiple_pages())
                                .map(|meta| {
                                    let total_pages = meta
                                        .total_page
                                        .unwrap_or_else(|| meta.total.div_ceil(meta.limit.max(1)));
                                    view! {
                                        <div class="flex justify-center">
                                            <div class="join">
                                                <button
                                                    class="join-item btn"
                                                    disabled=move || page.get() <= 1
                                                    on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                                                >
                                                    "«"
                                                </button>
                                                <button class="join-item btn btn-disabled">
                                                    {move || format!("Page {} of {}", page.get(), total_pages)}
                                                </button>
                                                <button
                                                    class="join-item btn"
                                                    disabled=move || page.get() >= total_pages
                                                    on:click=move |_| set_page.update(|p| *p += 1)
                                                >
                                                    "»"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                })}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

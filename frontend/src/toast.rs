//! 瞬时通知
//!
//! 右上角 toast，3 秒后自动消失。成功/失败两种样式。

use leptos::prelude::*;

/// 消息内容, 是否出错
type ToastMessage = (String, bool);

#[derive(Clone, Copy)]
pub struct ToastContext {
    message: ReadSignal<Option<ToastMessage>>,
    set_message: WriteSignal<Option<ToastMessage>>,
}

impl ToastContext {
    pub fn new() -> Self {
        let (message, set_message) = signal(Option::<ToastMessage>::None);
        Self {
            message,
            set_message,
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.set_message.set(Some((text.into(), false)));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.set_message.set(Some((text.into(), true)));
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

/// Toast 宿主组件，放在 App 根部
#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_toast();
    let message = toast.message;
    let set_message = toast.set_message;

    // 3秒后清除通知
    Effect::new(move |_| {
        if message.get().is_some() {
            set_timeout(
                move || set_message.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || message.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let (_, is_err) = message.get().unwrap();
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || message.get().unwrap().0}</span>
                </div>
            </div>
        </Show>
    }
}

/// 提供 Toast 上下文
pub fn provide_toast() {
    provide_context(ToastContext::new());
}

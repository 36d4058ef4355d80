//! 静态页面：FAQ、发票、404

use leptos::prelude::*;

use crate::components::icons::{CircleHelp, FileText};
use crate::web::router::Link;

struct FaqEntry {
    question: &'static str,
    answer: &'static str,
}

const FAQ_ENTRIES: [FaqEntry; 4] = [
    FaqEntry {
        question: "How do I schedule a service appointment?",
        answer: "Go to Schedule Service, pick a vehicle from your fleet, choose a service type, \
                 date and time, and submit. Our team confirms the appointment by email.",
    },
    FaqEntry {
        question: "Can I bring my vehicles to any store?",
        answer: "Yes. Your fleet account is honored at every location. If you set a preferred \
                 store during registration we will route work there by default.",
    },
    FaqEntry {
        question: "How is my fleet billed?",
        answer: "Centrally billed accounts receive one consolidated invoice per billing cycle. \
                 Otherwise each appointment is invoiced individually.",
    },
    FaqEntry {
        question: "How do I add or remove vehicles?",
        answer: "Open the Fleet page. You can add, edit or remove vehicles at any time; changes \
                 take effect immediately.",
    },
];

#[component]
pub fn FaqPage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <div class="flex items-center gap-3">
                <CircleHelp class="h-8 w-8 text-primary" />
                <h1 class="text-3xl font-bold">"Frequently Asked Questions"</h1>
            </div>
            <div class="space-y-2">
                {FAQ_ENTRIES
                    .iter()
                    .map(|entry| view! {
                        <div class="collapse collapse-arrow bg-base-100 shadow">
                            <input type="radio" name="faq-accordion" />
                            <div class="collapse-title font-medium">{entry.question}</div>
                            <div class="collapse-content text-base-content/80">
                                <p>{entry.answer}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// 发票功能由后台批量出账，门户端目前只展示说明
#[component]
pub fn InvoicesPage() -> impl IntoView {
    view! {
        <div class="max-w-2xl mx-auto">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body items-center text-center">
                    <FileText class="h-12 w-12 text-primary" />
                    <h1 class="card-title text-2xl">"Invoices"</h1>
                    <p class="text-base-content/70">
                        "Invoices are emailed to your billing contact each cycle. \
                         Need a copy? Open a support ticket and we will resend it."
                    </p>
                    <Link to="/support" class="btn btn-primary mt-2">"Contact Support"</Link>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div>
                    <h1 class="text-6xl font-bold text-primary">"404"</h1>
                    <p class="py-4 text-base-content/70">"This page does not exist."</p>
                    <Link to="/" class="btn btn-primary">"Back to Home"</Link>
                </div>
            </div>
        </div>
    }
}

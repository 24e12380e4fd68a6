//! Collapsible FAQ list with a single open answer.

use leptos::prelude::*;

use crate::state::page::PageState;

#[component]
pub fn FaqList() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let entries = page.with_untracked(|p| p.faq.entries().to_vec());

    view! {
        <div class="faq">
            {entries
                .into_iter()
                .map(|entry| {
                    let expanded = move || page.with(|p| p.faq.is_expanded(entry.answer_id));
                    view! {
                        <div class="faq__item">
                            <button
                                id=entry.question_id
                                class="faq-question"
                                aria-controls=entry.answer_id
                                aria-expanded=move || expanded().to_string()
                                on:click=move |_| {
                                    page.update(|p| {
                                        p.faq.toggle(entry.question_id);
                                    });
                                }
                            >
                                {entry.question}
                            </button>
                            <div id=entry.answer_id class="faq-answer" class:hidden=move || !expanded()>
                                <p>{entry.answer}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

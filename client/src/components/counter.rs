//! Increment/decrement counter.

use leptos::prelude::*;

use crate::state::page::PageState;

#[component]
pub fn Counter() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    view! {
        <div class="counter">
            <button id="decrementBtn" class="btn counter__step" on:click=move |_| page.update(|p| p.counter.decrement())>
                "-"
            </button>
            <span id="counterDisplay" class="counter__value">
                {move || page.with(|p| p.counter.display())}
            </span>
            <button id="incrementBtn" class="btn counter__step" on:click=move |_| page.update(|p| p.counter.increment())>
                "+"
            </button>
        </div>
    }
}

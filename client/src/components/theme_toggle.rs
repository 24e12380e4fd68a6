//! Light/dark toggle button.

use leptos::prelude::*;

use crate::state::page::PageState;
use crate::util::preference::LocalStorage;

/// Button flipping the page theme. Its label names the theme it switches to.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    view! {
        <button
            id="themeToggle"
            class="btn theme-toggle"
            on:click=move |_| page.update(|p| p.toggle_theme(&mut LocalStorage))
        >
            {move || page.with(|p| p.theme.toggle_label())}
        </button>
    }
}

//! Single interactive page composing every demo section.

use leptos::prelude::*;

use crate::components::counter::Counter;
use crate::components::event_demos::{ClickDemo, HoverDemo, KeyEchoDemo};
use crate::components::faq::FaqList;
use crate::components::signup_form::SignupForm;
use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="page">
            <header class="page__header">
                <h1>"Interactive Playground"</h1>
                <ThemeToggle/>
            </header>

            <section class="page__part">
                <h2>"Event Handling"</h2>
                <ClickDemo/>
                <HoverDemo/>
                <KeyEchoDemo/>
            </section>

            <section class="page__part">
                <h2>"Interactive Elements"</h2>
                <h3>"Counter"</h3>
                <Counter/>
                <h3>"FAQ"</h3>
                <FaqList/>
            </section>

            <section class="page__part">
                <h2>"Form Validation"</h2>
                <SignupForm/>
            </section>
        </main>
    }
}

//! Click, hover, and keystroke demo sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each demo reacts to exactly one kind of input and writes to its own slice
//! of `PageState`. None of them can fail.

use leptos::prelude::*;

use crate::state::page::PageState;
use crate::util::clock;

/// Button that reveals a timestamped message, hiding it on the next click.
#[component]
pub fn ClickDemo() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    view! {
        <section class="demo demo--click">
            <h3>"Click Event"</h3>
            <button
                id="clickMeBtn"
                class="btn"
                on:click=move |_| page.update(|p| p.click.toggle(clock::locale_time_string))
            >
                "Click Me"
            </button>
            <p
                id="clickMessage"
                class="demo__message"
                class:hidden=move || !page.with(|p| p.click.visible)
            >
                {move || page.with(|p| p.click.text.clone())}
            </p>
        </section>
    }
}

/// Box whose message is visible only while the pointer is over it.
#[component]
pub fn HoverDemo() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    view! {
        <section class="demo demo--hover">
            <h3>"Mouseover / Mouseout"</h3>
            <div
                id="hoverBox"
                class="demo__hover-box"
                on:mouseenter=move |_| page.update(|p| p.hover.pointer_enter())
                on:mouseleave=move |_| page.update(|p| p.hover.pointer_leave())
            >
                "Hover over me"
            </div>
            <p
                id="hoverMessage"
                class="demo__message"
                class:hidden=move || !page.with(|p| p.hover.visible)
            >
                "You are hovering!"
            </p>
        </section>
    }
}

/// Text input echoing the name and physical code of each released key.
#[component]
pub fn KeyEchoDemo() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    let on_keyup = move |ev: leptos::ev::KeyboardEvent| {
        let (key, code) = (ev.key(), ev.code());
        page.update(|p| p.keys.record(key, code));
    };

    view! {
        <section class="demo demo--keys">
            <h3>"Keyboard Input"</h3>
            <input id="keyInput" class="demo__input" type="text" placeholder="Type something..." on:keyup=on_keyup/>
            <p id="keyMessage" class="demo__message">
                {move || page.with(|p| p.keys.message()).unwrap_or_default()}
            </p>
        </section>
    }
}

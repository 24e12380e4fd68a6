//! Signup form with real-time and submit-time validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Input events feed `SignupFormState::set_value`, which re-validates the
//! edited field and its declared dependents. Submission never reaches the
//! network; an accepted submit shows the success banner and schedules its
//! removal.

use leptos::prelude::*;

use crate::state::form::{SUCCESS_MESSAGE, SubmitOutcome};
use crate::state::page::PageState;
use crate::util::timer::BrowserTimer;
use crate::util::validation::Field;

/// One labelled input plus its error container.
#[component]
fn FormField(field: Field) -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let error = move || page.with(|p| p.form.error(field));
    let error_id = format!("{}Error", field.id());

    view! {
        <div class="form-field">
            <label for=field.id()>{field.label()}</label>
            <input
                id=field.id()
                name=field.id()
                type=field.input_type()
                class="form-field__input"
                class:invalid=move || error().is_some()
                prop:value=move || page.with(|p| p.form.values.get(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    page.update(|p| p.form.set_value(field, value));
                }
            />
            <span id=error_id class="form-field__error" class:hidden=move || error().is_none()>
                {move || error().map(|e| e.message()).unwrap_or_default()}
            </span>
        </div>
    }
}

#[component]
pub fn SignupForm() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut outcome = SubmitOutcome::Rejected;
        page.update(|p| {
            outcome = p.form.submit_with(&mut BrowserTimer, move || page.update(|p| p.form.hide_success()));
        });
        if outcome == SubmitOutcome::Rejected {
            leptos::logging::log!("signup rejected");
        }
    };

    view! {
        <form id="myForm" class="signup-form" novalidate=true on:submit=on_submit>
            {Field::ALL.into_iter().map(|field| view! { <FormField field=field/> }).collect_view()}
            <button type="submit" class="btn signup-form__submit">
                "Register"
            </button>
            <p id="formSuccess" class="signup-form__success" class:hidden=move || !page.with(|p| p.form.success_visible)>
                {SUCCESS_MESSAGE}
            </p>
        </form>
    }
}

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one page section each and read/write the shared
//! `RwSignal<PageState>` from Leptos context. No component reads another
//! section's state.

pub mod counter;
pub mod event_demos;
pub mod faq;
pub mod signup_form;
pub mod theme_toggle;

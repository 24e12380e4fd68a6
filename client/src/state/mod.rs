//! Client-side state for each page section.
//!
//! DESIGN
//! ======
//! State types are plain structs with handler methods. Leptos components hold
//! them inside one `RwSignal<PageState>` and never mutate fields directly
//! outside these methods, which keeps every behavior testable without a DOM.

pub mod counter;
pub mod demo;
pub mod faq;
pub mod form;
pub mod page;

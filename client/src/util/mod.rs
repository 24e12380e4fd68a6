//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, body class,
//! clock, timers) and pure validation rules from page and component logic so state
//! transitions stay testable without a browser.

pub mod clock;
pub mod preference;
pub mod theme;
pub mod timer;
pub mod validation;
pub mod validation_graph;

//! Page controller state.
//!
//! DESIGN
//! ======
//! One `PageState` is constructed at startup and shared through a single
//! `RwSignal` context. Each section's handler is a method here so every
//! event-to-mutation mapping can be exercised without rendering. Sections do
//! not read each other's state.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use super::counter::CounterState;
use super::demo::{ClickMessage, HoverMessage, KeyEcho};
use super::faq::{DEFAULT_FAQ, FaqState};
use super::form::SignupFormState;
use crate::util::preference::PreferenceStore;
use crate::util::theme::{self, Theme};

#[derive(Clone, Debug)]
pub struct PageState {
    pub click: ClickMessage,
    pub hover: HoverMessage,
    pub keys: KeyEcho,
    pub theme: Theme,
    pub counter: CounterState,
    pub faq: FaqState,
    pub form: SignupFormState,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            click: ClickMessage::default(),
            hover: HoverMessage::default(),
            keys: KeyEcho::default(),
            theme: Theme::Light,
            counter: CounterState::default(),
            faq: FaqState::new(DEFAULT_FAQ),
            form: SignupFormState::default(),
        }
    }
}

impl PageState {
    /// Load the stored theme and apply it to the document.
    pub fn restore_theme(&mut self, store: &impl PreferenceStore) {
        self.theme = theme::read_preference(store);
        theme::apply(self.theme);
    }

    /// Switch themes, persisting the choice before returning.
    pub fn toggle_theme(&mut self, store: &mut impl PreferenceStore) {
        self.theme = theme::toggle(self.theme, store);
    }
}

//! State for the click, hover, and keystroke demo handlers.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

/// Message revealed and hidden by the demo button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickMessage {
    pub visible: bool,
    pub text: String,
}

impl ClickMessage {
    /// Flip visibility. The text is stamped with `now()` only when the
    /// message becomes visible; hiding keeps the previous text.
    pub fn toggle(&mut self, now: impl FnOnce() -> String) {
        self.visible = !self.visible;
        if self.visible {
            self.text = format!("Button clicked at {}", now());
        }
    }
}

/// Message mirrored from pointer presence over the hover box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverMessage {
    pub visible: bool,
}

impl HoverMessage {
    pub fn pointer_enter(&mut self) {
        self.visible = true;
    }

    pub fn pointer_leave(&mut self) {
        self.visible = false;
    }
}

/// Last released key in the echo input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyEcho {
    last: Option<(String, String)>,
}

impl KeyEcho {
    /// Replace the echoed key with `key` (human-readable) and `code` (physical).
    pub fn record(&mut self, key: String, code: String) {
        self.last = Some((key, code));
    }

    pub fn message(&self) -> Option<String> {
        self.last
            .as_ref()
            .map(|(key, code)| format!("Last key pressed: {key} (Code: {code})"))
    }
}

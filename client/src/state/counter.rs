//! In-memory counter. Resets on reload.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Unclamped integer counter starting at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    pub value: i64,
}

impl CounterState {
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    /// Text shown in the counter display.
    pub fn display(self) -> String {
        self.value.to_string()
    }
}

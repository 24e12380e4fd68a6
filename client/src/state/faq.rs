//! FAQ accordion state.
//!
//! DESIGN
//! ======
//! Questions map to answers through an explicit id table built once from the
//! entry list. The open panel is a single `Option`, so at most one answer can
//! be expanded at any time.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

use std::collections::HashMap;

/// One question/answer pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question_id: &'static str,
    pub answer_id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

/// Entries rendered on the page.
pub const DEFAULT_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question_id: "faq-q-events",
        answer_id: "faq-a-events",
        question: "What is an event listener?",
        answer: "A function registered on an element that runs whenever the named event fires on it.",
    },
    FaqEntry {
        question_id: "faq-q-bubbling",
        answer_id: "faq-a-bubbling",
        question: "What is event bubbling?",
        answer: "After an event fires on its target it propagates up through each ancestor element.",
    },
    FaqEntry {
        question_id: "faq-q-prevent",
        answer_id: "faq-a-prevent",
        question: "Why call preventDefault on a form submit?",
        answer: "It stops the browser from navigating away so the page can validate input first.",
    },
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaqState {
    entries: Vec<FaqEntry>,
    answer_for: HashMap<&'static str, &'static str>,
    open: Option<&'static str>,
}

impl FaqState {
    /// Build the accordion with every answer closed.
    pub fn new(entries: &[FaqEntry]) -> Self {
        let answer_for = entries.iter().map(|e| (e.question_id, e.answer_id)).collect();
        Self { entries: entries.to_vec(), answer_for, open: None }
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&'static str> {
        self.answer_for.get(question_id).copied()
    }

    pub fn is_expanded(&self, answer_id: &str) -> bool {
        self.open == Some(answer_id)
    }

    /// Answer currently expanded, if any.
    pub fn open_answer(&self) -> Option<&'static str> {
        self.open
    }

    /// Toggle the answer paired with `question_id` and close every other.
    ///
    /// Returns `false` without changing anything for an unknown question.
    pub fn toggle(&mut self, question_id: &str) -> bool {
        let Some(answer_id) = self.answer_for(question_id) else {
            return false;
        };
        self.open = if self.open == Some(answer_id) { None } else { Some(answer_id) };
        true
    }
}

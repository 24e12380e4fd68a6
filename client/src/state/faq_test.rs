use super::*;

const ENTRIES: &[FaqEntry] = &[
    FaqEntry { question_id: "qa", answer_id: "aa", question: "A?", answer: "A." },
    FaqEntry { question_id: "qb", answer_id: "ab", question: "B?", answer: "B." },
    FaqEntry { question_id: "qc", answer_id: "ac", question: "C?", answer: "C." },
];

fn expanded(faq: &FaqState) -> Vec<&'static str> {
    faq.entries()
        .iter()
        .map(|e| e.answer_id)
        .filter(|id| faq.is_expanded(id))
        .collect()
}

#[test]
fn new_maps_questions_to_answers_all_closed() {
    let faq = FaqState::new(ENTRIES);
    assert_eq!(faq.entries().len(), 3);
    assert_eq!(faq.answer_for("qb"), Some("ab"));
    assert_eq!(faq.answer_for("ab"), None);
    assert!(expanded(&faq).is_empty());
}

#[test]
fn toggle_opens_the_paired_answer() {
    let mut faq = FaqState::new(ENTRIES);
    assert!(faq.toggle("qa"));
    assert_eq!(expanded(&faq), vec!["aa"]);
    assert_eq!(faq.open_answer(), Some("aa"));
}

#[test]
fn opening_another_closes_the_previous() {
    let mut faq = FaqState::new(ENTRIES);
    faq.toggle("qa");
    faq.toggle("qb");
    assert_eq!(expanded(&faq), vec!["ab"]);
}

#[test]
fn clicking_open_question_closes_everything() {
    let mut faq = FaqState::new(ENTRIES);
    faq.toggle("qc");
    faq.toggle("qc");
    assert!(expanded(&faq).is_empty());
}

#[test]
fn unknown_question_is_ignored() {
    let mut faq = FaqState::new(ENTRIES);
    faq.toggle("qa");
    assert!(!faq.toggle("missing"));
    assert_eq!(expanded(&faq), vec!["aa"]);
}

#[test]
fn default_entries_have_unique_ids() {
    let faq = FaqState::new(DEFAULT_FAQ);
    for entry in DEFAULT_FAQ {
        assert_eq!(faq.answer_for(entry.question_id), Some(entry.answer_id));
    }
    let mut answers: Vec<_> = DEFAULT_FAQ.iter().map(|e| e.answer_id).collect();
    answers.sort_unstable();
    answers.dedup();
    assert_eq!(answers.len(), DEFAULT_FAQ.len());
}

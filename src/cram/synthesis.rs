//! Post-scan synthesis of derived study artifacts
//!
//! Runs once after classification and reads only the accumulated buckets,
//! never the raw text. Every fixed string lives in a named constant so the
//! determinism contract is visible: identical buckets always yield
//! identical artifacts.

use crate::cram::classify::strip_markers;
use crate::cram::document::{
    AidKind, ExamFocusItem, LastMinuteNote, Mcq, MemoryAid, Priority, StudyDocument, Weight,
};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// At most this many MCQs are generated, from the first definitions
pub const MAX_MCQS: usize = 3;

/// At most this many concepts become last-minute notes
pub const MAX_LAST_MINUTE_NOTES: usize = 5;

/// The three context-independent wrong answers attached to every MCQ
pub const DISTRACTOR_OPTIONS: [&str; 3] = [
    "A process that occurs in isolation without any external factors.",
    "The mathematical inverse of the primary relationship.",
    "NONE of the above.",
];

const ANALOGY_AID_TITLE: &str = "System Flow";
const ANALOGY_AID_CONTENT: &str =
    "The flow of data is like water in a pipe; any blockage (error) stops the secondary output.";

const STATIC_FOCUS_TOPIC: &str = "Variable Relations";
const TIP_CAUSE_EFFECT: &str = "Ensure you understand the cause-effect relationship here.";
const TIP_UNIT_CONVERSIONS: &str = "Watch out for unit conversions in formulas.";

const TIP_DIAGRAMS: &str = "Practice drawing the relationship diagrams to reinforce memory.";
const TIP_EDGE_CASES: &str = "High priority: Review the edge cases where this theory might fail.";

/// Markers that force a concept into the must-revise pile regardless of length
static MUST_REVISE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(!|important|key|primary)").unwrap());

/// Derive MCQs, memory aids, exam focus, last-minute notes, tips and the
/// legacy question list from the accumulated buckets.
pub fn synthesize(document: &mut StudyDocument) {
    // MCQs: first definitions in insertion order, cleaned term in the
    // question, the definition itself as the correct option.
    for (term, definition) in document.definitions.iter().take(MAX_MCQS) {
        let clean_term = strip_markers(term);
        let mut options = Vec::with_capacity(4);
        options.push(definition.to_string());
        options.extend(DISTRACTOR_OPTIONS.iter().map(|d| d.to_string()));
        document.mcqs.push(Mcq {
            question: format!(
                "Which of the following describes the term \"{}\"?",
                clean_term
            ),
            options,
            correct: 0,
        });
    }

    // Memory aids: one mnemonic from the first term, then the fixed analogy
    if let Some((term, _)) = document.definitions.first() {
        document.memory_aids.push(MemoryAid {
            kind: AidKind::Mnemonic,
            title: term.to_string(),
            content: format!(
                "Think of \"{}\" as a \"Master Key\" - it opens up the primary function of the system.",
                term
            ),
        });
    }
    document.memory_aids.push(MemoryAid {
        kind: AidKind::Analogy,
        title: ANALOGY_AID_TITLE.to_string(),
        content: ANALOGY_AID_CONTENT.to_string(),
    });

    // Exam focus: always two rows, the first carrying the resolved topic
    document.exam_focus = vec![
        ExamFocusItem {
            topic: document.topic.clone(),
            weight: Weight::High,
            priority: Priority::Critical,
            tip: TIP_CAUSE_EFFECT.to_string(),
        },
        ExamFocusItem {
            topic: STATIC_FOCUS_TOPIC.to_string(),
            weight: Weight::Medium,
            priority: Priority::Important,
            tip: TIP_UNIT_CONVERSIONS.to_string(),
        },
    ];

    // Last-minute notes: leading concepts, plus the first formula if any
    document.last_minute_notes = document
        .concepts
        .iter()
        .take(MAX_LAST_MINUTE_NOTES)
        .map(|concept| LastMinuteNote {
            text: concept.clone(),
            must_revise: concept.chars().count() < 50 || MUST_REVISE_REGEX.is_match(concept),
        })
        .collect();
    if let Some(formula) = document.formulas.first() {
        document.last_minute_notes.push(LastMinuteNote {
            text: format!("CRITICAL FORMULA: {}", formula),
            must_revise: true,
        });
    }

    document.tips.push(TIP_DIAGRAMS.to_string());
    document.tips.push(TIP_EDGE_CASES.to_string());

    // Legacy flattened view of the MCQ questions
    document.questions = document.mcqs.iter().map(|m| m.question.clone()).collect();

    debug!(
        "synthesized {} mcqs, {} memory aids, {} last-minute notes",
        document.mcqs.len(),
        document.memory_aids.len(),
        document.last_minute_notes.len()
    );
}

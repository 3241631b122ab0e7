//! Topic detection and per-line content classification
//!
//! Classification is data, not code: each surviving line runs through an
//! ordered rule table and the first rule that consumes it wins. Topic
//! detection runs on the same lines but never consumes them, so a heading
//! can resolve the topic and still be collected as a concept.

use crate::cram::document::{CondensedNote, StudyDocument};
use crate::cram::scanner::ScannedLine;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// Fixed title for every formula condensed note
pub const FORMULA_NOTE_TITLE: &str = "Formulas";

/// Heading/bold markers stripped from topic strings and MCQ terms
static MARKER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[#*]").unwrap());

/// Arithmetic operator required (next to `=`) for a line to be a formula
static OPERATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[+\-*/]").unwrap());

/// Single-digit numbered item marker, e.g. `1.`
static NUMBERED_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]\.").unwrap());

/// Remove every `#` and `*` and trim the remainder
pub(crate) fn strip_markers(text: &str) -> String {
    MARKER_REGEX.replace_all(text, "").trim().to_string()
}

/// Finds the document topic: commits to the first qualifying line and
/// ignores everything afterwards.
#[derive(Debug, Default)]
pub struct TopicDetector {
    found: bool,
}

impl TopicDetector {
    pub fn new() -> Self {
        Self { found: false }
    }

    pub fn is_resolved(&self) -> bool {
        self.found
    }

    /// Apply the topic priority chain to one line. Does not consume the
    /// line; classification still sees it.
    pub fn observe(&mut self, line: &ScannedLine, document: &mut StudyDocument) {
        if self.found {
            return;
        }
        let text = line.text.as_str();
        let length = text.chars().count();

        // Priority 1: markdown heading
        if text.starts_with('#') {
            document.topic = strip_markers(text);
            self.found = true;
        }
        // Priority 2: bolded subject appearing early
        else if text.contains("**") && length < 100 {
            if let Some(inner) = text.split("**").nth(1) {
                document.topic = inner.trim().to_string();
                self.found = true;
            }
        }
        // Priority 3: first substantial non-filler line, prefix before any colon
        else if length > 5 && length < 80 && !line.intro {
            let prefix = text.split(':').next().unwrap_or(text);
            document.topic = prefix.trim().to_string();
            self.found = true;
        }
    }
}

type ClassifyRule = fn(&str, &mut StudyDocument) -> bool;

/// Ordered rule table; rules are tried in declaration order and the first
/// one that returns true consumes the line.
const CLASSIFY_RULES: &[(&str, ClassifyRule)] = &[
    ("definition", definition_rule),
    ("formula", formula_rule),
    ("concept", concept_rule),
];

/// Route one line into the matching document bucket, if any
pub fn classify_line(line: &ScannedLine, document: &mut StudyDocument) {
    for (name, rule) in CLASSIFY_RULES {
        if rule(&line.text, document) {
            trace!("line {} consumed by {} rule", line.index, name);
            return;
        }
    }
    trace!("line {} matched no rule", line.index);
}

/// Term/definition lines: `Term: text` or `Term - text`.
///
/// The split runs over every colon and every hyphen and the remainder is
/// rejoined with `:`, so a value containing a hyphen comes back with that
/// hyphen replaced by a colon ("co-operation" -> "co: operation"). Legacy
/// consumers expect exactly this, so it stays.
fn definition_rule(text: &str, document: &mut StudyDocument) -> bool {
    if !(text.contains(':') || text.contains(" - ")) {
        return false;
    }
    let parts: Vec<&str> = text.split([':', '-']).collect();
    if parts.len() < 2 {
        return false;
    }
    let term = parts[0];
    let definition = parts[1..].join(":").trim().to_string();
    document.definitions.insert(term, definition.clone());
    document
        .condensed_notes
        .push(CondensedNote::definition(term, definition));
    true
}

/// Formula lines: an equals sign plus at least one arithmetic operator
fn formula_rule(text: &str, document: &mut StudyDocument) -> bool {
    if !(text.contains('=') && OPERATOR_REGEX.is_match(text)) {
        return false;
    }
    document.formulas.push(text.to_string());
    document
        .condensed_notes
        .push(CondensedNote::formula(FORMULA_NOTE_TITLE, text));
    true
}

/// Concept lines: headings, bold text, or short bullet/numbered items
fn concept_rule(text: &str, document: &mut StudyDocument) -> bool {
    let is_heading = text.starts_with('#');
    let is_bold = text.contains("**");
    let is_short_item = text.chars().count() < 60
        && (text.starts_with('*') || text.starts_with('-') || NUMBERED_REGEX.is_match(text));
    if is_heading || is_bold || is_short_item {
        document.concepts.push(text.to_string());
        return true;
    }
    false
}

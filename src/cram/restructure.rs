//! Public entry point for the restructuring engine
//!
//! Wires the stages together: scan the lines, run topic detection and
//! classification over each one, then synthesize the derived artifacts.
//! The transform is pure and deterministic; the only failure signal is an
//! absent result for empty input.

use crate::cram::classify::{classify_line, TopicDetector};
use crate::cram::document::StudyDocument;
use crate::cram::scanner::scan;
use crate::cram::synthesis::synthesize;
use log::debug;

/// Restructure raw study text into a `StudyDocument`.
///
/// Returns `None` only for the empty string. Any other input, however
/// unstructured, yields a best-effort document with the default topic and
/// the always-present static entries.
pub fn restructure(text: &str) -> Option<StudyDocument> {
    if text.is_empty() {
        return None;
    }

    let lines = scan(text);
    let mut document = StudyDocument::new();
    let mut detector = TopicDetector::new();
    for line in &lines {
        detector.observe(line, &mut document);
        classify_line(line, &mut document);
    }
    synthesize(&mut document);

    debug!("restructured input into {}", document);
    Some(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_absent() {
        assert_eq!(restructure(""), None);
    }

    #[test]
    fn test_whitespace_only_input_yields_default_document() {
        let document = restructure(" \n ").unwrap();
        assert_eq!(document.topic, "Core Concept");
        assert!(document.concepts.is_empty());
        assert!(document.definitions.is_empty());
        assert_eq!(document.tips.len(), 2);
        assert_eq!(document.exam_focus.len(), 2);
    }

    #[test]
    fn test_topic_line_is_still_classified() {
        let document = restructure("# Photosynthesis").unwrap();
        assert_eq!(document.topic, "Photosynthesis");
        assert_eq!(document.concepts, vec!["# Photosynthesis"]);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let input = "# Cells\nNucleus: control centre\n- membrane\nATP = ADP + P";
        assert_eq!(restructure(input), restructure(input));
    }
}

//! Line scanner for raw study text
//!
//! Splits input on line breaks, trims each line, drops blank lines, and
//! discards conversational filler lines ("alright", "here is", ...) when
//! they appear in the first few lines of the input.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Conversational openers that mark a line as introductory filler
static INTRO_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(alright|if you want|here is|welcome|this is|structured|comprehensive|no filler)",
    )
    .unwrap()
});

/// How many leading raw lines are tested against the filler pattern
const INTRO_WINDOW: usize = 5;

/// A trimmed, non-blank input line that survived scanning
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedLine {
    /// Position among all split lines, blank lines included
    pub index: usize,
    /// The trimmed line text
    pub text: String,
    /// Whether the line matches the conversational-opener pattern.
    /// Kept on every line: topic detection refuses intro-phrase lines
    /// even outside the discard window.
    pub intro: bool,
}

/// Check a trimmed line against the filler pattern
pub fn is_intro_phrase(line: &str) -> bool {
    INTRO_REGEX.is_match(line)
}

/// Split source into the ordered sequence of lines the later stages see.
///
/// Blank lines vanish entirely but still count toward the raw index used
/// by the intro-window rule.
pub fn scan(source: &str) -> Vec<ScannedLine> {
    let mut lines = Vec::new();
    let mut dropped = 0usize;
    for (index, raw) in source.split('\n').enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let intro = is_intro_phrase(trimmed);
        if index < INTRO_WINDOW && intro {
            dropped += 1;
            continue;
        }
        lines.push(ScannedLine {
            index,
            text: trimmed.to_string(),
            intro,
        });
    }
    debug!(
        "scanned {} surviving lines ({} filler dropped)",
        lines.len(),
        dropped
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[ScannedLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let lines = scan("first\n\n   \nsecond");
        assert_eq!(texts(&lines), vec!["first", "second"]);
    }

    #[test]
    fn test_lines_are_trimmed() {
        let lines = scan("  padded line  ");
        assert_eq!(texts(&lines), vec!["padded line"]);
    }

    #[test]
    fn test_intro_phrase_in_window_is_dropped() {
        let lines = scan("Here is a structured summary:\nMitosis: cell division process");
        assert_eq!(texts(&lines), vec!["Mitosis: cell division process"]);
    }

    #[test]
    fn test_intro_phrase_outside_window_survives() {
        let source = "a\nb\nc\nd\ne\nWelcome to the chapter";
        let lines = scan(source);
        let last = lines.last().unwrap();
        assert_eq!(last.text, "Welcome to the chapter");
        assert!(last.intro);
    }

    #[test]
    fn test_intro_match_is_case_insensitive() {
        assert!(is_intro_phrase("ALRIGHT, let's begin"));
        assert!(is_intro_phrase("This is the overview"));
        assert!(!is_intro_phrase("Mitosis: cell division"));
    }

    #[test]
    fn test_intro_pattern_is_anchored() {
        // "welcome" mid-line is not an opener
        assert!(!is_intro_phrase("Students welcome feedback"));
    }

    #[test]
    fn test_blank_lines_count_toward_intro_window() {
        // Four blank lines push the filler phrase to raw index 4, still
        // inside the window; a fifth pushes it out.
        let inside = scan("\n\n\n\nhere is the summary\nBody");
        assert_eq!(texts(&inside), vec!["Body"]);

        let outside = scan("\n\n\n\n\nhere is the summary\nBody");
        assert_eq!(texts(&outside), vec!["here is the summary", "Body"]);
    }

    #[test]
    fn test_raw_index_is_preserved() {
        let lines = scan("first\n\nthird");
        assert_eq!(lines[0].index, 0);
        assert_eq!(lines[1].index, 2);
    }

    #[test]
    fn test_empty_input_yields_no_lines() {
        assert!(scan("").is_empty());
    }
}

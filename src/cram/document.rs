//! Data model for the restructured study document
//!
//! Everything the engine produces lives here: the `StudyDocument` container,
//! the record types for derived artifacts, and `DefinitionMap`, the
//! insertion-ordered term map. The serde renames keep the serialized shape
//! identical to the legacy schema consumed by downstream viewers
//! (`condensedNotes`, `mustRevise`, lowercase note types and so on).

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Topic used when no line in the input qualifies as a subject
pub const DEFAULT_TOPIC: &str = "Core Concept";

/// An insertion-ordered map from term to definition text.
///
/// Key order is semantically significant downstream (MCQ generation takes
/// the first three terms in scan order, the mnemonic takes the first), so
/// this is backed by a `Vec` rather than a hash map. Inserting an existing
/// term overwrites its value in place and keeps the original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DefinitionMap {
    entries: Vec<(String, String)>,
}

impl DefinitionMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or overwrite a term. Last write wins; first insertion
    /// determines iteration position.
    pub fn insert(&mut self, term: impl Into<String>, definition: impl Into<String>) {
        let term = term.into();
        let definition = definition.into();
        match self.entries.iter_mut().find(|(t, _)| *t == term) {
            Some((_, existing)) => *existing = definition,
            None => self.entries.push((term, definition)),
        }
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| t == term)
            .map(|(_, d)| d.as_str())
    }

    /// The first-inserted entry, if any
    pub fn first(&self) -> Option<(&str, &str)> {
        self.entries.first().map(|(t, d)| (t.as_str(), d.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, d)| (t.as_str(), d.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for DefinitionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (term, definition) in &self.entries {
            map.serialize_entry(term, definition)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DefinitionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = DefinitionMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of term to definition")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut definitions = DefinitionMap::new();
                while let Some((term, definition)) = access.next_entry::<String, String>()? {
                    definitions.insert(term, definition);
                }
                Ok(definitions)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}

/// A generated multiple-choice question. The option at `correct` (always 0)
/// is the ground-truth definition; the rest are fixed distractors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mcq {
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
}

impl fmt::Display for Mcq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mcq('{}', {} options)", self.question, self.options.len())
    }
}

/// Whether a condensed note was extracted from a definition or a formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Definition,
    Formula,
}

/// A normalized title/content record paired with a definition or formula line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CondensedNote {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: NoteKind,
}

impl CondensedNote {
    pub fn definition(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            kind: NoteKind::Definition,
        }
    }

    pub fn formula(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            kind: NoteKind::Formula,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AidKind {
    Mnemonic,
    Analogy,
}

/// A mnemonic or analogy entry for the memory-aids panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryAid {
    #[serde(rename = "type")]
    pub kind: AidKind,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weight {
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    Important,
}

/// One row of the exam-focus table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamFocusItem {
    pub topic: String,
    pub weight: Weight,
    pub priority: Priority,
    pub tip: String,
}

/// A rapid-revision excerpt with a must-revise flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastMinuteNote {
    pub text: String,
    pub must_revise: bool,
}

/// The structured output of the restructuring engine.
///
/// Constructed in one pass and returned immutable; field order matches the
/// legacy JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyDocument {
    pub topic: String,
    pub concepts: Vec<String>,
    pub definitions: DefinitionMap,
    pub formulas: Vec<String>,
    pub tips: Vec<String>,
    pub mcqs: Vec<Mcq>,
    pub condensed_notes: Vec<CondensedNote>,
    pub memory_aids: Vec<MemoryAid>,
    pub exam_focus: Vec<ExamFocusItem>,
    pub last_minute_notes: Vec<LastMinuteNote>,
    /// Flattened MCQ question texts, kept for older consumers
    pub questions: Vec<String>,
}

impl StudyDocument {
    pub fn new() -> Self {
        Self {
            topic: DEFAULT_TOPIC.to_string(),
            concepts: Vec::new(),
            definitions: DefinitionMap::new(),
            formulas: Vec::new(),
            tips: Vec::new(),
            mcqs: Vec::new(),
            condensed_notes: Vec::new(),
            memory_aids: Vec::new(),
            exam_focus: Vec::new(),
            last_minute_notes: Vec::new(),
            questions: Vec::new(),
        }
    }
}

impl Default for StudyDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StudyDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StudyDocument('{}', {} concepts, {} definitions, {} formulas)",
            self.topic,
            self.concepts.len(),
            self.definitions.len(),
            self.formulas.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_map_preserves_insertion_order() {
        let mut definitions = DefinitionMap::new();
        definitions.insert("Osmosis", "movement of water");
        definitions.insert("Diffusion", "movement of particles");
        definitions.insert("Active transport", "movement against gradient");

        let terms: Vec<&str> = definitions.iter().map(|(t, _)| t).collect();
        assert_eq!(terms, vec!["Osmosis", "Diffusion", "Active transport"]);
    }

    #[test]
    fn test_definition_map_overwrite_keeps_position() {
        let mut definitions = DefinitionMap::new();
        definitions.insert("Osmosis", "first value");
        definitions.insert("Diffusion", "movement of particles");
        definitions.insert("Osmosis", "second value");

        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions.first(), Some(("Osmosis", "second value")));
        assert_eq!(definitions.get("Osmosis"), Some("second value"));
    }

    #[test]
    fn test_definition_map_serializes_as_ordered_map() {
        let mut definitions = DefinitionMap::new();
        definitions.insert("B", "second");
        definitions.insert("A", "first");

        let json = serde_json::to_string(&definitions).unwrap();
        assert_eq!(json, r#"{"B":"second","A":"first"}"#);
    }

    #[test]
    fn test_note_kind_serializes_lowercase() {
        let note = CondensedNote::formula("Formulas", "F = m * a");
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains(r#""type":"formula""#));
    }

    #[test]
    fn test_last_minute_note_uses_camel_case() {
        let note = LastMinuteNote {
            text: "key idea".to_string(),
            must_revise: true,
        };
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, r#"{"text":"key idea","mustRevise":true}"#);
    }

    #[test]
    fn test_study_document_round_trip() {
        let mut document = StudyDocument::new();
        document.topic = "Photosynthesis".to_string();
        document.definitions.insert("Chlorophyll", "light-absorbing pigment");
        document.concepts.push("- light reaction".to_string());

        let json = serde_json::to_string(&document).unwrap();
        let back: StudyDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, document);
    }

    #[test]
    fn test_document_display() {
        let document = StudyDocument::new();
        assert_eq!(
            document.to_string(),
            "StudyDocument('Core Concept', 0 concepts, 0 definitions, 0 formulas)"
        );
    }
}

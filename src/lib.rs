//! # cram
//!
//! A deterministic engine that restructures raw free-form study text into
//! exam-ready notes: topic, key concepts, definitions, formulas, practice
//! questions, memory aids, exam-focus hints and rapid-revision material.
//!
//! The engine is a pure synchronous transform with no I/O: the same input
//! always produces the same `StudyDocument`. Empty input yields no
//! document at all (`None`), which is the only failure signal.
//!
//! ```rust
//! let document = cram::restructure("# Photosynthesis\nChlorophyll: light pigment").unwrap();
//! assert_eq!(document.topic, "Photosynthesis");
//! ```

pub mod cram;

pub use crate::cram::document::StudyDocument;
pub use crate::cram::restructure::restructure;

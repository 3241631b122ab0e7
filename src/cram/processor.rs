//! File processing API for the restructuring engine
//!
//! This is the surface the CLI sits on: read a source file, run the
//! engine, and render the resulting document in one of the supported
//! output formats.

use crate::cram::document::StudyDocument;
use crate::cram::restructure::restructure;
use log::debug;
use std::fmt;
use std::fs;
use std::path::Path;

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Summary,
}

impl OutputFormat {
    /// Parse a format string like "json" or "summary"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        match format_str {
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            "summary" => Ok(OutputFormat::Summary),
            _ => Err(ProcessingError::InvalidFormat(format_str.to_string())),
        }
    }
}

/// Get a list of all available formats with descriptions
pub fn available_formats() -> Vec<(&'static str, &'static str)> {
    vec![
        ("json", "Pretty-printed JSON study document (default)"),
        ("yaml", "YAML study document"),
        ("summary", "Human-readable digest of the extracted buckets"),
    ]
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    FileNotFound(String),
    IoError(String),
    InvalidFormat(String),
    EmptyInput,
    Serialization(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::EmptyInput => write!(f, "Input is empty: nothing to restructure"),
            ProcessingError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

/// Run the engine over a source string and render the result
pub fn process_source(source: &str, format: OutputFormat) -> Result<String, ProcessingError> {
    let document = restructure(source).ok_or(ProcessingError::EmptyInput)?;
    debug!("processing produced {}", document);
    render(&document, format)
}

/// Read a file and process its contents
pub fn process_file(path: &Path, format: OutputFormat) -> Result<String, ProcessingError> {
    if !path.exists() {
        return Err(ProcessingError::FileNotFound(path.display().to_string()));
    }
    let source =
        fs::read_to_string(path).map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&source, format)
}

/// Render an already-built document in the requested format
pub fn render(document: &StudyDocument, format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(document)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(document)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::Summary => Ok(render_summary(document)),
    }
}

fn render_summary(document: &StudyDocument) -> String {
    let mut out = String::new();
    out.push_str(&format!("Topic: {}\n", document.topic));

    out.push_str(&format!("\nConcepts ({}):\n", document.concepts.len()));
    for concept in &document.concepts {
        out.push_str(&format!("  {}\n", concept));
    }

    out.push_str(&format!("\nDefinitions ({}):\n", document.definitions.len()));
    for (term, definition) in document.definitions.iter() {
        out.push_str(&format!("  {}: {}\n", term, definition));
    }

    out.push_str(&format!("\nFormulas ({}):\n", document.formulas.len()));
    for formula in &document.formulas {
        out.push_str(&format!("  {}\n", formula));
    }

    out.push_str(&format!("\nPractice questions ({}):\n", document.mcqs.len()));
    for mcq in &document.mcqs {
        out.push_str(&format!("  {}\n", mcq.question));
    }

    out.push_str(&format!(
        "\nLast-minute notes ({}):\n",
        document.last_minute_notes.len()
    ));
    for note in &document.last_minute_notes {
        let marker = if note.must_revise { "[!]" } else { "[ ]" };
        out.push_str(&format!("  {} {}\n", marker, note.text));
    }

    out.push_str("\nTips:\n");
    for tip in &document.tips {
        out.push_str(&format!("  {}\n", tip));
    }

    out
}

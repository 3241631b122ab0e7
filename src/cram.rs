//! Main module for cram library functionality

pub mod classify;
pub mod document;
pub mod processor;
pub mod restructure;
pub mod scanner;
pub mod synthesis;

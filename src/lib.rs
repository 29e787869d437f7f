//! Quiz extraction and synthesis engine.
//!
//! Turns raw document text into a bounded, uniquely-identified set of
//! four-option multiple-choice questions. Authored question blocks are
//! recovered with a pattern-based parser; when a document yields too few
//! of those, fill-in-the-blank questions are synthesized from its prose.
//! An orchestrator runs the pipeline over a document set as a single
//! background job whose progress is exposed to polling consumers through
//! a shared, atomically-snapshotted job record.
//!
//! Reading bytes out of PDF/DOCX/TXT files is an external concern behind
//! the [`readers::DocumentReader`] trait; this crate ships only a plain
//! text implementation.

pub mod config;
pub mod engine;
pub mod errors;
pub mod models;
pub mod readers;
pub mod services;

pub use config::Config;
pub use engine::QuizEngine;
pub use errors::{EngineError, EngineResult};

#[cfg(test)]
pub mod test_utils;

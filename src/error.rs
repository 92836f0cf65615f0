//! Error types for body parsing

use thiserror::Error;

/// Errors that can occur at the parsing API surface.
///
/// The parse pipeline itself is total: malformed markup, unmatched
/// patterns and unparseable dates all degrade to empty output instead
/// of failing. Only caller-supplied configuration can be rejected.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Unrecognized cluster selection strategy name
    #[error("unknown selection strategy {0:?} (expected \"bottom-up\" or \"top-down\")")]
    UnknownStrategy(String),
}

/// Result type for body parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;

// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Quoted-Reply Body Parser
//!
//! A line-oriented parsing and clustering engine for raw plaintext or
//! HTML email bodies, built for multilingual quoted-reply chains.
//!
//! # Features
//!
//! - Visible-text normalization of HTML bodies (tags stripped, line
//!   structure preserved, angle-bracketed addresses kept)
//! - Per-line EMAIL/URL/TEL matching with calendar-aware phone
//!   suppression
//! - Quoted-header detection (From/Von/De, Gesendet, Objet, Asunto, ...)
//!   with continuation merging and ISO-8601 date normalization
//! - Compact-line clustering of nearby matches
//! - Bottom-up isolation of the newest message above quoted history
//!
//! # Example
//!
//! ```rust
//! use reply_extract::parse;
//!
//! let body = "Hi team, thanks!\n\n\
//!             Von: Max Mustermann <max@example.com>\n\
//!             Gesendet: Montag, 3. März 2024 14:05\n\n\
//!             Alte Nachricht hier.";
//! let result = parse(body);
//!
//! assert_eq!(result.strategy.to_string(), "bottom-up");
//! assert!(!result.clusters.is_empty());
//! assert!(result.body_window.is_some());
//! ```

mod cluster;
mod error;
mod headers;
mod matcher;
mod normalize;
mod parser;
mod patterns;
mod select;
mod types;

pub use cluster::{DEFAULT_MAX_GAP, cluster_matches, merge_clusters, segment_cluster};
pub use error::{ParseError, Result};
pub use headers::{detect_headers, normalize_date};
pub use matcher::{EntityMatches, match_lines};
pub use normalize::visible_text;
pub use parser::{parse, parse_with};
pub use patterns::Patterns;
pub use select::select_clusters;
pub use types::*;

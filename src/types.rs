//! Core record types passed between parse stages

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Entity categories matched line by line in the message body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Email,
    Url,
    Tel,
}

impl EntityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Url => "URL",
            Self::Tel => "TEL",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical tags for quoted header lines (From/Von/De, To/An/Para, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeaderKey {
    From,
    To,
    Cc,
    Bcc,
    Subject,
    Date,
    Sent,
    ReplyTo,
    Sender,
}

impl HeaderKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::From => "FROM",
            Self::To => "TO",
            Self::Cc => "CC",
            Self::Bcc => "BCC",
            Self::Subject => "SUBJECT",
            Self::Date => "DATE",
            Self::Sent => "SENT",
            Self::ReplyTo => "REPLY_TO",
            Self::Sender => "SENDER",
        }
    }

    /// DATE and SENT values get an ISO-8601 companion entry when the
    /// value parses as a calendar date.
    #[must_use]
    pub const fn is_timestamp(self) -> bool {
        matches!(self, Self::Date | Self::Sent)
    }

    /// Map key under which the ISO-8601 companion value is stored.
    #[must_use]
    pub fn iso_key(self) -> String {
        format!("{}_ISO", self.as_str())
    }
}

impl fmt::Display for HeaderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind tag carried by cluster items: either a body entity or a quoted
/// header key. Serialized as the bare tag string ("EMAIL", "FROM", ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ItemKind {
    Entity(EntityKind),
    Header(HeaderKey),
}

impl ItemKind {
    #[must_use]
    pub const fn is_header(self) -> bool {
        matches!(self, Self::Header(_))
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entity(kind) => f.write_str(kind.as_str()),
            Self::Header(key) => f.write_str(key.as_str()),
        }
    }
}

/// One line's worth of matches for a single entity kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchItem {
    #[serde(rename = "type")]
    pub kind: EntityKind,

    /// Matched substrings, first-seen order, deduplicated per line
    pub values: Vec<String>,

    /// 1-based original line number
    pub line: usize,

    /// 1-based compact line number (blank lines skipped)
    pub cline: usize,
}

/// A single quoted header line, continuations already merged into `value`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderEntry {
    /// Raw matched header token (e.g. "Gesendet am")
    pub key: String,

    pub normalized_key: HeaderKey,

    pub value: String,

    /// 1-based line of the header key
    pub line: usize,

    /// Compact line number of the header key
    pub cline: usize,
}

/// A maximal run of contiguous quoted header lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderSegment {
    pub start_line: usize,
    pub end_line: usize,

    /// Compact line span
    pub cstart: usize,
    pub cend: usize,

    /// Sorted set of canonical keys present in the segment
    pub keys: Vec<HeaderKey>,

    /// Canonical key -> value, plus `*_ISO` companions for DATE/SENT
    pub headers: BTreeMap<String, String>,

    /// Entries in document order
    pub entries: Vec<HeaderEntry>,
}

/// Aggregate output of header detection over one body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderScan {
    /// Last-wins view across all segments (incl. `*_ISO` companions)
    pub headers: BTreeMap<String, String>,

    /// Every detected header entry in document order
    pub headers_list: Vec<HeaderEntry>,

    pub segments: Vec<HeaderSegment>,
}

/// Member record of a [`Cluster`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClusterItem {
    #[serde(rename = "type")]
    pub kind: ItemKind,

    pub values: Vec<String>,

    pub line: usize,

    pub cline: usize,
}

impl From<MatchItem> for ClusterItem {
    fn from(item: MatchItem) -> Self {
        Self {
            kind: ItemKind::Entity(item.kind),
            values: item.values,
            line: item.line,
            cline: item.cline,
        }
    }
}

/// A contiguous visual group of entity matches, or one header block.
///
/// `start_line`/`end_line` span original line numbers, `cstart`/`cend`
/// the compact span the gap rule was applied to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cluster {
    pub start_line: usize,
    pub end_line: usize,
    pub cstart: usize,
    pub cend: usize,
    pub items: Vec<ClusterItem>,
}

impl Cluster {
    /// True if any member carries a quoted-header tag.
    #[must_use]
    pub fn has_header(&self) -> bool {
        self.items.iter().any(|item| item.kind.is_header())
    }
}

/// The slice of visible text identified as the newest message section.
///
/// Empty (`start_line == end_line == 0`, empty text) when nothing
/// survives blank-line trimming.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BodyWindow {
    pub start_line: usize,
    pub end_line: usize,
    pub text: String,
}

impl BodyWindow {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Cluster selection strategy.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Walk from the bottom of the message upwards until the first
    /// quoted-header cluster, and compute a body window.
    #[default]
    BottomUp,

    /// Return all clusters top to bottom, without filtering.
    TopDown,
}

impl Strategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BottomUp => "bottom-up",
            Self::TopDown => "top-down",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bottom-up" => Ok(Self::BottomUp),
            "top-down" => Ok(Self::TopDown),
            other => Err(ParseError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Final output of one parse call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseResult {
    /// Clusters in ascending order of original start line
    pub clusters: Vec<Cluster>,

    pub strategy: Strategy,

    /// Present only for the bottom-up strategy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_window: Option<BodyWindow>,
}

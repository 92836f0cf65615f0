//! Per-line entity matching over normalized visible text

use crate::patterns::Patterns;
use crate::types::{EntityKind, MatchItem};
use regex::Regex;

/// Matches grouped per entity kind, each entry covering one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityMatches {
    pub emails: Vec<MatchItem>,
    pub urls: Vec<MatchItem>,
    pub tels: Vec<MatchItem>,
}

impl EntityMatches {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.urls.is_empty() && self.tels.is_empty()
    }

    /// Flatten all kinds into one list ordered by compact line number.
    #[must_use]
    pub fn flatten(self) -> Vec<MatchItem> {
        let mut flat = self.emails;
        flat.extend(self.urls);
        flat.extend(self.tels);
        flat.sort_by_key(|item| item.cline);
        flat
    }
}

/// Scan each non-blank line for EMAIL/URL/TEL occurrences.
///
/// Blank lines do not advance the compact line counter. Lines carrying
/// a weekday or month token suppress TEL matching for that line only,
/// since digit groups inside dates and time ranges routinely look like
/// phone numbers.
#[must_use]
pub fn match_lines(text: &str) -> EntityMatches {
    let patterns = Patterns::shared();
    let mut out = EntityMatches::default();
    let mut compact = 0;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        compact += 1;
        let lineno = idx + 1;
        let calendar_line = patterns.calendar.is_match(line);

        push_line(
            &mut out.emails,
            EntityKind::Email,
            std::slice::from_ref(&patterns.email),
            line,
            lineno,
            compact,
        );
        push_line(&mut out.urls, EntityKind::Url, &patterns.urls, line, lineno, compact);
        if !calendar_line {
            push_line(
                &mut out.tels,
                EntityKind::Tel,
                std::slice::from_ref(&patterns.tel),
                line,
                lineno,
                compact,
            );
        }
    }
    out
}

fn push_line(
    bucket: &mut Vec<MatchItem>,
    kind: EntityKind,
    regexes: &[Regex],
    line: &str,
    lineno: usize,
    cline: usize,
) {
    let mut values: Vec<String> = Vec::new();
    for re in regexes {
        for hit in re.find_iter(line) {
            let hit = hit.as_str();
            if !values.iter().any(|v| v == hit) {
                values.push(hit.to_string());
            }
        }
    }
    if !values.is_empty() {
        bucket.push(MatchItem {
            kind,
            values,
            line: lineno,
            cline,
        });
    }
}

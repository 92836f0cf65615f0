//! Detection of quoted header blocks (From/Von/De, Gesendet, ...) and
//! locale-aware date normalization

use crate::patterns::Patterns;
use crate::types::{HeaderEntry, HeaderKey, HeaderScan, HeaderSegment};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Captures;
use std::collections::{BTreeMap, BTreeSet};

/// Scan normalized text for quoted header lines and group contiguous
/// runs into segments.
///
/// A header line is `alias: value` for any known DE/EN/FR/ES alias.
/// Indented follow-up lines that are not themselves header lines are
/// merged into the current value as wrapped continuations. A blank line
/// or any other non-header line closes the current segment.
#[must_use]
pub fn detect_headers(text: &str) -> HeaderScan {
    let patterns = Patterns::shared();
    let lines: Vec<&str> = text.lines().collect();
    let compact = compact_index(&lines);

    let mut scan = HeaderScan::default();
    let mut open: Option<SegmentBuilder> = None;
    let mut i = 0;

    while i < lines.len() {
        let resolved = patterns
            .header_line
            .captures(lines[i])
            .and_then(|caps| patterns.canonical_key(&caps[1]).map(|key| (caps, key)));
        let Some((caps, normalized_key)) = resolved else {
            if let Some(seg) = open.take() {
                scan.segments.push(seg.finish());
            }
            i += 1;
            continue;
        };

        let mut value = caps[2].trim().to_string();
        let mut j = i + 1;
        while j < lines.len() {
            let next = lines[j];
            if next.trim().is_empty()
                || !next.starts_with([' ', '\t'])
                || patterns.header_line.is_match(next)
            {
                break;
            }
            value.push(' ');
            value.push_str(next.trim());
            j += 1;
        }

        let entry = HeaderEntry {
            key: caps[1].to_string(),
            normalized_key,
            value,
            line: i + 1,
            cline: compact[i],
        };
        record_value(&mut scan.headers, &entry);
        scan.headers_list.push(entry.clone());
        // j is one past the last consumed 0-based index, i.e. the
        // 1-based inclusive end of this entry's lines.
        open.get_or_insert_with(|| SegmentBuilder::new(i + 1, compact[i]))
            .push(entry, j, compact[j - 1]);
        i = j;
    }
    if let Some(seg) = open.take() {
        scan.segments.push(seg.finish());
    }
    scan
}

/// Best-effort conversion of a DATE/SENT value to `YYYY-MM-DDTHH:MM:SS`.
///
/// Weekday names and commas are stripped, then four shapes are tried in
/// order: ISO-like numeric, dotted `DD.MM.YYYY`, `DD <Month> YYYY` and
/// `<Month> DD YYYY`, each with an optional `HH:MM[:SS]` tail. Month
/// names resolve through the combined DE/EN/FR/ES table. Returns `None`
/// when nothing matches or the components are not a real calendar date.
#[must_use]
pub fn normalize_date(value: &str) -> Option<String> {
    let patterns = Patterns::shared();
    let cleaned = patterns.weekday.replace_all(value, " ").replace(',', " ");
    iso_shape(patterns, &cleaned)
        .or_else(|| dotted_shape(patterns, &cleaned))
        .or_else(|| day_month_shape(patterns, &cleaned))
        .or_else(|| month_day_shape(patterns, &cleaned))
}

fn iso_shape(patterns: &Patterns, s: &str) -> Option<String> {
    let caps = patterns.iso_date.captures(s)?;
    build_iso(num(&caps, 1)?, num(&caps, 2)?, num(&caps, 3)?, &caps, 4)
}

fn dotted_shape(patterns: &Patterns, s: &str) -> Option<String> {
    let caps = patterns.dotted_date.captures(s)?;
    build_iso(num(&caps, 3)?, num(&caps, 2)?, num(&caps, 1)?, &caps, 4)
}

fn day_month_shape(patterns: &Patterns, s: &str) -> Option<String> {
    let caps = patterns.day_month_year.captures(s)?;
    let month = patterns.month_number(caps.get(2)?.as_str())?;
    build_iso(num(&caps, 3)?, month, num(&caps, 1)?, &caps, 4)
}

fn month_day_shape(patterns: &Patterns, s: &str) -> Option<String> {
    let caps = patterns.month_day_year.captures(s)?;
    let month = patterns.month_number(caps.get(1)?.as_str())?;
    build_iso(num(&caps, 3)?, month, num(&caps, 2)?, &caps, 4)
}

fn num(caps: &Captures<'_>, idx: usize) -> Option<u32> {
    caps.get(idx)?.as_str().parse().ok()
}

fn time_component(caps: &Captures<'_>, idx: usize) -> u32 {
    caps.get(idx)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

fn build_iso(year: u32, month: u32, day: u32, caps: &Captures<'_>, hour_idx: usize) -> Option<String> {
    let date = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)?;
    let time = NaiveTime::from_hms_opt(
        time_component(caps, hour_idx),
        time_component(caps, hour_idx + 1),
        time_component(caps, hour_idx + 2),
    )?;
    Some(
        NaiveDateTime::new(date, time)
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string(),
    )
}

fn record_value(map: &mut BTreeMap<String, String>, entry: &HeaderEntry) {
    if entry.normalized_key.is_timestamp() {
        if let Some(iso) = normalize_date(&entry.value) {
            map.insert(entry.normalized_key.iso_key(), iso);
        }
    }
    map.insert(
        entry.normalized_key.as_str().to_string(),
        entry.value.clone(),
    );
}

/// Compact line index per line; blank lines carry the preceding count.
fn compact_index(lines: &[&str]) -> Vec<usize> {
    let mut out = Vec::with_capacity(lines.len());
    let mut idx = 0;
    for line in lines {
        if !line.trim().is_empty() {
            idx += 1;
        }
        out.push(idx);
    }
    out
}

struct SegmentBuilder {
    start_line: usize,
    end_line: usize,
    cstart: usize,
    cend: usize,
    headers: BTreeMap<String, String>,
    entries: Vec<HeaderEntry>,
}

impl SegmentBuilder {
    const fn new(start_line: usize, cstart: usize) -> Self {
        Self {
            start_line,
            end_line: start_line,
            cstart,
            cend: cstart,
            headers: BTreeMap::new(),
            entries: Vec::new(),
        }
    }

    /// Absorb one entry spanning up to `end_line` (1-based inclusive,
    /// covering the key line and its continuations).
    fn push(&mut self, entry: HeaderEntry, end_line: usize, end_cline: usize) {
        self.end_line = end_line;
        self.cend = end_cline;
        record_value(&mut self.headers, &entry);
        self.entries.push(entry);
    }

    fn finish(self) -> HeaderSegment {
        let keys: Vec<HeaderKey> = self
            .entries
            .iter()
            .map(|e| e.normalized_key)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        HeaderSegment {
            start_line: self.start_line,
            end_line: self.end_line,
            cstart: self.cstart,
            cend: self.cend,
            keys,
            headers: self.headers,
            entries: self.entries,
        }
    }
}

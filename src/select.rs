//! Strategy-driven selection of clusters and the body window

use crate::types::{BodyWindow, Cluster, ParseResult, Strategy};

/// Apply a selection strategy to the merged cluster sequence.
///
/// Top-down returns every cluster unchanged and computes no window.
/// Bottom-up walks from the last cluster upwards, keeps everything up
/// to and including the first cluster carrying a quoted-header tag,
/// and slices the text from that boundary to the end.
#[must_use]
pub fn select_clusters(clusters: Vec<Cluster>, text: &str, strategy: Strategy) -> ParseResult {
    match strategy {
        Strategy::TopDown => ParseResult {
            clusters,
            strategy,
            body_window: None,
        },
        Strategy::BottomUp => bottom_up(clusters, text),
    }
}

fn bottom_up(clusters: Vec<Cluster>, text: &str) -> ParseResult {
    let mut selected: Vec<Cluster> = Vec::new();
    let mut boundary: Option<usize> = None;

    for cluster in clusters.into_iter().rev() {
        let is_boundary = cluster.has_header();
        let start_line = cluster.start_line;
        selected.push(cluster);
        if is_boundary {
            boundary = Some(start_line);
            break;
        }
    }
    selected.reverse();

    ParseResult {
        clusters: selected,
        strategy: Strategy::BottomUp,
        body_window: Some(window_from(text, boundary)),
    }
}

/// Slice the text from the boundary header cluster (or the start when
/// no boundary was found) to the end, trimming blank edge lines.
fn window_from(text: &str, boundary: Option<usize>) -> BodyWindow {
    let lines: Vec<&str> = text.lines().collect();
    let start_idx = boundary.map_or(0, |line| line.saturating_sub(1));

    let mut first = None;
    let mut last = None;
    for (idx, line) in lines.iter().enumerate().skip(start_idx) {
        if !line.trim().is_empty() {
            if first.is_none() {
                first = Some(idx);
            }
            last = Some(idx);
        }
    }

    match (first, last) {
        (Some(first), Some(last)) => BodyWindow {
            start_line: first + 1,
            end_line: last + 1,
            text: lines[first..=last].join("\n"),
        },
        _ => BodyWindow::default(),
    }
}

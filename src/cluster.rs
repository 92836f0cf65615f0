//! Line-distance clustering of entity matches and header segments

use crate::types::{Cluster, ClusterItem, HeaderSegment, ItemKind, MatchItem};

/// Matches at most one blank-line-free gap apart merge by default.
pub const DEFAULT_MAX_GAP: usize = 1;

/// Group entries whose compact-line distance stays within `max_gap`
/// into contiguous clusters.
///
/// Entries are sorted by compact line first; a new cluster opens
/// whenever the next entry's compact line exceeds the current cluster
/// end by more than `max_gap`. Each cluster's `start_line`/`end_line`
/// are the min/max original line across its members.
#[must_use]
pub fn cluster_matches(mut entries: Vec<MatchItem>, max_gap: usize) -> Vec<Cluster> {
    entries.sort_by_key(|e| e.cline);

    let mut clusters = Vec::new();
    let mut iter = entries.into_iter();
    let Some(first) = iter.next() else {
        return clusters;
    };
    let mut cstart = first.cline;
    let mut cend = first.cline;
    let mut items: Vec<ClusterItem> = vec![first.into()];

    for entry in iter {
        if entry.cline.saturating_sub(cend) <= max_gap {
            cend = entry.cline;
            items.push(entry.into());
        } else {
            clusters.push(seal(cstart, cend, std::mem::take(&mut items)));
            cstart = entry.cline;
            cend = entry.cline;
            items.push(entry.into());
        }
    }
    clusters.push(seal(cstart, cend, items));
    clusters
}

fn seal(cstart: usize, cend: usize, items: Vec<ClusterItem>) -> Cluster {
    let start_line = items.iter().map(|it| it.line).min().unwrap_or(0);
    let end_line = items.iter().map(|it| it.line).max().unwrap_or(0);
    Cluster {
        start_line,
        end_line,
        cstart,
        cend,
        items,
    }
}

/// Convert a header segment into a cluster 1:1; segments are contiguous
/// by construction so no gap rule applies.
#[must_use]
pub fn segment_cluster(segment: &HeaderSegment) -> Cluster {
    let items = segment
        .entries
        .iter()
        .map(|entry| ClusterItem {
            kind: ItemKind::Header(entry.normalized_key),
            values: vec![entry.value.clone()],
            line: entry.line,
            cline: entry.cline,
        })
        .collect();
    Cluster {
        start_line: segment.start_line,
        end_line: segment.end_line,
        cstart: segment.cstart,
        cend: segment.cend,
        items,
    }
}

/// Merge match-clusters and header-clusters into one sequence ordered
/// by original start line.
#[must_use]
pub fn merge_clusters(body: Vec<Cluster>, headers: Vec<Cluster>) -> Vec<Cluster> {
    let mut all = body;
    all.extend(headers);
    all.sort_by_key(|c| c.start_line);
    all
}

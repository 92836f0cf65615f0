//! Parse pipeline entry points

use crate::cluster::{DEFAULT_MAX_GAP, cluster_matches, merge_clusters, segment_cluster};
use crate::headers::detect_headers;
use crate::matcher::match_lines;
use crate::normalize::visible_text;
use crate::patterns::Patterns;
use crate::select::select_clusters;
use crate::types::{EntityKind, MatchItem, ParseResult, Strategy};
use tracing::debug;

/// Parse a message body with the default gap and bottom-up strategy.
#[must_use]
pub fn parse(body: &str) -> ParseResult {
    parse_with(body, DEFAULT_MAX_GAP, Strategy::default())
}

/// Parse a decoded message body into entity clusters and, for the
/// bottom-up strategy, the newest-message body window.
///
/// The pipeline is pure and total: any input yields a `ParseResult`,
/// possibly with empty clusters and an empty window.
#[must_use]
pub fn parse_with(body: &str, max_gap: usize, strategy: Strategy) -> ParseResult {
    let patterns = Patterns::shared();
    let text = visible_text(body);
    let scan = detect_headers(&text);
    let mut matches = match_lines(&text);

    // Addresses inside From:/To: values join the EMAIL stream so they
    // are not missed when the line itself was consumed as a header.
    for entry in &scan.headers_list {
        let values: Vec<String> = patterns
            .email
            .find_iter(&entry.value)
            .map(|m| m.as_str().to_string())
            .collect();
        if !values.is_empty() {
            matches.emails.push(MatchItem {
                kind: EntityKind::Email,
                values,
                line: entry.line,
                cline: entry.cline,
            });
        }
    }

    let body_clusters = cluster_matches(matches.flatten(), max_gap);
    let header_clusters = scan.segments.iter().map(segment_cluster).collect();
    let clusters = merge_clusters(body_clusters, header_clusters);
    let result = select_clusters(clusters, &text, strategy);

    debug!(
        clusters = result.clusters.len(),
        strategy = %result.strategy,
        "parsed email body"
    );
    result
}

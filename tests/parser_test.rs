use reply_extract::{
    BodyWindow, ItemKind, Strategy, cluster_matches, match_lines, parse, parse_with,
};

const REPLY_BODY: &str = "Thanks for the update!\n\n\
     Von: Alice Adams <alice@example.com>\n\
     Gesendet: Montag, 3. M\u{e4}rz 2024 14:05\n\
     An: bob@example.com\n\n\
     Hallo Bob, hier die Unterlagen: https://example.com/docs";

#[test]
fn test_parse_is_deterministic() {
    assert_eq!(parse(REPLY_BODY), parse(REPLY_BODY));
}

#[test]
fn test_empty_input() {
    let result = parse("");

    assert!(result.clusters.is_empty());
    assert_eq!(result.strategy, Strategy::BottomUp);
    assert_eq!(result.body_window, Some(BodyWindow::default()));
}

#[test]
fn test_bottom_up_stops_at_header_cluster() {
    let result = parse(REPLY_BODY);

    // The quote-header cluster is the boundary; the content cluster
    // below it is kept, the thank-you line above is not selected.
    assert_eq!(result.clusters.len(), 2);
    assert!(result.clusters[0].has_header());
    assert!(!result.clusters[1].has_header());
    assert!(result.clusters[0].start_line <= result.clusters[1].start_line);
}

#[test]
fn test_bottom_up_body_window() {
    let result = parse(REPLY_BODY);
    let window = result.body_window.unwrap();

    // Window starts at the boundary header block and runs to the end
    assert_eq!(window.start_line, 3);
    assert_eq!(window.end_line, 7);
    assert!(window.text.starts_with("Von: Alice Adams"));
    assert!(window.text.ends_with("https://example.com/docs"));
    assert!(!window.text.contains("Thanks for the update"));
}

#[test]
fn test_top_down_returns_everything() {
    let result = parse_with(REPLY_BODY, 1, Strategy::TopDown);

    assert_eq!(result.strategy, Strategy::TopDown);
    assert!(result.body_window.is_none());
    assert_eq!(result.clusters.len(), 3);
    let starts: Vec<usize> = result.clusters.iter().map(|c| c.start_line).collect();
    assert_eq!(starts, vec![3, 3, 5]);
}

#[test]
fn test_header_round_trip() {
    let result = parse_with("Von: Max Mustermann <max@example.com>", 1, Strategy::TopDown);

    assert_eq!(result.clusters.len(), 2);

    let email_cluster = &result.clusters[0];
    assert!(
        email_cluster.items[0]
            .values
            .contains(&"max@example.com".to_string())
    );

    let header_cluster = &result.clusters[1];
    assert!(header_cluster.has_header());
    assert!(matches!(header_cluster.items[0].kind, ItemKind::Header(_)));
    assert!(header_cluster.items[0].values[0].contains("max@example.com"));
}

#[test]
fn test_no_header_consumes_whole_body() {
    let body = "Call me: Tel. 089 1234567\n\nMehr unter www.example.de/info";
    let result = parse(body);

    assert_eq!(result.clusters.len(), 1);
    assert!(!result.clusters[0].has_header());

    let window = result.body_window.unwrap();
    assert_eq!(window.start_line, 1);
    assert_eq!(window.end_line, 3);
    assert_eq!(window.text, body);
}

#[test]
fn test_header_only_body_keeps_header_lines() {
    let body = "Von: Alice <alice@example.com>\nGesendet: 03.06.2025";
    let result = parse(body);

    assert_eq!(result.clusters.len(), 1);
    assert!(result.clusters[0].has_header());

    let window = result.body_window.unwrap();
    assert_eq!(window.start_line, 1);
    assert_eq!(window.end_line, 2);
    assert!(window.text.starts_with("Von: Alice"));
}

#[test]
fn test_blank_lines_do_not_split_clusters() {
    let result = parse_with("a@b.com\n\n\n\nc@d.com", 1, Strategy::TopDown);
    assert_eq!(result.clusters.len(), 1);
}

#[test]
fn test_plain_text_between_matches_splits_clusters() {
    let body = "a@b.com\nplain line here\nanother plain line\nc@d.com";
    let result = parse_with(body, 1, Strategy::TopDown);

    assert_eq!(result.clusters.len(), 2);
    assert_eq!(result.clusters[0].start_line, 1);
    assert_eq!(result.clusters[1].start_line, 4);
}

#[test]
fn test_max_gap_zero_splits_adjacent_lines() {
    let result = parse_with("a@b.com\nc@d.com", 0, Strategy::TopDown);
    assert_eq!(result.clusters.len(), 2);
}

#[test]
fn test_cluster_contiguity_invariant() {
    let max_gap = 1;
    let flat = match_lines(REPLY_BODY).flatten();
    let clusters = cluster_matches(flat, max_gap);

    for cluster in &clusters {
        for pair in cluster.items.windows(2) {
            assert!(pair[1].cline - pair[0].cline <= max_gap);
        }
    }
    for pair in clusters.windows(2) {
        assert!(pair[1].cstart - pair[0].cend > max_gap);
    }
}

#[test]
fn test_result_serializes_to_json() {
    let value = serde_json::to_value(parse(REPLY_BODY)).unwrap();

    assert_eq!(value["strategy"], serde_json::json!("bottom-up"));
    assert!(value["body_window"]["text"].is_string());
    assert!(value["clusters"][0]["items"][0]["type"].is_string());

    let top_down = serde_json::to_value(parse_with(REPLY_BODY, 1, Strategy::TopDown)).unwrap();
    assert!(top_down.get("body_window").is_none());
}

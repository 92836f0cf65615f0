use reply_extract::visible_text;

#[test]
fn test_plain_text_passes_through() {
    let text = "Hello\nWorld 1 < 2";
    assert_eq!(visible_text(text), text);
}

#[test]
fn test_line_endings_canonicalized() {
    assert_eq!(visible_text("a\r\nb\rc"), "a\nb\nc");
}

#[test]
fn test_bracketed_email_unwrapped() {
    let text = visible_text("Von: Max <max@example.com>");
    assert_eq!(text, "Von: Max max@example.com");
}

#[test]
fn test_script_and_style_removed() {
    let html = "<html><script>var x = 1;</script>\
                <style>p { color: red }</style><p>Hello</p></html>";
    let text = visible_text(html);

    assert_eq!(text, "Hello");
    assert!(!text.contains("var x"));
    assert!(!text.contains("color"));
}

#[test]
fn test_anchor_href_dropped() {
    let html = r#"Check <a href="https://tracker.example.com/c?id=1">this link</a> now"#;
    let text = visible_text(html);

    assert_eq!(text, "Check this link now");
    assert!(!text.contains("tracker.example.com"));
}

#[test]
fn test_block_tags_become_line_breaks() {
    assert_eq!(visible_text("<div>one</div><div>two</div>"), "one\n\ntwo");
}

#[test]
fn test_br_becomes_line_break() {
    assert_eq!(visible_text("<p>one<br/>two</p>"), "one\ntwo");
}

#[test]
fn test_entities_decoded() {
    let text = visible_text("<p>M&uuml;ller &amp; S&ouml;hne &#8211; caf&eacute;</p>");
    assert_eq!(text, "M\u{fc}ller & S\u{f6}hne \u{2013} caf\u{e9}");
}

#[test]
fn test_nbsp_becomes_space() {
    assert_eq!(visible_text("<p>a\u{00A0}b</p>"), "a b");
}

#[test]
fn test_blank_runs_collapsed() {
    let text = visible_text("<div>a</div>\n\n\n\n<div>b</div>");
    assert_eq!(text, "a\n\nb");
}

#[test]
fn test_empty_input() {
    assert_eq!(visible_text(""), "");
}

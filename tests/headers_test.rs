use reply_extract::{HeaderKey, Patterns, detect_headers, normalize_date};

#[test]
fn test_german_header_line() {
    let scan = detect_headers("Von: Max Mustermann max@example.com");

    assert_eq!(scan.segments.len(), 1);
    let entry = &scan.segments[0].entries[0];
    assert_eq!(entry.key, "Von");
    assert_eq!(entry.normalized_key, HeaderKey::From);
    assert!(entry.value.contains("max@example.com"));
    assert_eq!(entry.line, 1);
}

#[test]
fn test_aliases_across_locales() {
    let cases = [
        ("From: alice@example.com", HeaderKey::From),
        ("Betreff: Angebot", HeaderKey::Subject),
        ("Objet: R\u{e9}union demain", HeaderKey::Subject),
        ("Para: equipo@empresa.es", HeaderKey::To),
        ("Cci: hidden@exemple.fr", HeaderKey::Bcc),
        ("Antwort an: chef@firma.de", HeaderKey::ReplyTo),
    ];
    for (line, expected) in cases {
        let scan = detect_headers(line);
        assert_eq!(scan.segments[0].entries[0].normalized_key, expected, "{line}");
    }
}

#[test]
fn test_alias_precedence_is_locked() {
    let patterns = Patterns::shared();

    // German claims "an" before any later locale could
    assert_eq!(patterns.canonical_key("an"), Some(HeaderKey::To));
    // French/Spanish "de" resolves to FROM
    assert_eq!(patterns.canonical_key("de"), Some(HeaderKey::From));
    // Unaccented French "à"
    assert_eq!(patterns.canonical_key("a"), Some(HeaderKey::To));
    assert_eq!(patterns.canonical_key("gesendet am"), Some(HeaderKey::Sent));
    // Case-insensitive
    assert_eq!(patterns.canonical_key("VON"), Some(HeaderKey::From));
    assert_eq!(patterns.canonical_key("nonsense"), None);
}

#[test]
fn test_continuation_lines_merged() {
    let scan = detect_headers("Von: Max Mustermann\n max@firma.de\nBetreff: Angebot");

    assert_eq!(scan.segments.len(), 1);
    let segment = &scan.segments[0];
    assert_eq!(segment.start_line, 1);
    assert_eq!(segment.end_line, 3);
    assert_eq!(segment.entries.len(), 2);
    assert_eq!(segment.entries[0].value, "Max Mustermann max@firma.de");
    assert_eq!(segment.keys, vec![HeaderKey::From, HeaderKey::Subject]);
}

#[test]
fn test_segments_split_by_plain_text() {
    let scan = detect_headers("Von: A\n\nHallo zusammen\n\nVon: B");

    assert_eq!(scan.segments.len(), 2);
    assert_eq!(scan.segments[0].headers["FROM"], "A");
    assert_eq!(scan.segments[1].headers["FROM"], "B");
    // Global view is last-wins
    assert_eq!(scan.headers["FROM"], "B");
    assert_eq!(scan.headers_list.len(), 2);
}

#[test]
fn test_segment_compact_span() {
    let scan = detect_headers("intro text\n\nVon: A\nAn: B");

    let segment = &scan.segments[0];
    assert_eq!(segment.start_line, 3);
    assert_eq!(segment.end_line, 4);
    assert_eq!(segment.cstart, 2);
    assert_eq!(segment.cend, 3);
}

#[test]
fn test_sent_date_normalized_german() {
    let scan = detect_headers("Gesendet: Montag, 3. M\u{e4}rz 2024 14:05");

    let headers = &scan.segments[0].headers;
    assert_eq!(headers["SENT_ISO"], "2024-03-03T14:05:00");
    assert_eq!(headers["SENT"], "Montag, 3. M\u{e4}rz 2024 14:05");
}

#[test]
fn test_date_shapes() {
    let cases = [
        ("2024-03-03 14:05:33", "2024-03-03T14:05:33"),
        ("2024-03-03", "2024-03-03T00:00:00"),
        ("03.06.2025", "2025-06-03T00:00:00"),
        ("12.3.2024 9:07", "2024-03-12T09:07:00"),
        ("March 3, 2024 14:05", "2024-03-03T14:05:00"),
        ("14 juillet 2024 09:30", "2024-07-14T09:30:00"),
        ("5 enero 2023", "2023-01-05T00:00:00"),
        ("Tuesday, 1 May 2018 08:15:30", "2018-05-01T08:15:30"),
    ];
    for (value, expected) in cases {
        assert_eq!(normalize_date(value).as_deref(), Some(expected), "{value}");
    }
}

#[test]
fn test_date_normalization_fails_silently() {
    assert_eq!(normalize_date("kommende Woche"), None);
    // Shape matches but it is not a real calendar date
    assert_eq!(normalize_date("45.13.2024"), None);

    let scan = detect_headers("Datum: irgendwann");
    let headers = &scan.segments[0].headers;
    assert!(headers.contains_key("DATE"));
    assert!(!headers.contains_key("DATE_ISO"));
}

#[test]
fn test_month_lookup_folds_diacritics() {
    let patterns = Patterns::shared();

    assert_eq!(patterns.month_number("M\u{e4}rz"), Some(3));
    assert_eq!(patterns.month_number("Mrz."), Some(3));
    assert_eq!(patterns.month_number("f\u{e9}vrier"), Some(2));
    assert_eq!(patterns.month_number("ao\u{fb}t"), Some(8));
    assert_eq!(patterns.month_number("aout"), Some(8));
    assert_eq!(patterns.month_number("Dic"), Some(12));
    assert_eq!(patterns.month_number("Kartoffel"), None);
}

#[test]
fn test_no_headers_in_plain_prose() {
    let scan = detect_headers("Hallo,\nwir sehen uns morgen.\nViele Gr\u{fc}\u{df}e");
    assert!(scan.segments.is_empty());
    assert!(scan.headers.is_empty());
}

//! Visible-text normalization for raw (possibly HTML) message bodies

use regex::Regex;
use std::sync::LazyLock;

// Detect *likely* HTML tags. Plain text containing "<" or ">" must not
// be rewritten, so a tag marker requires a letter, DOCTYPE or comment.
static TAG_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\s*(?:/?[A-Za-z]|!DOCTYPE|!--)").unwrap());

// Angle-bracketed addresses like <user@example.com> would otherwise be
// stripped as tags; unwrap them before any tag handling.
static BRACKETED_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<\s*([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})\s*>").unwrap()
});

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script.*?</script>").unwrap());

static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style.*?</style>").unwrap());

static LINE_BREAK_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

static BLOCK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?(?:p|div|li|tr|td|th|table|h[1-6])[^>]*>").unwrap());

// Keep anchor inner text only; href targets must not leak as content.
static ANCHOR_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<a[^>]*>(.*?)</a>").unwrap());

static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static NUMERIC_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(?:x([0-9a-fA-F]+)|([0-9]+));").unwrap());

static MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]{2,}").unwrap());

static MULTI_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Convert a raw message body into clean, line-structured plain text.
///
/// Input without tag-like markers is treated as already-plain text and
/// passes through with only line endings canonicalized. HTML input gets
/// best-effort tag stripping that preserves visual line structure;
/// malformed markup degrades gracefully and never fails.
#[must_use]
pub fn visible_text(raw: &str) -> String {
    if !TAG_MARKER.is_match(raw) {
        return raw.replace("\r\n", "\n").replace('\r', "\n");
    }
    let s = BRACKETED_EMAIL.replace_all(raw, "$1");
    let s = SCRIPT_BLOCK.replace_all(&s, " ");
    let s = STYLE_BLOCK.replace_all(&s, " ");
    let s = LINE_BREAK_TAG.replace_all(&s, "\n");
    let s = BLOCK_TAG.replace_all(&s, "\n");
    let s = ANCHOR_TAG.replace_all(&s, "$1");
    let s = ANY_TAG.replace_all(&s, " ");
    let s = decode_entities(&s);
    let s = s
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\u{00A0}', " ");
    let s = MULTI_SPACE.replace_all(&s, " ");
    let s = MULTI_NEWLINE.replace_all(&s, "\n\n");
    s.trim().to_string()
}

/// Decode numeric character references and the common named entities
/// seen in mail bodies (incl. the Latin-1 umlaut/accent set).
fn decode_entities(text: &str) -> String {
    let decoded = NUMERIC_ENTITY.replace_all(text, |caps: &regex::Captures<'_>| {
        let code = caps.get(1).map_or_else(
            || caps[2].parse::<u32>().ok(),
            |hex| u32::from_str_radix(hex.as_str(), 16).ok(),
        );
        code.and_then(char::from_u32)
            .map_or_else(|| caps[0].to_string(), String::from)
    });

    const NAMED: &[(&str, &str)] = &[
        ("&nbsp;", " "),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&apos;", "'"),
        ("&auml;", "ä"),
        ("&ouml;", "ö"),
        ("&uuml;", "ü"),
        ("&Auml;", "Ä"),
        ("&Ouml;", "Ö"),
        ("&Uuml;", "Ü"),
        ("&szlig;", "ß"),
        ("&eacute;", "é"),
        ("&egrave;", "è"),
        ("&agrave;", "à"),
        ("&ccedil;", "ç"),
        // Must stay last so "&amp;nbsp;" does not double-decode
        ("&amp;", "&"),
    ];

    let mut out = decoded.into_owned();
    for &(entity, replacement) in NAMED {
        if out.contains(entity) {
            out = out.replace(entity, replacement);
        }
    }
    out
}

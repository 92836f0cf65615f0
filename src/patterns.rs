//! Compiled pattern and locale tables shared by every parse stage
//!
//! All regexes and lookup maps are built once into an immutable
//! [`Patterns`] table behind a `LazyLock`, safe to share read-only
//! across concurrent parse calls.

use crate::types::HeaderKey;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Quoted-header aliases per locale. Locales are tried in a fixed
/// order (German, English, French, Spanish); the first locale to claim
/// a token wins and later locales never remap it.
const GERMAN_ALIASES: &[(&str, HeaderKey)] = &[
    ("von", HeaderKey::From),
    ("absender", HeaderKey::From),
    ("an", HeaderKey::To),
    ("kopie", HeaderKey::Cc),
    ("kopie an", HeaderKey::Cc),
    ("blindkopie", HeaderKey::Bcc),
    ("blindkopie an", HeaderKey::Bcc),
    ("betreff", HeaderKey::Subject),
    ("datum", HeaderKey::Date),
    ("gesendet", HeaderKey::Sent),
    ("gesendet am", HeaderKey::Sent),
    ("antwort an", HeaderKey::ReplyTo),
    ("absenderadresse", HeaderKey::Sender),
];

const ENGLISH_ALIASES: &[(&str, HeaderKey)] = &[
    ("from", HeaderKey::From),
    ("to", HeaderKey::To),
    ("cc", HeaderKey::Cc),
    ("bcc", HeaderKey::Bcc),
    ("subject", HeaderKey::Subject),
    ("date", HeaderKey::Date),
    ("sent", HeaderKey::Sent),
    ("reply-to", HeaderKey::ReplyTo),
    ("sender", HeaderKey::Sender),
];

const FRENCH_ALIASES: &[(&str, HeaderKey)] = &[
    ("de", HeaderKey::From),
    ("à", HeaderKey::To),
    ("a", HeaderKey::To),
    ("cc", HeaderKey::Cc),
    ("cci", HeaderKey::Bcc),
    ("objet", HeaderKey::Subject),
    ("date", HeaderKey::Date),
    ("envoyé", HeaderKey::Sent),
    ("envoye", HeaderKey::Sent),
    ("répondre à", HeaderKey::ReplyTo),
    ("repondre a", HeaderKey::ReplyTo),
    ("expéditeur", HeaderKey::Sender),
    ("expediteur", HeaderKey::Sender),
];

const SPANISH_ALIASES: &[(&str, HeaderKey)] = &[
    ("de", HeaderKey::From),
    ("para", HeaderKey::To),
    ("cc", HeaderKey::Cc),
    ("cco", HeaderKey::Bcc),
    ("asunto", HeaderKey::Subject),
    ("fecha", HeaderKey::Date),
    ("enviado", HeaderKey::Sent),
    ("responder a", HeaderKey::ReplyTo),
    ("remitente", HeaderKey::Sender),
];

/// Weekday name fragments (DE/EN, full and abbreviated).
const WEEKDAY_PATTERNS: &[&str] = &[
    "montag",
    "dienstag",
    "mittwoch",
    "donnerstag",
    "freitag",
    "samstag",
    "sonntag",
    r"mo\.?",
    r"di\.?",
    r"mi\.?",
    r"do\.?",
    r"fr\.?",
    r"sa\.?",
    r"so\.?",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
    r"mon\.?",
    r"tues?\.?",
    r"wed\.?",
    r"thu(?:rs?)?\.?",
    r"fri\.?",
    r"sat\.?",
    r"sun\.?",
];

/// Month name fragments (DE/EN, full and abbreviated; covers Jän/Mrz).
const MONTH_PATTERNS: &[&str] = &[
    "januar",
    "februar",
    "märz",
    "maerz",
    "april",
    "mai",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "dezember",
    r"j[aä]n\.?",
    r"feb\.?",
    r"mrz\.?",
    r"apr\.?",
    r"jun\.?",
    r"jul\.?",
    r"aug\.?",
    r"sept?\.?",
    r"okt\.?",
    r"nov\.?",
    r"dez\.?",
    "january",
    "february",
    "march",
    "june",
    "july",
    "october",
    "december",
    r"mar\.?",
    r"may\.?",
    r"oct\.?",
    r"dec\.?",
];

/// Month-name lookup across DE/EN/FR/ES, keyed by folded tokens
/// (lowercase, dots stripped, diacritics folded).
const MONTH_NUMBERS: &[(&str, u32)] = &[
    // English
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sep", 9),
    ("sept", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
    // German (märz folds to maerz, Jän to jaen)
    ("januar", 1),
    ("jaen", 1),
    ("februar", 2),
    ("maerz", 3),
    ("mrz", 3),
    ("mai", 5),
    ("juni", 6),
    ("juli", 7),
    ("oktober", 10),
    ("okt", 10),
    ("dezember", 12),
    ("dez", 12),
    // French
    ("janvier", 1),
    ("janv", 1),
    ("fevrier", 2),
    ("fevr", 2),
    ("mars", 3),
    ("avril", 4),
    ("avr", 4),
    ("juin", 6),
    ("juillet", 7),
    ("juil", 7),
    ("aout", 8),
    ("septembre", 9),
    ("octobre", 10),
    ("novembre", 11),
    ("decembre", 12),
    // Spanish
    ("enero", 1),
    ("ene", 1),
    ("febrero", 2),
    ("marzo", 3),
    ("abril", 4),
    ("abr", 4),
    ("mayo", 5),
    ("junio", 6),
    ("julio", 7),
    ("agosto", 8),
    ("ago", 8),
    ("septiembre", 9),
    ("setiembre", 9),
    ("octubre", 10),
    ("noviembre", 11),
    ("diciembre", 12),
    ("dic", 12),
];

static SHARED: LazyLock<Patterns> = LazyLock::new(Patterns::new);

/// Immutable pattern tables for one parser generation.
#[derive(Debug)]
pub struct Patterns {
    /// Local-part@domain with a 2+ letter TLD
    pub(crate) email: Regex,

    /// `http(s)://...` and `www....` forms
    pub(crate) urls: Vec<Regex>,

    /// Labeled or bare phone numbers with locale separators
    pub(crate) tel: Regex,

    /// Any weekday or month token (TEL suppression)
    pub(crate) calendar: Regex,

    /// Weekday tokens only (stripped from date values)
    pub(crate) weekday: Regex,

    /// `^\s*(alias)\s*:\s*(.*)$` over all known header aliases
    pub(crate) header_line: Regex,

    // Date value shapes, tried in order
    pub(crate) iso_date: Regex,
    pub(crate) dotted_date: Regex,
    pub(crate) day_month_year: Regex,
    pub(crate) month_day_year: Regex,

    aliases: HashMap<String, HeaderKey>,
    months: HashMap<&'static str, u32>,
}

impl Patterns {
    /// The process-wide shared table.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    fn new() -> Self {
        let aliases = build_aliases();

        // Longest alias first so "gesendet am" is not cut short by "gesendet"
        let mut tokens: Vec<&str> = aliases.keys().map(String::as_str).collect();
        tokens.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternation = tokens
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let header_line = Regex::new(&format!(r"(?i)^\s*({alternation})\s*:\s*(.*)$")).unwrap();

        let weekdays = WEEKDAY_PATTERNS.join("|");
        let months = MONTH_PATTERNS.join("|");
        let weekday = Regex::new(&format!(r"(?i)\b(?:{weekdays})\b")).unwrap();
        let calendar = Regex::new(&format!(r"(?i)\b(?:{weekdays}|{months})\b")).unwrap();

        Self {
            email: Regex::new(r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b").unwrap(),
            urls: vec![
                Regex::new(r"(?i)\bhttps?://[^\s)]+").unwrap(),
                Regex::new(r"(?i)\bwww\.[a-z0-9-]+(?:\.[a-z]{2,})+(?:/[^\s)]*)?").unwrap(),
            ],
            tel: Regex::new(
                r"(?i)(?:\b(?:tel\.?|telefon|phone|mob\.?|mobile|handy)\s*[:\-]?\s*)?(?:(?:\+|00)\d{1,3}\s*(?:\(\s*0\s*\)\s*)?)?(?:\(?0?\d{1,5}\)?[\s\x{00A0}\x{202F}\-\x{2013}./·]?)\d{2,4}(?:[\s\x{00A0}\x{202F}\-\x{2013}./·]?\d{2,4}){1,4}\b",
            )
            .unwrap(),
            calendar,
            weekday,
            header_line,
            iso_date: Regex::new(
                r"(\d{4})-(\d{2})-(\d{2})(?:[ T](\d{1,2}):(\d{2})(?::(\d{2}))?)?",
            )
            .unwrap(),
            dotted_date: Regex::new(
                r"(\d{1,2})\.(\d{1,2})\.(\d{4})(?:\s+(\d{1,2}):(\d{2})(?::(\d{2}))?)?",
            )
            .unwrap(),
            day_month_year: Regex::new(
                r"(\d{1,2})\.?\s+([\p{L}.]+)\s+(\d{4})(?:\s+(\d{1,2}):(\d{2})(?::(\d{2}))?)?",
            )
            .unwrap(),
            month_day_year: Regex::new(
                r"([\p{L}.]+)\s+(\d{1,2})\s+(\d{4})(?:\s+(\d{1,2}):(\d{2})(?::(\d{2}))?)?",
            )
            .unwrap(),
            aliases,
            months: MONTH_NUMBERS.iter().copied().collect(),
        }
    }

    /// Resolve a raw header token to its canonical key, case-insensitively.
    #[must_use]
    pub fn canonical_key(&self, token: &str) -> Option<HeaderKey> {
        self.aliases.get(&token.trim().to_lowercase()).copied()
    }

    /// Resolve a month name in any supported locale to its number.
    #[must_use]
    pub fn month_number(&self, token: &str) -> Option<u32> {
        self.months.get(fold_token(token).as_str()).copied()
    }
}

fn build_aliases() -> HashMap<String, HeaderKey> {
    let mut map = HashMap::new();
    for table in [
        GERMAN_ALIASES,
        ENGLISH_ALIASES,
        FRENCH_ALIASES,
        SPANISH_ALIASES,
    ] {
        for &(token, key) in table {
            map.entry(token.to_string()).or_insert(key);
        }
    }
    map
}

/// Lowercase a locale token, strip dots and fold diacritics so that
/// "März.", "Févr" and "marz" all hit the same map slot.
fn fold_token(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    for ch in token.trim().to_lowercase().chars() {
        match ch {
            '.' => {}
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'ß' => out.push_str("ss"),
            'é' | 'è' | 'ê' => out.push('e'),
            'á' | 'à' | 'â' => out.push('a'),
            'í' | 'î' => out.push('i'),
            'ó' | 'ô' => out.push('o'),
            'ú' | 'ù' | 'û' => out.push('u'),
            'ç' => out.push('c'),
            _ => out.push(ch),
        }
    }
    out
}

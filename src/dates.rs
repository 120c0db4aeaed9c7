//! Date normalization.
//!
//! Registries print dates in dozens of layouts. Every captured date is kept
//! verbatim in the `*_raw` field and converted, when possible, to the canonical
//! `YYYY-MM-DDTHH:MM:SS+00:00` form. Conversion never fails loudly: an
//! unrecognized layout yields `None` and the caller keeps only the raw value.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

pub use crate::model::CANONICAL_DATE_FORMAT;

/// Layouts tried by [`guess_and_convert`], most specific first.
pub const GUESS_FORMATS: &[&str] = &[
    // ISO variants
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d",
    "%Y.%m.%d %H:%M:%S",
    "%Y.%m.%d",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d",
    "%Y. %m. %d",
    "%Y-%b-%d",
    // Day first
    "%d-%b-%Y %H:%M:%S",
    "%d-%b-%Y",
    "%d-%B-%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y",
    // English month/weekday forms
    "%b %d %Y",
    "%B %d %Y",
    "%a %b %d %Y",
    "%a %b %d %H:%M:%S %Y",
    "%A %d %B %Y",
    "%A, %B %d, %Y",
    // Compact
    "%Y%m%d %H:%M:%S",
    "%Y%m%d",
];

static TRAILING_PARENTHESIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\([^)]*\)\s*$").expect("Invalid trailing parenthesis regex"));

static TRAILING_SERIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+#\d+\s*$").expect("Invalid trailing serial regex"));

// A zone abbreviation after a time component: "17:48:23 CLST", "10:00:00 UTC"
static TRAILING_ZONE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2}:\d{2}(?::\d{2}(?:\.\d+)?)?)\s+[A-Z]{2,5}$").expect("Invalid zone name regex")
});

/// Strip annotations that no layout can describe.
pub fn clean_date(raw: &str) -> String {
    let mut cleaned = raw.trim().to_string();
    cleaned = TRAILING_PARENTHESIS.replace(&cleaned, "").into_owned();
    cleaned = TRAILING_SERIAL.replace(&cleaned, "").into_owned();
    cleaned = TRAILING_ZONE_NAME.replace(&cleaned, "$1").into_owned();
    if let Some(stripped) = cleaned.strip_suffix('.') {
        cleaned = stripped.trim_end().to_string();
    }
    cleaned
}

// Values that name UTC themselves are never shifted by a registry offset
static EXPLICIT_UTC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:\bUTC|\bGMT|\dZ)\)?\s*$").expect("Invalid explicit UTC regex"));

fn utc_offset() -> FixedOffset {
    Utc.fix()
}

/// Parse `value` against one layout.
///
/// Zone-less timestamps are read as `local` time; bare dates stay calendar
/// dates at UTC midnight.
fn parse_with(value: &str, format: &str, local: FixedOffset) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_str(value, format) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
        let local = if format.ends_with('Z') { utc_offset() } else { local };
        return local
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, format) {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

fn local_for(raw: &str, local: FixedOffset) -> FixedOffset {
    if EXPLICIT_UTC.is_match(raw.trim()) {
        utc_offset()
    } else {
        local
    }
}

/// Parse a raw date with a known layout.
pub fn parse_date(raw: &str, input_format: &str) -> Option<DateTime<Utc>> {
    parse_date_in(raw, input_format, utc_offset())
}

/// Like [`parse_date`], reading zone-less timestamps in the registry's `local` offset.
pub fn parse_date_in(raw: &str, input_format: &str, local: FixedOffset) -> Option<DateTime<Utc>> {
    let cleaned = clean_date(raw);
    if cleaned.is_empty() {
        return None;
    }
    parse_with(&cleaned, input_format, local_for(raw, local))
}

/// Parse a raw date by trying RFC 3339 and then every layout in [`GUESS_FORMATS`].
pub fn guess_date(raw: &str) -> Option<DateTime<Utc>> {
    guess_date_in(raw, utc_offset())
}

pub fn guess_date_in(raw: &str, local: FixedOffset) -> Option<DateTime<Utc>> {
    let cleaned = clean_date(raw);
    if cleaned.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(&cleaned) {
        return Some(dt.with_timezone(&Utc));
    }
    let local = local_for(raw, local);
    GUESS_FORMATS
        .iter()
        .find_map(|format| parse_with(&cleaned, format, local))
}

/// Deterministic conversion when the registry's layout is known.
pub fn convert(raw: &str, input_format: &str, output_format: &str) -> Option<String> {
    parse_date(raw, input_format).map(|dt| dt.format(output_format).to_string())
}

/// Best-effort conversion over the guess catalog.
pub fn guess_and_convert(raw: &str, output_format: &str) -> Option<String> {
    guess_date(raw).map(|dt| dt.format(output_format).to_string())
}

/// Canonicalize a raw date, trying the registry's own layouts before guessing.
pub fn normalize(raw: &str, input_formats: &[&str]) -> Option<String> {
    normalize_in(raw, input_formats, 0)
}

/// Canonicalize a raw date printed in a registry-local zone `offset_secs` east of UTC.
pub fn normalize_in(raw: &str, input_formats: &[&str], offset_secs: i32) -> Option<String> {
    let local = FixedOffset::east_opt(offset_secs).unwrap_or_else(|| {
        warn!("Ignoring out of range UTC offset {}s", offset_secs);
        utc_offset()
    });
    let canonical = input_formats
        .iter()
        .find_map(|format| parse_date_in(raw, format, local))
        .or_else(|| guess_date_in(raw, local))
        .map(|dt| dt.format(CANONICAL_DATE_FORMAT).to_string());

    if canonical.is_none() {
        debug!("Failed to parse date: {}", raw);
    }
    canonical
}

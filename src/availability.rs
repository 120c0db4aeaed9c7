//! "Domain not found / available" detection shared by every parser.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::lines::{collapse_whitespace, is_comment_line, split_key_value};
use crate::model::{ParsedWhois, STATUS_NOT_FOUND};

/// Short verdicts that only count when they open a line or a field value.
///
/// `Not found` inside `Knot Foundation` or a registrant address must not
/// classify a registered domain.
pub const NOT_FOUND_PREFIXES: &[&str] = &[
    "no match for",
    "no match!!",
    "no matching record",
    "no matching entry",
    "no match found for",
    "no data found",
    "no data was found",
    "no entries found",
    "no object found",
    "no found",
    "not found",
    "domain not found",
    "status: available",
    "registration status: available",
    "not registered",
    "no such domain",
    "object does not exist",
];

/// Full sentences, matched on word boundaries anywhere in a line.
pub const NOT_FOUND_PHRASES: &[&str] = &[
    "the queried object does not exist",
    "no information available about domain name",
    "is available for registration",
    "has not been registered",
    "is not registered",
];

fn alternation(phrases: &[&str]) -> String {
    phrases
        .iter()
        .map(|phrase| regex::escape(phrase))
        .collect::<Vec<_>>()
        .join("|")
}

// A verdict must end at a non-word character or the end of the text
static PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(?:{})(?:$|\W)", alternation(NOT_FOUND_PREFIXES)))
        .expect("Invalid not found prefix regex")
});

static PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b(?:{})\b", alternation(NOT_FOUND_PHRASES)))
        .expect("Invalid not found phrase regex")
});

fn line_not_found(line: &str) -> bool {
    let line = collapse_whitespace(line.trim_start_matches(|c: char| {
        matches!(c, '%' | '#' | '>') || c.is_whitespace()
    }))
    .to_lowercase();
    if line.is_empty() {
        return false;
    }
    if PREFIX_RE.is_match(&line) || PHRASE_RE.is_match(&line) {
        return true;
    }
    split_key_value(&line).is_some_and(|(_, value)| PREFIX_RE.is_match(value))
}

/// Phrase test over an arbitrary text fragment, one line at a time.
pub fn whois_not_found(text: &str) -> bool {
    text.lines().any(line_not_found)
}

/// Decide whether a whole whois response means "domain not registered".
pub fn check_domain_availability(raw_text: &str) -> bool {
    if raw_text.trim().is_empty() {
        return false;
    }
    let available = whois_not_found(raw_text);
    if available {
        debug!("Response classified as not found");
    }
    available
}

/// Stamp the `not_found` marker: the record is reset and carries only that status.
pub fn set_domain_availability_status(record: &mut ParsedWhois, available: bool) {
    if available {
        *record = ParsedWhois {
            statuses: vec![STATUS_NOT_FOUND.to_string()],
            ..Default::default()
        };
    }
}

/// Value of the first non-comment `key: value` line whose key matches (case-insensitive).
pub fn found_by_key(key: &str, text: &str) -> Option<String> {
    text.lines()
        .filter(|line| !is_comment_line(line, &[]))
        .filter_map(split_key_value)
        .find(|(k, _)| k.eq_ignore_ascii_case(key.trim()))
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_patterns() {
        assert!(check_domain_availability("No match for \"EXAMPLE-NOPE.COM\"."));
        assert!(check_domain_availability("%% NOT FOUND"));
        assert!(check_domain_availability("No Data Found\n>>> Last update of WHOIS database <<<"));
        assert!(check_domain_availability("Domain Status: No Object Found"));
        assert!(check_domain_availability("Status:\t\tAVAILABLE"));
        assert!(check_domain_availability(
            "% Terms of use apply\n\nThe queried object does not exist: DOMAIN NOT FOUND\n"
        ));
    }

    #[test]
    fn test_registered_responses_are_not_available() {
        let registered = "Domain Name: EXAMPLE.COM\nRegistrar: Example Registrar, Inc.\nDomain Status: clientTransferProhibited";
        assert!(!check_domain_availability(registered));
        assert!(!check_domain_availability("Domain: example.be\nStatus:\tNOT AVAILABLE"));
    }

    #[test]
    fn test_verdicts_inside_field_values_are_ignored() {
        let raw = "Domain Name: ARDUINO.CC\nRegistrant Organization: Arduino Foundation\nAdmin Organization: Knot Foundation\nRegistrant Street: 1 Not Registered Lane";
        assert!(!check_domain_availability(raw));
        assert!(!whois_not_found("Registrant Name: Nobody Notfound"));
    }

    #[test]
    fn test_verdicts_open_lines_or_values() {
        assert!(whois_not_found("Foo\n  NOT FOUND\n"));
        assert!(whois_not_found(">>> No match!!"));
        assert!(whois_not_found("Domain Status: No Object Found"));
        assert!(whois_not_found("The domain example.test is available for registration."));
        assert!(whois_not_found("This domain name has not been registered."));
    }

    #[test]
    fn test_blank_input_is_not_available() {
        assert!(!check_domain_availability(""));
        assert!(!check_domain_availability("   \n\t\n"));
    }

    #[test]
    fn test_set_domain_availability_status() {
        let mut record = ParsedWhois {
            domain_name: "example.com".to_string(),
            name_servers: vec!["ns1.example.com".to_string()],
            ..Default::default()
        };
        set_domain_availability_status(&mut record, false);
        assert_eq!(record.domain_name, "example.com");

        set_domain_availability_status(&mut record, true);
        assert_eq!(record.statuses, vec![STATUS_NOT_FOUND.to_string()]);
        assert!(record.domain_name.is_empty());
        assert!(record.name_servers.is_empty());
    }

    #[test]
    fn test_found_by_key() {
        let text = "% comment: ignored\nDomain: example.de\nStatus: connect\nstatus: other";
        assert_eq!(found_by_key("status", text).as_deref(), Some("connect"));
        assert_eq!(found_by_key("Domain", text).as_deref(), Some("example.de"));
        assert_eq!(found_by_key("comment", text), None);
        assert_eq!(found_by_key("Nserver", text), None);
    }
}

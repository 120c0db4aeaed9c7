//! Line-level helpers shared by every parser.

/// Prefixes that mark a comment line in nearly every registry's output.
pub const COMMENT_PREFIXES: [&str; 3] = ["%", "#", ">>>"];

/// True if the trimmed line starts with a common comment prefix or one of `extra`.
pub fn is_comment_line(line: &str, extra: &[&str]) -> bool {
    let trimmed = line.trim_start();
    COMMENT_PREFIXES
        .iter()
        .chain(extra.iter())
        .any(|prefix| !prefix.is_empty() && trimmed.starts_with(prefix))
}

/// True for lines that start with whitespace (continuation/section content).
pub fn is_indented(line: &str) -> bool {
    line.starts_with(|c: char| c.is_whitespace())
}

/// Split `key: value` on the first colon.
///
/// Dot leaders in front of the colon (`Name..........: value`) belong to the
/// separator, not the key. Returns `None` when there is no separator or the key
/// is empty; an empty value is allowed.
pub fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim().trim_end_matches('.').trim_end();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

/// Split the bracketed form used by JPRS: `[Domain Name]   EXAMPLE.JP`.
pub fn split_bracket_key_value(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim_start().strip_prefix('[')?;
    let (key, value) = rest.split_once(']')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

/// Canonical lookup form of a raw key: lowercase, single spaces, no leading `*`.
pub fn normalize_key(key: &str) -> String {
    key.trim_start_matches(|c: char| c == '*' || c.is_whitespace())
        .trim_end_matches(|c: char| c == '.' || c.is_whitespace())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Remove a (case-insensitive) prefix from the trimmed line and trim the rest.
pub fn extract_field<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let trimmed = line.trim();
    let head = trimmed.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        trimmed.get(prefix.len()..).map(str::trim)
    } else {
        None
    }
}

/// Prefix test that ignores whitespace and case on both sides.
pub fn is_nameserver_line(line: &str, prefix: &str) -> bool {
    let mut line_chars = line
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase);
    prefix
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .all(|p| line_chars.next() == Some(p))
}

/// Reduce a name-server value to the bare host name.
///
/// Keeps the token up to the first whitespace, `(`, `[`, `|` or `,` and drops
/// trailing dots, so glue addresses and annotations never leak into the host.
pub fn clean_name_server(value: &str, lowercase: bool) -> Option<String> {
    let token = value
        .trim()
        .split(|c: char| c.is_whitespace() || matches!(c, '(' | '[' | '|' | ','))
        .next()?;
    let host = token.trim_end_matches('.');
    if host.is_empty() {
        return None;
    }
    Some(if lowercase {
        host.to_lowercase()
    } else {
        host.to_string()
    })
}

/// Collapse every run of whitespace into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_lines() {
        assert!(is_comment_line("% This is a comment", &[]));
        assert!(is_comment_line("   # indented comment", &[]));
        assert!(is_comment_line(">>> Last update of WHOIS database: 2021 <<<", &[]));
        assert!(is_comment_line("[ JPRS database provides information ]", &["[ "]));
        assert!(!is_comment_line("Domain Name: example.com", &[]));
        assert!(!is_comment_line("", &[]));
    }

    #[test]
    fn test_split_key_value() {
        assert_eq!(
            split_key_value("Domain Name: example.com"),
            Some(("Domain Name", "example.com"))
        );
        assert_eq!(
            split_key_value("  Registrar URL:   http://www.example.com  "),
            Some(("Registrar URL", "http://www.example.com"))
        );
        assert_eq!(split_key_value("Name Server:"), Some(("Name Server", "")));
        assert_eq!(split_key_value("no separator here"), None);
        assert_eq!(split_key_value(": orphan value"), None);
    }

    #[test]
    fn test_split_key_value_with_dot_leaders() {
        assert_eq!(
            split_key_value("Name................: Google LLC"),
            Some(("Name", "Google LLC"))
        );
        assert_eq!(
            split_key_value("created............: 30.6.2006 13:14:20"),
            Some(("created", "30.6.2006 13:14:20"))
        );
    }

    #[test]
    fn test_split_bracket_key_value() {
        assert_eq!(
            split_bracket_key_value("[Domain Name]                   GOOGLE.JP"),
            Some(("Domain Name", "GOOGLE.JP"))
        );
        assert_eq!(split_bracket_key_value("[Signing Key]"), Some(("Signing Key", "")));
        assert_eq!(split_bracket_key_value("Domain Name: x"), None);
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Registry  Expiry   Date"), "registry expiry date");
        assert_eq!(normalize_key("** Domain Name"), "domain name");
        assert_eq!(normalize_key("Created on......"), "created on");
    }

    #[test]
    fn test_extract_field() {
        assert_eq!(extract_field("  Registered on: 05-Nov-2019", "registered on:"), Some("05-Nov-2019"));
        assert_eq!(extract_field("Expiry date", "Registered on:"), None);
        assert_eq!(extract_field("Ré", "Rx"), None);
    }

    #[test]
    fn test_is_nameserver_line() {
        assert!(is_nameserver_line("nameservers:   ns1.example.pl.", "nameservers:"));
        assert!(is_nameserver_line("Name  Server : ns1", "name server:"));
        assert!(!is_nameserver_line("Nserver: ns1", "name server:"));
    }

    #[test]
    fn test_clean_name_server() {
        assert_eq!(
            clean_name_server("ddns0.bbc.co.uk           212.58.241.66", false),
            Some("ddns0.bbc.co.uk".to_string())
        );
        assert_eq!(
            clean_name_server("ns1.example.pt | IPv4: 10.0.0.1 and IPv6:", false),
            Some("ns1.example.pt".to_string())
        );
        assert_eq!(
            clean_name_server("ns2.example.com(192.0.2.2, 2001:db8::2)", false),
            Some("ns2.example.com".to_string())
        );
        assert_eq!(
            clean_name_server("NS1.HARVARD.EDU.", true),
            Some("ns1.harvard.edu".to_string())
        );
        assert_eq!(clean_name_server("   ", false), None);
        assert_eq!(clean_name_server(".", false), None);
    }
}

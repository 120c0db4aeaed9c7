//! # Whois Parser Library
//!
//! Turns free-form whois responses into one structured record, whatever
//! registry produced them.
//!
//! ## Features
//!
//! - One interpreter over declarative per-registry descriptors
//! - Dispatch by whois server, TLD or domain, with a generic fallback
//! - Uniform "domain not found" detection (`not_found` status)
//! - Canonical UTC dates with the raw value always preserved
//! - Key-mapped and NIC-handle based formats
//!
//! ## Quick Start
//!
//! ```rust
//! use whois_parser::Whois;
//!
//! let raw = "Domain Name: EXAMPLE.COM\nName Server: A.IANA-SERVERS.NET\n";
//! let whois = Whois::parse(raw, "whois.verisign-grs.com");
//!
//! assert_eq!(whois.parsed.domain_name, "EXAMPLE.COM");
//! assert_eq!(whois.available, Some(false));
//! println!("{}", whois.to_json().unwrap());
//! ```

pub mod availability;
pub mod config;
pub mod dates;
pub mod dispatch;
pub mod errors;
pub mod keymap;
pub mod lines;
pub mod model;
pub mod parser;
pub mod tld_mappings;
pub mod tlds;

// Re-export main types for easy access
pub use availability::{check_domain_availability, found_by_key, set_domain_availability_status, whois_not_found};
pub use config::Config;
pub use dispatch::{new_tld_domain_parser, parser_for_domain, Registry};
pub use errors::WhoisError;
pub use keymap::KeyPath;
pub use model::{Contact, Contacts, ParsedWhois, Registrar, Role, STATUS_NOT_FOUND};
pub use parser::Parser;

use serde::{Deserialize, Serialize};

/// Envelope handed to consumers: the parsed record plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Whois {
    pub parsed: ParsedWhois,
    pub whois_server: String,
    #[serde(rename = "rawtext")]
    pub raw_text: String,
    /// `Some(true)` when not registered, `Some(false)` when anything was extracted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl Whois {
    /// Dispatch on `whois_server` and parse `raw_text`.
    pub fn parse(raw_text: &str, whois_server: &str) -> Self {
        let parser = new_tld_domain_parser(whois_server);
        Self::with_parser(&parser, raw_text, whois_server)
    }

    /// Parse with an explicit parser.
    pub fn with_parser(parser: &Parser, raw_text: &str, whois_server: &str) -> Self {
        let parsed = parser.get_parsed_whois(raw_text);
        let available = if parsed.is_not_found() {
            Some(true)
        } else if !parsed.is_empty() {
            Some(false)
        } else {
            None
        };

        Self {
            parsed,
            whois_server: whois_server.to_string(),
            raw_text: raw_text.to_string(),
            available,
        }
    }

    pub fn to_json(&self) -> Result<String, WhoisError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_tri_state() {
        let registered = Whois::parse("Domain Name: EXAMPLE.COM\n", "whois.verisign-grs.com");
        assert_eq!(registered.available, Some(false));
        assert_eq!(registered.whois_server, "whois.verisign-grs.com");

        let free = Whois::parse("No match for \"NOPE.CO.UK\".", "whois.nic.uk");
        assert_eq!(free.available, Some(true));
        assert_eq!(free.parsed.statuses, vec![STATUS_NOT_FOUND]);

        let empty = Whois::parse("% nothing to see\n", "whois.nic.uk");
        assert_eq!(empty.available, None);
    }

    #[test]
    fn test_envelope_json() {
        let whois = Whois::parse("Domain Name: EXAMPLE.COM\n", "whois.verisign-grs.com");
        let value: serde_json::Value = serde_json::from_str(&whois.to_json().unwrap()).unwrap();

        assert_eq!(value["parsed"]["domain"], "EXAMPLE.COM");
        assert_eq!(value["rawtext"], "Domain Name: EXAMPLE.COM\n");
        assert_eq!(value["available"], false);
        assert!(value["parsed"].get("name_servers").is_none());

        let empty = Whois::parse("", "whois.nic.uk");
        let value: serde_json::Value = serde_json::from_str(&empty.to_json().unwrap()).unwrap();
        assert!(value.get("available").is_none());
    }
}

//! Per-registry parser descriptors.
//!
//! Every registry is described by a [`TldSpec`] value rather than a type of its
//! own: a key map, an optional stop list, the sections its output is split
//! into, NIC-handle conventions, date layouts, "not found" phrases and a few
//! post-pass hooks for the genuinely idiosyncratic bits. One interpreter
//! ([`crate::parser::Parser`]) runs all of them.

mod africa;
mod americas;
mod asia_pacific;
mod europe;
mod generic;

use crate::keymap::WhoisBuilder;
use crate::model::Role;

/// Post-pass routine: sees the (bounded) raw text and the collected values.
pub type Hook = fn(&str, &mut WhoisBuilder);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    /// `Key: value`, with optional dot leaders before the colon
    Colon,
    /// `[Key]   value`
    Bracket,
}

#[derive(Debug, Clone, Copy)]
pub enum SectionKind {
    /// Each content line is one value of the path (scalars keep the first line).
    Values(&'static str),
    /// Content lines are fields of one or more records.
    ///
    /// `targets` are `reg` or `c/<role>`; `keys` map raw keys to field names
    /// under each target; `bare` names the fields that successive lines without
    /// a key fill, the last one repeating when it is `street`.
    Record {
        targets: &'static [&'static str],
        keys: &'static [(&'static str, &'static str)],
        bare: &'static [&'static str],
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Header line text, matched case-insensitively with an optional trailing colon
    pub header: &'static str,
    pub kind: SectionKind,
}

impl Section {
    pub const fn values(header: &'static str, path: &'static str) -> Self {
        Self {
            header,
            kind: SectionKind::Values(path),
        }
    }

    pub const fn record(
        header: &'static str,
        targets: &'static [&'static str],
        keys: &'static [(&'static str, &'static str)],
        bare: &'static [&'static str],
    ) -> Self {
        Self {
            header,
            kind: SectionKind::Record { targets, keys, bare },
        }
    }
}

/// Conventions of registries that reference contacts by handle.
#[derive(Debug, Clone, Copy)]
pub struct NicHandleSpec {
    /// Domain-block keys that bind a role to a handle (`admin-c`, `holder-c`, ...)
    pub references: &'static [(&'static str, Role)],
    /// Keys that carry a contact block's own handle (`nic-hdl`, `contact`, ...)
    pub id_keys: &'static [&'static str],
    /// Contact-block keys -> contact field names
    pub fields: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone, Copy)]
pub enum Base {
    KeyMapped,
    NicHandle(NicHandleSpec),
}

#[derive(Debug, Clone, Copy)]
pub struct TldSpec {
    /// Whois server this descriptor answers to; also returned by `get_name`
    pub name: &'static str,
    /// Further whois server identifiers served by the same format
    pub aliases: &'static [&'static str],
    pub base: Base,
    /// Overrides merged over the default key map
    pub key_map: &'static [(&'static str, &'static str)],
    pub key_style: KeyStyle,
    pub comment_prefixes: &'static [&'static str],
    /// Parsing ends at the first line starting with one of these (case-insensitive)
    pub stop_prefixes: &'static [&'static str],
    /// Registry-specific "not registered" phrases, checked before the generic ones
    pub not_found: &'static [&'static str],
    /// Date layouts tried before the guess catalog
    pub date_formats: &'static [&'static str],
    pub sections: &'static [Section],
    /// Blank lines right after a section header do not close the section
    pub section_gap: bool,
    pub hooks: &'static [Hook],
    /// Keep name servers and statuses in response order
    pub keep_order: bool,
    pub lowercase_name_servers: bool,
    pub status_separator: Option<char>,
    pub max_name_servers: Option<usize>,
    /// Seconds east of UTC for timestamps printed without a zone
    pub utc_offset_secs: i32,
}

impl TldSpec {
    pub const BASE: TldSpec = TldSpec {
        name: crate::config::DEFAULT_PARSER,
        aliases: &[],
        base: Base::KeyMapped,
        key_map: &[],
        key_style: KeyStyle::Colon,
        comment_prefixes: &[],
        stop_prefixes: &[],
        not_found: &[],
        date_formats: &[],
        sections: &[],
        section_gap: false,
        hooks: &[],
        keep_order: false,
        lowercase_name_servers: false,
        status_separator: None,
        max_name_servers: None,
        utc_offset_secs: 0,
    };
}

/// Fallback descriptor for servers without a dedicated format.
pub static DEFAULT: &TldSpec = &generic::DEFAULT;

/// Every registered descriptor, the fallback included.
pub static ALL: &[&TldSpec] = &[
    &generic::DEFAULT,
    &generic::EDU,
    // Europe
    &europe::UK,
    &europe::DE,
    &europe::FR,
    &europe::IT,
    &europe::NL,
    &europe::BE,
    &europe::EU,
    &europe::AT,
    &europe::CZ,
    &europe::SK,
    &europe::PL,
    &europe::SE,
    &europe::NO,
    &europe::DK,
    &europe::FI,
    &europe::EE,
    &europe::LV,
    &europe::LU,
    &europe::IS,
    &europe::RO,
    &europe::SI,
    &europe::BG,
    &europe::RU,
    &europe::UA,
    &europe::PT,
    // Americas
    &americas::CA,
    &americas::MX,
    &americas::BR,
    &americas::CL,
    &americas::AR,
    &americas::CR,
    // Asia-Pacific
    &asia_pacific::JP,
    &asia_pacific::KR,
    &asia_pacific::CN,
    &asia_pacific::TW,
    &asia_pacific::TH,
    &asia_pacific::KZ,
    &asia_pacific::AU,
    &asia_pacific::NZ,
    &asia_pacific::TR,
    &asia_pacific::IL,
    &asia_pacific::IR,
    // Africa
    &africa::ML,
    &africa::TZ,
    &africa::TN,
    &africa::UG,
];

#[cfg(test)]
pub(crate) fn parse_with(spec: &'static TldSpec, raw: &str) -> crate::model::ParsedWhois {
    let config = std::sync::Arc::new(crate::config::Config::default());
    crate::parser::Parser::new(spec, config).get_parsed_whois(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{ContactField, KeyPath};
    use std::collections::HashSet;

    #[test]
    fn test_descriptor_names_are_unique() {
        let mut seen = HashSet::new();
        for spec in ALL {
            for id in std::iter::once(&spec.name).chain(spec.aliases.iter()) {
                assert!(seen.insert(id.to_lowercase()), "duplicate parser id {id}");
            }
        }
    }

    #[test]
    fn test_default_is_registered() {
        assert!(ALL.iter().any(|spec| spec.name == DEFAULT.name));
    }

    #[test]
    fn test_descriptor_paths_are_valid() {
        for spec in ALL {
            for (key, path) in spec.key_map {
                assert!(path.parse::<KeyPath>().is_ok(), "{}: {key} -> {path}", spec.name);
            }
            for section in spec.sections {
                match section.kind {
                    SectionKind::Values(path) => {
                        assert!(path.parse::<KeyPath>().is_ok(), "{}: {path}", spec.name)
                    }
                    SectionKind::Record { targets, keys, bare } => {
                        let fields = keys.iter().map(|(_, field)| field).chain(bare.iter());
                        for field in fields {
                            for target in targets {
                                let path = format!("{target}/{field}");
                                assert!(path.parse::<KeyPath>().is_ok(), "{}: {path}", spec.name);
                            }
                        }
                    }
                }
            }
            if let Base::NicHandle(nic) = &spec.base {
                assert!(!nic.id_keys.is_empty(), "{}: no id keys", spec.name);
                for (key, field) in nic.fields {
                    assert!(ContactField::from_name(field).is_some(), "{}: {key} -> {field}", spec.name);
                }
            }
        }
    }
}

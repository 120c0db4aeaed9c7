//! The descriptor interpreter: one parser engine for every registry format.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::availability::{check_domain_availability, set_domain_availability_status};
use crate::config::Config;
use crate::errors::WhoisError;
use crate::keymap::{set_contact_field, ContactField, FinishOptions, KeyMap, KeyPath, WhoisBuilder};
use crate::lines::{
    collapse_whitespace, is_comment_line, normalize_key, split_bracket_key_value, split_key_value,
};
use crate::model::{Contact, ParsedWhois, Role};
use crate::tlds::{Base, KeyStyle, NicHandleSpec, SectionKind, TldSpec};

/// Optional line-by-line record of parsing decisions.
#[derive(Debug, Default)]
struct Analysis {
    lines: Option<Vec<String>>,
}

impl Analysis {
    fn enabled() -> Self {
        Self {
            lines: Some(Vec::new()),
        }
    }

    fn note(&mut self, message: impl FnOnce() -> String) {
        if let Some(lines) = self.lines.as_mut() {
            lines.push(message());
        }
    }

    fn into_lines(self) -> Vec<String> {
        self.lines.unwrap_or_default()
    }
}

#[derive(Debug)]
enum CompiledKind {
    Values(KeyPath),
    Record {
        keys: HashMap<String, Vec<KeyPath>>,
        bare: Vec<Vec<KeyPath>>,
    },
}

#[derive(Debug)]
struct CompiledSection {
    header: String,
    kind: CompiledKind,
}

struct ActiveSection<'p> {
    section: &'p CompiledSection,
    content_lines: usize,
    bare_lines: usize,
}

#[derive(Debug)]
struct CompiledNic {
    references: HashMap<String, Role>,
    id_keys: Vec<String>,
    fields: HashMap<String, ContactField>,
}

/// Parse `<target>/<field>` for every target, logging malformed combinations.
fn target_paths(targets: &[&str], field: &str) -> Vec<KeyPath> {
    targets
        .iter()
        .filter_map(|target| match format!("{target}/{field}").parse::<KeyPath>() {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping section field: {}", e);
                None
            }
        })
        .collect()
}

fn compile_section(header: &str, kind: &SectionKind) -> Option<CompiledSection> {
    let kind = match kind {
        SectionKind::Values(path) => match path.parse::<KeyPath>() {
            Ok(path) => CompiledKind::Values(path),
            Err(e) => {
                warn!("Skipping section {:?}: {}", header, e);
                return None;
            }
        },
        SectionKind::Record { targets, keys, bare } => CompiledKind::Record {
            keys: keys
                .iter()
                .map(|(key, field)| (normalize_key(key), target_paths(targets, field)))
                .collect(),
            bare: bare.iter().map(|field| target_paths(targets, field)).collect(),
        },
    };
    Some(CompiledSection {
        header: header_key(header),
        kind,
    })
}

fn compile_nic(spec: &NicHandleSpec) -> CompiledNic {
    CompiledNic {
        references: spec
            .references
            .iter()
            .map(|(key, role)| (normalize_key(key), *role))
            .collect(),
        id_keys: spec.id_keys.iter().map(|key| normalize_key(key)).collect(),
        fields: spec
            .fields
            .iter()
            .filter_map(|(key, field)| match ContactField::from_name(field) {
                Some(field) => Some((normalize_key(key), field)),
                None => {
                    warn!("Skipping contact field {:?} -> {:?}", key, field);
                    None
                }
            })
            .collect(),
    }
}

/// Lookup form of a potential section header line.
fn header_key(line: &str) -> String {
    normalize_key(line.trim().trim_end_matches(':'))
}

fn is_street(paths: &[KeyPath]) -> bool {
    paths
        .iter()
        .all(|path| matches!(path, KeyPath::Contact(_, ContactField::Street)))
}

/// A whois response parser for one registry format.
///
/// Parsers hold no per-call state and may be shared freely between threads.
#[derive(Debug)]
pub struct Parser {
    spec: &'static TldSpec,
    keys: KeyMap,
    sections: Vec<CompiledSection>,
    nic: Option<CompiledNic>,
    config: Arc<Config>,
}

impl Parser {
    pub fn new(spec: &'static TldSpec, config: Arc<Config>) -> Self {
        let sections = spec
            .sections
            .iter()
            .filter_map(|section| compile_section(section.header, &section.kind))
            .collect();
        let nic = match &spec.base {
            Base::KeyMapped => None,
            Base::NicHandle(nic) => Some(compile_nic(nic)),
        };

        Self {
            spec,
            keys: KeyMap::with_defaults(spec.key_map),
            sections,
            nic,
            config,
        }
    }

    /// Identifier of the format, used for logging and dispatch.
    pub fn get_name(&self) -> &str {
        self.spec.name
    }

    pub fn spec(&self) -> &'static TldSpec {
        self.spec
    }

    /// Parse a raw response. Never fails; unrecognized content leaves slots empty.
    pub fn get_parsed_whois(&self, raw_text: &str) -> ParsedWhois {
        if self.config.collect_analysis {
            let (parsed, analysis) = self.analyze(raw_text);
            for line in analysis {
                debug!(parser = self.get_name(), "{}", line);
            }
            return parsed;
        }
        self.run(self.bounded(raw_text), &mut Analysis::default())
    }

    /// Parse raw bytes, replacing invalid UTF-8 sequences.
    pub fn parse_bytes(&self, raw: &[u8]) -> ParsedWhois {
        self.get_parsed_whois(&String::from_utf8_lossy(raw))
    }

    /// Like [`Parser::get_parsed_whois`] but rejects empty or oversized input.
    pub fn parse_strict(&self, raw_text: &str) -> Result<ParsedWhois, WhoisError> {
        if raw_text.len() > self.config.max_input_bytes {
            return Err(WhoisError::InputTooLarge {
                size: raw_text.len(),
                limit: self.config.max_input_bytes,
            });
        }
        let has_content = raw_text
            .lines()
            .any(|line| !line.trim().is_empty() && !self.is_comment(line));
        if !has_content {
            return Err(WhoisError::EmptyInput);
        }
        Ok(self.get_parsed_whois(raw_text))
    }

    /// Parse and report every decision the engine made along the way.
    pub fn analyze(&self, raw_text: &str) -> (ParsedWhois, Vec<String>) {
        let mut analysis = Analysis::enabled();
        analysis.note(|| format!("=== PARSER {} ===", self.get_name()));
        let parsed = self.run(self.bounded(raw_text), &mut analysis);
        (parsed, analysis.into_lines())
    }

    /// True when the response says the domain is not registered.
    ///
    /// Registry phrases are checked first, then the shared detector; text after
    /// the stop line (legal boilerplate) is not considered.
    pub fn is_not_found(&self, raw_text: &str) -> bool {
        let body = self.body(raw_text);
        if !self.spec.not_found.is_empty() {
            let normalized = collapse_whitespace(body).to_lowercase();
            if self
                .spec
                .not_found
                .iter()
                .any(|phrase| normalized.contains(&phrase.to_lowercase()))
            {
                return true;
            }
        }
        check_domain_availability(body)
    }

    /// The stop predicate: true for the first line of trailing boilerplate.
    pub fn stops_at(&self, line: &str) -> bool {
        let trimmed = line.trim_start();
        self.spec.stop_prefixes.iter().any(|prefix| {
            trimmed
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
    }

    fn is_comment(&self, line: &str) -> bool {
        is_comment_line(line, self.spec.comment_prefixes)
    }

    fn bounded<'a>(&self, raw_text: &'a str) -> &'a str {
        let limit = self.config.max_input_bytes;
        if raw_text.len() <= limit {
            return raw_text;
        }
        warn!(
            "Truncating {} byte response to {} bytes for parser {}",
            raw_text.len(),
            limit,
            self.get_name()
        );
        let mut end = limit;
        while !raw_text.is_char_boundary(end) {
            end -= 1;
        }
        &raw_text[..end]
    }

    /// Text up to (not including) the first stop line.
    fn body<'a>(&self, raw_text: &'a str) -> &'a str {
        let mut offset = 0;
        for line in raw_text.split_inclusive('\n') {
            if self.stops_at(line) {
                return &raw_text[..offset];
            }
            offset += line.len();
        }
        raw_text
    }

    fn run(&self, raw_text: &str, analysis: &mut Analysis) -> ParsedWhois {
        if self.is_not_found(raw_text) {
            analysis.note(|| "availability: not found".to_string());
            let mut parsed = ParsedWhois::default();
            set_domain_availability_status(&mut parsed, true);
            return parsed;
        }

        let mut builder = WhoisBuilder::default();
        match &self.nic {
            None => self.extract(raw_text, &mut builder, analysis),
            Some(nic) => self.extract_nic(raw_text, nic, &mut builder, analysis),
        }

        // Hooks never see the boilerplate after the stop line
        let body = self.body(raw_text);
        for hook in self.spec.hooks {
            hook(body, &mut builder);
        }

        builder.finish(&FinishOptions {
            date_formats: self.spec.date_formats,
            keep_order: self.spec.keep_order,
            lowercase_name_servers: self.spec.lowercase_name_servers,
            status_separator: self.spec.status_separator,
            max_name_servers: self.spec.max_name_servers,
            utc_offset_secs: self.spec.utc_offset_secs,
        })
    }

    fn split<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        match self.spec.key_style {
            KeyStyle::Colon => split_key_value(line),
            KeyStyle::Bracket => split_bracket_key_value(line),
        }
    }

    fn section_for(&self, line: &str) -> Option<&CompiledSection> {
        if self.sections.is_empty() {
            return None;
        }
        let key = header_key(line);
        if key.is_empty() {
            return None;
        }
        self.sections.iter().find(|section| section.header == key)
    }

    /// Route one `key: value` line through the key map.
    fn key_line(&self, line: &str, builder: &mut WhoisBuilder, analysis: &mut Analysis) {
        if let Some((key, value)) = self.split(line) {
            self.key_line_parts(key, value, builder, analysis);
        }
    }

    fn key_line_parts(&self, key: &str, value: &str, builder: &mut WhoisBuilder, analysis: &mut Analysis) {
        match self.keys.get(key) {
            Some(path) => {
                analysis.note(|| format!("{key:?} -> {path:?} = {value:?}"));
                builder.set(path, value);
            }
            None => {
                if self.config.trace_unmatched_keys {
                    trace!(parser = self.get_name(), "Ignoring key {:?}", key);
                }
                analysis.note(|| format!("{key:?} ignored"));
            }
        }
    }

    /// Single pass for key-mapped formats, with section handling.
    fn extract(&self, raw_text: &str, builder: &mut WhoisBuilder, analysis: &mut Analysis) {
        let mut active: Option<ActiveSection<'_>> = None;

        for line in raw_text.lines() {
            if self.stops_at(line) {
                analysis.note(|| format!("stop at {:?}", line.trim()));
                break;
            }
            if let Some(section) = self.section_for(line) {
                analysis.note(|| format!("section {:?}", section.header));
                active = Some(ActiveSection {
                    section,
                    content_lines: 0,
                    bare_lines: 0,
                });
                continue;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                let keep_open = self.spec.section_gap
                    && active.as_ref().is_some_and(|a| a.content_lines == 0);
                if !keep_open {
                    active = None;
                }
                continue;
            }
            if self.is_comment(line) {
                continue;
            }

            match active.as_mut() {
                Some(section) => {
                    self.section_line(section, trimmed, builder);
                    section.content_lines += 1;
                }
                None => self.key_line(line, builder, analysis),
            }
        }
    }

    fn section_line(&self, active: &mut ActiveSection<'_>, line: &str, builder: &mut WhoisBuilder) {
        match &active.section.kind {
            CompiledKind::Values(path) => builder.set(*path, line),
            CompiledKind::Record { keys, bare } => {
                if let Some((key, value)) = split_key_value(line) {
                    // Unknown keys are dropped rather than taken for address text
                    if let Some(paths) = keys.get(&normalize_key(key)) {
                        for path in paths {
                            builder.set(*path, value);
                        }
                    }
                    return;
                }
                let index = active.bare_lines;
                active.bare_lines += 1;
                let paths = match bare.get(index) {
                    Some(paths) => paths,
                    None => match bare.last() {
                        Some(last) if is_street(last) => last,
                        _ => return,
                    },
                };
                for path in paths {
                    builder.set(*path, line);
                }
            }
        }
    }

    /// Block pass for NIC-handle formats.
    ///
    /// Blocks are separated by blank lines (or by a second handle line). A block
    /// carrying a handle key defines a contact; every other block feeds the key
    /// map and may bind roles to handles.
    fn extract_nic(
        &self,
        raw_text: &str,
        nic: &CompiledNic,
        builder: &mut WhoisBuilder,
        analysis: &mut Analysis,
    ) {
        let mut pass = NicPass::default();

        for line in raw_text.lines() {
            let stop = self.stops_at(line);
            if stop || line.trim().is_empty() {
                self.flush_block(&mut pass, nic, builder, analysis);
                if stop {
                    analysis.note(|| format!("stop at {:?}", line.trim()));
                    break;
                }
                continue;
            }
            if self.is_comment(line) {
                continue;
            }
            let Some((key, value)) = self.split(line) else {
                continue;
            };
            if nic.id_keys.contains(&normalize_key(key)) {
                if pass.block_id.is_some() {
                    self.flush_block(&mut pass, nic, builder, analysis);
                }
                pass.block_id = Some(value.to_string());
            }
            pass.block.push((key, value));
        }
        self.flush_block(&mut pass, nic, builder, analysis);

        for (role, handle) in pass.references {
            let contact = builder.contact_mut(role);
            set_contact_field(contact, ContactField::Id, &handle);
            if let Some(definition) = pass
                .definitions
                .iter()
                .find(|d| d.id.eq_ignore_ascii_case(&handle))
            {
                analysis.note(|| format!("{} bound to {}", role.as_str(), handle));
                merge_contact(contact, definition);
            }
        }
    }

    fn flush_block<'a>(
        &self,
        pass: &mut NicPass<'a>,
        nic: &CompiledNic,
        builder: &mut WhoisBuilder,
        analysis: &mut Analysis,
    ) {
        let block = std::mem::take(&mut pass.block);
        let block_id = pass.block_id.take();
        if block.is_empty() {
            return;
        }

        match block_id {
            Some(id) if !id.is_empty() => {
                // An id defined twice keeps its first definition
                if pass.definitions.iter().any(|d| d.id.eq_ignore_ascii_case(&id)) {
                    return;
                }
                let mut contact = Contact {
                    id,
                    ..Default::default()
                };
                for (key, value) in block {
                    if let Some(field) = nic.fields.get(&normalize_key(key)) {
                        set_contact_field(&mut contact, *field, value);
                    }
                }
                analysis.note(|| format!("contact definition {}", contact.id));
                pass.definitions.push(contact);
            }
            _ => {
                for (key, value) in block {
                    if let Some(role) = nic.references.get(&normalize_key(key)) {
                        let value = value.trim();
                        if !value.is_empty() && !pass.references.iter().any(|(r, _)| r == role) {
                            analysis.note(|| format!("{} references {}", role.as_str(), value));
                            pass.references.push((*role, value.to_string()));
                        }
                        continue;
                    }
                    self.key_line_parts(key, value, builder, analysis);
                }
            }
        }
    }
}

/// Working state of one NIC-handle pass.
#[derive(Default)]
struct NicPass<'a> {
    references: Vec<(Role, String)>,
    definitions: Vec<Contact>,
    block: Vec<(&'a str, &'a str)>,
    block_id: Option<String>,
}

/// Copy a definition's fields into a role slot without overwriting what it holds.
fn merge_contact(target: &mut Contact, definition: &Contact) {
    let pairs = [
        (ContactField::Name, &definition.name),
        (ContactField::Email, &definition.email),
        (ContactField::Organization, &definition.organization),
        (ContactField::Country, &definition.country),
        (ContactField::City, &definition.city),
        (ContactField::State, &definition.state),
        (ContactField::Postal, &definition.postal),
        (ContactField::Phone, &definition.phone),
        (ContactField::PhoneExt, &definition.phone_ext),
        (ContactField::Fax, &definition.fax),
        (ContactField::FaxExt, &definition.fax_ext),
    ];
    for (field, value) in pairs {
        set_contact_field(target, field, value);
    }
    if target.street.is_empty() {
        target.street = definition.street.clone();
    }
}

//! Key maps and the typed record builder.
//!
//! A key map routes a raw response key (`Registrant Email`, `nserver`, ...) to a
//! [`KeyPath`] in the output tree. Paths are written in a small sublanguage:
//!
//! - `domain`, `dnssec`, `created_date`, `updated_date`, `expired_date`
//! - `name_servers`, `statuses` (appended)
//! - `reg/<field>` for registrar fields
//! - `c/<registrant|admin|tech|billing>/<field>` for contact fields
//!
//! Paths are parsed once into typed values, so a misspelled path is caught when
//! the parser is built rather than silently dropping data at parse time.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use tracing::warn;

use crate::dates;
use crate::errors::WhoisError;
use crate::lines::{clean_name_server, normalize_key};
use crate::model::{Contact, Contacts, ParsedWhois, Registrar, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrarField {
    IanaId,
    Name,
    AbuseContactEmail,
    AbuseContactPhone,
    WhoisServer,
    Url,
}

impl RegistrarField {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "iana_id" => Self::IanaId,
            "name" => Self::Name,
            "abuse_contact_email" => Self::AbuseContactEmail,
            "abuse_contact_phone" => Self::AbuseContactPhone,
            "whois_server" => Self::WhoisServer,
            "url" => Self::Url,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Id,
    Name,
    Email,
    Organization,
    Country,
    City,
    State,
    Postal,
    Phone,
    PhoneExt,
    Fax,
    FaxExt,
    Street,
}

impl ContactField {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "id" => Self::Id,
            "name" => Self::Name,
            "email" => Self::Email,
            "organization" => Self::Organization,
            "country" => Self::Country,
            "city" => Self::City,
            "state" => Self::State,
            "postal" => Self::Postal,
            "phone" => Self::Phone,
            "phone_ext" => Self::PhoneExt,
            "fax" => Self::Fax,
            "fax_ext" => Self::FaxExt,
            "street" => Self::Street,
            _ => return None,
        })
    }
}

/// A typed destination in the output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPath {
    Domain,
    Dnssec,
    CreatedDate,
    UpdatedDate,
    ExpiredDate,
    NameServers,
    Statuses,
    Registrar(RegistrarField),
    Contact(Role, ContactField),
}

impl FromStr for KeyPath {
    type Err = WhoisError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let invalid = || WhoisError::InvalidKeyPath(path.to_string());
        let parts: Vec<&str> = path.trim().split('/').collect();

        match parts.as_slice() {
            ["domain"] => Ok(Self::Domain),
            ["dnssec"] => Ok(Self::Dnssec),
            ["created_date"] => Ok(Self::CreatedDate),
            ["updated_date"] => Ok(Self::UpdatedDate),
            ["expired_date"] => Ok(Self::ExpiredDate),
            ["name_servers"] => Ok(Self::NameServers),
            ["statuses"] => Ok(Self::Statuses),
            ["reg", field] => RegistrarField::from_name(field)
                .map(Self::Registrar)
                .ok_or_else(invalid),
            ["c", role, field] => {
                let role = Role::from_name(role).ok_or_else(invalid)?;
                let field = ContactField::from_name(field).ok_or_else(invalid)?;
                Ok(Self::Contact(role, field))
            }
            _ => Err(invalid()),
        }
    }
}

/// Keys shared by ICANN-format thick whois output and most ccTLD registries.
pub const DEFAULT_KEY_MAP: &[(&str, &str)] = &[
    ("Domain Name", "domain"),
    ("Domain", "domain"),
    ("DNSSEC", "dnssec"),
    ("Creation Date", "created_date"),
    ("Created Date", "created_date"),
    ("Created On", "created_date"),
    ("Registration Date", "created_date"),
    ("Updated Date", "updated_date"),
    ("Last Updated On", "updated_date"),
    ("Last Modified", "updated_date"),
    ("Registry Expiry Date", "expired_date"),
    ("Registrar Registration Expiration Date", "expired_date"),
    ("Expiration Date", "expired_date"),
    ("Expiry Date", "expired_date"),
    ("Name Server", "name_servers"),
    ("Nameserver", "name_servers"),
    ("nserver", "name_servers"),
    ("Domain Status", "statuses"),
    ("Status", "statuses"),
    ("Registrar", "reg/name"),
    ("Sponsoring Registrar", "reg/name"),
    ("Registrar IANA ID", "reg/iana_id"),
    ("Registrar WHOIS Server", "reg/whois_server"),
    ("Registrar URL", "reg/url"),
    ("Registrar Abuse Contact Email", "reg/abuse_contact_email"),
    ("Registrar Abuse Contact Phone", "reg/abuse_contact_phone"),
    ("Registry Registrant ID", "c/registrant/id"),
    ("Registrant Name", "c/registrant/name"),
    ("Registrant Organization", "c/registrant/organization"),
    ("Registrant Street", "c/registrant/street"),
    ("Registrant City", "c/registrant/city"),
    ("Registrant State/Province", "c/registrant/state"),
    ("Registrant Postal Code", "c/registrant/postal"),
    ("Registrant Country", "c/registrant/country"),
    ("Registrant Phone", "c/registrant/phone"),
    ("Registrant Phone Ext", "c/registrant/phone_ext"),
    ("Registrant Fax", "c/registrant/fax"),
    ("Registrant Fax Ext", "c/registrant/fax_ext"),
    ("Registrant Email", "c/registrant/email"),
    ("Registry Admin ID", "c/admin/id"),
    ("Admin Name", "c/admin/name"),
    ("Admin Organization", "c/admin/organization"),
    ("Admin Street", "c/admin/street"),
    ("Admin City", "c/admin/city"),
    ("Admin State/Province", "c/admin/state"),
    ("Admin Postal Code", "c/admin/postal"),
    ("Admin Country", "c/admin/country"),
    ("Admin Phone", "c/admin/phone"),
    ("Admin Phone Ext", "c/admin/phone_ext"),
    ("Admin Fax", "c/admin/fax"),
    ("Admin Fax Ext", "c/admin/fax_ext"),
    ("Admin Email", "c/admin/email"),
    ("Registry Tech ID", "c/tech/id"),
    ("Tech Name", "c/tech/name"),
    ("Tech Organization", "c/tech/organization"),
    ("Tech Street", "c/tech/street"),
    ("Tech City", "c/tech/city"),
    ("Tech State/Province", "c/tech/state"),
    ("Tech Postal Code", "c/tech/postal"),
    ("Tech Country", "c/tech/country"),
    ("Tech Phone", "c/tech/phone"),
    ("Tech Phone Ext", "c/tech/phone_ext"),
    ("Tech Fax", "c/tech/fax"),
    ("Tech Fax Ext", "c/tech/fax_ext"),
    ("Tech Email", "c/tech/email"),
    ("Registry Billing ID", "c/billing/id"),
    ("Billing Name", "c/billing/name"),
    ("Billing Organization", "c/billing/organization"),
    ("Billing Street", "c/billing/street"),
    ("Billing City", "c/billing/city"),
    ("Billing State/Province", "c/billing/state"),
    ("Billing Postal Code", "c/billing/postal"),
    ("Billing Country", "c/billing/country"),
    ("Billing Phone", "c/billing/phone"),
    ("Billing Phone Ext", "c/billing/phone_ext"),
    ("Billing Fax", "c/billing/fax"),
    ("Billing Fax Ext", "c/billing/fax_ext"),
    ("Billing Email", "c/billing/email"),
];

/// Compiled key map: normalized raw key -> typed path.
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    entries: HashMap<String, KeyPath>,
}

impl KeyMap {
    /// Merge raw maps left to right; later maps override earlier keys.
    ///
    /// Malformed paths are logged and skipped.
    pub fn compile(maps: &[&[(&str, &str)]]) -> Self {
        let mut entries = HashMap::new();
        for map in maps {
            for (key, path) in map.iter() {
                match path.parse::<KeyPath>() {
                    Ok(path) => {
                        entries.insert(normalize_key(key), path);
                    }
                    Err(e) => warn!("Skipping key map entry {:?}: {}", key, e),
                }
            }
        }
        Self { entries }
    }

    /// The default map overlaid with `overrides`.
    pub fn with_defaults(overrides: &[(&str, &str)]) -> Self {
        Self::compile(&[DEFAULT_KEY_MAP, overrides])
    }

    pub fn get(&self, raw_key: &str) -> Option<KeyPath> {
        self.entries.get(&normalize_key(raw_key)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Options that shape how collected values are canonicalized.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinishOptions<'a> {
    pub date_formats: &'a [&'a str],
    pub keep_order: bool,
    pub lowercase_name_servers: bool,
    pub status_separator: Option<char>,
    pub max_name_servers: Option<usize>,
    pub utc_offset_secs: i32,
}

/// Typed accumulator filled during the line pass and materialized once at the end.
#[derive(Debug, Clone, Default)]
pub struct WhoisBuilder {
    pub domain: Option<String>,
    pub dnssec: Option<String>,
    pub created_raw: Option<String>,
    pub updated_raw: Option<String>,
    pub expired_raw: Option<String>,
    pub name_servers: Vec<String>,
    pub statuses: Vec<String>,
    pub registrar: Registrar,
    pub contacts: [Contact; 4],
}

fn set_once(slot: &mut Option<String>, value: &str) {
    if slot.is_none() && !value.is_empty() {
        *slot = Some(value.to_string());
    }
}

fn set_string_once(slot: &mut String, value: &str) {
    if slot.is_empty() {
        *slot = value.to_string();
    }
}

fn role_index(role: Role) -> usize {
    match role {
        Role::Registrant => 0,
        Role::Admin => 1,
        Role::Tech => 2,
        Role::Billing => 3,
    }
}

impl WhoisBuilder {
    pub fn contact(&self, role: Role) -> &Contact {
        &self.contacts[role_index(role)]
    }

    pub fn contact_mut(&mut self, role: Role) -> &mut Contact {
        &mut self.contacts[role_index(role)]
    }

    /// Route a value to its path: scalars keep the first value, lists append.
    pub fn set(&mut self, path: KeyPath, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        match path {
            KeyPath::Domain => set_once(&mut self.domain, value),
            KeyPath::Dnssec => set_once(&mut self.dnssec, value),
            KeyPath::CreatedDate => set_once(&mut self.created_raw, value),
            KeyPath::UpdatedDate => set_once(&mut self.updated_raw, value),
            KeyPath::ExpiredDate => set_once(&mut self.expired_raw, value),
            KeyPath::NameServers => self.name_servers.push(value.to_string()),
            KeyPath::Statuses => self.statuses.push(value.to_string()),
            KeyPath::Registrar(field) => {
                let registrar = &mut self.registrar;
                let slot = match field {
                    RegistrarField::IanaId => &mut registrar.iana_id,
                    RegistrarField::Name => &mut registrar.name,
                    RegistrarField::AbuseContactEmail => &mut registrar.abuse_contact_email,
                    RegistrarField::AbuseContactPhone => &mut registrar.abuse_contact_phone,
                    RegistrarField::WhoisServer => &mut registrar.whois_server,
                    RegistrarField::Url => &mut registrar.url,
                };
                set_string_once(slot, value);
            }
            KeyPath::Contact(role, field) => set_contact_field(self.contact_mut(role), field, value),
        }
    }

    /// Overwrite a scalar regardless of what the line pass collected.
    pub fn replace(&mut self, path: KeyPath, value: &str) {
        match path {
            KeyPath::Domain => self.domain = None,
            KeyPath::Dnssec => self.dnssec = None,
            KeyPath::CreatedDate => self.created_raw = None,
            KeyPath::UpdatedDate => self.updated_raw = None,
            KeyPath::ExpiredDate => self.expired_raw = None,
            KeyPath::NameServers => self.name_servers.clear(),
            KeyPath::Statuses => self.statuses.clear(),
            KeyPath::Registrar(field) => {
                let registrar = &mut self.registrar;
                match field {
                    RegistrarField::IanaId => registrar.iana_id.clear(),
                    RegistrarField::Name => registrar.name.clear(),
                    RegistrarField::AbuseContactEmail => registrar.abuse_contact_email.clear(),
                    RegistrarField::AbuseContactPhone => registrar.abuse_contact_phone.clear(),
                    RegistrarField::WhoisServer => registrar.whois_server.clear(),
                    RegistrarField::Url => registrar.url.clear(),
                }
            }
            KeyPath::Contact(role, field) => clear_contact_field(self.contact_mut(role), field),
        }
        self.set(path, value);
    }

    /// Materialize the output record.
    pub fn finish(self, options: &FinishOptions<'_>) -> ParsedWhois {
        // Host names compare case-insensitively; the first spelling wins
        let mut name_servers: Vec<String> = Vec::new();
        let mut seen_hosts = HashSet::new();
        for value in &self.name_servers {
            if let Some(host) = clean_name_server(value, options.lowercase_name_servers) {
                if seen_hosts.insert(host.to_ascii_lowercase()) {
                    name_servers.push(host);
                }
            }
        }
        if let Some(max) = options.max_name_servers {
            name_servers.truncate(max);
        }

        let mut statuses: Vec<String> = Vec::new();
        for value in &self.statuses {
            let parts: Vec<&str> = match options.status_separator {
                Some(sep) => value.split(sep).collect(),
                None => vec![value.as_str()],
            };
            for part in parts {
                let status = clean_status(part);
                if !status.is_empty() && !statuses.contains(&status) {
                    statuses.push(status);
                }
            }
        }

        if !options.keep_order {
            name_servers.sort();
            statuses.sort();
        }

        let (created_date, created_date_raw) = finish_date(self.created_raw, options);
        let (updated_date, updated_date_raw) = finish_date(self.updated_raw, options);
        let (expired_date, expired_date_raw) = finish_date(self.expired_raw, options);

        let mut contacts = Contacts::default();
        for (role, contact) in Role::ALL.into_iter().zip(self.contacts) {
            if !contact.is_empty() {
                *contacts.slot_mut(role) = Some(contact);
            }
        }

        ParsedWhois {
            domain_name: self.domain.unwrap_or_default(),
            registrar: (!self.registrar.is_empty()).then_some(self.registrar),
            name_servers,
            created_date,
            created_date_raw,
            updated_date,
            updated_date_raw,
            expired_date,
            expired_date_raw,
            statuses,
            dnssec: self.dnssec.unwrap_or_default(),
            contacts: (!contacts.is_empty()).then_some(contacts),
        }
    }
}

fn contact_slot(contact: &mut Contact, field: ContactField) -> Option<&mut String> {
    Some(match field {
        ContactField::Id => &mut contact.id,
        ContactField::Name => &mut contact.name,
        ContactField::Email => &mut contact.email,
        ContactField::Organization => &mut contact.organization,
        ContactField::Country => &mut contact.country,
        ContactField::City => &mut contact.city,
        ContactField::State => &mut contact.state,
        ContactField::Postal => &mut contact.postal,
        ContactField::Phone => &mut contact.phone,
        ContactField::PhoneExt => &mut contact.phone_ext,
        ContactField::Fax => &mut contact.fax,
        ContactField::FaxExt => &mut contact.fax_ext,
        ContactField::Street => return None,
    })
}

/// Street lines accumulate in order; every other contact field keeps its first value.
pub fn set_contact_field(contact: &mut Contact, field: ContactField, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    match contact_slot(contact, field) {
        Some(slot) => set_string_once(slot, value),
        None => contact.street.push(value.to_string()),
    }
}

fn clear_contact_field(contact: &mut Contact, field: ContactField) {
    match contact_slot(contact, field) {
        Some(slot) => slot.clear(),
        None => contact.street.clear(),
    }
}

/// Trim a status token and cut an EPP reference URL (`ok https://icann.org/epp#ok`).
fn clean_status(value: &str) -> String {
    let value = value.trim();
    let value = match value.find(" http") {
        Some(pos) => &value[..pos],
        None => value,
    };
    value.trim().to_string()
}

fn finish_date(raw: Option<String>, options: &FinishOptions<'_>) -> (String, String) {
    match raw {
        Some(raw) => {
            let canonical = dates::normalize_in(&raw, options.date_formats, options.utc_offset_secs)
                .unwrap_or_default();
            (canonical, raw)
        }
        None => (String::new(), String::new()),
    }
}

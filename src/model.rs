//! Normalized record types produced by every parser.

use serde::{Deserialize, Serialize};

/// Reserved status token meaning "domain is not registered / available".
pub const STATUS_NOT_FOUND: &str = "not_found";

/// Canonical timestamp layout used for every `*_date` field.
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S+00:00";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedWhois {
    #[serde(rename = "domain", default, skip_serializing_if = "String::is_empty")]
    pub domain_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrar: Option<Registrar>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name_servers: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_date_raw: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub updated_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub updated_date_raw: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub expired_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub expired_date_raw: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dnssec: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Contacts>,
}

impl ParsedWhois {
    /// True when nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        *self == ParsedWhois::default()
    }

    /// True when the record carries the reserved `not_found` status.
    pub fn is_not_found(&self) -> bool {
        self.statuses.iter().any(|s| s == STATUS_NOT_FOUND)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registrar {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub iana_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub abuse_contact_email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub abuse_contact_phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub whois_server: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl Registrar {
    pub fn is_empty(&self) -> bool {
        *self == Registrar::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub organization: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postal: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone_ext: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fax: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fax_ext: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub street: Vec<String>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        *self == Contact::default()
    }
}

/// The four standard contact roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Registrant,
    Admin,
    Tech,
    Billing,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Registrant, Role::Admin, Role::Tech, Role::Billing];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Registrant => "registrant",
            Role::Admin => "admin",
            Role::Tech => "tech",
            Role::Billing => "billing",
        }
    }

    pub fn from_name(name: &str) -> Option<Role> {
        match name {
            "registrant" => Some(Role::Registrant),
            "admin" => Some(Role::Admin),
            "tech" => Some(Role::Tech),
            "billing" => Some(Role::Billing),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrant: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<Contact>,
}

impl Contacts {
    pub fn get(&self, role: Role) -> Option<&Contact> {
        match role {
            Role::Registrant => self.registrant.as_ref(),
            Role::Admin => self.admin.as_ref(),
            Role::Tech => self.tech.as_ref(),
            Role::Billing => self.billing.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, role: Role) -> &mut Option<Contact> {
        match role {
            Role::Registrant => &mut self.registrant,
            Role::Admin => &mut self.admin,
            Role::Tech => &mut self.tech,
            Role::Billing => &mut self.billing,
        }
    }

    pub fn is_empty(&self) -> bool {
        Role::ALL.iter().all(|role| self.get(*role).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_serializes_to_empty_object() {
        let json = serde_json::to_string(&ParsedWhois::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_json_projection_field_names() {
        let parsed = ParsedWhois {
            domain_name: "example.com".to_string(),
            statuses: vec!["ok".to_string()],
            created_date: "2020-01-15T00:00:00+00:00".to_string(),
            created_date_raw: "2020-01-15".to_string(),
            contacts: Some(Contacts {
                tech: Some(Contact {
                    email: "noc@example.com".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(value["domain"], "example.com");
        assert_eq!(value["statuses"][0], "ok");
        assert_eq!(value["created_date"], "2020-01-15T00:00:00+00:00");
        assert_eq!(value["contacts"]["tech"]["email"], "noc@example.com");
        assert!(value["contacts"].get("registrant").is_none());
        assert!(value.get("registrar").is_none());
    }

    #[test]
    fn test_not_found_marker() {
        let parsed = ParsedWhois {
            statuses: vec![STATUS_NOT_FOUND.to_string()],
            ..Default::default()
        };
        assert!(parsed.is_not_found());
        assert!(!parsed.is_empty());
    }

    #[test]
    fn test_role_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_name(role.as_str()), Some(role));
        }
        assert_eq!(Role::from_name("owner"), None);
    }
}

//! Asia-Pacific and Middle East registries.

use crate::keymap::{set_contact_field, ContactField, KeyPath, WhoisBuilder};
use crate::lines::extract_field;
use crate::model::Role;

use super::{Base, KeyStyle, NicHandleSpec, Section, TldSpec};

pub static JP: TldSpec = TldSpec {
    name: "whois.jprs.jp",
    key_map: &[
        ("Registrant", "c/registrant/name"),
        ("State", "statuses"),
        ("Registered Date", "created_date"),
        ("Expires on", "expired_date"),
        ("Last Update", "updated_date"),
        ("Last Updated", "updated_date"),
    ],
    key_style: KeyStyle::Bracket,
    comment_prefixes: &["[ "],
    // JST
    utc_offset_secs: 9 * 3600,
    ..TldSpec::BASE
};

pub static KR: TldSpec = TldSpec {
    name: "whois.kr",
    aliases: &["whois.nic.or.kr"],
    key_map: &[
        ("Registrant", "c/registrant/name"),
        ("Registrant Address", "c/registrant/street"),
        ("Registrant Zip Code", "c/registrant/postal"),
        ("Administrative Contact(AC)", "c/admin/name"),
        ("AC E-Mail", "c/admin/email"),
        ("AC Phone Number", "c/admin/phone"),
        ("Registered Date", "created_date"),
        ("Last Updated Date", "updated_date"),
        ("Authorized Agency", "reg/name"),
        ("Host Name", "name_servers"),
    ],
    ..TldSpec::BASE
};

pub static CN: TldSpec = TldSpec {
    name: "whois.cnnic.cn",
    aliases: &["whois.cnnic.net.cn"],
    key_map: &[
        ("Registrant", "c/registrant/organization"),
        ("Registrant Contact Email", "c/registrant/email"),
        ("Registration Time", "created_date"),
        ("Expiration Time", "expired_date"),
    ],
    // Beijing time
    utc_offset_secs: 8 * 3600,
    ..TldSpec::BASE
};

pub static TW: TldSpec = TldSpec {
    name: "whois.twnic.net.tw",
    key_map: &[
        ("Registration Service Provider", "reg/name"),
        ("Registration Service URL", "reg/url"),
    ],
    sections: &[
        Section::record(
            "Registrant",
            &["c/registrant"],
            &[],
            &["organization", "name", "phone", "fax", "street"],
        ),
        Section::record("Administrative Contact", &["c/admin"], &[], &["name", "phone", "fax"]),
        Section::record("Technical Contact", &["c/tech"], &[], &["name", "phone", "fax"]),
        Section::values("Domain servers in listed order", "name_servers"),
    ],
    hooks: &[tw_record_dates, tw_contact_email],
    keep_order: true,
    status_separator: Some(','),
    ..TldSpec::BASE
};

/// TWNIC prints dates as prose: `Record expires on 2024-11-09 (YYYY-MM-DD)`.
fn tw_record_dates(raw: &str, builder: &mut WhoisBuilder) {
    for line in raw.lines() {
        if let Some(value) = extract_field(line, "Record created on") {
            builder.set(KeyPath::CreatedDate, value);
        } else if let Some(value) = extract_field(line, "Record expires on") {
            builder.set(KeyPath::ExpiredDate, value);
        }
    }
}

/// Contact lines read `Name  name@example.com`.
fn tw_contact_email(_raw: &str, builder: &mut WhoisBuilder) {
    for role in Role::ALL {
        let contact = builder.contact_mut(role);
        let Some((name, email)) = contact.name.rsplit_once(char::is_whitespace) else {
            continue;
        };
        if !email.contains('@') {
            continue;
        }
        let (name, email) = (name.trim().to_string(), email.to_string());
        contact.name = name;
        set_contact_field(contact, ContactField::Email, &email);
    }
}

pub static TH: TldSpec = TldSpec {
    name: "whois.thnic.co.th",
    key_map: &[
        ("Exp date", "expired_date"),
        ("Domain Holder Organization", "c/registrant/organization"),
        ("Domain Holder Street", "c/registrant/street"),
        ("Domain Holder Country", "c/registrant/country"),
        ("Tech Contact", "c/tech/id"),
    ],
    ..TldSpec::BASE
};

pub static KZ: TldSpec = TldSpec {
    name: "whois.nic.kz",
    key_map: &[
        ("Domain created", "created_date"),
        ("Primary server", "name_servers"),
        ("Secondary server", "name_servers"),
        ("Current Registar", "reg/name"),
    ],
    sections: &[
        Section::record(
            "Organization Using Domain Name",
            &["c/registrant"],
            &[
                ("Name", "name"),
                ("Organization Name", "organization"),
                ("Street Address", "street"),
                ("City", "city"),
                ("State", "state"),
                ("Postal Code", "postal"),
                ("Country", "country"),
            ],
            &[],
        ),
        Section::record(
            "Administrative Contact/Agent",
            &["c/admin"],
            &[
                ("NIC Handle", "id"),
                ("Name", "name"),
                ("Phone Number", "phone"),
                ("Fax Number", "fax"),
                ("Email Address", "email"),
            ],
            &[],
        ),
    ],
    ..TldSpec::BASE
};

pub static AU: TldSpec = TldSpec {
    name: "whois.auda.org.au",
    aliases: &["whois.audns.net.au"],
    key_map: &[
        ("Registrar Name", "reg/name"),
        ("Registrant", "c/registrant/organization"),
        ("Registrant Contact ID", "c/registrant/id"),
        ("Registrant Contact Name", "c/registrant/name"),
        ("Tech Contact ID", "c/tech/id"),
        ("Tech Contact Name", "c/tech/name"),
    ],
    stop_prefixes: &["The Whois response", ">>> Last update"],
    ..TldSpec::BASE
};

pub static NZ: TldSpec = TldSpec {
    name: "whois.srs.net.nz",
    aliases: &["whois.irs.net.nz"],
    key_map: &[("Registrar Name", "reg/name")],
    stop_prefixes: &[">>> Last update"],
    ..TldSpec::BASE
};

pub static TR: TldSpec = TldSpec {
    name: "whois.nic.tr",
    aliases: &["whois.trabis.gov.tr"],
    key_map: &[("Expires on", "expired_date")],
    sections: &[
        Section::record("Registrant", &["c/registrant"], &[], &["organization", "street"]),
        Section::record("Registrar", &["reg"], &[("Organization Name", "name")], &[]),
        Section::values("Domain Servers", "name_servers"),
    ],
    ..TldSpec::BASE
};

pub static IL: TldSpec = TldSpec {
    name: "whois.isoc.org.il",
    base: Base::NicHandle(NicHandleSpec {
        references: &[("admin-c", Role::Admin), ("tech-c", Role::Tech)],
        id_keys: &["nic-hdl"],
        fields: &[
            ("person", "name"),
            ("address", "street"),
            ("phone", "phone"),
            ("fax-no", "fax"),
            ("e-mail", "email"),
        ],
    }),
    key_map: &[
        ("descr", "c/registrant/organization"),
        ("validity", "expired_date"),
        ("registrar name", "reg/name"),
        ("registrar info", "reg/url"),
    ],
    ..TldSpec::BASE
};

pub static IR: TldSpec = TldSpec {
    name: "whois.nic.ir",
    base: Base::NicHandle(NicHandleSpec {
        references: &[("holder-c", Role::Registrant), ("admin-c", Role::Admin), ("tech-c", Role::Tech)],
        id_keys: &["nic-hdl"],
        fields: &[
            ("person", "name"),
            ("org", "organization"),
            ("e-mail", "email"),
            ("address", "street"),
            ("phone", "phone"),
            ("fax-no", "fax"),
        ],
    }),
    key_map: &[("last-updated", "updated_date"), ("expire-date", "expired_date")],
    ..TldSpec::BASE
};

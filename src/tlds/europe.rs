//! European ccTLD registries.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::availability::found_by_key;
use crate::keymap::{KeyPath, WhoisBuilder};
use crate::lines::{is_indented, is_nameserver_line, split_key_value};
use crate::model::Role;

use super::{Base, NicHandleSpec, Section, TldSpec};

static REGISTRAR_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\[Tag = [^\]]*\]\s*$").expect("Invalid registrar tag regex"));

pub static UK: TldSpec = TldSpec {
    name: "whois.nic.uk",
    key_map: &[
        ("Registered on", "created_date"),
        ("Last updated", "updated_date"),
        ("Expiry date", "expired_date"),
    ],
    stop_prefixes: &["--", "WHOIS lookup made at", "This WHOIS information is provided"],
    not_found: &["This domain name has not been registered"],
    sections: &[
        Section::values("Domain name", "domain"),
        Section::record("Registrar", &["reg"], &[("URL", "url")], &["name"]),
        Section::record("Registrant", &["c/registrant"], &[], &["name"]),
        Section::record("Registrant's address", &["c/registrant"], &[], &["street"]),
        Section::values("Registration status", "statuses"),
        Section::values("Name servers", "name_servers"),
    ],
    hooks: &[uk_registrar_tag],
    ..TldSpec::BASE
};

/// Nominet appends the registrar's tag to its name: `Example Ltd [Tag = EXAMPLE]`.
fn uk_registrar_tag(_raw: &str, builder: &mut WhoisBuilder) {
    let name = &mut builder.registrar.name;
    if REGISTRAR_TAG.is_match(name) {
        *name = REGISTRAR_TAG.replace(name, "").into_owned();
    }
}

pub static DE: TldSpec = TldSpec {
    name: "whois.denic.de",
    key_map: &[("Changed", "updated_date")],
    hooks: &[de_status],
    ..TldSpec::BASE
};

/// DENIC only distinguishes "free" from everything else.
fn de_status(raw: &str, builder: &mut WhoisBuilder) {
    if found_by_key("Domain", raw).is_none() {
        return;
    }
    let free = found_by_key("Status", raw).is_some_and(|status| status.eq_ignore_ascii_case("free"));
    let status = if free { "free" } else { "connect" };
    builder.replace(KeyPath::Statuses, status);
}

pub static FR: TldSpec = TldSpec {
    name: "whois.nic.fr",
    aliases: &["whois.afnic.fr"],
    base: Base::NicHandle(NicHandleSpec {
        references: &[
            ("holder-c", Role::Registrant),
            ("admin-c", Role::Admin),
            ("tech-c", Role::Tech),
            ("billing-c", Role::Billing),
        ],
        id_keys: &["nic-hdl"],
        fields: &[
            ("contact", "name"),
            ("address", "street"),
            ("country", "country"),
            ("phone", "phone"),
            ("fax-no", "fax"),
            ("e-mail", "email"),
        ],
    }),
    key_map: &[
        ("created", "created_date"),
        ("last-update", "updated_date"),
        ("website", "reg/url"),
    ],
    ..TldSpec::BASE
};

pub static IT: TldSpec = TldSpec {
    name: "whois.nic.it",
    key_map: &[
        ("Created", "created_date"),
        ("Last Update", "updated_date"),
        ("Expire Date", "expired_date"),
        ("Signed", "dnssec"),
    ],
    sections: &[
        Section::record(
            "Registrant",
            &["c/registrant"],
            &[("Name", "name"), ("Organization", "organization"), ("Address", "street")],
            &["street"],
        ),
        Section::record(
            "Admin Contact",
            &["c/admin"],
            &[("Name", "name"), ("Organization", "organization"), ("Address", "street")],
            &["street"],
        ),
        Section::record(
            "Technical Contacts",
            &["c/tech"],
            &[("Name", "name"), ("Organization", "organization"), ("Address", "street")],
            &["street"],
        ),
        Section::record("Registrar", &["reg"], &[("Organization", "name"), ("Web", "url")], &[]),
        Section::values("Nameservers", "name_servers"),
    ],
    ..TldSpec::BASE
};

pub static NL: TldSpec = TldSpec {
    name: "whois.domain-registry.nl",
    aliases: &["whois.sidn.nl"],
    not_found: &["is free"],
    stop_prefixes: &["Record maintained by", "Copyright notice"],
    sections: &[
        Section::record("Registrar", &["reg"], &[], &["name"]),
        Section::values("Domain nameservers", "name_servers"),
    ],
    max_name_servers: Some(20),
    ..TldSpec::BASE
};

pub static BE: TldSpec = TldSpec {
    name: "whois.dns.be",
    key_map: &[("Registered", "created_date")],
    sections: &[
        Section::record(
            "Registrar Technical Contacts",
            &["c/tech"],
            &[("Name", "name"), ("Organisation", "organization"), ("Phone", "phone"), ("Email", "email")],
            &[],
        ),
        Section::record("Registrar", &["reg"], &[("Name", "name"), ("Website", "url")], &[]),
        Section::values("Nameservers", "name_servers"),
        Section::values("Flags", "statuses"),
    ],
    ..TldSpec::BASE
};

pub static EU: TldSpec = TldSpec {
    name: "whois.eu",
    sections: &[
        Section::record(
            "Technical",
            &["c/tech"],
            &[("Name", "name"), ("Organisation", "organization"), ("Email", "email"), ("Phone", "phone")],
            &[],
        ),
        Section::record("Registrar", &["reg"], &[("Name", "name"), ("Website", "url")], &[]),
        Section::values("Name servers", "name_servers"),
    ],
    ..TldSpec::BASE
};

pub static AT: TldSpec = TldSpec {
    name: "whois.nic.at",
    base: Base::NicHandle(NicHandleSpec {
        references: &[("registrant", Role::Registrant), ("admin-c", Role::Admin), ("tech-c", Role::Tech)],
        id_keys: &["nic-hdl"],
        fields: &[
            ("personname", "name"),
            ("organization", "organization"),
            ("street address", "street"),
            ("postal code", "postal"),
            ("city", "city"),
            ("country", "country"),
            ("phone", "phone"),
            ("fax-no", "fax"),
            ("e-mail", "email"),
        ],
    }),
    key_map: &[("changed", "updated_date")],
    date_formats: &["%Y%m%d %H:%M:%S"],
    ..TldSpec::BASE
};

/// FRED-based registries: `contact:` opens a handle block.
const FRED_FIELDS: &[(&str, &str)] = &[
    ("org", "organization"),
    ("name", "name"),
    ("address", "street"),
    ("phone", "phone"),
    ("fax-no", "fax"),
    ("e-mail", "email"),
];

const FRED_REFERENCES: &[(&str, Role)] = &[
    ("registrant", Role::Registrant),
    ("admin-c", Role::Admin),
    ("tech-c", Role::Tech),
];

const FRED_KEYS: &[(&str, &str)] = &[
    ("registered", "created_date"),
    ("changed", "updated_date"),
    ("expire", "expired_date"),
];

pub static CZ: TldSpec = TldSpec {
    name: "whois.nic.cz",
    base: Base::NicHandle(NicHandleSpec {
        references: FRED_REFERENCES,
        id_keys: &["contact"],
        fields: FRED_FIELDS,
    }),
    key_map: FRED_KEYS,
    ..TldSpec::BASE
};

pub static SK: TldSpec = TldSpec {
    name: "whois.sk-nic.sk",
    base: Base::NicHandle(NicHandleSpec {
        references: &[
            ("Domain registrant", Role::Registrant),
            ("Admin Contact", Role::Admin),
            ("Tech Contact", Role::Tech),
        ],
        id_keys: &["Contact"],
        fields: &[
            ("Name", "name"),
            ("Organization", "organization"),
            ("Street", "street"),
            ("City", "city"),
            ("Postal Code", "postal"),
            ("Country Code", "country"),
            ("Phone", "phone"),
            ("Email", "email"),
        ],
    }),
    key_map: &[
        ("Created", "created_date"),
        ("Updated", "updated_date"),
        ("Valid Until", "expired_date"),
        ("EPP Status", "statuses"),
    ],
    ..TldSpec::BASE
};

pub static PL: TldSpec = TldSpec {
    name: "whois.dns.pl",
    key_map: &[
        ("nameservers", "name_servers"),
        ("created", "created_date"),
        ("last modified", "updated_date"),
        ("renewal date", "expired_date"),
    ],
    stop_prefixes: &["WHOIS database responses", "WHOIS displays data"],
    sections: &[Section::record("REGISTRAR", &["reg"], &[], &["name"])],
    hooks: &[pl_name_servers],
    ..TldSpec::BASE
};

/// Only the first host sits on the `nameservers:` line; the rest follow indented.
fn pl_name_servers(raw: &str, builder: &mut WhoisBuilder) {
    let mut in_list = false;
    for line in raw.lines() {
        if is_nameserver_line(line, "nameservers:") {
            in_list = true;
            continue;
        }
        if in_list && is_indented(line) && !line.trim().is_empty() && split_key_value(line).is_none() {
            builder.set(KeyPath::NameServers, line);
        } else {
            in_list = false;
        }
    }
}

pub static SE: TldSpec = TldSpec {
    name: "whois.iis.se",
    aliases: &["whois.iis.nu"],
    key_map: &[
        ("state", "statuses"),
        ("holder", "c/registrant/id"),
        ("created", "created_date"),
        ("modified", "updated_date"),
        ("expires", "expired_date"),
    ],
    ..TldSpec::BASE
};

pub static NO: TldSpec = TldSpec {
    name: "whois.norid.no",
    key_map: &[
        ("Registrar Handle", "reg/name"),
        ("Tech-c Handle", "c/tech/id"),
        ("Created", "created_date"),
        ("Last updated", "updated_date"),
    ],
    ..TldSpec::BASE
};

pub static DK: TldSpec = TldSpec {
    name: "whois.dk-hostmaster.dk",
    aliases: &["whois.punktum.dk"],
    key_map: &[
        ("Registered", "created_date"),
        ("Expires", "expired_date"),
        ("Hostname", "name_servers"),
    ],
    sections: &[Section::record(
        "Registrant",
        &["c/registrant"],
        &[
            ("Name", "name"),
            ("Address", "street"),
            ("Postalcode", "postal"),
            ("City", "city"),
            ("Country", "country"),
            ("Phone", "phone"),
        ],
        &[],
    )],
    ..TldSpec::BASE
};

pub static FI: TldSpec = TldSpec {
    name: "whois.fi",
    key_map: &[
        ("created", "created_date"),
        ("modified", "updated_date"),
        ("expires", "expired_date"),
    ],
    stop_prefixes: &[">>> Last update"],
    sections: &[
        Section::record(
            "Holder",
            &["c/registrant"],
            &[
                ("name", "name"),
                ("address", "street"),
                ("postal", "postal"),
                ("city", "city"),
                ("country", "country"),
                ("phone", "phone"),
                ("holder email", "email"),
            ],
            &[],
        ),
        Section::record("Registrar", &["reg"], &[("registrar", "name"), ("www", "url")], &[]),
    ],
    section_gap: true,
    ..TldSpec::BASE
};

pub static EE: TldSpec = TldSpec {
    name: "whois.tld.ee",
    key_map: &[
        ("name", "domain"),
        ("registered", "created_date"),
        ("changed", "updated_date"),
        ("expire", "expired_date"),
    ],
    stop_prefixes: &["Estonia .ee Top Level Domain WHOIS server"],
    sections: &[
        Section::record(
            "Registrant",
            &["c/registrant"],
            &[("name", "name"), ("country", "country"), ("email", "email"), ("phone", "phone")],
            &[],
        ),
        Section::record(
            "Administrative contact",
            &["c/admin"],
            &[("name", "name"), ("email", "email")],
            &[],
        ),
        Section::record("Technical contact", &["c/tech"], &[("name", "name"), ("email", "email")], &[]),
        Section::record("Registrar", &["reg"], &[("name", "name"), ("url", "url")], &[]),
    ],
    ..TldSpec::BASE
};

pub static LV: TldSpec = TldSpec {
    name: "whois.nic.lv",
    key_map: &[("Updated", "updated_date")],
    sections: &[
        Section::record(
            "[Holder]",
            &["c/registrant"],
            &[("Name", "name"), ("Country", "country"), ("Address", "street")],
            &[],
        ),
        Section::record("[Registrar]", &["reg"], &[("Name", "name")], &[]),
    ],
    ..TldSpec::BASE
};

pub static LU: TldSpec = TldSpec {
    name: "whois.dns.lu",
    key_map: &[
        ("domainname", "domain"),
        ("domaintype", "statuses"),
        ("org-name", "c/registrant/organization"),
        ("org-address", "c/registrant/street"),
        ("org-zipcode", "c/registrant/postal"),
        ("org-city", "c/registrant/city"),
        ("org-country", "c/registrant/country"),
        ("registrar-name", "reg/name"),
        ("registrar-email", "reg/abuse_contact_email"),
        ("registrar-url", "reg/url"),
    ],
    ..TldSpec::BASE
};

pub static IS: TldSpec = TldSpec {
    name: "whois.isnic.is",
    base: Base::NicHandle(NicHandleSpec {
        references: &[
            ("registrant", Role::Registrant),
            ("admin-c", Role::Admin),
            ("tech-c", Role::Tech),
            ("billing-c", Role::Billing),
        ],
        id_keys: &["nic-hdl"],
        fields: &[
            ("role", "name"),
            ("person", "name"),
            ("address", "street"),
            ("phone", "phone"),
            ("fax-no", "fax"),
            ("e-mail", "email"),
        ],
    }),
    key_map: &[("created", "created_date"), ("expires", "expired_date")],
    ..TldSpec::BASE
};

pub static RO: TldSpec = TldSpec {
    name: "whois.rotld.ro",
    key_map: &[
        ("Registered On", "created_date"),
        ("Expires On", "expired_date"),
        ("Referral URL", "reg/url"),
    ],
    ..TldSpec::BASE
};

pub static SI: TldSpec = TldSpec {
    name: "whois.register.si",
    aliases: &["whois.arnes.si"],
    key_map: &[
        ("registrar-url", "reg/url"),
        ("registrant", "c/registrant/id"),
        ("created", "created_date"),
        ("expire", "expired_date"),
    ],
    status_separator: Some(','),
    ..TldSpec::BASE
};

pub static BG: TldSpec = TldSpec {
    name: "whois.register.bg",
    key_map: &[
        ("activated on", "created_date"),
        ("expires at", "expired_date"),
        ("registration status", "statuses"),
    ],
    sections: &[
        Section::record("REGISTRANT", &["c/registrant"], &[], &["organization", "street"]),
        Section::record("ADMINISTRATIVE CONTACT", &["c/admin"], &[], &["name"]),
        Section::record("TECHNICAL CONTACT(S)", &["c/tech"], &[], &["name"]),
        Section::values("NAME SERVER INFORMATION", "name_servers"),
    ],
    hooks: &[bg_domain],
    ..TldSpec::BASE
};

/// `DOMAIN NAME: example.bg (example.bg)` repeats the IDN form in parentheses.
fn bg_domain(_raw: &str, builder: &mut WhoisBuilder) {
    if let Some(domain) = builder.domain.as_mut() {
        if let Some(pos) = domain.find(" (") {
            domain.truncate(pos);
        }
    }
}

pub static RU: TldSpec = TldSpec {
    name: "whois.tcinet.ru",
    aliases: &["whois.ripn.net"],
    key_map: &[
        ("state", "statuses"),
        ("org", "c/registrant/organization"),
        ("person", "c/registrant/name"),
        ("created", "created_date"),
        ("paid-till", "expired_date"),
    ],
    stop_prefixes: &["Last updated on"],
    status_separator: Some(','),
    ..TldSpec::BASE
};

const UA_CONTACT_KEYS: &[(&str, &str)] = &[
    ("person", "name"),
    ("organization-loc", "organization"),
    ("e-mail", "email"),
    ("address", "street"),
    ("postal-code", "postal"),
    ("country", "country"),
    ("phone", "phone"),
    ("fax", "fax"),
];

pub static UA: TldSpec = TldSpec {
    name: "whois.ua",
    key_map: &[("modified", "updated_date"), ("created", "created_date"), ("expires", "expired_date")],
    sections: &[
        Section::record(
            "% Registrar",
            &["reg"],
            &[("organization", "name"), ("url", "url"), ("abuse-email", "abuse_contact_email")],
            &[],
        ),
        Section::record("% Registrant", &["c/registrant"], UA_CONTACT_KEYS, &[]),
        Section::record("% Administrative Contacts", &["c/admin"], UA_CONTACT_KEYS, &[]),
        Section::record("% Technical Contacts", &["c/tech"], UA_CONTACT_KEYS, &[]),
    ],
    ..TldSpec::BASE
};

pub static PT: TldSpec = TldSpec {
    name: "whois.dns.pt",
    key_map: &[
        ("Owner Name", "c/registrant/name"),
        ("Owner Address", "c/registrant/street"),
        ("Owner Locality", "c/registrant/city"),
        ("Owner ZipCode", "c/registrant/postal"),
        ("Owner Country Code", "c/registrant/country"),
        ("Owner Email", "c/registrant/email"),
        ("Admin Name", "c/admin/name"),
        ("Admin Address", "c/admin/street"),
        ("Admin Locality", "c/admin/city"),
        ("Admin ZipCode", "c/admin/postal"),
        ("Admin Country Code", "c/admin/country"),
        ("Admin Email", "c/admin/email"),
    ],
    date_formats: &["%d/%m/%Y %H:%M:%S", "%d/%m/%Y"],
    keep_order: true,
    ..TldSpec::BASE
};

//! African registries.

use crate::model::Role;

use super::{Base, NicHandleSpec, Section, TldSpec};

const ML_CONTACT_KEYS: &[(&str, &str)] = &[
    ("Name", "name"),
    ("Organization", "organization"),
    ("Address", "street"),
    ("Zipcode", "postal"),
    ("City", "city"),
    ("State", "state"),
    ("Country", "country"),
    ("Phone", "phone"),
    ("Fax", "fax"),
    ("E-mail", "email"),
];

/// Point ML (Freenom) layout, shared by .ml and the other Freenom TLDs.
pub static ML: TldSpec = TldSpec {
    name: "whois.dot.ml",
    aliases: &["whois.dot.tk", "whois.dot.ga", "whois.dot.cf", "whois.dot.gq"],
    key_map: &[
        ("Domain registered", "created_date"),
        ("Record will expire on", "expired_date"),
    ],
    not_found: &["Invalid query or domain name not known in the Point ML Domain Registry"],
    stop_prefixes: &["Record maintained by"],
    date_formats: &["%m/%d/%Y"],
    sections: &[
        Section::values("Domain name", "domain"),
        Section::values("Domain Nameservers", "name_servers"),
        Section::record("Owner contact", &["c/registrant"], ML_CONTACT_KEYS, &["street"]),
        Section::record("Admin contact", &["c/admin"], ML_CONTACT_KEYS, &["street"]),
        Section::record("Billing contact", &["c/billing"], ML_CONTACT_KEYS, &["street"]),
        Section::record("Tech contact", &["c/tech"], ML_CONTACT_KEYS, &["street"]),
    ],
    ..TldSpec::BASE
};

/// tzNIC runs FRED but prints dates month first.
pub static TZ: TldSpec = TldSpec {
    name: "whois.tznic.or.tz",
    base: Base::NicHandle(NicHandleSpec {
        references: &[
            ("registrant", Role::Registrant),
            ("admin-c", Role::Admin),
            ("tech-c", Role::Tech),
        ],
        id_keys: &["contact"],
        fields: &[
            ("org", "organization"),
            ("name", "name"),
            ("address", "street"),
            ("phone", "phone"),
            ("fax-no", "fax"),
            ("e-mail", "email"),
        ],
    }),
    key_map: &[
        ("registered", "created_date"),
        ("changed", "updated_date"),
        ("expire", "expired_date"),
    ],
    date_formats: &["%m.%d.%Y %H:%M:%S", "%m.%d.%Y"],
    ..TldSpec::BASE
};

const TN_CONTACT_KEYS: &[(&str, &str)] = &[
    ("Name", "name"),
    ("Address", "street"),
    ("address2", "street"),
    ("City", "city"),
    ("stateProvince", "state"),
    ("Zip code", "postal"),
    ("Country", "country"),
    ("Phone", "phone"),
    ("Fax", "fax"),
    ("Email", "email"),
];

pub static TN: TldSpec = TldSpec {
    name: "whois.ati.tn",
    key_map: &[
        ("Domain name", "domain"),
        ("Creation date", "created_date"),
        ("Domain status", "statuses"),
        // Outside the contact sections `Name` only appears under "dns servers"
        ("Name", "name_servers"),
    ],
    not_found: &["NO OBJECT FOUND!"],
    date_formats: &["%d-%m-%Y %H:%M:%S GMT+1"],
    utc_offset_secs: 3600,
    sections: &[
        Section::record("Owner Contact", &["c/registrant"], TN_CONTACT_KEYS, &[]),
        Section::record("Administrativ contact", &["c/admin"], TN_CONTACT_KEYS, &[]),
        Section::record("Technical contact", &["c/tech"], TN_CONTACT_KEYS, &[]),
    ],
    keep_order: true,
    ..TldSpec::BASE
};

pub static UG: TldSpec = TldSpec {
    name: "whois.co.ug",
    key_map: &[
        ("Registered On", "created_date"),
        ("Renewed On", "updated_date"),
        ("Expires On", "expired_date"),
        ("Registrant State / Province", "c/registrant/state"),
        ("Registrant Address", "c/registrant/street"),
        ("Admin State / Province", "c/admin/state"),
        ("Admin Address", "c/admin/street"),
        ("Tech State / Province", "c/tech/state"),
        ("Tech Address", "c/tech/street"),
    ],
    keep_order: true,
    ..TldSpec::BASE
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tlds::parse_with;

    const ML_CONTACT: &str = "   Name: Google LLC
   Organization: Google LLC
   Address: 1600 Amphitheatre Parkway
   Zipcode: 94043
   City: Mountain View
   State: CA
   Country: US
   Phone: +1-650-2530000
   Fax: +1-650-2530001
   E-mail: dns-admin@google.com
";

    #[test]
    fn test_ml_google() {
        let mut raw = String::from(
            "
   Domain name:
   GOOGLE.ML

",
        );
        for header in ["Owner contact", "Admin contact", "Billing contact", "Tech contact"] {
            raw.push_str(&format!("   {header}:\n{ML_CONTACT}\n"));
        }
        raw.push_str(
            "   Domain Nameservers:
   NS1.GOOGLE.COM
   NS2.GOOGLE.COM
   NS3.GOOGLE.COM
   NS4.GOOGLE.COM

   Domain registered: 03/25/2013
   Record will expire on: 10/16/2023
   Record maintained by: ML Domain Registry
",
        );

        let parsed = parse_with(&ML, &raw);
        assert_eq!(parsed.domain_name, "GOOGLE.ML");
        assert_eq!(parsed.name_servers.len(), 4);
        assert_eq!(parsed.created_date_raw, "03/25/2013");
        assert_eq!(parsed.created_date, "2013-03-25T00:00:00+00:00");
        assert_eq!(parsed.expired_date, "2023-10-16T00:00:00+00:00");

        let contacts = parsed.contacts.unwrap();
        let registrant = contacts.registrant.clone().unwrap();
        assert_eq!(registrant.name, "Google LLC");
        assert_eq!(registrant.email, "dns-admin@google.com");
        assert_eq!(registrant.street, vec!["1600 Amphitheatre Parkway"]);
        for role in Role::ALL {
            assert_eq!(contacts.get(role), Some(&registrant), "{}", role.as_str());
        }
    }

    #[test]
    fn test_tz_nic_handles() {
        let raw = "%  (c) 2006-2021 CZ.NIC, z.s.p.o.
%
% Intended use of supplied data and information

domain:       google.co.tz
registrant:   GDA-ITFARM
admin-c:      KP1-ITFARM
nsset:        NSS:GOOGLE.CO.TZ:1
registrar:    REG-ITFARM
registered:   05.03.2007 03:00:00
expire:       05.03.2026

contact:      GDA-ITFARM
org:          Google LLC
name:         Google Domain Admin
address:      1600 Amphitheatre Parkway
address:      Mountain View
address:      US
e-mail:       dns-admin@google.com
registrar:    REG-ITFARM

contact:      KP1-ITFARM
name:         Kevin Pointer
e-mail:       kp@itfarm.example

nsset:        NSS:GOOGLE.CO.TZ:1
nserver:      ns1.google.com
nserver:      ns2.google.com
tech-c:       GDA-ITFARM
registrar:    REG-ITFARM
";
        let parsed = parse_with(&TZ, raw);
        assert_eq!(parsed.domain_name, "google.co.tz");
        assert_eq!(parsed.expired_date_raw, "05.03.2026");
        assert_eq!(parsed.expired_date, "2026-05-03T00:00:00+00:00");
        assert_eq!(parsed.created_date, "2007-05-03T03:00:00+00:00");
        assert_eq!(parsed.name_servers, vec!["ns1.google.com", "ns2.google.com"]);

        let contacts = parsed.contacts.unwrap();
        let registrant = contacts.registrant.unwrap();
        assert_eq!(registrant.id, "GDA-ITFARM");
        assert_eq!(registrant.organization, "Google LLC");
        assert_eq!(registrant.street, vec!["1600 Amphitheatre Parkway", "Mountain View", "US"]);

        let admin = contacts.admin.unwrap();
        assert_eq!(admin.id, "KP1-ITFARM");
        assert_eq!(admin.name, "Kevin Pointer");
        assert_eq!(contacts.tech.unwrap(), registrant);
    }

    #[test]
    fn test_tn_keeps_name_server_order() {
        let raw = "Domain name.........: google.tn
Details:
Creation date.......: 10-05-2009 00:00:00 GMT+1
Domain status.......: Active
Registrar...........: 3S GLOBALNET

Owner Contact
Name................: GOOGLE LLC
Address.............: 1600 Amphitheatre Parkway
City................: Mountain View
Country.............: US
Email...............: dns-admin@google.com

dns servers
Name................: ns2.google.com.
IP..................:
Name................: ns1.google.com.
";
        let parsed = parse_with(&TN, raw);
        assert_eq!(parsed.domain_name, "google.tn");
        assert_eq!(parsed.created_date, "2009-05-09T23:00:00+00:00");
        assert_eq!(parsed.name_servers, vec!["ns2.google.com", "ns1.google.com"]);
        assert_eq!(parsed.registrar.unwrap().name, "3S GLOBALNET");

        let registrant = parsed.contacts.unwrap().registrant.unwrap();
        assert_eq!(registrant.name, "GOOGLE LLC");
        assert_eq!(registrant.email, "dns-admin@google.com");
    }

    #[test]
    fn test_ug_keeps_name_server_order() {
        let raw = "Domain name:                   google.co.ug
Status:                        ACTIVE
Expires On:                    2024-07-25
Registered On:                 2006-07-25
Nameserver:                    ns2.google.com
Nameserver:                    ns1.google.com

Registrant Contact Information:
Registrant Name:               Google LLC
Registrant Address:            1600 Amphitheatre Parkway
Registrant State / Province:   CA
";
        let parsed = parse_with(&UG, raw);
        assert_eq!(parsed.name_servers, vec!["ns2.google.com", "ns1.google.com"]);
        assert_eq!(parsed.created_date, "2006-07-25T00:00:00+00:00");
        let registrant = parsed.contacts.unwrap().registrant.unwrap();
        assert_eq!(registrant.state, "CA");
        assert_eq!(registrant.street, vec!["1600 Amphitheatre Parkway"]);
    }

    #[test]
    fn test_tn_not_found() {
        let raw = "NIC Whois server for cTLDs : .tn , .تونس
All rights reserved
Copyright \"Tunisian Internet Agency - https://whois.ati.tn

NO OBJECT FOUND!
";
        let parsed = parse_with(&TN, raw);
        assert!(parsed.is_not_found());
        assert!(parsed.domain_name.is_empty());
        assert!(parsed.contacts.is_none());
    }

    #[test]
    fn test_ml_not_found() {
        let raw = "
   Invalid query or domain name not known in the Point ML Domain Registry

   Record maintained by: ML Domain Registry
";
        let parsed = parse_with(&ML, raw);
        assert!(parsed.is_not_found());
        assert!(parsed.name_servers.is_empty());
        assert!(parsed.created_date_raw.is_empty());
    }
}

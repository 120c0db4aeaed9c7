//! Registries of the Americas.

use crate::model::Role;

use super::generic::ICANN_STOP;
use super::{Base, NicHandleSpec, Section, TldSpec};

pub static CA: TldSpec = TldSpec {
    name: "whois.cira.ca",
    not_found: &["Not found:"],
    stop_prefixes: ICANN_STOP,
    ..TldSpec::BASE
};

const MX_CONTACT_KEYS: &[(&str, &str)] = &[
    ("Name", "name"),
    ("City", "city"),
    ("State", "state"),
    ("Country", "country"),
];

pub static MX: TldSpec = TldSpec {
    name: "whois.mx",
    aliases: &["whois.nic.mx"],
    key_map: &[("URL", "reg/url"), ("DNS", "name_servers")],
    stop_prefixes: &["% NOTICE"],
    sections: &[
        Section::record("Registrant", &["c/registrant"], MX_CONTACT_KEYS, &[]),
        Section::record("Administrative Contact", &["c/admin"], MX_CONTACT_KEYS, &[]),
        Section::record("Technical Contact", &["c/tech"], MX_CONTACT_KEYS, &[]),
        Section::record("Billing Contact", &["c/billing"], MX_CONTACT_KEYS, &[]),
    ],
    ..TldSpec::BASE
};

pub static BR: TldSpec = TldSpec {
    name: "whois.registro.br",
    aliases: &["whois.nic.br"],
    base: Base::NicHandle(NicHandleSpec {
        references: &[
            ("owner-c", Role::Registrant),
            ("admin-c", Role::Admin),
            ("tech-c", Role::Tech),
            ("billing-c", Role::Billing),
        ],
        id_keys: &["nic-hdl-br"],
        fields: &[("person", "name"), ("e-mail", "email"), ("country", "country")],
    }),
    key_map: &[
        ("owner", "c/registrant/organization"),
        ("created", "created_date"),
        ("changed", "updated_date"),
        ("expires", "expired_date"),
    ],
    ..TldSpec::BASE
};

pub static CL: TldSpec = TldSpec {
    name: "whois.nic.cl",
    key_map: &[
        ("Registrant organisation", "c/registrant/organization"),
        ("Registrar name", "reg/name"),
    ],
    ..TldSpec::BASE
};

pub static AR: TldSpec = TldSpec {
    name: "whois.nic.ar",
    base: Base::NicHandle(NicHandleSpec {
        references: &[("registrant", Role::Registrant)],
        id_keys: &["contact"],
        fields: &[("name", "name")],
    }),
    key_map: &[
        ("registered", "created_date"),
        ("changed", "updated_date"),
        ("expire", "expired_date"),
    ],
    not_found: &["El dominio no se encuentra registrado en NIC Argentina"],
    ..TldSpec::BASE
};

pub static CR: TldSpec = TldSpec {
    name: "whois.nic.cr",
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
            ("e-mail", "email"),
        ],
    }),
    key_map: &[
        ("registered", "created_date"),
        ("changed", "updated_date"),
        ("expire", "expired_date"),
    ],
    ..TldSpec::BASE
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tlds::parse_with;

    #[test]
    fn test_br_owner_and_handles() {
        let raw = "% Copyright (c) Nic.br

domain:      google.com.br
owner:       Google Brasil Internet Ltda
owner-c:     DOADM17
tech-c:      DOADM17
nserver:     ns1.google.com
nsstat:      20240101 AA
nserver:     ns2.google.com
created:     19990518 #162310
changed:     20230510
expires:     20240519
status:      published

nic-hdl-br:  DOADM17
person:      Domain Admin
e-mail:      ccops@markmonitor.com
country:     BR
created:     20020906
";
        let parsed = parse_with(&BR, raw);
        assert_eq!(parsed.domain_name, "google.com.br");
        assert_eq!(parsed.created_date, "1999-05-18T00:00:00+00:00");
        assert_eq!(parsed.updated_date, "2023-05-10T00:00:00+00:00");
        assert_eq!(parsed.statuses, vec!["published"]);

        let contacts = parsed.contacts.unwrap();
        let registrant = contacts.registrant.unwrap();
        assert_eq!(registrant.organization, "Google Brasil Internet Ltda");
        assert_eq!(registrant.id, "DOADM17");
        assert_eq!(registrant.name, "Domain Admin");
        assert_eq!(contacts.tech.unwrap().email, "ccops@markmonitor.com");
    }

    #[test]
    fn test_mx_contact_sections() {
        let raw = "Domain Name:       google.com.mx

Created On:        2009-05-12
Expiration Date:   2024-05-11
Last Updated On:   2023-04-19
Registrar:         MarkMonitor
URL:               http://www.markmonitor.com/

Registrant:
   Name:           Google LLC
   City:           Mountain View
   State:          California
   Country:        United States

Billing Contact:
   Name:           Domain Admin
   Country:        United States

Name Servers:
   DNS:            ns1.google.com
   DNS:            ns2.google.com

% NOTICE: The expiration date displayed in this record is the date the
";
        let parsed = parse_with(&MX, raw);
        assert_eq!(parsed.created_date, "2009-05-12T00:00:00+00:00");
        assert_eq!(parsed.name_servers, vec!["ns1.google.com", "ns2.google.com"]);
        assert_eq!(parsed.registrar.unwrap().url, "http://www.markmonitor.com/");

        let contacts = parsed.contacts.unwrap();
        assert_eq!(contacts.registrant.unwrap().state, "California");
        assert_eq!(contacts.billing.unwrap().name, "Domain Admin");
        assert!(contacts.admin.is_none());
    }

    #[test]
    fn test_ar_not_found() {
        let parsed = parse_with(&AR, "El dominio no se encuentra registrado en NIC Argentina\n");
        assert!(parsed.is_not_found());
    }

    #[test]
    fn test_ca_registered() {
        let raw = "Domain Name: google.ca
Registry Domain ID: D3063-CIRA
Registrar WHOIS Server: whois.ca.fury.ca
Registrar URL: http://www.markmonitor.com
Updated Date: 2023-04-28T04:34:37Z
Creation Date: 2000-10-03T18:23:34Z
Registry Expiry Date: 2024-04-28T04:00:00Z
Registrar: MarkMonitor International Canada Ltd.
Domain Status: clientDeleteProhibited https://icann.org/epp#clientDeleteProhibited
Domain Status: clientTransferProhibited https://icann.org/epp#clientTransferProhibited
Registrant Name: REDACTED FOR PRIVACY
Registrant Organization: Google Canada Corporation
Name Server: ns2.google.com
Name Server: ns1.google.com
DNSSEC: unsigned
URL of the ICANN Whois Inaccuracy Complaint Form: https://www.icann.org/wicf/
>>> Last update of WHOIS database: 2023-11-01T17:21:42Z <<<
";
        let parsed = parse_with(&CA, raw);
        assert_eq!(parsed.domain_name, "google.ca");
        assert_eq!(parsed.created_date, "2000-10-03T18:23:34+00:00");
        assert_eq!(parsed.updated_date, "2023-04-28T04:34:37+00:00");
        assert_eq!(parsed.expired_date, "2024-04-28T04:00:00+00:00");
        assert_eq!(parsed.statuses, vec!["clientDeleteProhibited", "clientTransferProhibited"]);
        assert_eq!(parsed.name_servers, vec!["ns1.google.com", "ns2.google.com"]);

        let registrar = parsed.registrar.unwrap();
        assert_eq!(registrar.name, "MarkMonitor International Canada Ltd.");
        assert_eq!(registrar.whois_server, "whois.ca.fury.ca");
        assert_eq!(
            parsed.contacts.unwrap().registrant.unwrap().organization,
            "Google Canada Corporation"
        );
    }

    #[test]
    fn test_ca_not_found() {
        let parsed = parse_with(&CA, "Not found: thisdomaindoesnotexist.ca\n\n% WHOIS look-up made at 2023-11-01 17:21:42 (GMT)\n");
        assert!(parsed.is_not_found());
        assert!(parsed.domain_name.is_empty());
        assert!(parsed.registrar.is_none());
    }

    #[test]
    fn test_cl_zone_suffix() {
        let raw = "%%
%% This is the NIC Chile Whois server (whois.nic.cl).
%%
%% Rights restricted by copyright.
%% See https://www.nic.cl/normativa/politica-publicacion-de-datos-cl.pdf
%%

Domain name: google.cl
Registrant name: Google LLC
Registrant organisation:
Registrar name: MarkMonitor Inc.
Registrar URL: https://markmonitor.com/
Creation date: 2002-10-22 17:48:23 CLST
Expiration date: 2024-11-20 14:48:02 CLST
Name server: ns1.google.com
Name server: ns2.google.com
";
        let parsed = parse_with(&CL, raw);
        assert_eq!(parsed.domain_name, "google.cl");
        assert_eq!(parsed.created_date_raw, "2002-10-22 17:48:23 CLST");
        assert_eq!(parsed.created_date, "2002-10-22T17:48:23+00:00");
        assert_eq!(parsed.expired_date, "2024-11-20T14:48:02+00:00");
        assert_eq!(parsed.name_servers, vec!["ns1.google.com", "ns2.google.com"]);

        let registrar = parsed.registrar.unwrap();
        assert_eq!(registrar.name, "MarkMonitor Inc.");
        assert_eq!(registrar.url, "https://markmonitor.com/");

        let registrant = parsed.contacts.unwrap().registrant.unwrap();
        assert_eq!(registrant.name, "Google LLC");
        assert_eq!(registrant.organization, "");
    }

    #[test]
    fn test_cr_fred_handles() {
        let raw = "%  (c) 2006-2023 NIC Costa Rica
%
% Intended use of supplied data and information

domain:       google.co.cr
registrant:   CON-GOOGLE
admin-c:      CON-GOOGLE-ADM
nsset:        NSS:GOOGLE
registrar:    NIC-REG1
registered:   21.10.2003 18:00:00
changed:      12.10.2023 06:00:00
expire:       21.10.2024

contact:      CON-GOOGLE
org:          Google LLC
name:         Google LLC
address:      1600 Amphitheatre Parkway
address:      Mountain View
address:      94043
address:      US
phone:        +1.6502530000
e-mail:       dns-admin@google.com
registrar:    NIC-REG1
created:      20.10.2003 18:00:00

contact:      CON-GOOGLE-ADM
name:         Domain Administrator
e-mail:       dns-admin@google.com

nsset:        NSS:GOOGLE
nserver:      ns2.google.com
nserver:      ns1.google.com
tech-c:       CON-GOOGLE-TECH
registrar:    NIC-REG1
";
        let parsed = parse_with(&CR, raw);
        assert_eq!(parsed.domain_name, "google.co.cr");
        assert_eq!(parsed.created_date, "2003-10-21T18:00:00+00:00");
        assert_eq!(parsed.updated_date, "2023-10-12T06:00:00+00:00");
        assert_eq!(parsed.expired_date, "2024-10-21T00:00:00+00:00");
        assert_eq!(parsed.name_servers, vec!["ns1.google.com", "ns2.google.com"]);
        assert_eq!(parsed.registrar.unwrap().name, "NIC-REG1");

        let contacts = parsed.contacts.unwrap();
        let registrant = contacts.registrant.unwrap();
        assert_eq!(registrant.id, "CON-GOOGLE");
        assert_eq!(registrant.organization, "Google LLC");
        assert_eq!(registrant.street, vec!["1600 Amphitheatre Parkway", "Mountain View", "94043", "US"]);
        assert_eq!(registrant.phone, "+1.6502530000");
        assert_eq!(contacts.admin.unwrap().name, "Domain Administrator");

        // A handle with no definition still binds its id
        let tech = contacts.tech.unwrap();
        assert_eq!(tech.id, "CON-GOOGLE-TECH");
        assert_eq!(tech.name, "");
    }
}

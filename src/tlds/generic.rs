//! ICANN-format thick whois and `.edu`.

use crate::keymap::{set_contact_field, ContactField, WhoisBuilder};
use crate::model::Role;

use super::{Section, TldSpec};

/// Shared by registries that end with the ICANN footer.
pub(super) const ICANN_STOP: &[&str] = &[
    ">>> Last update of",
    "URL of the ICANN Whois Inaccuracy",
    "For more information on Whois status codes",
    "NOTICE: The expiration date",
    "TERMS OF USE:",
];

pub static DEFAULT: TldSpec = TldSpec {
    stop_prefixes: ICANN_STOP,
    ..TldSpec::BASE
};

pub static EDU: TldSpec = TldSpec {
    name: "whois.educause.edu",
    aliases: &["whois.educause.net"],
    key_map: &[
        ("Domain record activated", "created_date"),
        ("Domain record last updated", "updated_date"),
        ("Domain expires", "expired_date"),
    ],
    stop_prefixes: &["The EDUCAUSE Whois database"],
    sections: &[
        Section::record("Registrant", &["c/registrant"], &[], &["organization", "street"]),
        Section::record(
            "Administrative Contact",
            &["c/admin"],
            &[],
            &["name", "organization", "street"],
        ),
        Section::record(
            "Technical Contact",
            &["c/tech"],
            &[],
            &["name", "organization", "street"],
        ),
        Section::values("Name Servers", "name_servers"),
    ],
    hooks: &[edu_contact_tail],
    lowercase_name_servers: true,
    ..TldSpec::BASE
};

/// EDUCAUSE appends phone and email as the last unlabeled contact lines.
fn edu_contact_tail(_raw: &str, builder: &mut WhoisBuilder) {
    for role in Role::ALL {
        let contact = builder.contact_mut(role);
        let street = std::mem::take(&mut contact.street);
        for line in street {
            if line.contains('@') && !line.contains(' ') {
                set_contact_field(contact, ContactField::Email, &line);
            } else if line.starts_with('+') {
                set_contact_field(contact, ContactField::Phone, &line);
            } else {
                contact.street.push(line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tlds::parse_with;

    #[test]
    fn test_edu() {
        let raw = "This Registry database contains ONLY .EDU domains.

Domain Name: EXAMPLE.EDU

Registrant:
\tExample University
\t1 College Road
\tAnytown, ST 12345
\tUSA

Administrative Contact:
\tJane Admin
\tExample University
\t1 College Road
\tAnytown, ST 12345
\tUSA
\t+1.5555550100
\tadmin@example.edu

Technical Contact:
\tNet Ops
\tExample University
\t1 College Road
\tAnytown, ST 12345
\tUSA
\t+1.5555550101
\tnoc@example.edu

Name Servers:
\tNS2.EXAMPLE.EDU
\tNS1.EXAMPLE.EDU

Domain record activated:    12-Apr-2001
Domain record last updated: 17-Jun-2023
Domain expires:             31-Jul-2024

The EDUCAUSE Whois database is authoritative for the .EDU domain.
";
        let parsed = parse_with(&EDU, raw);
        assert_eq!(parsed.domain_name, "EXAMPLE.EDU");
        assert_eq!(parsed.name_servers, vec!["ns1.example.edu", "ns2.example.edu"]);
        assert_eq!(parsed.created_date, "2001-04-12T00:00:00+00:00");
        assert_eq!(parsed.expired_date, "2024-07-31T00:00:00+00:00");

        let contacts = parsed.contacts.unwrap();
        let registrant = contacts.registrant.unwrap();
        assert_eq!(registrant.organization, "Example University");
        assert_eq!(registrant.street, vec!["1 College Road", "Anytown, ST 12345", "USA"]);

        let admin = contacts.admin.unwrap();
        assert_eq!(admin.name, "Jane Admin");
        assert_eq!(admin.email, "admin@example.edu");
        assert_eq!(admin.phone, "+1.5555550100");
        assert_eq!(admin.street.len(), 3);
        assert_eq!(contacts.tech.unwrap().email, "noc@example.edu");
    }
}

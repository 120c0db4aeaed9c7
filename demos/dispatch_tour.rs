//! Walk a few canned responses through the dispatcher.
//!
//! Run with: cargo run --example dispatch_tour

use whois_parser::{new_tld_domain_parser, parser_for_domain, Whois};

const SAMPLES: &[(&str, &str)] = &[
    (
        "whois.nic.uk",
        "    Domain name:\n        example.co.uk\n\n    Registrar:\n        Example Registrar Ltd [Tag = EXAMPLE]\n        URL: https://registrar.example\n\n    Relevant dates:\n        Registered on: 05-Nov-2019\n        Expiry date:  05-Nov-2025\n\n    Name servers:\n        ns1.example.co.uk     192.0.2.1\n        ns2.example.co.uk\n",
    ),
    ("whois.nic.uk", "    No match for \"missing.co.uk\".\n"),
    (
        "whois.denic.de",
        "Domain: example.de\nNserver: ns1.example.de\nStatus: connect\nChanged: 2021-03-12T21:44:25+01:00\n",
    ),
    (
        "whois.example.invalid",
        "Domain Name: EXAMPLE.COM\nCreation Date: 1995-08-14T04:00:00Z\nName Server: A.IANA-SERVERS.NET\n",
    ),
];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("whois_parser=info")
        .init();

    println!("🔍 Whois Parser Dispatch Tour");
    println!("=============================");

    for (server, raw) in SAMPLES {
        let parser = new_tld_domain_parser(server);
        println!("\n📋 {} -> parser {}", server, parser.get_name());
        println!("{}", "─".repeat(50));

        let whois = Whois::with_parser(&parser, raw, server);
        match whois.available {
            Some(true) => println!("   Domain is not registered"),
            Some(false) => {
                let parsed = &whois.parsed;
                println!("   Domain: {}", parsed.domain_name);
                if let Some(registrar) = &parsed.registrar {
                    println!("   Registrar: {}", registrar.name);
                }
                println!("   Created: {}", or_unknown(&parsed.created_date));
                println!("   Expires: {}", or_unknown(&parsed.expired_date));
                for (i, ns) in parsed.name_servers.iter().enumerate() {
                    println!("     {}. {}", i + 1, ns);
                }
            }
            None => println!("   Nothing recognizable"),
        }
    }

    println!("\n🌐 Domain dispatch");
    for domain in ["bbc.co.uk", "google.pt", "google.co.tz", "example.com"] {
        println!("   {:<16} -> {}", domain, parser_for_domain(domain).get_name());
    }

    Ok(())
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
        "Unknown"
    } else {
        value
    }
}

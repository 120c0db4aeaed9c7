//! Parse a whois response read from a file (or stdin) and print it as JSON.
//!
//! Run with: cargo run --example parse_sample -- <whois-server> [response-file]

use std::io::Read;

use anyhow::Context;
use whois_parser::{Config, Registry, Whois};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "whois_parser=info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let server = args.next().unwrap_or_else(|| "default".to_string());

    let raw = match args.next() {
        Some(path) => std::fs::read(&path).with_context(|| format!("reading {path}"))?,
        None => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer).context("reading stdin")?;
            buffer
        }
    };

    let config = Config::load().context("loading configuration")?;
    let registry = Registry::with_config(config.clone());
    let parser = registry.get_parser(&server);
    println!("🔍 Parser: {}", parser.get_name());

    let text = String::from_utf8_lossy(&raw);
    parser
        .parse_strict(&text)
        .with_context(|| format!("parsing response for {server}"))?;

    if config.collect_analysis {
        let (_, analysis) = parser.analyze(&text);
        for line in analysis {
            println!("   {line}");
        }
    }

    let whois = Whois::with_parser(&parser, &text, &server);
    println!("{}", serde_json::to_string_pretty(&whois)?);
    Ok(())
}

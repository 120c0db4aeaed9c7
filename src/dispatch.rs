//! Parser selection by whois server, TLD or domain.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use publicsuffix::{List, Psl};
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::WhoisError;
use crate::parser::Parser;
use crate::tld_mappings::server_for_tld;
use crate::tlds::{ALL, DEFAULT};

// Global PSL instance, shared by every registry
static PSL: Lazy<List> = Lazy::new(|| List::new());

/// Process-wide registry built from default configuration.
static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Read-only map from parser identifiers to shared parser instances.
#[derive(Debug)]
pub struct Registry {
    parsers: HashMap<String, Arc<Parser>>,
    default: Arc<Parser>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Build every descriptor eagerly with the given configuration.
    pub fn with_config(config: Config) -> Self {
        let config = Arc::new(config);
        let mut parsers = HashMap::new();

        for spec in ALL.iter().copied() {
            let parser = Arc::new(Parser::new(spec, Arc::clone(&config)));
            for id in std::iter::once(spec.name).chain(spec.aliases.iter().copied()) {
                parsers.insert(id.to_lowercase(), Arc::clone(&parser));
            }
        }

        let default = match parsers.get(&config.default_parser.to_lowercase()) {
            Some(parser) => Arc::clone(parser),
            None => {
                warn!(
                    "Unknown default parser {:?}, using {}",
                    config.default_parser, DEFAULT.name
                );
                Arc::new(Parser::new(DEFAULT, Arc::clone(&config)))
            }
        };

        debug!("Parser registry ready with {} identifiers", parsers.len());
        Self { parsers, default }
    }

    /// Registry configured from the environment (see [`Config::load`]).
    pub fn from_env() -> Result<Self, WhoisError> {
        Ok(Self::with_config(Config::load()?))
    }

    /// Parser for a whois server identifier or a bare TLD; never fails.
    pub fn get_parser(&self, id: &str) -> Arc<Parser> {
        let key = id.trim().trim_end_matches('.').to_lowercase();

        if let Some(parser) = self.parsers.get(&key) {
            return Arc::clone(parser);
        }
        if let Some(parser) = server_for_tld(&key).and_then(|server| self.parsers.get(server)) {
            return Arc::clone(parser);
        }

        debug!("No dedicated parser for {:?}, using {}", id, self.default.get_name());
        Arc::clone(&self.default)
    }

    /// Parser for the registry serving `domain`.
    pub fn parser_for_domain(&self, domain: &str) -> Arc<Parser> {
        match effective_tld(domain) {
            Some(tld) => self.get_parser(&tld),
            None => Arc::clone(&self.default),
        }
    }

    pub fn default_parser(&self) -> Arc<Parser> {
        Arc::clone(&self.default)
    }

    /// Every registered identifier, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.parsers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Effective TLD of a domain: a known two-label suffix, then the PSL, then the last label.
fn effective_tld(domain: &str) -> Option<String> {
    let domain = domain.trim().trim_end_matches('.').to_lowercase();
    let labels: Vec<&str> = domain.split('.').filter(|label| !label.is_empty()).collect();
    if labels.is_empty() {
        return None;
    }

    if labels.len() >= 2 {
        let two = labels[labels.len() - 2..].join(".");
        if server_for_tld(&two).is_some() {
            return Some(two);
        }
    }

    if let Some(parsed) = PSL.domain(domain.as_bytes()) {
        if let Ok(suffix) = std::str::from_utf8(parsed.suffix().as_bytes()) {
            if !suffix.is_empty() {
                return Some(suffix.to_string());
            }
        }
    }

    labels.last().map(|label| label.to_string())
}

/// Dispatcher entry point: parser for a whois server identifier (or bare TLD).
pub fn new_tld_domain_parser(whois_server: &str) -> Arc<Parser> {
    REGISTRY.get_parser(whois_server)
}

/// Parser for the registry serving `domain`, through the global registry.
pub fn parser_for_domain(domain: &str) -> Arc<Parser> {
    REGISTRY.parser_for_domain(domain)
}

/// The process-wide registry.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

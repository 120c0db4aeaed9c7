use serde::{Deserialize, Serialize};

/// Default cap on the amount of response text a parser looks at.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Name of the parser used when a whois server has no dedicated descriptor.
pub const DEFAULT_PARSER: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Responses longer than this are truncated (lenient path) or rejected (strict path)
    pub max_input_bytes: usize,
    /// Parser name used for unknown whois servers
    pub default_parser: String,
    /// Emit a trace event for every key the key map does not know
    pub trace_unmatched_keys: bool,
    /// Record a line-by-line analysis while parsing
    pub collect_analysis: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            default_parser: DEFAULT_PARSER.to_string(),
            trace_unmatched_keys: false,
            collect_analysis: false,
        }
    }
}

impl Config {
    /// Load configuration from defaults, an optional `.env` file and the environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        // A missing .env file is the common case
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        let mut settings = config::Config::builder()
            .set_default("max_input_bytes", defaults.max_input_bytes as i64)?
            .set_default("default_parser", defaults.default_parser)?
            .set_default("trace_unmatched_keys", defaults.trace_unmatched_keys)?
            .set_default("collect_analysis", defaults.collect_analysis)?;

        settings = Self::apply_env_overrides(settings)?;

        let config: Config = settings.build()?.try_deserialize()?;
        Ok(config)
    }

    fn apply_env_overrides(
        mut settings: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        let env_mappings = [
            ("WHOIS_PARSER_MAX_INPUT_BYTES", "max_input_bytes"),
            ("WHOIS_PARSER_DEFAULT", "default_parser"),
            ("WHOIS_PARSER_TRACE_KEYS", "trace_unmatched_keys"),
            ("WHOIS_PARSER_ANALYSIS", "collect_analysis"),
        ];

        for (env_var, config_key) in env_mappings {
            if let Ok(value) = std::env::var(env_var) {
                settings = settings.set_override(config_key, value)?;
            }
        }

        Ok(settings)
    }
}

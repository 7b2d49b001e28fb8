//! Environment configuration for the `staffroom` binary.

use clap::ValueEnum;

pub const DEFAULT_LOG_FILTER: &str = "staffroom=info,staffroom_domain=info";
pub const VERBOSE_LOG_FILTER: &str = "staffroom=debug,staffroom_domain=debug";

/// How records are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Settings read from the environment (and `.env`), overridable by flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// `STAFFROOM_LOG`; used when `RUST_LOG` is unset
    pub log_filter: String,
    /// `STAFFROOM_FORMAT`
    pub format: OutputFormat,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup("STAFFROOM_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.into());
        let format = lookup("STAFFROOM_FORMAT")
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        Self { log_filter, format }
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, verbose: bool, format: Option<OutputFormat>) -> Self {
        if verbose {
            self.log_filter = VERBOSE_LOG_FILTER.into();
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

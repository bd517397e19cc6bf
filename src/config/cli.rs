use crate::config::DEFAULT_USER_ID;
use crate::core::{ConfigProvider, FlightOption};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "ski-concierge")]
#[command(about = "Ski Trip Airfare Concierge: ranked ski fares from your home airport")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// User id the conversation is stored under
    #[arg(long)]
    pub user_id: Option<String>,

    /// Append a generated travel tip to fare lists
    #[arg(long)]
    pub tips: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or(DEFAULT_USER_ID)
    }

    fn tips_enabled(&self) -> bool {
        self.tips
    }

    fn catalog(&self) -> Option<&[FlightOption]> {
        None
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        validate_non_empty_string("user_id", self.user_id())
    }
}

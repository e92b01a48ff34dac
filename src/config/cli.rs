use crate::config::toml_config::TomlConfig;
use crate::config::InputSettings;
use crate::utils::error::Result;
use crate::utils::validation::{validate_side_count, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "triangle-check")]
#[command(about = "Check whether three side lengths can form a triangle")]
pub struct CliConfig {
    /// Side lengths for batch mode (prompts are skipped)
    #[arg(value_name = "SIDE", allow_negative_numbers = true)]
    pub sides: Vec<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ask again after an invalid integer instead of exiting
    #[arg(long)]
    pub reprompt: bool,

    /// Attempts allowed per side when re-prompting
    #[arg(long)]
    pub max_attempts: Option<u32>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn batch_mode(&self) -> bool {
        !self.sides.is_empty()
    }

    /// Loads the config file, if any, and merges it with the flags.
    pub fn input_settings(&self) -> Result<InputSettings> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                tracing::debug!("Loaded config from {}: {:?}", path.display(), file);
                Some(file)
            }
            None => None,
        };

        let settings = InputSettings::resolve(file.as_ref(), self.reprompt, self.max_attempts);
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_side_count("sides", &self.sides)
    }
}

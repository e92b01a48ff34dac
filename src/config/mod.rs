#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::ports::InputPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use toml_config::{TomlConfig, MAX_ATTEMPTS, MIN_ATTEMPTS};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Effective input policy after merging flags, the config file and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSettings {
    pub reprompt_on_invalid: bool,
    pub max_attempts: u32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            reprompt_on_invalid: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl InputSettings {
    /// Flags win over the file, the file wins over defaults.
    pub fn resolve(file: Option<&TomlConfig>, reprompt: bool, max_attempts: Option<u32>) -> Self {
        let defaults = Self::default();
        let input = file.map(|f| f.input.clone()).unwrap_or_default();

        Self {
            reprompt_on_invalid: reprompt
                || input
                    .reprompt_on_invalid
                    .unwrap_or(defaults.reprompt_on_invalid),
            max_attempts: max_attempts
                .or(input.max_attempts)
                .unwrap_or(defaults.max_attempts),
        }
    }
}

impl InputPolicy for InputSettings {
    fn reprompt_on_invalid(&self) -> bool {
        self.reprompt_on_invalid
    }

    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Validate for InputSettings {
    fn validate(&self) -> Result<()> {
        validate_range("max_attempts", self.max_attempts, MIN_ATTEMPTS, MAX_ATTEMPTS)
    }
}

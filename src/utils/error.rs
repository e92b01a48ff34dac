use crate::domain::model::SideLabel;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriangleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid integer for {side}: '{input}' ({source})")]
    ParseError {
        side: SideLabel,
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Input ended before {side} was entered")]
    MissingInputError { side: SideLabel },

    #[error("No valid integer for {side} after {attempts} attempts")]
    TooManyAttemptsError { side: SideLabel, attempts: u32 },

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TriangleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TriangleError::ParseError { .. }
            | TriangleError::MissingInputError { .. }
            | TriangleError::TooManyAttemptsError { .. } => ErrorCategory::Input,
            TriangleError::ConfigParseError { .. }
            | TriangleError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TriangleError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TriangleError::ParseError { side, input, .. } => {
                format!("'{}' is not a whole number ({})", input, side)
            }
            TriangleError::MissingInputError { side } => {
                format!("No value was entered for {}", side)
            }
            TriangleError::TooManyAttemptsError { side, attempts } => {
                format!("Gave up on {} after {} invalid entries", side, attempts)
            }
            TriangleError::ConfigParseError { message } => {
                format!("Could not read the configuration: {}", message)
            }
            TriangleError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            TriangleError::IoError(e) => format!("Terminal I/O failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TriangleError::ParseError { .. } | TriangleError::TooManyAttemptsError { .. } => {
                "Enter each side as a whole number such as 3 or -5, or pass --reprompt to retry"
            }
            TriangleError::MissingInputError { .. } => {
                "Provide three lines of input, or pass the sides as arguments"
            }
            TriangleError::ConfigParseError { .. } => {
                "Check that the config file exists and is valid TOML"
            }
            TriangleError::InvalidConfigValueError { .. } => {
                "Fix the option value and run again"
            }
            TriangleError::IoError(_) => "Check that stdin and stdout are available",
        }
    }
}

pub type Result<T> = std::result::Result<T, TriangleError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error(input: &str) -> TriangleError {
        let source = input.parse::<i64>().unwrap_err();
        TriangleError::ParseError {
            side: SideLabel::ALL[0],
            input: input.to_string(),
            source,
        }
    }

    #[test]
    fn test_categories_and_exit_codes() {
        let parse = parse_error("abc");
        assert_eq!(parse.category(), ErrorCategory::Input);
        assert_eq!(parse.exit_code(), 1);

        let config = TriangleError::InvalidConfigValueError {
            field: "max_attempts".to_string(),
            value: "0".to_string(),
            reason: "too small".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.severity(), ErrorSeverity::High);
        assert_eq!(config.exit_code(), 2);

        let io = TriangleError::from(std::io::Error::other("closed"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_messages_name_the_side() {
        let parse = parse_error("x1");
        assert!(parse.to_string().contains("side 1"));
        assert!(parse.user_friendly_message().contains("'x1'"));

        let missing = TriangleError::MissingInputError {
            side: SideLabel::ALL[2],
        };
        assert_eq!(missing.to_string(), "Input ended before side 3 was entered");
    }
}

use crate::utils::error::{Result, TriangleError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(TriangleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Batch mode needs all three sides; interactive mode needs none.
pub fn validate_side_count(field_name: &str, sides: &[String]) -> Result<()> {
    match sides.len() {
        0 | 3 => Ok(()),
        n => Err(TriangleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: sides.join(" "),
            reason: format!("Expected 0 or 3 sides, got {}", n),
        }),
    }
}

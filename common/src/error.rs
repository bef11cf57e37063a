use thiserror::Error;

/// Rejected user input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid {field} '{value}': expected a whole number")]
    NotANumber { field: &'static str, value: String },

    #[error("invalid {field} '{value}': must not be negative")]
    Negative { field: &'static str, value: i64 },

    #[error("{subnets} subnets of {systems} systems is more devices than can be counted")]
    TooManyDevices { subnets: usize, systems: usize },
}

/// Parses a count typed by the user. Surrounding whitespace is ignored.
pub fn parse_count(field: &'static str, raw: &str) -> Result<usize, InputError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        field,
        value: trimmed.to_string(),
    })?;
    validate_count(field, value)
}

/// Negative counts are rejected rather than treated as zero.
pub fn validate_count(field: &'static str, value: i64) -> Result<usize, InputError> {
    usize::try_from(value).map_err(|_| InputError::Negative { field, value })
}

/// One router per subnet plus its systems, or `None` on overflow.
pub fn record_total(subnets: usize, systems: usize) -> Option<usize> {
    subnets.checked_mul(systems)?.checked_add(subnets)
}

/// Rejects count pairs whose record total overflows.
pub fn validate_total(subnets: usize, systems: usize) -> Result<usize, InputError> {
    record_total(subnets, systems).ok_or(InputError::TooManyDevices { subnets, systems })
}

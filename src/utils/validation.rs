use crate::error::Result;
use validator::{Validate, ValidationError};

/// Runs the derive-generated checks and lifts failures into the crate error.
pub fn validate<T: Validate>(val: &T) -> Result<()> {
    val.validate()?;
    Ok(())
}

/// Field bound counted in bytes, not characters, matching the column limit.
pub fn within_500_bytes(value: &str) -> std::result::Result<(), ValidationError> {
    if value.len() > 500 {
        let mut error = ValidationError::new("byte_length");
        error.message = Some("must not be more than 500 bytes long".into());
        return Err(error);
    }
    Ok(())
}

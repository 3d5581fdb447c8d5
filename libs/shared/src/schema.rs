use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("malformed body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("field validation failed: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Deserializes `bytes` as JSON and runs the type's field rules.
pub fn decode<T>(bytes: &[u8]) -> Result<T, SchemaError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_slice(bytes)?;
    value.validate()?;
    Ok(value)
}

//! wellpath-core
//!
//! Pure record types shared by the lab parser, the intake normalizer, the
//! report context builder and the renderer. No I/O and no engine
//! dependencies; this is the shared vocabulary of the pipeline.

pub mod blank;
pub mod error;
pub mod models;

use serde::de::DeserializeOwned;

use error::CoreError;

/// Decode a JSON document into one of the pipeline records.
pub fn from_json_str<T: DeserializeOwned>(input: &str) -> Result<T, CoreError> {
    Ok(serde_json::from_str(input)?)
}

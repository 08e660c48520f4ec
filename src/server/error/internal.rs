use thiserror::Error;

/// Internal issues indicating corrupt stored data or possible bugs.
///
/// Always results in a 500 Internal Server Error with a generic message.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored discriminator is not a known unit kind.
    #[error("Unit {unit_id} has unknown type '{kind}'")]
    UnknownUnitKind { unit_id: i32, kind: String },

    /// Stored content column is not valid JSON.
    #[error("Failed to parse content of unit {unit_id}: {source}")]
    CorruptUnitContent {
        unit_id: i32,
        #[source]
        source: serde_json::Error,
    },

    /// Stored content parsed as JSON but does not match the unit's kind.
    #[error("Stored content of unit {unit_id} is invalid: {errors}")]
    InvalidUnitContent { unit_id: i32, errors: String },
}

use crate::model::api::{ErrorDto, ValidationErrorDto};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    /// Error raised before a response was received, such as a network failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            message: message.into(),
        }
    }

    /// Builds an error from a failed response body.
    ///
    /// Understands both the `{ error }` body and the schema-validation body; anything else is
    /// shown as plain text.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = if let Ok(dto) = serde_json::from_str::<ErrorDto>(body) {
            dto.error
        } else if let Ok(dto) = serde_json::from_str::<ValidationErrorDto>(body) {
            let fields: Vec<&str> = dto.errors.values().map(String::as_str).collect();
            if fields.is_empty() {
                dto.message
            } else {
                fields.join(" ")
            }
        } else if body.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            body.to_string()
        };

        Self { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

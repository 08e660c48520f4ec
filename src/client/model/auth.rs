/// Bearer token entered through the access-key dialog.
///
/// Tokens are issued elsewhere; the client only keeps the one it was given for the session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    token: Option<String>,
}

impl AuthState {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn clear(&mut self) {
        self.token = None;
    }
}

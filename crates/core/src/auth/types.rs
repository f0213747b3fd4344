use std::fmt;

use super::AuthError;

/// Name of the HTTP header carrying the credential.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Opaque bearer credential obtained from an external login flow.
///
/// The token is treated as a black box: no structural or expiry checks
/// happen here, that is the authentication collaborator's job. The only
/// constraint enforced is non-emptiness, at construction time.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Create a token from a non-empty string.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmptyToken`] when the input is empty or
    /// consists solely of whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, AuthError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(AuthError::EmptyToken);
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render the `Authorization` header value for this token.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// The secret must not leak through debug formatting.
impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

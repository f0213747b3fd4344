use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("bearer token must not be empty")]
    EmptyToken,
}

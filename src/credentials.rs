use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use std::fmt;
use thiserror::Error;

const BASIC_SCHEME: &str = "Basic";

/// User name and password carried by HTTP Basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user: String,
    password: String,
}

/// Reasons an `Authorization` header could not yield Basic credentials.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("authorization scheme `{0}` is not Basic")]
    UnsupportedScheme(String),
    #[error("basic credentials are not valid base64")]
    InvalidEncoding(#[source] base64::DecodeError),
    #[error("basic credentials are not valid UTF-8")]
    InvalidUtf8,
    #[error("basic credentials are missing the `:` separator")]
    MissingSeparator,
}

impl Credentials {
    pub fn new<U, P>(user: U, password: P) -> Self
    where
        U: Into<String>,
        P: Into<String>,
    {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Parses an `Authorization` header value such as `Basic dXNlcjpwYXNz`.
    ///
    /// The scheme is matched case-insensitively. The password runs to the end
    /// of the decoded payload, so it may itself contain `:`.
    pub fn from_authorization(value: &str) -> Result<Self, CredentialsError> {
        let value = value.trim();
        let (scheme, payload) = value.split_once(' ').unwrap_or((value, ""));
        if !scheme.eq_ignore_ascii_case(BASIC_SCHEME) {
            return Err(CredentialsError::UnsupportedScheme(scheme.to_string()));
        }

        let decoded = BASE64_STANDARD
            .decode(payload.trim())
            .map_err(CredentialsError::InvalidEncoding)?;
        let decoded = String::from_utf8(decoded).map_err(|_| CredentialsError::InvalidUtf8)?;
        let (user, password) = decoded
            .split_once(':')
            .ok_or(CredentialsError::MissingSeparator)?;

        Ok(Self::new(user, password))
    }

    /// Serializes the credentials into an `Authorization` header value.
    pub fn to_authorization(&self) -> String {
        let encoded = BASE64_STANDARD.encode(format!("{}:{}", self.user, self.password));
        format!("{BASIC_SCHEME} {encoded}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

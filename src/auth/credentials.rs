use base64::{engine::general_purpose, Engine as _};
use thiserror::Error;

/// Credential carried by an `Authorization` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Static API token or signed session token
    Bearer(String),
    Basic { email: String, password: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("missing credential after scheme")]
    MissingCredential,

    #[error("unsupported authorization scheme: {0}")]
    UnsupportedScheme(String),

    #[error("basic credential is not valid base64")]
    InvalidBase64,

    #[error("basic credential is not valid UTF-8")]
    InvalidUtf8,

    #[error("basic credential has no ':' separator")]
    MissingSeparator,
}

impl Credentials {
    /// Split `<scheme> <credential>` on the first space and decode it.
    pub fn parse(header: &str) -> Result<Self, CredentialsError> {
        let (scheme, credential) = header
            .split_once(' ')
            .ok_or(CredentialsError::MissingCredential)?;

        if credential.is_empty() {
            return Err(CredentialsError::MissingCredential);
        }

        match scheme {
            "Bearer" => Ok(Credentials::Bearer(credential.to_string())),
            "Basic" => {
                let bytes = general_purpose::STANDARD
                    .decode(credential)
                    .map_err(|_| CredentialsError::InvalidBase64)?;
                let decoded = String::from_utf8(bytes).map_err(|_| CredentialsError::InvalidUtf8)?;
                let (email, password) = decoded
                    .split_once(':')
                    .ok_or(CredentialsError::MissingSeparator)?;
                Ok(Credentials::Basic {
                    email: email.to_string(),
                    password: password.to_string(),
                })
            }
            other => Err(CredentialsError::UnsupportedScheme(other.to_string())),
        }
    }
}

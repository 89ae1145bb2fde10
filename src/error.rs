//! Error taxonomy for aggregation and projection.

use thiserror::Error;

/// Message key the transport boundary uses to localize the not-found response.
pub const NOT_FOUND_MESSAGE_KEY: &str = "serverGroup.not.found";

/// Errors surfaced by the aggregation core.
///
/// Provider failures are deliberately passed through unmodified: this core has
/// no opinion on provider reliability policy, so the boundary decides what the
/// caller sees.
#[derive(Debug, Error)]
pub enum Error {
    /// An exact lookup matched zero providers.
    #[error("server group {name} not found in {account}/{region}")]
    NotFound {
        name: String,
        account: String,
        region: String,
    },

    /// A provider call failed; the underlying error is untouched.
    #[error(transparent)]
    Provider(#[from] anyhow::Error),

    /// A server group could not be rendered as an open record.
    #[error("failed to serialize server group for expanded view")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Localization key for this error, when one is defined.
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            Error::NotFound { .. } => Some(NOT_FOUND_MESSAGE_KEY),
            _ => None,
        }
    }

    /// Substitution parameters for the localized message, in template order.
    pub fn message_args(&self) -> Option<[&str; 3]> {
        match self {
            Error::NotFound {
                name,
                account,
                region,
            } => Some([name, account, region]),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_message_key_and_args() {
        let err = Error::NotFound {
            name: "myapp-main-v001".to_string(),
            account: "prod".to_string(),
            region: "us-east-1".to_string(),
        };
        assert_eq!(err.message_key(), Some("serverGroup.not.found"));
        assert_eq!(
            err.message_args(),
            Some(["myapp-main-v001", "prod", "us-east-1"])
        );
        assert_eq!(
            err.to_string(),
            "server group myapp-main-v001 not found in prod/us-east-1"
        );
    }

    #[test]
    fn provider_errors_pass_through_unmodified() {
        let err = Error::from(anyhow::anyhow!("backend exploded"));
        assert_eq!(err.to_string(), "backend exploded");
        assert!(err.message_key().is_none());
    }
}

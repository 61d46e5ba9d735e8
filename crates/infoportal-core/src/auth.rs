//! Pluggable admin credential check.
//!
//! The dashboard only needs an authorized/denied answer, so the mechanism is
//! behind a trait; the shipped implementation is the static shared secret the
//! portal has always used, compared in constant time.

use subtle::ConstantTimeEq;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Authorized,
    Denied,
}

impl Access {
    #[must_use]
    pub fn is_authorized(self) -> bool {
        matches!(self, Access::Authorized)
    }
}

pub trait CredentialCheck: Send + Sync {
    fn authenticate(&self, credential: &str) -> Access;
}

/// Shared-secret check. Length leaks through the comparison; the secret value
/// does not.
pub struct StaticSecret {
    secret: String,
}

impl StaticSecret {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl CredentialCheck for StaticSecret {
    fn authenticate(&self, credential: &str) -> Access {
        if self
            .secret
            .as_bytes()
            .ct_eq(credential.as_bytes())
            .into()
        {
            Access::Authorized
        } else {
            Access::Denied
        }
    }
}

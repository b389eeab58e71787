//! The caller-supplied secret for the completion provider.

use std::fmt;

use serde::Deserialize;

/// A provider API key supplied per request.
///
/// The value is never persisted. `Debug` is redacted and there is no
/// `Display` or `Serialize` implementation, so the key cannot end up in a log
/// line or a response body without an explicit call to [`expose`]. It can be
/// deserialized straight out of a request body.
///
/// [`expose`]: ProviderCredential::expose
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ProviderCredential(String);

impl ProviderCredential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// The raw key, for building the outbound `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Replace every occurrence of the key inside `text`.
    pub fn redact(&self, text: &str) -> String {
        if self.is_empty() {
            return text.to_string();
        }
        text.replace(self.0.as_str(), "[redacted]")
    }
}

impl fmt::Debug for ProviderCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProviderCredential([redacted])")
    }
}

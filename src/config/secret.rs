//! Credential handling using the secrecy crate
//!
//! Grafana API keys and basic-auth passwords are held in `Secret` containers
//! so they are zeroed on drop and redacted from `Debug` output. The value must
//! be pulled out explicitly with `expose_secret()` when the request header is
//! built.
//!
//! # Example
//!
//! ```rust
//! use grafana_export::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let api_key = secret_string("glsa_example".to_string());
//! assert_eq!(api_key.expose_secret().as_ref(), "glsa_example");
//!
//! // Debug output is redacted
//! assert!(!format!("{api_key:?}").contains("glsa_example"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the required traits for Secret
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// Check if the secret value is empty or only whitespace
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// A credential string wrapped in a zeroizing, redacting container
pub type SecretString = Secret<SecretValue>;

/// Wrap a String as a SecretString
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

/// Wrap an optional String as an optional SecretString
#[inline]
pub fn secret_string_opt(value: Option<String>) -> Option<SecretString> {
    value.map(secret_string)
}

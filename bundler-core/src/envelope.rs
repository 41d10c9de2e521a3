//! Carriers that transport a bundle as a named extra.

use crate::bundle::Bundle;
use crate::error::Result;

/// Anything that can carry bundles as named extras.
pub trait Envelope {
    /// Stores `bundle` under `key`, replacing any previous extra.
    fn put_bundle_extra(&mut self, key: String, bundle: Bundle);

    /// Reads the bundle stored under `key`.
    ///
    /// # Errors
    /// Returns [`crate::Error::TypeMismatch`] if the extra is not a bundle.
    fn bundle_extra(&self, key: &str) -> Result<Option<Bundle>>;
}

/// A message addressed by an action, carrying a bundle of extras.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intent {
    action: Option<String>,
    extras: Bundle,
}

impl Intent {
    /// Creates an intent without an action.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an intent for the given action.
    #[must_use]
    pub fn with_action(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            extras: Bundle::new(),
        }
    }

    /// Returns the action, if any.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Returns the extras.
    #[must_use]
    pub fn extras(&self) -> &Bundle {
        &self.extras
    }

    /// Returns the extras mutably.
    pub fn extras_mut(&mut self) -> &mut Bundle {
        &mut self.extras
    }
}

impl Envelope for Intent {
    fn put_bundle_extra(&mut self, key: String, bundle: Bundle) {
        self.extras.put_bundle(key, bundle);
    }

    fn bundle_extra(&self, key: &str) -> Result<Option<Bundle>> {
        self.extras.get_bundle(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_extras() {
        let mut inner = Bundle::new();
        inner.put_string("name", String::from("x"));
        let mut intent = Intent::with_action("demo.VIEW");
        intent.put_bundle_extra(String::from("payload"), inner.clone());
        assert_eq!(intent.action(), Some("demo.VIEW"));
        assert_eq!(intent.bundle_extra("payload").unwrap(), Some(inner));
        assert_eq!(intent.bundle_extra("other").unwrap(), None);
    }

    #[test]
    fn test_non_bundle_extra() {
        let mut intent = Intent::new();
        intent.extras_mut().put_int("payload", 1);
        assert!(intent.bundle_extra("payload").is_err());
    }
}

//! The trait implemented by every type that has a generated companion.

use crate::bundle::Bundle;
use crate::error::Result;

/// A type whose fields can be marshaled to and from a [`Bundle`].
///
/// Implementations are generated, either by `#[derive(Bundled)]` or by the
/// build-script driver; they delegate to the type's companion struct.
pub trait Bundled: Sized + 'static {
    /// Canonical type name (`module::path::Name`).
    const TYPE_NAME: &'static str;

    /// Writes every eligible field into a fresh bundle.
    fn to_bundle(&self) -> Bundle;

    /// Builds a new instance from the entries of `bundle`.
    ///
    /// # Errors
    /// Returns an error if a required entry is missing or holds the wrong
    /// family.
    fn from_bundle(bundle: &Bundle) -> Result<Self>;

    /// Key under which the whole bundle is stored in an envelope.
    #[must_use]
    fn envelope_key() -> String {
        format!("KEY_{}_bundle", Self::TYPE_NAME)
    }
}

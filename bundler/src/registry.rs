//! Companion registry and runtime facade.
//!
//! A [`Registry`] maps types to their generated companions. It is assembled
//! once with [`RegistryBuilder`], optionally installed process-wide with
//! [`install`], and immutable afterwards, so lookups take no lock.

use bundler_core::{Bundle, Bundled, Envelope, Error, Result};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{LazyLock, OnceLock};

/// Type-erased entry points of one generated companion.
#[derive(Debug, Clone, Copy)]
pub struct Companion {
    type_name: &'static str,
    encode: fn(&dyn Any) -> Option<Bundle>,
    decode: fn(&Bundle) -> Result<Box<dyn Any>>,
}

impl Companion {
    /// Creates the companion entry for `T`.
    #[must_use]
    pub fn of<T: Bundled>() -> Self {
        Self {
            type_name: T::TYPE_NAME,
            encode: encode_erased::<T>,
            decode: decode_erased::<T>,
        }
    }

    /// Canonical name of the companion's type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

fn encode_erased<T: Bundled>(object: &dyn Any) -> Option<Bundle> {
    object.downcast_ref::<T>().map(T::to_bundle)
}

fn decode_erased<T: Bundled>(bundle: &Bundle) -> Result<Box<dyn Any>> {
    T::from_bundle(bundle).map(|object| Box::new(object) as Box<dyn Any>)
}

/// Builder for a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    companions: HashMap<TypeId, Companion>,
}

impl RegistryBuilder {
    /// Registers the companion of `T`. Registering a type twice keeps one entry.
    #[must_use]
    pub fn register<T: Bundled>(mut self) -> Self {
        tracing::debug!("Registering bundler companion for {}", T::TYPE_NAME);
        self.companions.insert(TypeId::of::<T>(), Companion::of::<T>());
        self
    }

    /// Builds the registry.
    #[must_use]
    pub fn build(self) -> Registry {
        Registry {
            companions: self.companions,
        }
    }
}

/// Immutable table of companions keyed by type.
#[derive(Debug, Default)]
pub struct Registry {
    companions: HashMap<TypeId, Companion>,
}

impl Registry {
    /// Starts building a registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Returns the number of registered companions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.companions.len()
    }

    /// Returns true if no companion is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.companions.is_empty()
    }

    /// Returns the canonical names of every registered type.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.companions.values().map(Companion::type_name)
    }

    /// Returns true if `T` has a registered companion.
    #[must_use]
    pub fn has_companion<T: Bundled>(&self) -> bool {
        self.companions.contains_key(&TypeId::of::<T>())
    }

    /// Returns true if the dynamic type of `object` has a registered companion.
    #[must_use]
    pub fn has_companion_for(&self, object: &dyn Any) -> bool {
        self.companions.contains_key(&object.type_id())
    }

    fn companion<T: Bundled>(&self) -> Result<&Companion> {
        self.companions.get(&TypeId::of::<T>()).ok_or_else(|| {
            tracing::warn!("No bundler companion for {}", T::TYPE_NAME);
            Error::companion_not_found(T::TYPE_NAME)
        })
    }

    /// Encodes an object whose type is only known at runtime.
    ///
    /// # Errors
    /// Returns [`Error::CompanionNotFound`] if the dynamic type is not
    /// registered. A `dyn Any` carries no type name, so the error names the
    /// type by the `Debug` form of its [`TypeId`].
    pub fn encode(&self, object: &dyn Any) -> Result<Bundle> {
        let companion = self.companions.get(&object.type_id()).ok_or_else(|| {
            tracing::warn!("No bundler companion for {:?}", object.type_id());
            Error::companion_not_found(format!("{:?}", object.type_id()))
        })?;
        (companion.encode)(object).ok_or_else(|| Error::companion_not_found(companion.type_name))
    }

    /// Encodes `object` through its registered companion.
    ///
    /// # Errors
    /// Returns [`Error::CompanionNotFound`] if `T` is not registered.
    pub fn to_bundle<T: Bundled>(&self, object: &T) -> Result<Bundle> {
        let companion = self.companion::<T>()?;
        (companion.encode)(object).ok_or_else(|| Error::companion_not_found(T::TYPE_NAME))
    }

    /// Decodes a `T` through its registered companion.
    ///
    /// # Errors
    /// Returns [`Error::CompanionNotFound`] if `T` is not registered and
    /// [`Error::InvocationFailure`] wrapping the decode error otherwise.
    pub fn from_bundle<T: Bundled>(&self, bundle: &Bundle) -> Result<T> {
        let companion = self.companion::<T>()?;
        let object = (companion.decode)(bundle).map_err(|e| Error::invocation(T::TYPE_NAME, e))?;
        object
            .downcast::<T>()
            .map(|object| *object)
            .map_err(|_| Error::companion_not_found(T::TYPE_NAME))
    }

    /// Stores the bundle of `object` in `envelope` under
    /// `KEY_<type name>_bundle` and returns the envelope.
    ///
    /// # Errors
    /// Returns [`Error::CompanionNotFound`] if `T` is not registered.
    pub fn put_extra<E: Envelope, T: Bundled>(&self, mut envelope: E, object: &T) -> Result<E> {
        let bundle = self.to_bundle(object)?;
        envelope.put_bundle_extra(T::envelope_key(), bundle);
        Ok(envelope)
    }

    /// Reads a `T` back from `envelope`; `None` if nothing was stored.
    ///
    /// # Errors
    /// Returns [`Error::CompanionNotFound`] if `T` is not registered,
    /// [`Error::TypeMismatch`] if the extra is not a bundle and
    /// [`Error::InvocationFailure`] if decoding fails.
    pub fn from_envelope<E: Envelope, T: Bundled>(&self, envelope: &E) -> Result<Option<T>> {
        self.companion::<T>()?;
        envelope
            .bundle_extra(&T::envelope_key())?
            .map(|bundle| self.from_bundle(&bundle))
            .transpose()
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();
static EMPTY: LazyLock<Registry> = LazyLock::new(Registry::default);

/// Installs `registry` as the process-wide registry.
///
/// # Errors
/// Returns the registry back if one is already installed.
pub fn install(registry: Registry) -> std::result::Result<(), Registry> {
    let count = registry.len();
    REGISTRY.set(registry)?;
    tracing::debug!("Installed bundler registry with {} companions", count);
    Ok(())
}

/// Returns the installed registry, if any.
#[must_use]
pub fn global() -> Option<&'static Registry> {
    REGISTRY.get()
}

fn installed() -> &'static Registry {
    REGISTRY.get().unwrap_or(&*EMPTY)
}

/// Returns true if `T` has a companion in the installed registry.
#[must_use]
pub fn has_companion<T: Bundled>() -> bool {
    installed().has_companion::<T>()
}

/// Encodes `object` through the installed registry.
///
/// # Errors
/// See [`Registry::to_bundle`].
pub fn to_bundle<T: Bundled>(object: &T) -> Result<Bundle> {
    installed().to_bundle(object)
}

/// Decodes a `T` through the installed registry.
///
/// # Errors
/// See [`Registry::from_bundle`].
pub fn from_bundle<T: Bundled>(bundle: &Bundle) -> Result<T> {
    installed().from_bundle(bundle)
}

/// Stores `object` in `envelope` through the installed registry.
///
/// # Errors
/// See [`Registry::put_extra`].
pub fn put_extra<E: Envelope, T: Bundled>(envelope: E, object: &T) -> Result<E> {
    installed().put_extra(envelope, object)
}

/// Reads a `T` from `envelope` through the installed registry.
///
/// # Errors
/// See [`Registry::from_envelope`].
pub fn from_envelope<E: Envelope, T: Bundled>(envelope: &E) -> Result<Option<T>> {
    installed().from_envelope(envelope)
}

//! Generation settings.

/// How container keys and type names are rooted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyRoot {
    /// Keys use the class's qualified name as a string literal.
    #[default]
    Qualified,
    /// Keys are built with `concat!(module_path!(), ...)` at the expansion
    /// site, so they follow the module the type is declared in.
    ModulePath,
}

/// Settings shared by every companion a generator emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Path through which generated code reaches the runtime crate.
    pub runtime_path: String,
    /// Suffix appended to the class's simple name to name the companion.
    pub companion_suffix: String,
    /// How keys are rooted.
    pub key_root: KeyRoot,
    /// Visibility of the generated companion struct (`pub`, `pub(crate)`).
    pub visibility: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_path: String::from("::bundler"),
            companion_suffix: String::from("Bundler"),
            key_root: KeyRoot::Qualified,
            visibility: String::from("pub"),
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the runtime crate path.
    #[must_use]
    pub fn with_runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }

    /// Sets the companion suffix.
    #[must_use]
    pub fn with_companion_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.companion_suffix = suffix.into();
        self
    }

    /// Sets the key root style.
    #[must_use]
    pub fn with_key_root(mut self, key_root: KeyRoot) -> Self {
        self.key_root = key_root;
        self
    }

    /// Sets the companion visibility; an empty string means private.
    #[must_use]
    pub fn with_visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }

    /// Returns the companion struct name for a class.
    #[must_use]
    pub fn companion_name(&self, simple_name: &str) -> String {
        format!("{}{}", simple_name, self.companion_suffix)
    }
}

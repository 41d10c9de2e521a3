//! Build-script driver.
//!
//! Reads an XML schema, generates one source file per class and writes it to
//! an output directory (typically `OUT_DIR`):
//!
//! ```ignore
//! // build.rs
//! fn main() {
//!     let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap());
//!     bundler_codegen::BuildDriver::new()
//!         .run("schema/profile.xml".as_ref(), &out_dir)
//!         .expect("bundle companions");
//! }
//! ```

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::generator::Generator;
use crate::rust::to_snake_case;
use bundler_schema::{Schema, parse_schema};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// File name of a companion: the snake-cased module path of the class
/// followed by the snake-cased companion name.
fn companion_file_name(qualified_name: &str, companion: &str) -> String {
    let mut segments: Vec<String> = qualified_name
        .split("::")
        .map(to_snake_case)
        .collect();
    segments.pop();
    segments.push(to_snake_case(companion));
    format!("{}.rs", segments.join("_"))
}

/// One generated companion and where it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCompanion {
    /// Qualified name of the class.
    pub qualified_name: String,
    /// File name inside the output directory.
    pub file_name: String,
    /// Generated source.
    pub source: String,
}

/// Generates companions for every class of a schema document.
#[derive(Debug, Clone, Default)]
pub struct BuildDriver {
    config: GeneratorConfig,
}

impl BuildDriver {
    /// Creates a driver with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Generates the companions of `schema` without touching the filesystem.
    ///
    /// # Errors
    /// Returns the first validation or generation failure, including two
    /// classes mapping to the same file name; nothing is produced for any
    /// class in that case.
    pub fn generate(&self, schema: &Schema) -> Result<Vec<GeneratedCompanion>, CodegenError> {
        let generator = Generator::new(schema).with_config(self.config.clone());
        let classes = generator.generate_classes().inspect_err(|e| {
            tracing::error!("Bundle generation failed: {}", e);
        })?;

        let mut file_names = HashSet::new();
        classes
            .into_iter()
            .map(|(class, code)| {
                let companion = self.config.companion_name(class.simple_name());
                let file_name = companion_file_name(&class.qualified_name, &companion);
                if !file_names.insert(file_name.clone()) {
                    return Err(CodegenError::generation(format!(
                        "companion file {} of {} is already generated for another class",
                        file_name, class.qualified_name
                    )));
                }
                tracing::info!("Generated {} for {}", companion, class.qualified_name);
                Ok(GeneratedCompanion {
                    qualified_name: class.qualified_name.clone(),
                    file_name,
                    source: format!(
                        "// Generated by bundler-codegen from {}. Do not edit.\n\n{}",
                        class.qualified_name, code
                    ),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| {
                tracing::error!("Bundle generation failed: {}", e);
            })
    }

    /// Reads the schema at `schema_path` and writes one file per class into
    /// `out_dir`, creating the directory if needed.
    ///
    /// # Errors
    /// Returns `CodegenError` if reading, parsing, generation or writing fails.
    pub fn run(
        &self,
        schema_path: &Path,
        out_dir: &Path,
    ) -> Result<Vec<GeneratedCompanion>, CodegenError> {
        let xml = fs::read_to_string(schema_path)?;
        let schema = parse_schema(&xml)?;
        let companions = self.generate(&schema)?;

        fs::create_dir_all(out_dir)?;
        for companion in &companions {
            let path = out_dir.join(&companion.file_name);
            fs::write(&path, &companion.source)?;
            tracing::info!("Wrote {}", path.display());
        }
        Ok(companions)
    }
}

//! JSON manifests declaring a style table and a set of wrappers.
//!
//! A manifest is the file-based way to configure wrappers, used by the
//! `classed` command line tool:
//!
//! ```json
//! {
//!   "validation": "strict",
//!   "tableFile": "App.module.json",
//!   "components": {
//!     "Box": {
//!       "target": "div",
//!       "variants": { "color": { "harsh": "red", "soft": "green" } },
//!       "defaultVariants": { "color": "harsh" },
//!       "classNames": ["base"]
//!     },
//!     "FancyBox": { "target": "Box", "classNames": ["big"] }
//!   }
//! }
//! ```
//!
//! Exactly one of `table` (inline object) and `tableFile` (path relative to
//! the manifest) must be present. A target starting with an uppercase letter
//! names a component declared earlier in the same manifest; anything else
//! is a tag name.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::classed::{bind_with, Binder, Classed};
use crate::element::Target;
use crate::table::{StyleTable, TableError};
use crate::variant::{
    DefaultVariants, DefinitionError, Validation, VariantDefinition, VariantSchema,
};

/// Error returned when a manifest cannot be loaded or built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to parse manifest{}: {message}", location(path.as_ref()))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("failed to read manifest {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("manifest declares neither `table` nor `tableFile`")]
    MissingTable,

    #[error("manifest declares both `table` and `tableFile`")]
    AmbiguousTable,

    #[error("component '{component}' targets unknown component '{target}'")]
    UnknownTarget { component: String, target: String },

    #[error("component '{component}': {source}")]
    Definition {
        component: String,
        #[source]
        source: DefinitionError,
    },

    #[error("no component named '{name}'")]
    UnknownComponent { name: String },
}

fn location(path: Option<&PathBuf>) -> String {
    path.map(|p| format!(" {}", p.display())).unwrap_or_default()
}

/// One component entry: a target plus its variant definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "ComponentEntry")]
pub struct ComponentSpec {
    pub target: String,
    pub definition: VariantDefinition,
}

/// Wire shape of a component entry. Unknown keys are rejected so a typo
/// such as `defaultVariant` fails instead of dropping the defaults.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ComponentEntry {
    target: String,
    #[serde(default)]
    variants: Option<VariantSchema>,
    #[serde(default)]
    default_variants: Option<DefaultVariants>,
    #[serde(default)]
    class_names: Option<Vec<String>>,
}

impl From<ComponentEntry> for ComponentSpec {
    fn from(entry: ComponentEntry) -> Self {
        let mut definition = VariantDefinition::new();
        if let Some(schema) = entry.variants {
            definition = definition.with_variants(schema);
        }
        if let Some(defaults) = entry.default_variants {
            definition = definition.with_default_variants(defaults);
        }
        if let Some(keys) = entry.class_names {
            definition = definition.class_names(keys);
        }
        Self {
            target: entry.target,
            definition,
        }
    }
}

/// A parsed manifest, not yet bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub validation: Validation,
    #[serde(default)]
    pub table: Option<StyleTable>,
    #[serde(default)]
    pub table_file: Option<PathBuf>,
    #[serde(default)]
    pub components: IndexMap<String, ComponentSpec>,
}

impl Manifest {
    /// Parses a manifest from JSON text.
    pub fn from_json(source: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(source).map_err(|e| ManifestError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Reads and parses a manifest file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ManifestError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&source).map_err(|e| ManifestError::Parse {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })
    }

    /// Reads a manifest file and builds its library, resolving `tableFile`
    /// relative to the manifest's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Library, ManifestError> {
        let path = path.as_ref();
        let manifest = Self::from_path(path)?;
        manifest.build(base_dir(path))
    }

    /// Returns the style table, loading `tableFile` relative to `base_dir`.
    pub fn style_table(&self, base_dir: &Path) -> Result<StyleTable, ManifestError> {
        match (&self.table, &self.table_file) {
            (Some(table), None) => Ok(table.clone()),
            (None, Some(file)) => Ok(StyleTable::from_path(base_dir.join(file))?),
            (None, None) => Err(ManifestError::MissingTable),
            (Some(_), Some(_)) => Err(ManifestError::AmbiguousTable),
        }
    }

    /// Binds the table and derives every component in declaration order.
    ///
    /// # Errors
    ///
    /// Fails on the first table, target or (in strict mode) definition error.
    pub fn build(self, base_dir: &Path) -> Result<Library, ManifestError> {
        let binder = bind_with(self.style_table(base_dir)?, self.validation);
        let mut components: IndexMap<String, Classed> = IndexMap::new();

        for (name, spec) in self.components {
            let target = if is_component_name(&spec.target) {
                components
                    .get(&spec.target)
                    .cloned()
                    .map(Target::from)
                    .ok_or_else(|| unknown_target(&name, &spec.target))?
            } else {
                Target::from(spec.target.as_str())
            };
            let classed = binder
                .derive(target, spec.definition)
                .map_err(|source| ManifestError::Definition {
                    component: name.clone(),
                    source,
                })?;
            components.insert(name, classed);
        }

        log::debug!("built {} components from manifest", components.len());
        Ok(Library { binder, components })
    }

    /// Collects every target and definition problem instead of stopping at
    /// the first. Definition problems are reported regardless of the
    /// manifest's validation mode.
    ///
    /// # Errors
    ///
    /// Fails only if the table itself cannot be loaded.
    pub fn problems(&self, base_dir: &Path) -> Result<Vec<ManifestError>, ManifestError> {
        let table = self.style_table(base_dir)?;
        let mut problems = Vec::new();
        let mut declared: Vec<&str> = Vec::new();

        for (name, spec) in &self.components {
            if is_component_name(&spec.target) && !declared.contains(&spec.target.as_str()) {
                problems.push(unknown_target(name, &spec.target));
            }
            for source in spec.definition.problems(&table) {
                problems.push(ManifestError::Definition {
                    component: name.clone(),
                    source,
                });
            }
            declared.push(name);
        }

        Ok(problems)
    }
}

fn base_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new("."))
}

/// Uppercase targets name components declared earlier in the manifest.
fn is_component_name(target: &str) -> bool {
    target.starts_with(|c: char| c.is_ascii_uppercase())
}

fn unknown_target(component: &str, target: &str) -> ManifestError {
    ManifestError::UnknownTarget {
        component: component.to_string(),
        target: target.to_string(),
    }
}

/// The wrappers built from a manifest, by name.
#[derive(Debug, Clone)]
pub struct Library {
    binder: Binder,
    components: IndexMap<String, Classed>,
}

impl Library {
    pub fn get(&self, name: &str) -> Option<&Classed> {
        self.components.get(name)
    }

    /// Like [`Library::get`], but with an error naming the missing component.
    pub fn require(&self, name: &str) -> Result<&Classed, ManifestError> {
        self.get(name).ok_or_else(|| ManifestError::UnknownComponent {
            name: name.to_string(),
        })
    }

    /// Component names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn binder(&self) -> &Binder {
        &self.binder
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

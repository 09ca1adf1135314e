//! Model catalog
//!
//! Maps model identifiers to their capacity and pricing profile. The catalog is
//! read once per run from JSON and never mutated.

mod types;

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

pub(crate) use types::ModelSpec;

const BUILTIN_CATALOG: &str = include_str!("models.json");
const CATALOG_FILE: &str = "models.json";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CatalogSource {
    File(PathBuf),
    Builtin,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Builtin => write!(f, "built-in catalog"),
        }
    }
}

#[derive(Debug)]
pub(crate) struct ModelCatalog {
    source: CatalogSource,
    models: BTreeMap<String, ModelSpec>,
}

impl ModelCatalog {
    pub(crate) fn from_json(json: &str, source: CatalogSource) -> Result<Self, serde_json::Error> {
        let mut models: BTreeMap<String, ModelSpec> = serde_json::from_str(json)?;
        for (id, spec) in &mut models {
            spec.id.clone_from(id);
        }
        Ok(Self { source, models })
    }

    pub(crate) fn builtin() -> Self {
        Self::from_json(BUILTIN_CATALOG, CatalogSource::Builtin).unwrap_or_else(|e| {
            tracing::error!("built-in catalog is malformed: {e}");
            Self {
                source: CatalogSource::Builtin,
                models: BTreeMap::new(),
            }
        })
    }

    fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|source| AppError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content, CatalogSource::File(path.to_path_buf())).map_err(|source| {
            AppError::CatalogParse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Load the catalog.
    ///
    /// An explicitly named file must load. Otherwise the well-known locations are
    /// tried in order, skipping broken files, and the built-in catalog is the last resort.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        if let Some(path) = explicit {
            let catalog = Self::from_file(path)?;
            tracing::debug!(path = %path.display(), models = catalog.len(), "loaded catalog");
            return Ok(catalog);
        }

        for path in Self::get_catalog_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(catalog) => {
                    tracing::debug!(path = %path.display(), models = catalog.len(), "loaded catalog");
                    return Ok(catalog);
                }
                Err(e) => tracing::warn!("{e}"),
            }
        }

        tracing::debug!("no catalog file found, using built-in catalog");
        Ok(Self::builtin())
    }

    fn get_catalog_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CATALOG_FILE)];

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("docscope").join(CATALOG_FILE));
        }

        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("docscope").join(CATALOG_FILE);
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        paths
    }

    /// Look up a model; missing ids and unusable specs are configuration errors.
    pub(crate) fn get(&self, id: &str) -> Result<&ModelSpec, AppError> {
        let spec = self.models.get(id).ok_or_else(|| AppError::ModelNotFound {
            id: id.to_string(),
            catalog: self.source.to_string(),
        })?;
        spec.validate()?;
        Ok(spec)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &ModelSpec> {
        self.models.values()
    }

    pub(crate) fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub(crate) fn len(&self) -> usize {
        self.models.len()
    }
}

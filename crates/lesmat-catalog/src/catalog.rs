//! Catalog loading from CMS JSON exports.

use std::path::Path;

use lesmat_core::{Error, Result};
use serde::Deserialize;

use crate::material::CourseMaterial;
use crate::term::Term;
use crate::vocabulary::Vocabulary;

/// On-disk shape of a catalog export.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument {
    #[serde(default, alias = "docs")]
    materials: Vec<CourseMaterial>,
    #[serde(default)]
    material_types: Vec<Term>,
    #[serde(default)]
    school_types: Vec<Term>,
    #[serde(default)]
    competences: Vec<Term>,
    #[serde(default)]
    topics: Vec<Term>,
}

/// Records plus the vocabularies they reference.
///
/// A catalog is loaded once per view and never mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    materials: Vec<CourseMaterial>,
    vocabulary: Vocabulary,
}

impl Catalog {
    /// Creates a catalog from already-loaded parts.
    pub fn new(materials: Vec<CourseMaterial>, vocabulary: Vocabulary) -> Self {
        Self {
            materials,
            vocabulary,
        }
    }

    /// Parse a catalog export.
    ///
    /// Records exported without a slug get one derived from their Dutch
    /// title.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut doc: CatalogDocument = serde_json::from_str(json)?;
        let derived = doc
            .materials
            .iter_mut()
            .map(CourseMaterial::fill_slug)
            .filter(|filled| *filled)
            .count();
        if derived > 0 {
            log::debug!("Derived {derived} slug(s) from Dutch titles");
        }
        let catalog = Self::new(
            doc.materials,
            Vocabulary::new(
                doc.material_types,
                doc.school_types,
                doc.competences,
                doc.topics,
            ),
        );
        log::debug!(
            "Parsed catalog with {} materials ({} drafts)",
            catalog.materials.len(),
            catalog.materials.iter().filter(|m| !m.is_published()).count()
        );
        Ok(catalog)
    }

    /// Load a catalog export from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_json_str(&json).map_err(|e| match e {
            Error::Serialization(source) => {
                Error::config(format!("invalid catalog {}: {source}", path.display()))
            }
            other => other,
        })
    }

    /// The public view of this catalog: drafts removed.
    pub fn published(self) -> Self {
        let Self {
            materials,
            vocabulary,
        } = self;
        Self {
            materials: materials.into_iter().filter(|m| m.is_published()).collect(),
            vocabulary,
        }
    }

    /// All records, in export order.
    pub fn materials(&self) -> &[CourseMaterial] {
        &self.materials
    }

    /// The taxonomy vocabularies.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Find a record by slug or `id:<id>` route key.
    pub fn find(&self, route_key: &str) -> Result<&CourseMaterial> {
        self.materials
            .iter()
            .find(|m| m.matches_route_key(route_key))
            .ok_or_else(|| Error::not_found("Material", route_key))
    }

    /// Find a record by identifier.
    pub fn find_by_id(&self, id: &str) -> Option<&CourseMaterial> {
        self.materials.iter().find(|m| m.id == id)
    }
}

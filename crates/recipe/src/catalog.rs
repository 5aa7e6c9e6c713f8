use std::{collections::HashSet, path::Path};

use serde::Deserialize;
use validator::Validate;

use crate::{Category, Error, Recipe, Result};

const BUILTIN: &str = include_str!("../data/recipes.json");

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    recipes: Vec<Recipe>,
}

/// Read-only recipe collection, addressable by id.
///
/// Built once at startup and never mutated. Every recipe passed field
/// validation and ids are unique.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(recipes.len());

        for recipe in &recipes {
            recipe.validate().map_err(|source| Error::Validate {
                id: recipe.id.to_owned(),
                source,
            })?;

            if !ids.insert(recipe.id.as_str()) {
                return Err(Error::DuplicateId(recipe.id.to_owned()));
            }

            if !recipe.has_contiguous_steps() {
                tracing::warn!(recipe = %recipe.id, "instruction steps are not numbered 1..n");
            }
        }

        Ok(Self { recipes })
    }

    /// The catalog shipped inside the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;

        Self::new(file.recipes)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get_by_id(id).is_some()
    }

    /// Recipes of one category, in catalog order.
    pub fn by_category(&self, category: Category) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

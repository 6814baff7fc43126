//! In-memory catalog backends for testing and local development.

use std::collections::HashMap;

use anyhow::{Context, Result};

use crate::catalog::{CameraDirectory, CameraSpec, DeepSkyCatalog};
use crate::models::CelestialTarget;

/// Deep-sky catalog backed by a hash map, seeded from code or JSON.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    entries: HashMap<String, CelestialTarget>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry under an identifier. Identifiers are matched
    /// case-insensitively, like the catalog the original data came from.
    pub fn insert(&mut self, object_id: impl Into<String>, target: CelestialTarget) {
        self.entries.insert(object_id.into().to_uppercase(), target);
    }

    /// Seed from a JSON object mapping identifiers to targets.
    pub fn from_json(raw: &str) -> Result<Self> {
        let entries: HashMap<String, CelestialTarget> =
            serde_json::from_str(raw).context("Failed to parse catalog seed JSON")?;
        let mut catalog = Self::new();
        for (id, target) in entries {
            catalog.insert(id, target);
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DeepSkyCatalog for InMemoryCatalog {
    fn lookup(&self, object_id: &str) -> Option<CelestialTarget> {
        self.entries.get(&object_id.to_uppercase()).cloned()
    }

    fn search(&self, query: &str) -> Vec<String> {
        let needle = query.to_uppercase();
        let mut matches: Vec<String> = self
            .entries
            .iter()
            .filter(|(id, target)| {
                id.contains(&needle) || target.name.to_uppercase().contains(&needle)
            })
            .map(|(id, _)| id.clone())
            .collect();
        matches.sort();
        matches
    }
}

/// Camera directory backed by a vector of spec sheets.
#[derive(Debug, Default)]
pub struct InMemoryCameraDirectory {
    specs: Vec<CameraSpec>,
}

impl InMemoryCameraDirectory {
    pub fn new(specs: Vec<CameraSpec>) -> Self {
        Self { specs }
    }
}

impl CameraDirectory for InMemoryCameraDirectory {
    fn search(&self, query: &str) -> Vec<CameraSpec> {
        let needle = query.to_lowercase();
        self.specs
            .iter()
            .filter(|spec| {
                spec.brand.to_lowercase().contains(&needle)
                    || spec.model.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}

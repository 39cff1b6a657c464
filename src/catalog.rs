// src/catalog.rs
//! Ordered metric catalogs.
//!
//! A catalog is the fixed list of `(group, title)` rows a statement page is
//! expected to carry, in display order. Positions are assigned once, at load,
//! as the 0-based index; binding looks titles up in `index` and writes into the
//! slot at that position.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::config::StatementKind;
use crate::error::{Error, Result};
use crate::specs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDefinition {
    pub position: usize,
    pub group: String,
    pub title: String,
}

/// On-disk shape of one catalog entry.
#[derive(Debug, Deserialize)]
struct Entry {
    group: String,
    title: String,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    definitions: Vec<MetricDefinition>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build from ordered `(group, title)` pairs.
    /// Fails on a blank title or a title that appears twice.
    pub fn from_entries<I, G, T>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (G, T)>,
        G: Into<String>,
        T: Into<String>,
    {
        let mut definitions = Vec::new();
        let mut index = HashMap::new();

        for (position, (group, title)) in entries.into_iter().enumerate() {
            let title: String = title.into();
            if title.trim().is_empty() {
                return Err(Error::BlankTitle { position });
            }
            if let Some(&first) = index.get(&title) {
                return Err(Error::DuplicateTitle { title, first, second: position });
            }
            index.insert(title.clone(), position);
            definitions.push(MetricDefinition { position, group: group.into(), title });
        }

        Ok(Self { definitions, index })
    }

    /// Parse a JSON array of `{"group": …, "title": …}` objects.
    pub fn from_json(text: &str) -> Result<Self> {
        let entries: Vec<Entry> = serde_json::from_str(text)?;
        Self::from_entries(entries.into_iter().map(|e| (e.group, e.title)))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::file(path, e))?;
        Self::from_json(&text)
    }

    /// The built-in catalog for a statement page.
    pub fn for_statement(kind: StatementKind) -> Result<Self> {
        Self::from_json(specs::spec(kind).catalog_json)
    }

    pub fn position(&self, title: &str) -> Option<usize> {
        self.index.get(title).copied()
    }

    pub fn get(&self, position: usize) -> Option<&MetricDefinition> {
        self.definitions.get(position)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetricDefinition> {
        self.definitions.iter()
    }

    /// Distinct group names in first-seen order.
    pub fn groups(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for def in &self.definitions {
            if !out.contains(&def.group.as_str()) {
                out.push(&def.group);
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MetricDefinition;
    type IntoIter = std::slice::Iter<'a, MetricDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

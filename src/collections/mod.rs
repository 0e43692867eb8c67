//! Canonical entity collection
//!
//! `EntityIndex` owns the reference table in its original order and builds the
//! name and slug lookups once, so region resolution and slug resolution are
//! O(1) map lookups rather than nested scans.

use rustc_hash::FxHashMap;

use crate::models::{Dataset, Entity, Region};

/// Entity table indexed by name and by slug
#[derive(Debug, Clone, Default)]
pub struct EntityIndex {
    /// Entities in reference-table order
    entities: Vec<Entity>,
    /// Position of each entity by exact name
    by_name: FxHashMap<String, usize>,
    /// Position of each entity by canonical slug
    by_slug: FxHashMap<String, usize>,
}

impl EntityIndex {
    /// Build the index; a repeated name keeps its first row
    #[must_use]
    pub fn new(entities: Vec<Entity>) -> Self {
        let mut kept = Vec::with_capacity(entities.len());
        let mut by_name = FxHashMap::default();
        let mut by_slug = FxHashMap::default();

        for entity in entities {
            if by_name.contains_key(&entity.name) {
                log::warn!("Duplicate entity {} in reference table, keeping the first row", entity.name);
                continue;
            }

            let position = kept.len();
            by_name.insert(entity.name.clone(), position);
            by_slug.entry(entity.slug()).or_insert(position);
            kept.push(entity);
        }

        Self {
            entities: kept,
            by_name,
            by_slug,
        }
    }

    /// Entities in reference-table order
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of entities
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entity by exact name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.by_name.get(name).map(|&position| &self.entities[position])
    }

    /// Whether `name` is a canonical entity name
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Region of an entity; names outside the table fall into `Unknown`
    #[must_use]
    pub fn region_of(&self, name: &str) -> Region {
        self.get(name).map_or(Region::Unknown, |entity| entity.region)
    }

    /// Entities of one region, in table order
    pub fn in_region(&self, region: Region) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .filter(move |entity| entity.region == region)
    }

    /// Resolve a detail-view slug back to its entity
    ///
    /// `None` is the ordinary "not found" outcome for an unknown slug.
    #[must_use]
    pub fn resolve_slug(&self, slug: &str) -> Option<&Entity> {
        self.by_slug.get(slug).map(|&position| &self.entities[position])
    }

    /// Canonical names that have no record in `dataset`, in table order
    #[must_use]
    pub fn missing_from(&self, dataset: &Dataset) -> Vec<String> {
        self.missing_from_names(dataset.entity_names())
    }

    /// Canonical names absent from an arbitrary name list, in table order
    #[must_use]
    pub fn missing_from_names<'a, I>(&self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let present: rustc_hash::FxHashSet<&str> = names.into_iter().collect();
        self.entities
            .iter()
            .filter(|entity| !present.contains(entity.name.as_str()))
            .map(|entity| entity.name.clone())
            .collect()
    }

    /// Case-insensitive search over name, capital, region, and code
    ///
    /// Name, capital, and region match on substring; the code must match
    /// exactly. A blank query returns nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Entity> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }

        self.entities
            .iter()
            .filter(|entity| {
                entity.name.to_lowercase().contains(&term)
                    || entity.capital.to_lowercase().contains(&term)
                    || entity.region.label().to_lowercase().contains(&term)
                    || entity.code.to_lowercase() == term
            })
            .collect()
    }
}

//! The in-memory poem catalog.

use crate::model::Poem;

/// One load's worth of poems, sorted newest first, plus the derived set of
/// distinct tags. Built once per load and read-only afterward; filtering
/// never touches it.
#[derive(Debug, Default)]
pub struct Catalog {
    poems: Vec<Poem>,
    tags: Vec<String>,
}

impl Catalog {
    /// Builds the catalog from freshly loaded poems. The sort is stable, so
    /// poems sharing a date keep their manifest order.
    pub fn load(mut poems: Vec<Poem>) -> Self {
        poems.sort_by(|a, b| b.date.cmp(&a.date));
        let mut tags: Vec<String> = poems
            .iter()
            .flat_map(|p| p.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        Self { poems, tags }
    }

    pub fn all(&self) -> &[Poem] {
        &self.poems
    }

    /// Distinct tags across the catalog, alphabetically sorted.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn get(&self, id: &str) -> Option<&Poem> {
        self.poems.iter().find(|p| p.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.poems.is_empty()
    }
}

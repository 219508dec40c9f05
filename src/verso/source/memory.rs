//! In-memory source for tests.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use super::ContentSource;
use crate::error::{Result, VersoError};

/// A [`ContentSource`] backed by plain maps. Used by unit tests and any
/// embedding code that wants to browse without touching disk or network.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    docs: HashMap<String, String>,
    assets: HashSet<String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_doc(&mut self, name: &str, content: &str) {
        self.docs.insert(name.to_string(), content.to_string());
    }

    /// Registers an asset name so `exists` reports it present. Assets have
    /// no content here; only presence matters to the crate.
    pub fn insert_asset(&mut self, name: &str) {
        self.assets.insert(name.to_string());
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn fetch(&self, name: &str) -> Result<String> {
        self.docs
            .get(name)
            .cloned()
            .ok_or_else(|| VersoError::Source(format!("no such document: {}", name)))
    }

    async fn exists(&self, name: &str) -> bool {
        self.assets.contains(name) || self.docs.contains_key(name)
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    //! Builder for assembling test collections.

    use super::MemorySource;
    use crate::source::{metadata_name, text_name};

    #[derive(Debug, Default)]
    pub struct CollectionFixture {
        source: MemorySource,
        ids: Vec<String>,
    }

    impl CollectionFixture {
        pub fn new() -> Self {
            Self::default()
        }

        /// Adds a complete poem: manifest entry, metadata document, text
        /// document.
        pub fn with_poem(
            self,
            id: &str,
            title: &str,
            date: &str,
            tags: &[&str],
            body: &str,
        ) -> Self {
            let metadata = serde_json::json!({
                "title": title,
                "date": date,
                "tags": tags,
            });
            self.with_raw_poem(id, &metadata.to_string(), body)
        }

        /// Adds a poem whose metadata document is given verbatim, for
        /// exercising lenient and malformed decoding.
        pub fn with_raw_poem(mut self, id: &str, metadata_json: &str, body: &str) -> Self {
            self.source.insert_doc(&metadata_name(id), metadata_json);
            self.source.insert_doc(&text_name(id), body);
            self.ids.push(id.to_string());
            self
        }

        /// Adds a manifest entry with no documents behind it, simulating a
        /// poem the host lost.
        pub fn with_listed_only(mut self, id: &str) -> Self {
            self.ids.push(id.to_string());
            self
        }

        pub fn with_asset(mut self, name: &str) -> Self {
            self.source.insert_asset(name);
            self
        }

        /// Finishes the collection, writing the manifest under the default
        /// `index.json` name.
        pub fn build(self) -> MemorySource {
            let manifest = serde_json::json!({ "poems": self.ids });
            let mut source = self.source;
            source.insert_doc("index.json", &manifest.to_string());
            source
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_and_exists() {
        let mut source = MemorySource::new();
        source.insert_doc("index.json", "{}");
        source.insert_asset("a.png");

        assert_eq!(source.fetch("index.json").await.unwrap(), "{}");
        assert!(source.fetch("missing.json").await.is_err());
        assert!(source.exists("a.png").await);
        assert!(source.exists("index.json").await);
        assert!(!source.exists("b.png").await);
    }
}

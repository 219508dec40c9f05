//! Concurrent collection loading.
//!
//! The manifest fetch decides everything: if it fails, loading fails. Each
//! listed poem then loads independently and concurrently. A poem whose
//! documents cannot be fetched or decoded is skipped with a warning and
//! never stops the rest; rerunning the command is the only retry.

use futures_util::future::join_all;
use serde::Deserialize;

use crate::config::VersoConfig;
use crate::error::{Result, VersoError};
use crate::model::Poem;
use crate::normalize;
use crate::source::{metadata_name, text_name, ContentSource};

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    poems: Vec<String>,
}

/// What one load pass produced. `skipped` holds the manifest ids whose
/// documents could not be fetched or decoded this session.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub poems: Vec<Poem>,
    pub skipped: Vec<String>,
}

/// Fetches and parses the manifest, returning the declared poem ids.
/// A missing, unparseable, or empty manifest is fatal.
pub async fn manifest_ids(
    source: &dyn ContentSource,
    config: &VersoConfig,
) -> Result<Vec<String>> {
    let raw = source
        .fetch(&config.manifest_file)
        .await
        .map_err(|e| VersoError::ManifestUnavailable(format!("{} ({})", e, source.describe())))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| VersoError::ManifestUnavailable(format!("invalid manifest: {}", e)))?;
    // serde also decodes structs from arrays (positional), so non-objects
    // must be rejected before the struct decode.
    if !value.is_object() {
        return Err(VersoError::ManifestUnavailable(format!(
            "invalid manifest: {} is not a JSON object",
            config.manifest_file
        )));
    }
    let manifest: Manifest = serde_json::from_value(value)
        .map_err(|e| VersoError::ManifestUnavailable(format!("invalid manifest: {}", e)))?;
    if manifest.poems.is_empty() {
        return Err(VersoError::ManifestUnavailable(format!(
            "{} lists no poems",
            config.manifest_file
        )));
    }
    Ok(manifest.poems)
}

/// Loads the whole collection: manifest first, then every poem's document
/// pair concurrently. Poems come back in manifest order regardless of
/// completion order.
pub async fn load(source: &dyn ContentSource, config: &VersoConfig) -> Result<LoadOutcome> {
    let ids = manifest_ids(source, config).await?;

    let fetches = ids.iter().map(|id| load_poem(source, id, &config.image_ext));
    let results = join_all(fetches).await;

    let mut outcome = LoadOutcome::default();
    for (id, result) in ids.iter().zip(results) {
        match result {
            Ok(poem) => outcome.poems.push(poem),
            Err(e) => {
                log::warn!("{}", e);
                outcome.skipped.push(id.clone());
            }
        }
    }
    log::debug!(
        "loaded {} of {} poems from {}",
        outcome.poems.len(),
        ids.len(),
        source.describe()
    );
    Ok(outcome)
}

async fn load_poem(source: &dyn ContentSource, id: &str, image_ext: &str) -> Result<Poem> {
    // The joined futures borrow the document names for the whole join.
    let metadata_doc = metadata_name(id);
    let text_doc = text_name(id);
    let (metadata, text) = tokio::join!(source.fetch(&metadata_doc), source.fetch(&text_doc));
    let metadata =
        metadata.map_err(|e| VersoError::PoemUnavailable(id.to_string(), e.to_string()))?;
    let text = text.map_err(|e| VersoError::PoemUnavailable(id.to_string(), e.to_string()))?;
    normalize::poem(id, &metadata, &text, image_ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::fixtures::CollectionFixture;
    use crate::source::MemorySource;

    fn config() -> VersoConfig {
        VersoConfig::default()
    }

    #[tokio::test]
    async fn test_loads_all_poems_in_manifest_order() {
        let source = CollectionFixture::new()
            .with_poem("b", "Second", "2024-01-02", &[], "two")
            .with_poem("a", "First", "2024-01-01", &[], "one")
            .build();

        let outcome = load(&source, &config()).await.unwrap();
        let ids: Vec<&str> = outcome.poems.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert!(outcome.skipped.is_empty());
    }

    #[tokio::test]
    async fn test_missing_documents_skip_only_that_poem() {
        let source = CollectionFixture::new()
            .with_poem("a", "First", "2024-01-01", &[], "one")
            .with_listed_only("b")
            .build();

        let outcome = load(&source, &config()).await.unwrap();
        assert_eq!(outcome.poems.len(), 1);
        assert_eq!(outcome.poems[0].id, "a");
        assert_eq!(outcome.skipped, vec!["b"]);
    }

    #[tokio::test]
    async fn test_malformed_metadata_skips_that_poem() {
        let source = CollectionFixture::new()
            .with_raw_poem("bad", "{ not json", "body")
            .with_poem("good", "Fine", "2024-01-01", &[], "text")
            .build();

        let outcome = load(&source, &config()).await.unwrap();
        assert_eq!(outcome.poems.len(), 1);
        assert_eq!(outcome.poems[0].id, "good");
        assert_eq!(outcome.skipped, vec!["bad"]);
    }

    #[tokio::test]
    async fn test_every_poem_broken_is_not_fatal() {
        let source = CollectionFixture::new()
            .with_listed_only("a")
            .with_listed_only("b")
            .build();

        let outcome = load(&source, &config()).await.unwrap();
        assert!(outcome.poems.is_empty());
        assert_eq!(outcome.skipped.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_manifest_is_fatal() {
        let source = MemorySource::new();
        let err = load(&source, &config()).await.unwrap_err();
        assert!(matches!(err, VersoError::ManifestUnavailable(_)));
    }

    #[tokio::test]
    async fn test_unparseable_manifest_is_fatal() {
        let mut source = MemorySource::new();
        source.insert_doc("index.json", "[1, 2, 3]");
        let err = load(&source, &config()).await.unwrap_err();
        assert!(matches!(err, VersoError::ManifestUnavailable(_)));
    }

    #[tokio::test]
    async fn test_array_manifest_is_fatal() {
        // Would decode positionally into the poems field without the
        // object check.
        let mut source = MemorySource::new();
        source.insert_doc("index.json", r#"[["a"]]"#);
        let err = load(&source, &config()).await.unwrap_err();
        assert!(matches!(err, VersoError::ManifestUnavailable(_)));
    }

    #[tokio::test]
    async fn test_empty_manifest_is_fatal() {
        let mut source = MemorySource::new();
        source.insert_doc("index.json", r#"{"poems": []}"#);
        let err = load(&source, &config()).await.unwrap_err();
        assert!(matches!(err, VersoError::ManifestUnavailable(_)));
    }

    #[tokio::test]
    async fn test_custom_manifest_name_is_honored() {
        let mut source = MemorySource::new();
        source.insert_doc("list.json", r#"{"poems": ["a"]}"#);
        let mut config = config();
        config.manifest_file = "list.json".to_string();

        let ids = manifest_ids(&source, &config).await.unwrap();
        assert_eq!(ids, vec!["a"]);
    }
}

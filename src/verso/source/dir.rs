//! Local directory source.

use std::path::PathBuf;

use async_trait::async_trait;

use super::ContentSource;
use crate::error::Result;

/// Serves a collection straight from a directory on disk. This is the
/// default source: running verso inside a checked-out collection works
/// without any configuration.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ContentSource for DirSource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    async fn fetch(&self, name: &str) -> Result<String> {
        Ok(tokio::fs::read_to_string(self.root.join(name)).await?)
    }

    async fn exists(&self, name: &str) -> bool {
        tokio::fs::try_exists(self.root.join(name))
            .await
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_reads_a_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.json"), r#"{"poems": []}"#).unwrap();

        let source = DirSource::new(dir.path());
        let content = source.fetch("index.json").await.unwrap();
        assert_eq!(content, r#"{"poems": []}"#);
    }

    #[tokio::test]
    async fn test_fetch_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirSource::new(dir.path());
        assert!(source.fetch("absent.txt").await.is_err());
    }

    #[tokio::test]
    async fn test_exists_probes_without_erroring() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.png"), [0u8; 4]).unwrap();

        let source = DirSource::new(dir.path());
        assert!(source.exists("a.png").await);
        assert!(!source.exists("b.png").await);
    }
}

//! Content sources.
//!
//! A [`ContentSource`] hands back the raw documents of one collection: the
//! manifest, per-poem metadata and text, plus a presence probe for binary
//! assets. Sources stay thin transports; all parsing happens above them in
//! the loader and normalizer, so every implementation behaves identically
//! to the rest of the crate.

use async_trait::async_trait;

use crate::error::Result;

pub mod dir;
pub mod http;
pub mod memory;

pub use dir::DirSource;
pub use http::HttpSource;
pub use memory::MemorySource;

/// Read access to the documents of one poem collection.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Where this source points, for logs and error messages.
    fn describe(&self) -> String;

    /// Fetches a text document by file name, relative to the collection
    /// root.
    async fn fetch(&self, name: &str) -> Result<String>;

    /// Probes whether a document or asset exists. Probe failures count as
    /// absent and never error.
    async fn exists(&self, name: &str) -> bool;
}

/// Metadata document name for a poem id.
pub fn metadata_name(id: &str) -> String {
    format!("{}.metadata.json", id)
}

/// Text document name for a poem id.
pub fn text_name(id: &str) -> String {
    format!("{}.txt", id)
}

/// Image asset name for a poem id, with `ext` carrying its leading dot.
pub fn image_name(id: &str, ext: &str) -> String {
    format!("{}{}", id, ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_names_follow_collection_layout() {
        assert_eq!(
            metadata_name("2025-04-16_Spring Thaw"),
            "2025-04-16_Spring Thaw.metadata.json"
        );
        assert_eq!(text_name("2025-04-16_Spring Thaw"), "2025-04-16_Spring Thaw.txt");
        assert_eq!(
            image_name("2025-04-16_Spring Thaw", ".png"),
            "2025-04-16_Spring Thaw.png"
        );
    }
}

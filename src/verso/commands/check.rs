//! The `check` command.

use futures_util::future::join_all;

use crate::commands::{CmdMessage, CmdResult};
use crate::config::VersoConfig;
use crate::error::Result;
use crate::loader;
use crate::source::{image_name, metadata_name, text_name, ContentSource};

/// Verifies that every manifest id has its metadata, text, and image
/// documents. Read-only: it reports, never repairs. Each incomplete poem
/// lands in `problems` so the CLI can fail the run, which makes the
/// command usable as a pre-deploy gate.
pub async fn run(source: &dyn ContentSource, config: &VersoConfig) -> Result<CmdResult> {
    let ids = loader::manifest_ids(source, config).await?;

    let probes = ids.iter().map(|id| probe(source, id, &config.image_ext));
    let reports = join_all(probes).await;

    let mut result = CmdResult::default();
    for report in reports {
        if let Some(line) = report.describe() {
            result.add_message(CmdMessage::warning(line));
            result.problems.push(report.id);
        }
    }

    if result.problems.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "Collection is complete: {} poem{} checked.",
            ids.len(),
            if ids.len() == 1 { "" } else { "s" }
        )));
    }
    Ok(result)
}

struct Probe {
    id: String,
    metadata: bool,
    text: bool,
    image: bool,
}

impl Probe {
    fn describe(&self) -> Option<String> {
        let mut missing = Vec::new();
        if !self.metadata {
            missing.push("metadata");
        }
        if !self.text {
            missing.push("text");
        }
        if !self.image {
            missing.push("image");
        }
        if missing.is_empty() {
            None
        } else {
            Some(format!("{}: missing {}", self.id, missing.join(", ")))
        }
    }
}

async fn probe(source: &dyn ContentSource, id: &str, image_ext: &str) -> Probe {
    // The joined futures borrow the document names for the whole join.
    let metadata_doc = metadata_name(id);
    let text_doc = text_name(id);
    let image_doc = image_name(id, image_ext);
    let (metadata, text, image) = tokio::join!(
        source.exists(&metadata_doc),
        source.exists(&text_doc),
        source.exists(&image_doc)
    );
    Probe {
        id: id.to_string(),
        metadata,
        text,
        image,
    }
}

//! The `tags` command.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Lists every distinct tag with the number of poems carrying it,
/// alphabetically.
pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if catalog.tags().is_empty() {
        result.add_message(CmdMessage::info("No tags defined"));
        return Ok(result);
    }

    let tag_counts: Vec<(String, usize)> = catalog
        .tags()
        .iter()
        .map(|tag| {
            let count = catalog
                .all()
                .iter()
                .filter(|p| p.tags.iter().any(|t| t == tag))
                .count();
            (tag.clone(), count)
        })
        .collect();

    let total = tag_counts.len();
    result.add_message(CmdMessage::info(format!(
        "{} tag{} defined",
        total,
        if total == 1 { "" } else { "s" }
    )));

    Ok(result.with_tag_counts(tag_counts))
}

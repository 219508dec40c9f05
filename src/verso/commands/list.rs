//! The `list` command.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{self, TagFilter};

/// Returns the poems matching `query` and `tag`, in catalog order.
///
/// An empty catalog and an empty filter result carry different messages so
/// the user can tell "nothing loaded" from "nothing matched".
pub fn run(catalog: &Catalog, query: &str, tag: &TagFilter) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if catalog.is_empty() {
        result.add_message(CmdMessage::warning(
            "No poems could be loaded from the collection.",
        ));
        return Ok(result);
    }

    let matched: Vec<_> = filter::apply(catalog.all(), query, tag)
        .into_iter()
        .cloned()
        .collect();

    if matched.is_empty() {
        result.add_message(CmdMessage::info("No poems match the current filters."));
        return Ok(result);
    }

    Ok(result.with_listed(matched))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Poem;
    use chrono::NaiveDate;

    fn poem(id: &str, title: &str, tags: &[&str]) -> Poem {
        Poem {
            id: id.to_string(),
            title: title.to_string(),
            body: String::new(),
            date: NaiveDate::default(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: format!("{}.png", id),
        }
    }

    #[test]
    fn test_lists_whole_catalog_without_filters() {
        let catalog = Catalog::load(vec![poem("a", "One", &[]), poem("b", "Two", &[])]);
        let result = run(&catalog, "", &TagFilter::All).unwrap();
        assert_eq!(result.listed.len(), 2);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_filters_by_query_and_tag() {
        let catalog = Catalog::load(vec![
            poem("a", "After the Rain", &["rain"]),
            poem("b", "Rain Again", &["fog"]),
        ]);
        let result = run(&catalog, "rain", &TagFilter::Tag("fog".into())).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].id, "b");
    }

    #[test]
    fn test_empty_catalog_and_no_match_report_differently() {
        let empty = run(&Catalog::load(vec![]), "", &TagFilter::All).unwrap();
        assert_eq!(empty.messages.len(), 1);
        assert_eq!(empty.messages[0].level, MessageLevel::Warning);
        assert!(empty.messages[0].content.contains("could be loaded"));

        let catalog = Catalog::load(vec![poem("a", "One", &[])]);
        let no_match = run(&catalog, "zzz", &TagFilter::All).unwrap();
        assert_eq!(no_match.messages.len(), 1);
        assert_eq!(no_match.messages[0].level, MessageLevel::Info);
        assert!(no_match.messages[0].content.contains("match"));
    }
}

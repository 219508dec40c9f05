//! Query and tag filtering over catalog contents.

use crate::model::Poem;

/// Tag side of the filter. `All` matches every poem; `Tag` requires an
/// exact, case-sensitive match against the poem's own tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagFilter {
    All,
    Tag(String),
}

impl TagFilter {
    pub fn matches(&self, poem: &Poem) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => poem.tags.iter().any(|t| t == tag),
        }
    }
}

/// Applies the free-text query and the tag filter, preserving input order.
///
/// The query matches case-insensitively as a plain substring of title or
/// body; an empty (or whitespace-only) query matches everything. Both
/// conditions must hold.
pub fn apply<'a>(poems: &'a [Poem], query: &str, tag: &TagFilter) -> Vec<&'a Poem> {
    let needle = query.trim().to_lowercase();
    poems
        .iter()
        .filter(|p| matches_query(p, &needle) && tag.matches(p))
        .collect()
}

fn matches_query(poem: &Poem, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    poem.title.to_lowercase().contains(needle) || poem.body.to_lowercase().contains(needle)
}

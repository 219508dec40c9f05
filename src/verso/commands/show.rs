//! The `show` command.

use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::{Result, VersoError};

/// Resolves `selector` and returns that poem for full rendering.
///
/// A selector that parses as a number is a 1-based position in catalog
/// order; anything else is looked up as a poem id. Collection ids carry
/// date prefixes, so the two never collide in practice.
pub fn run(catalog: &Catalog, selector: &str) -> Result<CmdResult> {
    let poem = match selector.parse::<usize>() {
        Ok(n) => n
            .checked_sub(1)
            .and_then(|i| catalog.all().get(i))
            .ok_or_else(|| VersoError::PoemNotFound(format!("no poem at position {}", n)))?,
        Err(_) => catalog
            .get(selector)
            .ok_or_else(|| VersoError::PoemNotFound(selector.to_string()))?,
    };
    Ok(CmdResult::default().with_listed(vec![poem.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Poem;
    use chrono::NaiveDate;

    fn poem(id: &str, date: &str) -> Poem {
        Poem {
            id: id.to_string(),
            title: id.to_string(),
            body: String::new(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            tags: vec![],
            image: format!("{}.png", id),
        }
    }

    fn catalog() -> Catalog {
        Catalog::load(vec![poem("old", "2023-01-01"), poem("new", "2025-01-01")])
    }

    #[test]
    fn test_resolves_by_position_in_catalog_order() {
        let result = run(&catalog(), "1").unwrap();
        // newest first, so position 1 is "new"
        assert_eq!(result.listed[0].id, "new");
        let result = run(&catalog(), "2").unwrap();
        assert_eq!(result.listed[0].id, "old");
    }

    #[test]
    fn test_resolves_by_id() {
        let result = run(&catalog(), "old").unwrap();
        assert_eq!(result.listed[0].id, "old");
    }

    #[test]
    fn test_position_out_of_range_is_not_found() {
        let err = run(&catalog(), "3").unwrap_err();
        assert!(matches!(err, VersoError::PoemNotFound(_)));
    }

    #[test]
    fn test_position_zero_is_not_found() {
        let err = run(&catalog(), "0").unwrap_err();
        assert!(matches!(err, VersoError::PoemNotFound(_)));
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let err = run(&catalog(), "nope").unwrap_err();
        assert!(matches!(err, VersoError::PoemNotFound(_)));
    }
}

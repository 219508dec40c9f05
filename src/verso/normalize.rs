//! Turns raw collection documents into [`Poem`]s.
//!
//! Metadata is decoded leniently. A field of the wrong type counts as absent
//! and the poem still loads with a fallback value. Only a metadata document
//! that is not a JSON object at all is rejected as malformed.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Result, VersoError};
use crate::model::Poem;
use crate::source::image_name;

/// The subset of a `<id>.metadata.json` document that verso reads. Anything
/// else in the document (image prompts, translated tag lists) is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct RawMetadata {
    #[serde(default, deserialize_with = "string_or_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "strings_or_empty")]
    pub tags: Vec<String>,
}

fn string_or_none<'de, D>(de: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(de)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn strings_or_empty<'de, D>(de: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(de)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Builds a [`Poem`] from its raw metadata and text documents.
///
/// Fallbacks: a missing or blank title becomes the id, a missing date is
/// read from the id's `YYYY-MM-DD` prefix and failing that from the epoch,
/// missing tags become an empty list. The text has its line endings
/// normalized but is otherwise kept verbatim.
pub fn poem(id: &str, metadata_json: &str, text: &str, image_ext: &str) -> Result<Poem> {
    let value: Value = serde_json::from_str(metadata_json)
        .map_err(|e| VersoError::MalformedPoem(id.to_string(), e.to_string()))?;
    // serde also decodes structs from arrays (positional), so non-objects
    // must be rejected before the struct decode.
    if !value.is_object() {
        return Err(VersoError::MalformedPoem(
            id.to_string(),
            "metadata is not a JSON object".to_string(),
        ));
    }
    let meta: RawMetadata = serde_json::from_value(value)
        .map_err(|e| VersoError::MalformedPoem(id.to_string(), e.to_string()))?;

    let title = meta
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| id.to_string());

    let date = meta
        .date
        .as_deref()
        .and_then(parse_date)
        .or_else(|| date_from_id(id))
        .unwrap_or_default();

    let tags = meta
        .tags
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    Ok(Poem {
        id: id.to_string(),
        title,
        body: line_endings(text),
        date,
        tags,
        image: image_name(id, image_ext),
    })
}

/// Rewrites `\r\n` and bare `\r` to `\n`. Applying it twice is a no-op.
pub fn line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Reads the date a collection id carries as its `YYYY-MM-DD` prefix.
pub fn date_from_id(id: &str) -> Option<NaiveDate> {
    let prefix = id.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

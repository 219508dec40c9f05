//! Output formatting for the non-interactive commands.

use colored::*;
use unicode_width::UnicodeWidthStr;

use verso::commands::{CmdMessage, MessageLevel};
use verso::model::Poem;

use super::styles;

pub(crate) const LINE_WIDTH: usize = 100;
pub(crate) const DATE_WIDTH: usize = 17;
pub(crate) const PREVIEW_CHARS: usize = 100;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// One card per poem: position and title with the date on the right, then
/// the body preview, then the tags when there are any.
pub(crate) fn print_cards(poems: &[Poem]) {
    for (i, poem) in poems.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);
        let indent = idx_str.width();

        let available = LINE_WIDTH.saturating_sub(indent + 2 + DATE_WIDTH);
        let title = truncate_to_width(&poem.title, available);
        let padding = available.saturating_sub(title.width());
        let date = format!("{:>width$}", format_date(poem.date), width = DATE_WIDTH);

        println!(
            "{}{}{}  {}",
            idx_str,
            styles::TITLE.apply_to(&title),
            " ".repeat(padding),
            styles::DATE.apply_to(date)
        );

        let preview = poem.preview(PREVIEW_CHARS);
        if !preview.is_empty() {
            let fitted = truncate_to_width(&preview, LINE_WIDTH.saturating_sub(indent));
            println!("{}{}", " ".repeat(indent), fitted);
        }
        if !poem.tags.is_empty() {
            println!(
                "{}{}",
                " ".repeat(indent),
                styles::TAG.apply_to(format_tags(&poem.tags))
            );
        }
    }
}

/// Full detail view: title, date and tags, the whole body with its blank
/// lines intact, and the image reference resolved by the caller.
pub(crate) fn print_detail(poem: &Poem, image_ref: &str) {
    println!("{}", styles::TITLE.apply_to(&poem.title));
    if poem.tags.is_empty() {
        println!("{}", styles::DATE.apply_to(format_date(poem.date)));
    } else {
        println!(
            "{}  {}",
            styles::DATE.apply_to(format_date(poem.date)),
            styles::TAG.apply_to(format_tags(&poem.tags))
        );
    }
    println!("--------------------------------");
    println!("{}", poem.body.trim_end());
    println!();
    println!("{}", styles::DATE.apply_to(format!("Image: {}", image_ref)));
}

pub(crate) fn print_tag_counts(tag_counts: &[(String, usize)]) {
    for (tag, count) in tag_counts {
        println!(
            "  {} {}",
            styles::TAG.apply_to(format!("#{}", tag)),
            styles::DATE.apply_to(format!("({})", count))
        );
    }
}

pub(crate) fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

pub(crate) fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cuts `s` down to `max_width` terminal columns, ending in an ellipsis
/// when anything was cut. One column is always held back for the ellipsis
/// so a wide character can never overshoot the limit.
pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut out = String::new();
    let mut used = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        out.push(c);
        used += char_width;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_date_is_readable() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 16).unwrap();
        assert_eq!(format_date(date), "16 April 2025");
        assert_eq!(format_date(NaiveDate::default()), "1 January 1970");
    }

    #[test]
    fn test_format_tags_prefixes_hashes() {
        let tags = vec!["rain".to_string(), "spring".to_string()];
        assert_eq!(format_tags(&tags), "#rain #spring");
    }

    #[test]
    fn test_truncate_keeps_short_strings() {
        assert_eq!(truncate_to_width("short", 20), "short");
    }

    #[test]
    fn test_truncate_reserves_the_ellipsis_column() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
    }

    #[test]
    fn test_truncate_never_splits_wide_characters() {
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }
}

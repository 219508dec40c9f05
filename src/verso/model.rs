use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poem {
    pub id: String,
    pub title: String,
    pub body: String,
    /// Publication date. 1970-01-01 when neither metadata nor the id carries one.
    pub date: NaiveDate,
    pub tags: Vec<String>,
    // Image file name derived from the id, probed at render time
    pub image: String,
}

impl Poem {
    /// First `max_chars` characters of the body on a single line, with an
    /// ellipsis appended when the body was cut.
    pub fn preview(&self, max_chars: usize) -> String {
        let mut out = String::with_capacity(max_chars);
        for (i, c) in self.body.chars().enumerate() {
            if i == max_chars {
                out.push('…');
                return out;
            }
            out.push(if c == '\n' { ' ' } else { c });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poem_with_body(body: &str) -> Poem {
        Poem {
            id: "p".to_string(),
            title: "p".to_string(),
            body: body.to_string(),
            date: NaiveDate::default(),
            tags: vec![],
            image: "p.png".to_string(),
        }
    }

    #[test]
    fn test_preview_short_body_is_untouched() {
        let poem = poem_with_body("short");
        assert_eq!(poem.preview(100), "short");
    }

    #[test]
    fn test_preview_at_exact_limit_has_no_ellipsis() {
        let poem = poem_with_body("abcde");
        assert_eq!(poem.preview(5), "abcde");
    }

    #[test]
    fn test_preview_truncates_with_ellipsis() {
        let poem = poem_with_body("abcdef");
        assert_eq!(poem.preview(5), "abcde…");
    }

    #[test]
    fn test_preview_flattens_newlines() {
        let poem = poem_with_body("one\ntwo\nthree");
        assert_eq!(poem.preview(100), "one two three");
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        let poem = poem_with_body("héllo wörld");
        assert_eq!(poem.preview(5), "héllo…");
    }
}

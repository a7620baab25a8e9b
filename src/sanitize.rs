//! Markup removal for free-text fields and escaping for rendered pages

use once_cell::sync::Lazy;
use regex::Regex;

/// HTML comments, and anything that opens like a tag: `<b>`, `</b>`, `<!doctype>`, `<?xml ?>`.
/// Quoted attribute values may contain `>`.
static MARKUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<!--.*?-->|</?[A-Za-z!?](?:"[^"]*"|'[^']*'|[^'">])*>"#)
        .expect("markup pattern is valid")
});

/// Strip every tag from `input`, keeping the text between tags.
///
/// A `<` that does not start a tag (`"1 < 2"`) is left in place; escaping it is the
/// job of whatever renders the value.
pub fn strip_tags(input: &str) -> String {
    MARKUP.replace_all(input, "").into_owned()
}

/// Escape a value for inclusion in HTML text or attribute content.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_simple_tags() {
        assert_eq!(strip_tags("<b>Name</b>"), "Name");
        assert_eq!(strip_tags("<a href=\"x\">Frank</a> Herbert"), "Frank Herbert");
    }

    #[test]
    fn test_strip_quoted_attribute_with_angle_bracket() {
        assert_eq!(strip_tags("<a title=\"a>b\">X</a>"), "X");
        assert_eq!(strip_tags("<img alt='1 > 0' src=x>Poems"), "Poems");
    }

    #[test]
    fn test_strip_script_keeps_text() {
        assert_eq!(strip_tags("<script>alert('XSS')</script>"), "alert('XSS')");
    }

    #[test]
    fn test_strip_comments_and_declarations() {
        assert_eq!(strip_tags("Sci<!-- hidden\n -->Fi"), "SciFi");
        assert_eq!(strip_tags("<!DOCTYPE html>Fiction"), "Fiction");
    }

    #[test]
    fn test_lone_angle_brackets_kept() {
        assert_eq!(strip_tags("1 < 2 > 0"), "1 < 2 > 0");
        assert_eq!(strip_tags(""), "");
        assert_eq!(strip_tags("<i></i>"), "");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & 'Jerry'</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape_html("Plain text"), "Plain text");
    }
}

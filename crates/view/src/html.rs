//! HTML escaping for text nodes and double-quoted attribute values.

use std::borrow::Cow;

fn needs_escape(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'')
}

/// Escape repository-controlled text before it lands in markup.
///
/// Covers both element content and double-quoted attribute values. Clean
/// input is returned borrowed.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.chars().any(needs_escape) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_is_returned_borrowed() {
        let out = escape("Trail Jacket 2000x3000");
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, "Trail Jacket 2000x3000");
    }

    #[test]
    fn markup_characters_become_entities() {
        assert_eq!(escape("a < b"), "a &lt; b");
        assert_eq!(escape("a > b"), "a &gt; b");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn script_tags_cannot_survive() {
        let out = escape("<script>alert(1)</script>");
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert_eq!(out, "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn attribute_breakout_is_neutralized() {
        let out = escape("\" onmouseover=\"steal()");
        assert!(!out.contains('"'));
    }

    #[test]
    fn ampersand_is_escaped_first_not_twice() {
        assert_eq!(escape("&lt;"), "&amp;lt;");
    }
}

//! String transforms for untrusted input that ends up in email headers or
//! HTML bodies.

use std::sync::LazyLock;

use regex::Regex;

static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n]+").unwrap());
static NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").unwrap());

/// Collapses every run of line break characters into a single space and trims
/// the result, so the value can be placed into a header without smuggling in
/// additional header lines.
pub fn sanitize_header_field(s: &str) -> String {
    LINE_BREAKS.replace_all(s, " ").trim().to_owned()
}

/// Escapes the characters that are significant in HTML text and attribute
/// values.
pub fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Escapes `s` and turns its line breaks into `<br/>` tags.
pub fn to_display_html(s: &str) -> String {
    NEWLINE.replace_all(&escape_markup(s), "<br/>").into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn header_field_line_breaks() {
        for (input, expected) in [
            ("Hello", "Hello"),
            ("  Hello  ", "Hello"),
            ("Hello\r\nBcc: evil@example.com", "Hello Bcc: evil@example.com"),
            ("a\n\n\nb", "a b"),
            ("a\rb\nc", "a b c"),
            ("\r\nsubject\r\n", "subject"),
            ("", ""),
        ] {
            let output = sanitize_header_field(input);
            assert_eq!(output, expected);
            assert!(!output.contains(['\r', '\n']));
        }
    }

    #[test]
    fn escape() {
        assert_eq!(
            escape_markup(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn escape_does_not_double_escape() {
        assert_eq!(escape_markup("&lt;"), "&amp;lt;");
        assert_eq!(escape_markup("<&>"), "&lt;&amp;&gt;");
    }

    #[test]
    fn escape_script_tag() {
        for input in [
            "<script>alert(1)</script>",
            "<<script>script>",
            "x<script>y<script>",
        ] {
            assert!(!escape_markup(input).contains("<script>"));
            assert!(!to_display_html(input).contains("<script>"));
        }
    }

    #[test]
    fn display_html() {
        assert_eq!(
            to_display_html("line 1\nline <2>\r\nline 3"),
            "line 1<br/>line &lt;2&gt;<br/>line 3"
        );
        assert_eq!(to_display_html("a\n\nb"), "a<br/><br/>b");
        assert_eq!(to_display_html("no breaks"), "no breaks");
    }
}

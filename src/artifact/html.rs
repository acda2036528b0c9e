//! App shell post-processing.
//!
//! A built `index.html` is meant to be embedded in a host layout block. Two
//! plain-text rewrites normalize it:
//!
//! 1. A leading `<head><link …></head>` wrapper is dropped and the link tag is
//!    moved to the end of the document.
//! 2. The last `{% endblock %}` marker is removed and a canonical one is
//!    appended, so scripts and the stylesheet land inside the block.
//!
//! Only the first wrapper and the last marker are handled. Multiple
//! stylesheet links or nested blocks are not supported.

use std::sync::LazyLock;

use regex::Regex;

static STYLESHEET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*<head><([^<]*)</head>").expect("static regex"));

static ENDBLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{%\s*endblock\s*%\}").expect("static regex"));

const HEAD_CLOSE: &str = "</head>";
const ENDBLOCK: &str = "{% endblock %}";

/// Rewrite an app shell. Pure; either step is skipped when its pattern is absent.
pub fn process_html(html: &str) -> String {
    let mut html = relocate_stylesheet(html);

    if let Some(last) = ENDBLOCK_RE.find_iter(&html).last() {
        let range = last.range();
        html.replace_range(range, "");
        html.push_str(ENDBLOCK);
    }

    html
}

fn relocate_stylesheet(html: &str) -> String {
    let Some(link) = STYLESHEET_RE.captures(html).and_then(|c| c.get(1)) else {
        return html.to_string();
    };

    let rest = &html[link.end() + HEAD_CLOSE.len()..];
    let mut out = String::with_capacity(html.len());
    out.push_str(rest);
    out.push('<');
    out.push_str(link.as_str());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relocates_link_and_marker() {
        let input = r#"<head><link rel="stylesheet" href="x.css"></head>REST{% endblock %}TAIL{% endblock %}"#;

        assert_eq!(
            process_html(input),
            r#"REST{% endblock %}TAIL<link rel="stylesheet" href="x.css">{% endblock %}"#
        );
    }

    #[test]
    fn test_leading_whitespace_allowed() {
        let input = "\n  <head><link href=\"a.css\"></head><div id=\"root\"></div>";

        assert_eq!(
            process_html(input),
            "<div id=\"root\"></div><link href=\"a.css\">"
        );
    }

    #[test]
    fn test_loose_marker_spacing() {
        let input = "{% block body %}<div></div>{%endblock   %}<script src=\"m.js\"></script>";

        assert_eq!(
            process_html(input),
            "{% block body %}<div></div><script src=\"m.js\"></script>{% endblock %}"
        );
    }

    #[test]
    fn test_wrapper_not_at_start_is_ignored() {
        let input = "<div></div><head><link href=\"a.css\"></head>";
        assert_eq!(process_html(input), input);
    }

    #[test]
    fn test_plain_document_unchanged() {
        let input = "<html><body>hello</body></html>";
        assert_eq!(process_html(input), input);
        assert_eq!(process_html(""), "");
    }
}

/// Result page template, the fragment goes where the placeholder is
const RESULT_TEMPLATE: &str = include_str!("./static/result.html");
const RESULT_PLACEHOLDER: &str = "<!-- RESULT -->";

/// Escape text for use in HTML element content or quoted attributes
///
/// # Examples
/// ```
/// use quizgen::render::escape_html;
///
/// assert_eq!(escape_html("2 < 3 & \"ok\""), "2 &lt; 3 &amp; &quot;ok&quot;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render questions as a bold heading followed by an ordered list
///
/// Every question becomes one `<li>` in the order given. The heading and the
/// questions are escaped.
///
/// # Arguments
/// * `heading` - Text shown above the list, e.g. "Quiz Questions:"
/// * `questions` - Questions in display order
///
/// # Returns
/// * `String` - HTML fragment
pub fn ordered_list(heading: &str, questions: &[String]) -> String {
    let mut html = format!("<b>{}</b><ol>", escape_html(heading));
    for question in questions {
        html.push_str("<li>");
        html.push_str(&escape_html(question));
        html.push_str("</li>");
    }
    html.push_str("</ol>");
    html
}

/// Wrap an HTML fragment in the bundled result page
pub fn result_page(fragment: &str) -> String {
    RESULT_TEMPLATE.replace(RESULT_PLACEHOLDER, fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn list_preserves_order() {
        let questions = vec!["First?".to_string(), "Second?".to_string()];
        assert_eq!(
            ordered_list("Quiz Questions:", &questions),
            "<b>Quiz Questions:</b><ol><li>First?</li><li>Second?</li></ol>"
        );
    }

    #[test]
    fn list_escapes_each_question() {
        let questions = vec!["What is <b>&</b>?".to_string()];
        let html = ordered_list("Q", &questions);
        assert!(html.contains("<li>What is &lt;b&gt;&amp;&lt;/b&gt;?</li>"));
        assert!(!html.contains("<b>&</b>"));
    }

    #[test]
    fn empty_list() {
        assert_eq!(ordered_list("None:", &[]), "<b>None:</b><ol></ol>");
    }

    #[test]
    fn page_contains_fragment() {
        let page = result_page("<ol><li>x</li></ol>");
        assert!(page.contains("<ol><li>x</li></ol>"));
        assert!(!page.contains(RESULT_PLACEHOLDER));
    }
}

//! HTML text helpers shared by the markdown post-processors

/// Escapes HTML special characters.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Reverses the entity escaping comrak applies to text and attributes.
///
/// `&amp;` is decoded last so that an escaped entity such as `&amp;lt;`
/// decodes to the literal text `&lt;`.
pub fn decode_html(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_all_characters() {
        // Arrange
        let input = r#"<>&"'"#;

        // Act
        let output = escape_html(input);

        // Assert
        assert_eq!(output, "&lt;&gt;&amp;&quot;&#39;");
    }

    #[test]
    fn test_decode_html_all_entities() {
        assert_eq!(decode_html("&lt;&gt;&amp;&quot;&#39;"), r#"<>&"'"#);
    }

    #[test]
    fn test_decode_html_double_escaped() {
        // Arrange: text that literally reads "&lt;"
        let input = "&amp;lt;";

        // Act
        let output = decode_html(input);

        // Assert
        assert_eq!(output, "&lt;");
    }

    #[test]
    fn test_escape_then_decode_is_identity() {
        let text = "if a < b && c > \"d\" { 'e' }";
        assert_eq!(decode_html(&escape_html(text)), text);
    }
}

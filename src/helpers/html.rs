//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape XML special characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Make serialized JSON safe to place inside a `<script>` element.
///
/// `<\/` is an equivalent JSON escape of `</`, so the value is unchanged
/// while the HTML parser can no longer see a closing tag.
pub fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// Generate a meta tag addressed by `name`
pub fn meta_name(name: &str, content: &str) -> String {
    format!(
        r#"<meta name="{}" content="{}">"#,
        name,
        html_escape(content)
    )
}

/// Generate a meta tag addressed by `property` (Open Graph)
pub fn meta_property(property: &str, content: &str) -> String {
    format!(
        r#"<meta property="{}" content="{}">"#,
        property,
        html_escape(content)
    )
}

/// Generate an external link that opens in a new context without exposing
/// the opener or the referrer
pub fn external_link(href: &str, inner: &str, extra_attrs: &str) -> String {
    format!(
        r#"<a href="{}"{} target="_blank" rel="noopener noreferrer">{}</a>"#,
        html_escape(href),
        extra_attrs,
        inner
    )
}

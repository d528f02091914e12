//! Editor page rendering

use crate::application::OpenDocumentOutput;
use crate::error::OfficeResult;

const EDITOR_TEMPLATE: &str = include_str!("../../templates/editor.html");

/// Render the HTML page that instantiates `DocsAPI.DocEditor`
pub fn render_editor_page(title: &str, output: &OpenDocumentOutput) -> OfficeResult<String> {
    let config = script_safe_json(&output.editor_config)?;

    Ok(EDITOR_TEMPLATE
        .replace("{{title}}", &escape_html(title))
        .replace("{{docs_api_url}}", &escape_html(&output.docs_api_url))
        .replace("{{config}}", &config))
}

/// JSON that cannot close the surrounding `<script>` element
fn script_safe_json<T: serde::Serialize>(value: &T) -> OfficeResult<String> {
    Ok(serde_json::to_string(value)?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<b>"A&B's"</b>"#), "&lt;b&gt;&quot;A&amp;B&#39;s&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_script_safe_json() {
        let json = script_safe_json(&serde_json::json!({"title": "</script><script>alert(1)"})).unwrap();
        assert!(!json.contains("</script>"));
        let back: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back["title"], "</script><script>alert(1)");
    }
}

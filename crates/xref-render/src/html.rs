//! Hovercard HTML fragments
//!
//! The renderer emits HTML strings; attaching them to a document is the
//! page glue's concern. All interpolated text passes through
//! [`escape_html`].

use crate::preview::{Preview, RenderResult};

/// Escape `& < > " '` for safe interpolation into HTML
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

impl Preview {
    /// Hovercard body fragment: title, verse rows, footer link
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<div class=\"hc-body\">");
        html.push_str(&format!(
            "<div class=\"hc-title\">{}</div>",
            escape_html(&self.title)
        ));
        for verse in &self.verses {
            html.push_str(&format!(
                "<div class=\"hc-verse\"><b>{}</b>{}</div>",
                verse.number,
                escape_html(&verse.text)
            ));
        }
        html.push_str("</div>");
        html.push_str(&format!(
            "<div class=\"hc-footer\"><a class=\"hc-link\" href=\"{}\" target=\"_blank\" rel=\"noopener\">Open chapter</a></div>",
            escape_html(&self.deep_link)
        ));
        html
    }
}

impl RenderResult {
    /// Hovercard fragment for either outcome
    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            Self::Preview(preview) => preview.to_html(),
            Self::Error { message } => {
                format!("<div class=\"hc-error\">{}</div>", escape_html(message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::PreviewVerse;

    #[test]
    fn escapes_all_html_metacharacters() {
        assert_eq!(
            escape_html(r#"<b>&"quoted"&'s</b>"#),
            "&lt;b&gt;&amp;&quot;quoted&quot;&amp;&#39;s&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn preview_html_escapes_verse_text() {
        let preview = Preview {
            title: "John 3:16".to_string(),
            verses: vec![PreviewVerse {
                number: 16,
                text: "God <so> loved".to_string(),
            }],
            deep_link: "/newtestament/chapter.html?book=john&ch=3#v16".to_string(),
        };
        let html = preview.to_html();
        assert!(html.contains("God &lt;so&gt; loved"));
        assert!(html.contains("<div class=\"hc-title\">John 3:16</div>"));
        assert!(html.contains("href=\"/newtestament/chapter.html?book=john&amp;ch=3#v16\""));
    }

    #[test]
    fn error_html_is_a_single_line() {
        let html = RenderResult::not_found().to_html();
        assert_eq!(html, "<div class=\"hc-error\">Reference not found.</div>");
    }
}

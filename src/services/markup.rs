//! Markdown-lite to HTML conversion for model output
//!
//! Supports exactly what the insight prompt asks the model to produce:
//! `**bold**` spans, `* ` / `- ` bullet lines and plain paragraphs.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Convert model markdown into a flat HTML fragment
pub fn markdown_to_html(text: &str) -> String {
    let text = BOLD_PATTERN.replace_all(text, "<strong>${1}</strong>");

    let mut html = String::new();
    let mut in_list = false;

    for line in text.trim().split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("* ") || line.starts_with("- ") {
            if !in_list {
                html.push_str("<ul>");
                in_list = true;
            }
            html.push_str("<li>");
            html.push_str(&line[2..]);
            html.push_str("</li>");
        } else {
            if in_list {
                html.push_str("</ul>");
                in_list = false;
            }
            html.push_str("<p>");
            html.push_str(line);
            html.push_str("</p>");
        }
    }

    if in_list {
        html.push_str("</ul>");
    }

    html
}

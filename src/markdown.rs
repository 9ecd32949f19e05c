//! Card Markdown
//!
//! Renders card content for the detail view with pulldown-cmark.
//! Raw HTML in card content is shown as text, never injected.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
}

/// Parse markdown into HTML, escaping any embedded HTML
pub fn render_markdown(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_emphasis_and_lists() {
        let html = render_markdown("Migrate **v2**\n\n- tiers\n- FAQ");
        assert!(html.contains("<strong>v2</strong>"));
        assert!(html.contains("<li>tiers</li>"));
    }

    #[test]
    fn escapes_raw_html() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn renders_task_lists() {
        let html = render_markdown("- [x] done\n- [ ] todo");
        assert!(html.contains("checkbox"));
    }
}

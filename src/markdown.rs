//! Markdown Rendering
//!
//! Task descriptions are rendered with pulldown-cmark. Raw HTML in the source
//! is shown as text; `javascript:`, `data:` and `vbscript:` link targets are
//! replaced with `#`.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

/// Render markdown to HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = parser.map(transform_event);
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

fn transform_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) if is_unsafe_url(&dest_url) => {
            Event::Start(Tag::Link {
                link_type,
                dest_url: CowStr::Borrowed("#"),
                title,
                id,
            })
        }
        other => other,
    }
}

fn is_unsafe_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("javascript:") || lower.starts_with("data:") || lower.starts_with("vbscript:")
}

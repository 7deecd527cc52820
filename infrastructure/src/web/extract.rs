//! Readable-text extraction from HTML.
//!
//! Keeps the text of `<p>` elements in document order. Subtrees of
//! non-content markup are skipped entirely, so a paragraph inside a
//! `<footer>` or `<nav>` never appears.

use scraper::{ElementRef, Html, Node};

/// Tags whose entire subtree is ignored
pub const SKIP_TAGS: [&str; 7] = [
    "script", "style", "nav", "header", "footer", "noscript", "svg",
];

/// Text of the first `max` non-blank paragraphs, joined with single spaces.
pub fn extract_paragraphs(html: &str, max: usize) -> String {
    let document = Html::parse_document(html);
    let mut paragraphs = Vec::new();
    collect_paragraphs(document.root_element(), max, &mut paragraphs);
    paragraphs.join(" ")
}

fn collect_paragraphs(element: ElementRef, max: usize, out: &mut Vec<String>) {
    if out.len() >= max {
        return;
    }
    let name = element.value().name();
    if SKIP_TAGS.contains(&name) {
        return;
    }

    if name == "p" {
        let text = clean_whitespace(&element_text(element));
        if !text.is_empty() {
            out.push(text);
        }
        return;
    }

    for child in element.children().filter_map(ElementRef::wrap) {
        collect_paragraphs(child, max, out);
    }
}

/// All text below `element`, skipping non-content subtrees.
fn element_text(element: ElementRef) -> String {
    let mut text = String::new();
    for child in element.children() {
        match child.value() {
            Node::Text(t) => text.push_str(t),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child)
                    && !SKIP_TAGS.contains(&child_el.value().name())
                {
                    text.push_str(&element_text(child_el));
                }
            }
            _ => {}
        }
    }
    text
}

/// Collapse every whitespace run to a single space and trim.
fn clean_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

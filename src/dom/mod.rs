//! Read-only element tree abstraction
//!
//! The resolver never touches a concrete DOM. Anything that can answer the
//! questions in [`HtmlElement`] can be resolved into a grid.
//!
//! Implementations:
//! - `ScraperElement`: backed by a parsed `scraper::Html` document
//! - `MemoryElement`: in-memory tree, `Send + Sync`, built with `ElementBuilder`

mod html;
mod memory;

pub use html::{HtmlDocument, ScraperElement};
pub use memory::{ElementBuilder, MemoryElement};

use crate::data::LINE_BREAK_PLACEHOLDER;

/// Identity of an element, stable for the lifetime of its tree
pub type NodeKey = usize;

/// Trait for traversing a parsed element tree
pub trait HtmlElement: Clone {
    /// Identity used to memoize per-element work
    fn node_key(&self) -> NodeKey;

    /// Lower-case tag name
    fn tag_name(&self) -> &str;

    /// Attribute value; names match case-insensitively
    fn attr(&self, name: &str) -> Option<&str>;

    /// Whether the attribute is present, even with an empty value
    fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Element children in document order (text nodes are skipped)
    fn children(&self) -> Vec<Self>;

    /// Descendant text, whitespace collapsed and trimmed, with `<br>` and
    /// `<p>` rendered as the line-break placeholder
    fn text(&self) -> String;

    /// All elements named `tag` in pre-order, `self` included
    fn elements_by_tag(&self, tag: &str) -> Vec<Self> {
        let mut found = Vec::new();
        collect_by_tag(self, tag, &mut found);
        found
    }
}

fn collect_by_tag<E: HtmlElement>(element: &E, tag: &str, found: &mut Vec<E>) {
    if element.tag_name() == tag {
        found.push(element.clone());
    }
    for child in element.children() {
        collect_by_tag(&child, tag, found);
    }
}

/// Accumulates normalized element text
#[derive(Debug, Default)]
pub(crate) struct TextBuf {
    buf: String,
    pending_space: bool,
    after_break: bool,
}

impl TextBuf {
    pub(crate) fn push_text(&mut self, text: &str) {
        for c in text.chars() {
            if c.is_whitespace() {
                self.pending_space = true;
                continue;
            }
            if self.pending_space && !self.after_break && !self.buf.is_empty() {
                self.buf.push(' ');
            }
            self.pending_space = false;
            self.after_break = false;
            self.buf.push(c);
        }
    }

    pub(crate) fn push_line_break(&mut self) {
        self.buf.push_str(LINE_BREAK_PLACEHOLDER);
        self.pending_space = false;
        self.after_break = true;
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_buf_collapses_whitespace() {
        let mut buf = TextBuf::default();
        buf.push_text("  hello \n\t ");
        buf.push_text(" world  ");
        assert_eq!(buf.finish(), "hello world");
    }

    #[test]
    fn test_text_buf_line_break() {
        let mut buf = TextBuf::default();
        buf.push_text("a ");
        buf.push_line_break();
        buf.push_text(" b");
        assert_eq!(buf.finish(), r"a\nb");
    }

    #[test]
    fn test_elements_by_tag_includes_self() {
        let root = ElementBuilder::new("span")
            .child(ElementBuilder::new("b").child(ElementBuilder::new("span")))
            .build();
        assert_eq!(root.elements_by_tag("span").len(), 2);
        assert_eq!(root.elements_by_tag("b").len(), 1);
        assert!(root.elements_by_tag("i").is_empty());
    }
}

//! In-memory element tree
//!
//! Useful when the document comes from somewhere other than an HTML string,
//! and for resolving tables on several threads at once.

use std::sync::Arc;

use indexmap::IndexMap;

use super::{HtmlElement, NodeKey, TextBuf};
use crate::data::constants::{TAG_BR, TAG_P};

#[derive(Debug)]
struct MemoryNode {
    tag: String,
    attrs: IndexMap<String, String>,
    children: Vec<MemoryChild>,
}

#[derive(Debug)]
enum MemoryChild {
    Element(MemoryElement),
    Text(String),
}

/// Shared handle to an immutable in-memory element
#[derive(Debug, Clone)]
pub struct MemoryElement(Arc<MemoryNode>);

impl HtmlElement for MemoryElement {
    fn node_key(&self) -> NodeKey {
        Arc::as_ptr(&self.0) as NodeKey
    }

    fn tag_name(&self) -> &str {
        &self.0.tag
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.0
            .attrs
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    fn children(&self) -> Vec<Self> {
        self.0
            .children
            .iter()
            .filter_map(|child| match child {
                MemoryChild::Element(element) => Some(element.clone()),
                MemoryChild::Text(_) => None,
            })
            .collect()
    }

    fn text(&self) -> String {
        let mut buf = TextBuf::default();
        collect_text(self, &mut buf);
        buf.finish()
    }
}

fn collect_text(element: &MemoryElement, buf: &mut TextBuf) {
    for child in &element.0.children {
        match child {
            MemoryChild::Text(text) => buf.push_text(text),
            MemoryChild::Element(child_element) => {
                let name = child_element.tag_name();
                if name == TAG_P {
                    buf.push_line_break();
                }
                collect_text(child_element, buf);
                if name == TAG_BR {
                    buf.push_line_break();
                }
            }
        }
    }
}

/// Builder for [`MemoryElement`] trees
///
/// ```
/// use htmlgrid::dom::{ElementBuilder, HtmlElement};
///
/// let td = ElementBuilder::new("td")
///     .attr("colspan", "2")
///     .text("Total")
///     .build();
/// assert_eq!(td.attr("colspan"), Some("2"));
/// assert_eq!(td.text(), "Total");
/// ```
#[derive(Debug)]
pub struct ElementBuilder {
    tag: String,
    attrs: IndexMap<String, String>,
    children: Vec<MemoryChild>,
}

impl ElementBuilder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(MemoryChild::Text(text.into()));
        self
    }

    pub fn child(mut self, child: ElementBuilder) -> Self {
        self.children.push(MemoryChild::Element(child.build()));
        self
    }

    /// Attach an already built element, sharing it rather than copying
    pub fn element(mut self, element: MemoryElement) -> Self {
        self.children.push(MemoryChild::Element(element));
        self
    }

    pub fn build(self) -> MemoryElement {
        MemoryElement(Arc::new(MemoryNode {
            tag: self.tag,
            attrs: self.attrs,
            children: self.children,
        }))
    }
}

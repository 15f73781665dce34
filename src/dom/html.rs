//! `scraper`-backed element tree

use scraper::{ElementRef, Html, Node};

use super::{HtmlElement, NodeKey, TextBuf};
use crate::data::constants::{TAG_BR, TAG_P, TAG_TABLE};

/// A parsed HTML document
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a complete HTML document. Parsing never fails; malformed markup
    /// is repaired the way browsers repair it.
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    pub fn root(&self) -> ScraperElement<'_> {
        ScraperElement(self.html.root_element())
    }

    /// Every `<table>` in document order, nested tables included
    pub fn tables(&self) -> Vec<ScraperElement<'_>> {
        self.root().elements_by_tag(TAG_TABLE)
    }
}

/// Element handle into an [`HtmlDocument`]
#[derive(Debug, Clone, Copy)]
pub struct ScraperElement<'a>(ElementRef<'a>);

impl<'a> ScraperElement<'a> {
    pub fn inner(&self) -> ElementRef<'a> {
        self.0
    }
}

impl HtmlElement for ScraperElement<'_> {
    fn node_key(&self) -> NodeKey {
        self.0.value() as *const scraper::node::Element as NodeKey
    }

    fn tag_name(&self) -> &str {
        self.0.value().name()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        // html5ever lower-cases attribute names while parsing
        self.0.value().attr(&name.to_ascii_lowercase())
    }

    fn children(&self) -> Vec<Self> {
        self.0
            .children()
            .filter_map(ElementRef::wrap)
            .map(ScraperElement)
            .collect()
    }

    fn text(&self) -> String {
        let mut buf = TextBuf::default();
        collect_text(self.0, &mut buf);
        buf.finish()
    }
}

fn collect_text(element: ElementRef<'_>, buf: &mut TextBuf) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => buf.push_text(text),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    let name = child_element.value().name();
                    if name == TAG_P {
                        buf.push_line_break();
                    }
                    collect_text(child_element, buf);
                    if name == TAG_BR {
                        buf.push_line_break();
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_in_document_order() {
        let doc = HtmlDocument::parse(
            "<table id='a'><tr><td>1</td></tr></table><table id='b'></table>",
        );
        let tables = doc.tables();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].attr("id"), Some("a"));
        assert_eq!(tables[1].attr("id"), Some("b"));
    }

    #[test]
    fn test_attr_is_case_insensitive() {
        let doc = HtmlDocument::parse("<table><tr><td dropDownList>x</td></tr></table>");
        let td = doc.root().elements_by_tag("td").remove(0);
        assert!(td.has_attr("dropDownList"));
        assert!(td.has_attr("dropdownlist"));
    }

    #[test]
    fn test_text_line_breaks() {
        let doc = HtmlDocument::parse("<table><tr><td>a<br>b <p>c</p></td></tr></table>");
        let td = doc.root().elements_by_tag("td").remove(0);
        assert_eq!(td.text(), r"a\nb\nc");
    }

    #[test]
    fn test_node_key_identity() {
        let doc = HtmlDocument::parse("<table><tr><td>1</td><td>2</td></tr></table>");
        let cells = doc.root().elements_by_tag("td");
        let again = doc.root().elements_by_tag("td");
        assert_eq!(cells[0].node_key(), again[0].node_key());
        assert_ne!(cells[0].node_key(), cells[1].node_key());
    }
}

//! Cell content classification
//!
//! Decides what a cell holds and extracts its payload. Checks run in a fixed
//! order and the first match wins:
//!
//! 1. an `<img>` anywhere in the cell makes it an image
//! 2. an `<a>` makes it a link (e-mail for `mailto:` targets)
//! 3. blank text stops here as plain text
//! 4. override attributes: `string`, `double`, `formula`, `url`, `email`,
//!    `dropDownList`
//! 5. `true`/`false` literals, then numeric literals, then plain text

use std::path::PathBuf;

use log::warn;

use super::cascade::parse_style;
use crate::data::constants::{
    ATTR_DOUBLE, ATTR_DROP_DOWN_LIST, ATTR_EMAIL, ATTR_FORMULA, ATTR_HREF, ATTR_SRC, ATTR_STRING,
    ATTR_URL, FALSE_LITERAL, FORMULA_PREFIX, MAILTO_SCHEME, TAG_A, TAG_IMG, TAG_SPAN, TRUE_LITERAL,
};
use crate::data::patterns::{expand_line_breaks, is_double, remove_commas};
use crate::dom::HtmlElement;
use crate::model::{ContentType, Font, Td};

/// Explicit type override declared as a cell attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Override {
    /// Keep as plain text, no inference
    String,
    /// Numeric; thousands separators are stripped
    Double,
    /// Formula; a leading `=` is stripped
    Formula,
    /// URL link, target taken from the attribute value
    Url,
    /// E-mail link, target taken from the attribute value
    Email,
    /// Drop-down list
    DropDownList,
}

impl Override {
    /// All overrides in precedence order
    pub const ALL: [Override; 6] = [
        Override::String,
        Override::Double,
        Override::Formula,
        Override::Url,
        Override::Email,
        Override::DropDownList,
    ];

    pub fn attr_name(&self) -> &'static str {
        match self {
            Override::String => ATTR_STRING,
            Override::Double => ATTR_DOUBLE,
            Override::Formula => ATTR_FORMULA,
            Override::Url => ATTR_URL,
            Override::Email => ATTR_EMAIL,
            Override::DropDownList => ATTR_DROP_DOWN_LIST,
        }
    }

    /// First override present on `element`
    pub fn detect<E: HtmlElement>(element: &E) -> Option<Override> {
        Self::ALL
            .into_iter()
            .find(|o| element.has_attr(o.attr_name()))
    }
}

/// Classified cell payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellContent {
    pub content_type: ContentType,
    pub content: Option<String>,
    pub link: Option<String>,
    pub file: Option<PathBuf>,
    pub fonts: Option<Vec<Font>>,
    pub is_formula: bool,
}

impl CellContent {
    /// Classify a `<td>`/`<th>` element
    pub fn classify<E: HtmlElement>(cell: &E) -> Self {
        if let Some(img) = cell.elements_by_tag(TAG_IMG).first() {
            return CellContent {
                content_type: ContentType::Image,
                file: Some(PathBuf::from(img.attr(ATTR_SRC).unwrap_or(""))),
                ..Default::default()
            };
        }

        if let Some(a) = cell.elements_by_tag(TAG_A).first() {
            let href = a.attr(ATTR_HREF).unwrap_or("").trim().to_string();
            let content_type = if href.starts_with(MAILTO_SCHEME) {
                ContentType::LinkEmail
            } else {
                ContentType::LinkUrl
            };
            return CellContent {
                content_type,
                content: Some(expand_line_breaks(&a.text())),
                link: Some(href),
                ..Default::default()
            };
        }

        let (text, fonts) = extract_rich_text(cell);
        let mut result = CellContent {
            fonts,
            ..Default::default()
        };
        if text.trim().is_empty() {
            result.content = Some(text);
            return result;
        }

        match Override::detect(cell) {
            Some(Override::String) => {}
            Some(Override::Double) => {
                result.content_type = ContentType::Double;
                result.content = Some(remove_commas(&text));
                return result;
            }
            Some(Override::Formula) => {
                let formula = text.trim();
                let formula = formula.strip_prefix(FORMULA_PREFIX).unwrap_or(formula);
                result.is_formula = true;
                result.content = Some(formula.to_string());
                return result;
            }
            Some(o @ (Override::Url | Override::Email)) => {
                result.content_type = if o == Override::Url {
                    ContentType::LinkUrl
                } else {
                    ContentType::LinkEmail
                };
                result.link = cell.attr(o.attr_name()).map(str::to_string);
            }
            Some(Override::DropDownList) => {
                result.content_type = ContentType::DropDownList;
            }
            None => {
                result.content_type = infer_type(&text);
            }
        }
        result.content = Some(text);
        result
    }

    /// Copy the payload into a cell
    pub fn apply_to(self, td: &mut Td) {
        td.content_type = self.content_type;
        td.content = self.content;
        td.link = self.link;
        td.file = self.file;
        td.fonts = self.fonts;
        td.is_formula = self.is_formula;
    }
}

/// Type of non-blank text with no override attribute
pub fn infer_type(text: &str) -> ContentType {
    if text == TRUE_LITERAL || text == FALSE_LITERAL {
        ContentType::Boolean
    } else if is_double(text) {
        ContentType::Double
    } else {
        ContentType::Text
    }
}

/// Plain text of a cell plus its rich-text runs
///
/// Runs come from `<span>` descendants in document order. Each run starts
/// where the previous one ended; only runs with an inline style are kept.
/// Cells without spans return `None` for the runs.
pub fn extract_rich_text<E: HtmlElement>(cell: &E) -> (String, Option<Vec<Font>>) {
    let text = expand_line_breaks(&cell.text());
    let spans = cell.elements_by_tag(TAG_SPAN);
    if spans.is_empty() {
        return (text, None);
    }

    if spans
        .iter()
        .any(|span| span.elements_by_tag(TAG_SPAN).len() > 1)
    {
        warn!("nested <span> run markers in one cell; run offsets may overlap");
    }

    let mut fonts = Vec::new();
    let mut start_index = 0;
    for span in &spans {
        let span_text = expand_line_breaks(&span.text());
        let end_index = start_index + span_text.chars().count();
        let style = parse_style(span);
        if !style.is_empty() {
            fonts.push(Font {
                start_index,
                end_index,
                style,
            });
        }
        start_index = end_index;
    }
    (text, Some(fonts))
}

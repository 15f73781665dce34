//! Cell types: content classification, rich-text runs and the resolved cell

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::StyleMap;

/// Semantic type of a cell's payload, used by writers to choose a cell format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    /// Plain text (also the fallback for blank content)
    #[default]
    Text,
    /// Numeric value
    Double,
    /// `true` / `false`
    Boolean,
    /// Hyperlink to a URL
    LinkUrl,
    /// `mailto:` hyperlink
    LinkEmail,
    /// Embedded image; see [`Td::file`]
    Image,
    /// Drop-down list validation
    DropDownList,
}

impl ContentType {
    pub fn is_link(&self) -> bool {
        matches!(self, ContentType::LinkUrl | ContentType::LinkEmail)
    }
}

/// A character-range-scoped style override inside a cell's text
///
/// Offsets count characters, not bytes. Runs never overlap; characters not
/// covered by any run take the cell style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub start_index: usize,
    pub end_index: usize,
    pub style: StyleMap,
}

/// A resolved table cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Td {
    /// Row index of the owning row
    pub row: usize,
    /// Absolute column after span resolution
    pub col: usize,
    pub col_span: usize,
    pub row_span: usize,
    pub content_type: ContentType,
    /// Plain text content; `None` for image cells
    pub content: Option<String>,
    /// Link target for link cells (may be empty)
    pub link: Option<String>,
    /// Image source for image cells
    pub file: Option<PathBuf>,
    /// Rich-text runs; `Some` only when the cell contains run markers
    pub fonts: Option<Vec<Font>>,
    /// Final cascaded style
    pub style: StyleMap,
    /// Whether the cell came from a `<th>`
    pub is_header: bool,
    pub is_formula: bool,
}

impl Td {
    /// Create an empty text cell at the given position
    pub fn new(row: usize, col: usize) -> Self {
        Td {
            row,
            col,
            col_span: 1,
            row_span: 1,
            content_type: ContentType::Text,
            content: None,
            link: None,
            file: None,
            fonts: None,
            style: StyleMap::new(),
            is_header: false,
            is_formula: false,
        }
    }

    /// Last column covered by this cell
    pub fn col_bound(&self) -> usize {
        self.col + self.col_span - 1
    }

    /// Last row covered by this cell
    pub fn row_bound(&self) -> usize {
        self.row + self.row_span - 1
    }

    /// Content as `&str`, empty when there is none
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

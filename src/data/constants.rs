//! Recognized HTML tags, attributes and style keys
//!
//! Everything the resolver matches by name lives here so the element walk and
//! the classifier agree on spelling.

use phf::{phf_ordered_map, phf_set};

// ============================================================================
// Tags
// ============================================================================

pub const TAG_TABLE: &str = "table";
pub const TAG_CAPTION: &str = "caption";
pub const TAG_TR: &str = "tr";
pub const TAG_TH: &str = "th";
pub const TAG_TD: &str = "td";
pub const TAG_IMG: &str = "img";
pub const TAG_A: &str = "a";
pub const TAG_SPAN: &str = "span";
pub const TAG_BR: &str = "br";
pub const TAG_P: &str = "p";

/// Element children of a `<tr>` that are treated as cells
pub static CELL_TAGS: phf::Set<&'static str> = phf_set! {
    "td",
    "th",
};

// ============================================================================
// Attributes
// ============================================================================

pub const ATTR_STYLE: &str = "style";
pub const ATTR_COLSPAN: &str = "colspan";
pub const ATTR_ROWSPAN: &str = "rowspan";
pub const ATTR_SRC: &str = "src";
pub const ATTR_HREF: &str = "href";

/// Largest accepted `colspan`; bigger values are clamped
pub const MAX_COL_SPAN: usize = 1000;
/// Largest accepted `rowspan`; bigger values are clamped
pub const MAX_ROW_SPAN: usize = 65534;

/// Cell override attributes, in the order they are checked
pub const ATTR_STRING: &str = "string";
pub const ATTR_DOUBLE: &str = "double";
pub const ATTR_FORMULA: &str = "formula";
pub const ATTR_URL: &str = "url";
pub const ATTR_EMAIL: &str = "email";
pub const ATTR_DROP_DOWN_LIST: &str = "dropDownList";

// ============================================================================
// Style keys and literals
// ============================================================================

pub const STYLE_HEIGHT: &str = "height";
pub const STYLE_WIDTH: &str = "width";
pub const STYLE_VISIBILITY: &str = "visibility";
pub const VISIBILITY_HIDDEN: &str = "hidden";

pub const MAILTO_SCHEME: &str = "mailto:";
pub const FORMULA_PREFIX: char = '=';
pub const TRUE_LITERAL: &str = "true";
pub const FALSE_LITERAL: &str = "false";

/// Text adapters emit for `<br>` and before `<p>`; becomes `\n` in cell content
pub const LINE_BREAK_PLACEHOLDER: &str = "\\n";

/// Own style given to link cells that declare no inline style
pub static DEFAULT_LINK_STYLE: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "color" => "blue",
    "text-decoration" => "underline",
};

//! Resolution options

use serde::{Deserialize, Serialize};

/// Options controlling table resolution
///
/// Field names are snake_case (TOML config); JavaScript callers may use the
/// camelCase aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Estimate column widths from cell text length
    /// Default: false
    #[serde(alias = "computeAutoWidth")]
    pub compute_auto_width: bool,

    /// Give link cells without an inline style a blue, underlined style
    /// Default: true
    #[serde(alias = "applyDefaultLinkStyle", alias = "defaultLinkStyle")]
    pub apply_default_link_style: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            compute_auto_width: false,
            apply_default_link_style: true,
        }
    }
}

impl ParseOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults plus automatic column widths
    pub fn auto_width() -> Self {
        Self {
            compute_auto_width: true,
            ..Self::default()
        }
    }

    pub fn with_auto_width(mut self, enabled: bool) -> Self {
        self.compute_auto_width = enabled;
        self
    }

    pub fn with_default_link_style(mut self, enabled: bool) -> Self {
        self.apply_default_link_style = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ParseOptions::default();
        assert!(!opts.compute_auto_width);
        assert!(opts.apply_default_link_style);
    }

    #[test]
    fn test_presets_and_builders() {
        assert!(ParseOptions::auto_width().compute_auto_width);
        let opts = ParseOptions::new()
            .with_auto_width(true)
            .with_default_link_style(false);
        assert!(opts.compute_auto_width);
        assert!(!opts.apply_default_link_style);
    }

    #[test]
    fn test_deserialize_camel_case_aliases() {
        let opts: ParseOptions =
            serde_json::from_str(r#"{"computeAutoWidth": true, "defaultLinkStyle": false}"#)
                .unwrap();
        assert!(opts.compute_auto_width);
        assert!(!opts.apply_default_link_style);

        let partial: ParseOptions = serde_json::from_str(r#"{"compute_auto_width": true}"#).unwrap();
        assert_eq!(partial, ParseOptions::auto_width());
    }
}

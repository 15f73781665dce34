//! Style cascade
//!
//! Flat property maps flow from table to row group to row to cell. A
//! descendant's own declarations override same-named ancestor properties;
//! everything else passes through unchanged.

use std::sync::Arc;

use fxhash::FxHashMap;
use parking_lot::RwLock;

use crate::data::constants::{ATTR_STYLE, DEFAULT_LINK_STYLE};
use crate::dom::{HtmlElement, NodeKey};
use crate::model::StyleMap;

/// Parse a `style` attribute value such as `color: red; width: 20px`
pub fn parse_declarations(style: &str) -> StyleMap {
    let mut map = StyleMap::new();
    for declaration in style.split(';') {
        let Some((name, value)) = declaration.split_once(':') else {
            continue;
        };
        let name = name.trim();
        let value = value.trim();
        if name.is_empty() || value.is_empty() {
            continue;
        }
        map.insert(name.to_ascii_lowercase(), value.to_string());
    }
    map
}

/// An element's own inline style; empty when it has none
pub fn parse_style<E: HtmlElement>(element: &E) -> StyleMap {
    element
        .attr(ATTR_STYLE)
        .map(parse_declarations)
        .unwrap_or_default()
}

/// Merge `own` over `upper`
pub fn mix_style(upper: &StyleMap, own: &StyleMap) -> StyleMap {
    let mut merged = upper.clone();
    for (name, value) in own {
        merged.insert(name.clone(), value.clone());
    }
    merged
}

/// Own style given to link cells that declare none
pub fn default_link_style() -> StyleMap {
    DEFAULT_LINK_STYLE
        .entries()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Cache key: the table being resolved and the row-group element under it
///
/// A row group's merged style depends on its table, and one group can be
/// reached from several tables (nested tables, shared subtrees).
pub type StyleKey = (NodeKey, NodeKey);

/// Memoized merged styles keyed by table and ancestor element
///
/// Safe to populate from several threads. Two threads racing on the same key
/// both compute the same map; the first one stored is kept.
#[derive(Debug, Default)]
pub struct StyleCache {
    entries: RwLock<FxHashMap<StyleKey, Arc<StyleMap>>>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: StyleKey) -> Option<Arc<StyleMap>> {
        self.entries.read().get(&key).cloned()
    }

    /// Return the cached map for `key`, computing it with `compute` on a miss
    pub fn get_or_insert_with(
        &self,
        key: StyleKey,
        compute: impl FnOnce() -> StyleMap,
    ) -> Arc<StyleMap> {
        if let Some(hit) = self.get(key) {
            return hit;
        }
        let computed = Arc::new(compute());
        self.entries
            .write()
            .entry(key)
            .or_insert(computed)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Cascade rooted at one table element
pub struct StyleCascade<'c> {
    table_key: NodeKey,
    table_style: Arc<StyleMap>,
    cache: &'c StyleCache,
}

impl<'c> StyleCascade<'c> {
    pub fn new<E: HtmlElement>(table: &E, cache: &'c StyleCache) -> Self {
        Self {
            table_key: table.node_key(),
            table_style: Arc::new(parse_style(table)),
            cache,
        }
    }

    pub fn table_style(&self) -> &StyleMap {
        &self.table_style
    }

    /// Style inherited by rows whose parent is `parent`
    ///
    /// Rows directly under the table inherit the table style; rows under a
    /// row group inherit the group style merged over the table style, computed
    /// once per group.
    pub fn upper_style<E: HtmlElement>(&self, parent: &E) -> Arc<StyleMap> {
        let key = parent.node_key();
        if key == self.table_key {
            return Arc::clone(&self.table_style);
        }
        self.cache.get_or_insert_with((self.table_key, key), || {
            mix_style(&self.table_style, &parse_style(parent))
        })
    }

    /// Final style of a row
    pub fn resolve_row<E: HtmlElement>(&self, row: &E, parent: &E) -> StyleMap {
        mix_style(&self.upper_style(parent), &parse_style(row))
    }

    /// Final style of a cell given its row style and its own style
    pub fn resolve_cell(&self, row_style: &StyleMap, own: &StyleMap) -> StyleMap {
        mix_style(row_style, own)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ElementBuilder;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn style(pairs: &[(&str, &str)]) -> StyleMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_declarations() {
        let map = parse_declarations(" Color : red ;width:20px;; bogus ; height: ");
        assert_eq!(map, style(&[("color", "red"), ("width", "20px")]));
    }

    #[test]
    fn test_parse_declarations_keeps_colon_in_value() {
        let map = parse_declarations("background: url(http://x/y.png)");
        assert_eq!(map.get("background").map(String::as_str), Some("url(http://x/y.png)"));
    }

    #[test]
    fn test_mix_style_descendant_wins() {
        let upper = style(&[("color", "red"), ("font-size", "12")]);
        let own = style(&[("color", "blue")]);
        let merged = mix_style(&upper, &own);
        assert_eq!(merged, style(&[("color", "blue"), ("font-size", "12")]));
        // upper untouched
        assert_eq!(upper.get("color").map(String::as_str), Some("red"));
    }

    #[test]
    fn test_row_group_memoized() {
        let tbody = ElementBuilder::new("tbody")
            .attr("style", "font-weight: bold")
            .build();
        let table = ElementBuilder::new("table")
            .attr("style", "color: red")
            .element(tbody.clone())
            .build();
        let row = ElementBuilder::new("tr").attr("style", "height: 20px").build();

        let cache = StyleCache::new();
        let cascade = StyleCascade::new(&table, &cache);
        let resolved = cascade.resolve_row(&row, &tbody);
        assert_eq!(
            resolved,
            style(&[("color", "red"), ("font-weight", "bold"), ("height", "20px")])
        );
        assert_eq!(cache.len(), 1);

        cascade.resolve_row(&row, &tbody);
        assert_eq!(cache.len(), 1);

        // rows directly under the table never touch the cache
        cascade.resolve_row(&row, &table);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_computes_once() {
        let cache = StyleCache::new();
        let calls = AtomicUsize::new(0);
        for _ in 0..3 {
            cache.get_or_insert_with((1, 7), || {
                calls.fetch_add(1, Ordering::SeqCst);
                style(&[("a", "b")])
            });
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.get((1, 7)).unwrap().get("a").map(String::as_str), Some("b"));
    }

    #[test]
    fn test_cache_concurrent_population() {
        let cache = StyleCache::new();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for key in 0..50 {
                        cache.get_or_insert_with((0, key), || style(&[("k", "v")]));
                    }
                });
            }
        });
        assert_eq!(cache.len(), 50);
    }

    #[test]
    fn test_default_link_style() {
        let map = default_link_style();
        assert_eq!(map, style(&[("color", "blue"), ("text-decoration", "underline")]));
    }

    #[test]
    fn test_shared_group_keeps_per_table_styles() {
        let tbody = ElementBuilder::new("tbody")
            .attr("style", "font-weight: bold")
            .build();
        let red = ElementBuilder::new("table")
            .attr("style", "color: red")
            .element(tbody.clone())
            .build();
        let green = ElementBuilder::new("table")
            .attr("style", "color: green")
            .element(tbody.clone())
            .build();
        let row = ElementBuilder::new("tr").build();

        let cache = StyleCache::new();
        let under_red = StyleCascade::new(&red, &cache).resolve_row(&row, &tbody);
        let under_green = StyleCascade::new(&green, &cache).resolve_row(&row, &tbody);

        assert_eq!(under_red.get("color").map(String::as_str), Some("red"));
        assert_eq!(under_green.get("color").map(String::as_str), Some("green"));
        assert_eq!(under_green.get("font-weight").map(String::as_str), Some("bold"));
        assert_eq!(cache.len(), 2);
    }
}

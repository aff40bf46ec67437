//! Page registry.
//!
//! Every page is registered by path together with its display name and the
//! function that builds it. The registry keeps registration order, which is
//! the order pages are listed for navigation.
//!
//! # Example
//!
//! ```ignore
//! use tutor_pages::default_registry;
//!
//! let page = default_registry().build("/percent")?;
//! for entry in default_registry().filter("trig") {
//!     println!("{} {}", entry.path, entry.name);
//! }
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;
use tutor_reactive::{GraphError, Page};

use crate::error::{PageError, Result};
use crate::pages;

/// A registered page: where it lives, what it is called, how to build it.
#[derive(Debug, Clone, Copy)]
pub struct PageEntry {
    pub path: &'static str,
    pub name: &'static str,
    build: fn() -> std::result::Result<Page, GraphError>,
}

impl PageEntry {
    pub fn new(
        path: &'static str,
        name: &'static str,
        build: fn() -> std::result::Result<Page, GraphError>,
    ) -> Self {
        Self { path, name, build }
    }

    /// Construct a fresh page definition.
    pub fn build(&self) -> Result<Page> {
        (self.build)().map_err(|source| PageError::Graph {
            path: self.path.to_string(),
            source,
        })
    }
}

/// Registry of pages indexed by path.
#[derive(Debug, Clone)]
pub struct PageRegistry {
    entries: Vec<PageEntry>,
    by_path: HashMap<&'static str, usize>,
}

impl PageRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_path: HashMap::new(),
        }
    }

    /// Registers a page. A page already registered at the same path is
    /// replaced in place.
    pub fn register(&mut self, entry: PageEntry) {
        match self.by_path.get(entry.path) {
            Some(&index) => self.entries[index] = entry,
            None => {
                self.by_path.insert(entry.path, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<&PageEntry> {
        self.by_path.get(path).map(|&index| &self.entries[index])
    }

    /// Pages whose display name contains `query`, ignoring case. An empty
    /// query matches every page.
    pub fn filter(&self, query: &str) -> Vec<&PageEntry> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|entry| needle.is_empty() || entry.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Builds a fresh page for `path`.
    pub fn build(&self, path: &str) -> Result<Page> {
        let entry = self
            .get(path)
            .ok_or_else(|| PageError::UnknownPage(path.to_string()))?;
        debug!(path, name = entry.name, "building page");
        entry.build()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(PageEntry::new(pages::home::PATH, pages::home::NAME, pages::home::page));
        registry.register(PageEntry::new(
            pages::triangle_area::PATH,
            pages::triangle_area::NAME,
            pages::triangle_area::page,
        ));
        registry.register(PageEntry::new(
            pages::percent::PATH,
            pages::percent::NAME,
            pages::percent::page,
        ));
        registry.register(PageEntry::new(
            pages::percent_conversion::PATH,
            pages::percent_conversion::NAME,
            pages::percent_conversion::page,
        ));
        registry.register(PageEntry::new(
            pages::trig_curve_param::PATH,
            pages::trig_curve_param::NAME,
            pages::trig_curve_param::page,
        ));
        registry.register(PageEntry::new(
            pages::trig_eq_all_solutions::PATH,
            pages::trig_eq_all_solutions::NAME,
            pages::trig_eq_all_solutions::page,
        ));
        registry.register(PageEntry::new(
            pages::trig_curve_unit_circle::PATH,
            pages::trig_curve_unit_circle::NAME,
            pages::trig_curve_unit_circle::page,
        ));
        registry.register(PageEntry::new(
            pages::trig_all_solutions::PATH,
            pages::trig_all_solutions::NAME,
            pages::trig_all_solutions::page,
        ));
        registry.register(PageEntry::new(
            pages::set_operations::PATH,
            pages::set_operations::NAME,
            pages::set_operations::page,
        ));
        registry.register(PageEntry::new(
            pages::triangle_sum::PATH,
            pages::triangle_sum::NAME,
            pages::triangle_sum::page,
        ));
        registry.register(PageEntry::new(
            pages::multiplication::PATH,
            pages::multiplication::NAME,
            pages::multiplication::page,
        ));
        registry.register(PageEntry::new(
            pages::primitive_area::PATH,
            pages::primitive_area::NAME,
            pages::primitive_area::page,
        ));
        registry
    }
}

/// Cached registry with every page.
static DEFAULT_REGISTRY: OnceLock<PageRegistry> = OnceLock::new();

/// Returns the registry of all pages, built on first access.
pub fn default_registry() -> &'static PageRegistry {
    DEFAULT_REGISTRY.get_or_init(PageRegistry::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_every_page() {
        let registry = default_registry();
        assert_eq!(registry.len(), 12);
        assert_eq!(registry.iter().next().map(|entry| entry.path), Some("/"));
        assert!(registry.get("/primitive-area").is_some());
    }

    #[test]
    fn registering_a_path_twice_replaces_it() {
        let mut registry = PageRegistry::new();
        registry.register(PageEntry::new("/", "First", pages::home::page));
        registry.register(PageEntry::new("/", "Second", pages::home::page));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("/").map(|entry| entry.name), Some("Second"));
    }

    #[test]
    fn unknown_path_is_an_error() {
        let error = PageRegistry::default().build("/nowhere").unwrap_err();
        assert!(matches!(error, PageError::UnknownPage(path) if path == "/nowhere"));
    }
}

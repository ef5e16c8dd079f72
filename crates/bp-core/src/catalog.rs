//! Validated filter-list catalog
//!
//! A catalog is built once, validated up front, and then only ever read.
//! Every selector is parsed at construction so a defective entry fails before
//! any probing starts.

use std::collections::HashMap;

use crate::selector::{parse_selector, ElementSpec, SelectorError};

/// Error type for catalog construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Filter list '{0}' has no selectors")]
    EmptyList(String),
    #[error("Filter list '{0}' is declared more than once")]
    DuplicateList(String),
    #[error("Duplicating selector '{selector}' in '{list}' (first seen in '{first_list}')")]
    DuplicateSelector {
        selector: String,
        list: String,
        first_list: String,
    },
    #[error("Invalid selector in '{list}': {source}")]
    InvalidSelector {
        list: String,
        #[source]
        source: SelectorError,
    },
    #[error("Failed to decode entry {index} of '{list}': {reason}")]
    Decode {
        list: String,
        index: usize,
        reason: String,
    },
}

/// A catalog selector together with the element synthesized from it.
#[derive(Debug, Clone)]
pub struct CatalogSelector {
    text: String,
    element: ElementSpec,
}

impl CatalogSelector {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn element(&self) -> &ElementSpec {
        &self.element
    }
}

/// A named filter list and its probe selectors.
#[derive(Debug, Clone)]
pub struct FilterList {
    name: String,
    selectors: Vec<CatalogSelector>,
}

impl FilterList {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selectors(&self) -> &[CatalogSelector] {
        &self.selectors
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

/// Immutable mapping from filter-list name to its selectors.
#[derive(Debug, Clone)]
pub struct Catalog {
    lists: Vec<FilterList>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Build and validate a catalog.
    ///
    /// Lists keep their declaration order; selectors keep their order inside
    /// each list.
    pub fn new<N, I, S>(lists: impl IntoIterator<Item = (N, I)>) -> Result<Self, CatalogError>
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Catalog {
            lists: Vec::new(),
            by_name: HashMap::new(),
        };
        let mut owners: HashMap<String, usize> = HashMap::new();

        for (name, selectors) in lists {
            let name = name.into();
            if catalog.by_name.contains_key(&name) {
                return Err(CatalogError::DuplicateList(name));
            }

            let index = catalog.lists.len();
            let mut entries = Vec::new();

            for text in selectors {
                let text = text.into();
                let parsed = parse_selector(&text).map_err(|source| CatalogError::InvalidSelector {
                    list: name.clone(),
                    source,
                })?;

                if let Some(&owner) = owners.get(&text) {
                    let first_list = if owner == index {
                        name.clone()
                    } else {
                        catalog.lists[owner].name.clone()
                    };
                    return Err(CatalogError::DuplicateSelector {
                        selector: text,
                        list: name,
                        first_list,
                    });
                }
                owners.insert(text.clone(), index);

                entries.push(CatalogSelector {
                    element: ElementSpec::from_selector(&parsed),
                    text,
                });
            }

            if entries.is_empty() {
                return Err(CatalogError::EmptyList(name));
            }

            catalog.by_name.insert(name.clone(), index);
            catalog.lists.push(FilterList { name, selectors: entries });
        }

        Ok(catalog)
    }

    pub fn lists(&self) -> &[FilterList] {
        &self.lists
    }

    pub fn get(&self, name: &str) -> Option<&FilterList> {
        self.by_name.get(name).map(|&index| &self.lists[index])
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lists.iter().map(FilterList::name)
    }

    /// All selectors of all lists, flattened in declaration order.
    pub fn selectors(&self) -> impl Iterator<Item = &CatalogSelector> {
        self.lists.iter().flat_map(|list| list.selectors.iter())
    }

    pub fn selector_count(&self) -> usize {
        self.lists.iter().map(FilterList::len).sum()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

// src/aggregate/filter.rs
//! Category filter chips for the bulk error list.

use std::collections::BTreeSet;

use crate::types::{BulkError, Category};

/// One selectable chip: the `All` sentinel or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChip {
    All,
    Category(Category),
}

/// Selected categories. An empty selection means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    selected: BTreeSet<Category>,
}

impl CategoryFilter {
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_categories<I: IntoIterator<Item = Category>>(categories: I) -> Self {
        Self {
            selected: categories.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        self.selected.is_empty()
    }

    #[must_use]
    pub fn is_selected(&self, chip: FilterChip) -> bool {
        match chip {
            FilterChip::All => self.is_all(),
            FilterChip::Category(c) => self.selected.contains(&c),
        }
    }

    /// `All` resets the selection; a category toggles in or out.
    /// Deselecting the last category falls back to `All`.
    pub fn toggle(&mut self, chip: FilterChip) {
        match chip {
            FilterChip::All => self.selected.clear(),
            FilterChip::Category(c) => {
                if !self.selected.remove(&c) {
                    self.selected.insert(c);
                }
            }
        }
    }

    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        self.is_all() || self.selected.contains(&category)
    }

    /// Entries whose category is selected, order preserved.
    #[must_use]
    pub fn apply<'a>(&self, bulk: &'a [BulkError]) -> Vec<&'a BulkError> {
        bulk.iter().filter(|b| self.matches(b.category())).collect()
    }
}

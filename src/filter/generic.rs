//! Generic filtering framework
//!
//! A small trait-based predicate layer over metric records. Concrete filters
//! (region, entity exclusion) and the combinators below all implement
//! `Filter`, so views compose them instead of writing per-page loops.

use std::fmt::Debug;

/// A predicate that can be applied to any item type
pub trait Filter<T: ?Sized>: Debug {
    /// Whether the item passes the filter
    fn matches(&self, input: &T) -> bool;
}

/// A filter that always includes all elements
#[derive(Debug, Clone, Copy, Default)]
pub struct IncludeAllFilter;

impl<T: ?Sized> Filter<T> for IncludeAllFilter {
    fn matches(&self, _input: &T) -> bool {
        true
    }
}

/// A filter that combines multiple filters with a logical AND
#[derive(Debug)]
pub struct AndFilter<'a, T: ?Sized> {
    filters: Vec<Box<dyn Filter<T> + 'a>>,
}

impl<'a, T: ?Sized> AndFilter<'a, T> {
    /// Create a new AND filter
    #[must_use]
    pub fn new(filters: Vec<Box<dyn Filter<T> + 'a>>) -> Self {
        Self { filters }
    }

    /// Add another filter to the conjunction
    #[must_use]
    pub fn and(mut self, filter: impl Filter<T> + 'a) -> Self {
        self.filters.push(Box::new(filter));
        self
    }
}

impl<T: ?Sized + Debug> Filter<T> for AndFilter<'_, T> {
    fn matches(&self, input: &T) -> bool {
        self.filters.iter().all(|filter| filter.matches(input))
    }
}

/// A filter that negates another filter
#[derive(Debug, Clone)]
pub struct NotFilter<F> {
    filter: F,
}

impl<F> NotFilter<F> {
    /// Create a new NOT filter
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<T: ?Sized, F: Filter<T>> Filter<T> for NotFilter<F> {
    fn matches(&self, input: &T) -> bool {
        !self.filter.matches(input)
    }
}

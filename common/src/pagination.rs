//! Abstractions for page-based pagination.

use std::{num::NonZeroUsize, ops::Range};

/// Default number of items on a [`Page`].
pub const DEFAULT_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// Pagination arguments.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Arguments {
    /// One-based number of the requested page.
    pub page: NonZeroUsize,

    /// Maximum number of items on a page.
    pub per_page: NonZeroUsize,
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            page: NonZeroUsize::MIN,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Arguments {
    /// Creates new [`Arguments`] of the first page with `per_page` items.
    #[must_use]
    pub fn first(per_page: NonZeroUsize) -> Self {
        Self {
            page: NonZeroUsize::MIN,
            per_page,
        }
    }

    /// Returns the range of item indices covered by the requested page,
    /// clipped to the provided `total` number of items.
    ///
    /// The range is empty if the requested page is past the last one.
    #[must_use]
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page.get() - 1)
            .saturating_mul(self.per_page.get())
            .min(total);
        let end = start.saturating_add(self.per_page.get()).min(total);
        start..end
    }

    /// Returns the number of pages required to hold `total` items.
    #[must_use]
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.per_page.get())
    }

    /// Returns a copy of these [`Arguments`] with the page clamped to
    /// `[1, max(total_pages, 1)]`.
    #[must_use]
    pub fn clamped(self, total_pages: usize) -> Self {
        let last = NonZeroUsize::new(total_pages).unwrap_or(NonZeroUsize::MIN);
        Self {
            page: self.page.min(last),
            ..self
        }
    }
}

/// A page of items.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page<I> {
    /// Items on this [`Page`], at most [`Arguments::per_page`] of them.
    pub items: Vec<I>,

    /// [`Arguments`] this [`Page`] was selected with.
    pub arguments: Arguments,

    /// Total number of items across all pages.
    pub total_items: usize,
}

impl<I> Page<I> {
    /// Selects the [`Page`] requested by `arguments` from all the `items`.
    #[must_use]
    pub fn select<T>(items: &[T], arguments: Arguments) -> Self
    where
        T: Clone + Into<I>,
    {
        Self {
            items: items[arguments.range(items.len())]
                .iter()
                .cloned()
                .map(Into::into)
                .collect(),
            arguments,
            total_items: items.len(),
        }
    }

    /// Returns the total number of pages.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.arguments.total_pages(self.total_items)
    }
}

/// Order of sorting.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Order {
    /// Ascending order.
    #[default]
    Ascending,

    /// Descending order.
    Descending,
}

impl Order {
    /// Returns the opposite [`Order`].
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Applies this [`Order`] to an ascending comparison result.
    #[must_use]
    pub const fn apply(self, ord: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Self::Ascending => ord,
            Self::Descending => ord.reverse(),
        }
    }
}

//! Client-side shaping of tabular data: filtering, sorting and pagination.
//!
//! A [`Table`] owns the rows fetched for it along with its [`State`], and
//! renders a [`View`] of the visible page on demand. Rows are never mutated:
//! a new fetch replaces them wholesale.

pub mod allocation;
pub mod history;
pub mod projection;

use std::{cmp::Ordering, fmt, num::NonZeroUsize, str::FromStr};

use common::pagination::{self, Arguments, Order};
use derive_more::Debug;
use tracing as log;

pub use self::{
    allocation::AllocationTable, history::HistoryTable,
    projection::ProjectionTable,
};

/// Record displayable in a [`Table`].
pub trait Row {
    /// Stable identifier of a [`Row`], used to break sorting ties.
    type Id: Ord;

    /// Field a [`Row`] can be sorted by.
    type Field: Copy + Eq + fmt::Debug;

    /// Categorical field a [`Row`] can be filtered by.
    type Category: Copy + Eq + fmt::Debug;

    /// [`Row::Field`] a fresh [`Table`] is sorted by.
    const DEFAULT_SORT: Self::Field;

    /// Returns the stable identifier of this [`Row`].
    fn id(&self) -> Self::Id;

    /// Returns the [`Row::Category`] of this [`Row`].
    fn category(&self) -> Self::Category;

    /// Compares this [`Row`] to the `other` one by the provided `field`, in
    /// ascending order.
    fn compare_by(&self, other: &Self, field: Self::Field) -> Ordering;
}

/// Filter of [`Row`]s by their category.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Filter<C> {
    /// Every [`Row`] passes.
    #[default]
    All,

    /// Only [`Row`]s of the provided category pass.
    Only(C),
}

impl<C: PartialEq> Filter<C> {
    /// Indicates whether the provided `category` passes this [`Filter`].
    pub fn matches(&self, category: &C) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }
}

impl<C: FromStr> FromStr for Filter<C> {
    type Err = C::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            C::from_str(s).map(Self::Only)
        }
    }
}

/// Query state of a [`Table`], owned by a single instance.
#[derive(Debug)]
pub struct State<R: Row> {
    /// [`Row::Field`] the rows are sorted by.
    pub sort_field: R::Field,

    /// [`Order`] the rows are sorted in.
    pub order: Order,

    /// [`Filter`] the rows are selected by.
    pub filter: Filter<R::Category>,

    /// Requested page.
    pub arguments: Arguments,
}

impl<R: Row> Clone for State<R> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<R: Row> Copy for State<R> {}

impl<R: Row> State<R> {
    /// Creates a new [`State`] on the first page of the provided size,
    /// sorted by [`Row::DEFAULT_SORT`] in ascending order, and unfiltered.
    #[must_use]
    pub fn new(per_page: NonZeroUsize) -> Self {
        Self {
            sort_field: R::DEFAULT_SORT,
            order: Order::Ascending,
            filter: Filter::All,
            arguments: Arguments::first(per_page),
        }
    }

    /// Sorts by the provided `field`.
    ///
    /// Sorting by the current field again flips the [`Order`], while
    /// switching to another field sorts by it in ascending order.
    pub fn handle_sort(&mut self, field: R::Field) {
        if field == self.sort_field {
            self.order = self.order.flipped();
        } else {
            self.sort_field = field;
            self.order = Order::Ascending;
        }
        log::debug!(?field, order = ?self.order, "table sort changed");
    }

    /// Replaces the [`Filter`] and returns to the first page.
    pub fn handle_filter_change(&mut self, filter: Filter<R::Category>) {
        self.filter = filter;
        self.arguments.page = NonZeroUsize::MIN;
        log::debug!(?filter, "table filter changed");
    }

    /// Navigates to the provided `page`, clamped to `[1, total_pages]`.
    ///
    /// Stays on the first page if there are no pages at all.
    pub fn handle_page_change(&mut self, page: usize, total_pages: usize) {
        let page = NonZeroUsize::new(page).unwrap_or(NonZeroUsize::MIN);
        self.arguments = Arguments { page, ..self.arguments }.clamped(total_pages);
        log::debug!(page = self.arguments.page.get(), "table page changed");
    }

    /// Changes the number of rows per page and returns to the first page.
    ///
    /// A zero size is taken as one.
    pub fn handle_items_per_page_change(&mut self, per_page: usize) {
        let per_page = NonZeroUsize::new(per_page).unwrap_or(NonZeroUsize::MIN);
        self.arguments = Arguments::first(per_page);
        log::debug!(per_page, "table page size changed");
    }
}

/// Visible page of a [`Table`] along with its pagination metadata.
#[derive(Debug)]
pub struct View<'r, R: Row> {
    /// Rows of the current page, at most [`View::per_page`] of them.
    #[debug(skip)]
    pub data: Vec<&'r R>,

    /// [`Row::Field`] the rows are sorted by.
    pub sort_field: R::Field,

    /// [`Order`] the rows are sorted in.
    pub order: Order,

    /// One-based number of the current page.
    pub page: usize,

    /// Maximum number of rows on a page.
    pub per_page: usize,

    /// Number of pages holding the filtered rows.
    pub total_pages: usize,

    /// Number of rows passing the [`Filter`], across all pages.
    pub total_items: usize,
}

/// Filters and sorts the provided `rows` according to the provided `state`.
///
/// The sort is stable and breaks ties by [`Row::id()`] in ascending order,
/// whatever the [`Order`] is.
pub fn filter_and_sort<'r, R: Row>(rows: &'r [R], state: &State<R>) -> Vec<&'r R> {
    let mut rows = rows
        .iter()
        .filter(|r| state.filter.matches(&r.category()))
        .collect::<Vec<_>>();
    rows.sort_by(|a, b| {
        state
            .order
            .apply(a.compare_by(b, state.sort_field))
            .then_with(|| a.id().cmp(&b.id()))
    });
    rows
}

/// Shapes the provided `rows` into the [`View`] requested by `state`.
///
/// A page past the last one yields no rows.
pub fn shape<'r, R: Row>(rows: &'r [R], state: &State<R>) -> View<'r, R> {
    let filtered = filter_and_sort(rows, state);
    let page = pagination::Page::<&R>::select(&filtered, state.arguments);
    View {
        total_pages: page.total_pages(),
        total_items: page.total_items,
        data: page.items,
        sort_field: state.sort_field,
        order: state.order,
        page: state.arguments.page.get(),
        per_page: state.arguments.per_page.get(),
    }
}

/// Table of [`Row`]s with its own [`State`].
#[derive(Debug)]
pub struct Table<R: Row> {
    /// Rows of this [`Table`], as fetched.
    #[debug(skip)]
    rows: Vec<R>,

    /// [`State`] of this [`Table`].
    state: State<R>,
}

impl<R: Row> Table<R> {
    /// Creates a new [`Table`] of the provided `rows`, showing `per_page`
    /// rows at once.
    ///
    /// Absent rows are treated as no rows.
    #[must_use]
    pub fn new(rows: Option<Vec<R>>, per_page: NonZeroUsize) -> Self {
        Self {
            rows: rows.unwrap_or_default(),
            state: State::new(per_page),
        }
    }

    /// Replaces the rows of this [`Table`] with freshly fetched ones,
    /// keeping its [`State`].
    pub fn replace_rows(&mut self, rows: Option<Vec<R>>) {
        self.rows = rows.unwrap_or_default();
    }

    /// Returns [`State`] of this [`Table`].
    #[must_use]
    pub fn state(&self) -> &State<R> {
        &self.state
    }

    /// Returns the [`View`] of the current page.
    #[must_use]
    pub fn view(&self) -> View<'_, R> {
        shape(&self.rows, &self.state)
    }

    /// Returns the number of pages holding the filtered rows.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        let total = self
            .rows
            .iter()
            .filter(|r| self.state.filter.matches(&r.category()))
            .count();
        self.state.arguments.total_pages(total)
    }

    /// Sorts by the provided `field`, see [`State::handle_sort()`].
    pub fn handle_sort(&mut self, field: R::Field) {
        self.state.handle_sort(field);
    }

    /// Replaces the [`Filter`], see [`State::handle_filter_change()`].
    pub fn handle_filter_change(&mut self, filter: Filter<R::Category>) {
        self.state.handle_filter_change(filter);
    }

    /// Navigates to the provided `page`, clamped to the existing pages.
    pub fn handle_page_change(&mut self, page: usize) {
        let total_pages = self.total_pages();
        self.state.handle_page_change(page, total_pages);
    }

    /// Changes the page size, see
    /// [`State::handle_items_per_page_change()`].
    pub fn handle_items_per_page_change(&mut self, per_page: usize) {
        self.state.handle_items_per_page_change(per_page);
    }
}

#[cfg(test)]
mod spec {
    use std::{cmp::Ordering, num::NonZeroUsize};

    use common::pagination::Order;

    use super::{shape, Filter, Row, State, Table};

    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    enum Color {
        Red,
        Blue,
    }

    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    enum Field {
        Id,
        Score,
    }

    #[derive(Clone, Copy, Debug)]
    struct Item {
        id: u32,
        color: Color,
        score: u32,
    }

    impl Row for Item {
        type Id = u32;
        type Field = Field;
        type Category = Color;

        const DEFAULT_SORT: Field = Field::Id;

        fn id(&self) -> u32 {
            self.id
        }

        fn category(&self) -> Color {
            self.color
        }

        fn compare_by(&self, other: &Self, field: Field) -> Ordering {
            match field {
                Field::Id => self.id.cmp(&other.id),
                Field::Score => self.score.cmp(&other.score),
            }
        }
    }

    fn items(n: u32) -> Vec<Item> {
        (1..=n)
            .map(|id| Item {
                id,
                color: if id % 3 == 0 { Color::Blue } else { Color::Red },
                score: id % 4,
            })
            .collect()
    }

    fn per_page(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn ids(table: &Table<Item>) -> Vec<u32> {
        table.view().data.iter().map(|i| i.id).collect()
    }

    #[test]
    fn pages_hold_at_most_per_page_rows() {
        for n in 0..=23 {
            for p in 1..=6 {
                let rows = items(n);
                let mut state = State::<Item>::new(per_page(p));
                let total_pages = (n as usize).div_ceil(p);

                for page in 1..=total_pages + 1 {
                    state.arguments.page = NonZeroUsize::new(page).unwrap();
                    let view = shape(&rows, &state);

                    assert_eq!(view.total_pages, total_pages);
                    assert_eq!(view.total_items, n as usize);
                    assert_eq!(
                        view.data.len(),
                        (n as usize).saturating_sub((page - 1) * p).min(p),
                        "N={n} P={p} page={page}",
                    );
                }
            }
        }
    }

    #[test]
    fn sorting_same_field_flips_order() {
        let mut state = State::<Item>::new(per_page(10));
        state.handle_sort(Field::Score);
        assert_eq!(state.sort_field, Field::Score);
        assert_eq!(state.order, Order::Ascending);

        state.handle_sort(Field::Score);
        assert_eq!(state.sort_field, Field::Score);
        assert_eq!(state.order, Order::Descending);

        state.handle_sort(Field::Id);
        assert_eq!(state.sort_field, Field::Id);
        assert_eq!(state.order, Order::Ascending);
    }

    #[test]
    fn sort_breaks_ties_by_id() {
        let mut table = Table::new(Some(items(8)), per_page(10));

        table.handle_sort(Field::Score);
        assert_eq!(ids(&table), vec![4, 8, 1, 5, 2, 6, 3, 7]);

        table.handle_sort(Field::Score);
        assert_eq!(ids(&table), vec![3, 7, 2, 6, 1, 5, 4, 8]);
    }

    #[test]
    fn filter_resets_page() {
        let mut table = Table::new(Some(items(30)), per_page(5));
        table.handle_page_change(3);
        assert_eq!(table.state().arguments.page.get(), 3);

        table.handle_filter_change(Filter::Only(Color::Blue));

        let view = table.view();
        assert_eq!(view.page, 1);
        assert_eq!(view.total_items, 10);
        assert_eq!(view.total_pages, 2);
        assert!(view.data.iter().all(|i| i.color == Color::Blue));

        table.handle_filter_change(Filter::All);
        assert_eq!(table.view().total_items, 30);
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut table = Table::new(Some(items(30)), per_page(5));
        table.handle_page_change(4);

        table.handle_items_per_page_change(20);
        let view = table.view();
        assert_eq!(view.page, 1);
        assert_eq!(view.per_page, 20);
        assert_eq!(view.total_pages, 2);

        table.handle_items_per_page_change(0);
        assert_eq!(table.view().per_page, 1);
    }

    #[test]
    fn page_change_is_clamped() {
        let mut table = Table::new(Some(items(12)), per_page(5));

        table.handle_page_change(99);
        assert_eq!(table.view().page, 3);
        assert_eq!(ids(&table), vec![11, 12]);

        table.handle_page_change(0);
        assert_eq!(table.view().page, 1);
    }

    #[test]
    fn absent_rows_are_empty() {
        let mut table = Table::<Item>::new(None, per_page(10));

        let view = table.view();
        assert!(view.data.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.total_items, 0);

        table.handle_page_change(2);
        assert_eq!(table.view().page, 1);
    }

    #[test]
    fn replaced_rows_keep_state() {
        let mut table = Table::new(Some(items(30)), per_page(10));
        table.handle_page_change(3);

        table.replace_rows(Some(items(12)));
        let view = table.view();
        assert_eq!(view.page, 3);
        assert!(view.data.is_empty());

        table.handle_page_change(3);
        assert_eq!(ids(&table), vec![11, 12]);
    }

    #[test]
    fn parses_filter() {
        assert_eq!("all".parse::<Filter<u8>>(), Ok(Filter::All));
        assert_eq!("ALL".parse::<Filter<u8>>(), Ok(Filter::All));
        assert_eq!("7".parse::<Filter<u8>>(), Ok(Filter::Only(7)));
        assert!("seven".parse::<Filter<u8>>().is_err());
    }
}

//! Abstractions for page-number pagination.

use std::num::NonZeroUsize;

use derive_more::{Display, From, FromStr, Into};

/// Number of rows a single [`page`] holds.
///
/// [`page`]: page_of
#[derive(
    Clone, Copy, Debug, Display, Eq, From, FromStr, Hash, Into, PartialEq,
)]
pub struct RowsPerPage(NonZeroUsize);

impl RowsPerPage {
    /// Creates a new [`RowsPerPage`] out of the given `rows` number.
    ///
    /// [`None`] is returned if the number is zero.
    #[must_use]
    pub fn new(rows: usize) -> Option<Self> {
        NonZeroUsize::new(rows).map(Self)
    }

    /// Returns this [`RowsPerPage`] as a plain number.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for RowsPerPage {
    fn default() -> Self {
        Self(NonZeroUsize::MIN.saturating_add(9))
    }
}

/// 1-based number of a [`page`] in a paginated sequence.
///
/// [`page`]: page_of
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    /// The first [`PageNumber`].
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Creates a new [`PageNumber`] out of the given 1-based `number`.
    ///
    /// [`None`] is returned if the number is zero.
    #[must_use]
    pub fn new(number: usize) -> Option<Self> {
        NonZeroUsize::new(number).map(Self)
    }

    /// Returns this [`PageNumber`] as a plain 1-based number.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Total count of [`page`]s in a paginated sequence.
///
/// Never less than 1: an empty sequence still forms a single empty page.
///
/// [`page`]: page_of
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Hash, Into, Ord, PartialEq,
    PartialOrd,
)]
pub struct PageCount(NonZeroUsize);

impl PageCount {
    /// Counts [`page`]s of a sequence of `total` rows split by the given
    /// [`RowsPerPage`], as `max(1, ceil(total / rows_per_page))`.
    ///
    /// [`page`]: page_of
    #[must_use]
    pub fn of(total: usize, rows_per_page: RowsPerPage) -> Self {
        Self(
            NonZeroUsize::new(total.div_ceil(rows_per_page.get()))
                .unwrap_or(NonZeroUsize::MIN),
        )
    }

    /// Returns this [`PageCount`] as a plain number.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Indicates whether the given [`PageNumber`] addresses an existing
    /// page.
    #[must_use]
    pub fn contains(self, number: PageNumber) -> bool {
        number.get() <= self.get()
    }

    /// Iterates over all the [`PageNumber`]s of this [`PageCount`], in
    /// order.
    pub fn numbers(self) -> impl Iterator<Item = PageNumber> {
        (1..=self.get()).filter_map(PageNumber::new)
    }
}

impl Default for PageCount {
    fn default() -> Self {
        Self(NonZeroUsize::MIN)
    }
}

/// Returns the `number`ed page of the given `rows`, split into
/// consecutive chunks of [`RowsPerPage`] size (the last chunk may be
/// shorter).
///
/// A [`PageNumber`] beyond the [`PageCount`] of `rows` yields an empty
/// page rather than failing.
#[must_use]
pub fn page_of<T>(
    rows: &[T],
    rows_per_page: RowsPerPage,
    number: PageNumber,
) -> &[T] {
    let start = (number.get() - 1).saturating_mul(rows_per_page.get());
    let end = start.saturating_add(rows_per_page.get()).min(rows.len());
    rows.get(start..end).unwrap_or(&[])
}

#[cfg(test)]
mod spec {
    use super::{page_of, PageCount, PageNumber, RowsPerPage};

    fn per_page(rows: usize) -> RowsPerPage {
        RowsPerPage::new(rows).unwrap()
    }

    fn page(number: usize) -> PageNumber {
        PageNumber::new(number).unwrap()
    }

    #[test]
    fn count_follows_ceiling_formula() {
        for total in 0..=50_usize {
            for per in [1, 3, 10, 20, 30] {
                let expected = 1.max(total.div_ceil(per));
                assert_eq!(
                    PageCount::of(total, per_page(per)).get(),
                    expected,
                    "total: {total}, per page: {per}",
                );
            }
        }
    }

    #[test]
    fn empty_sequence_forms_single_empty_page() {
        let rows: [u8; 0] = [];

        assert_eq!(PageCount::of(0, per_page(10)).get(), 1);
        assert!(page_of(&rows, per_page(10), PageNumber::FIRST).is_empty());
    }

    #[test]
    fn pages_cover_whole_sequence_without_overlap() {
        let rows = (0..25).collect::<Vec<_>>();
        let per = per_page(10);

        let count = PageCount::of(rows.len(), per);
        assert_eq!(count.get(), 3);

        let concatenated = count
            .numbers()
            .flat_map(|n| page_of(&rows, per, n))
            .copied()
            .collect::<Vec<_>>();
        assert_eq!(concatenated, rows);
    }

    #[test]
    fn last_page_may_be_shorter() {
        let rows = (0..25).collect::<Vec<_>>();

        assert_eq!(page_of(&rows, per_page(10), page(3)).len(), 5);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let rows = (0..25).collect::<Vec<_>>();

        assert!(page_of(&rows, per_page(10), page(4)).is_empty());
        assert!(page_of(&rows, per_page(10), page(usize::MAX)).is_empty());
    }

    #[test]
    fn contains_accepts_only_existing_pages() {
        let count = PageCount::of(25, per_page(10));

        assert!(count.contains(page(1)));
        assert!(count.contains(page(3)));
        assert!(!count.contains(page(4)));
    }
}

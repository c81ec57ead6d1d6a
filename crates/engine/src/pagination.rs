//! Deterministic page slicing for enumerated assignments.
//!
//! Pages are 1-indexed. A page past the end is empty rather than an error, and
//! an empty sequence still reports one page.

use std::num::NonZeroUsize;

use serde::Serialize;

/// Items per page when nothing else is configured.
pub const DEFAULT_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => NonZeroUsize::MIN,
};

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: NonZeroUsize,
    pub total_pages: NonZeroUsize,
}

impl<T> Page<T> {
    /// Transform every item, keeping the page numbers.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E, F>(self, f: F) -> Result<Page<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        Ok(Page {
            items: self.items.into_iter().map(f).collect::<Result<_, E>>()?,
            page: self.page,
            total_pages: self.total_pages,
        })
    }
}

/// Fixed-size page slicer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: NonZeroUsize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl Paginator {
    #[must_use]
    pub const fn new(per_page: NonZeroUsize) -> Self {
        Self { per_page }
    }

    #[must_use]
    pub const fn per_page(&self) -> NonZeroUsize {
        self.per_page
    }

    /// `ceil(len / per_page)`, never less than one.
    #[must_use]
    pub fn total_pages(&self, len: usize) -> NonZeroUsize {
        NonZeroUsize::new(len.div_ceil(self.per_page.get())).unwrap_or(NonZeroUsize::MIN)
    }

    /// `[start, end)` item range covered by `page`. Saturates instead of overflowing.
    #[must_use]
    pub fn bounds(&self, page: NonZeroUsize) -> (usize, usize) {
        let start = page
            .get()
            .saturating_sub(1)
            .saturating_mul(self.per_page.get());
        (start, start.saturating_add(self.per_page.get()))
    }

    /// Slice `page` out of a materialised sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    /// use chroma_engine::Paginator;
    ///
    /// let items: Vec<u32> = (0..12).collect();
    /// let page = Paginator::default().paginate(&items, NonZeroUsize::new(3).unwrap());
    /// assert_eq!(page.items, vec![10, 11]);
    /// assert_eq!(page.total_pages.get(), 3);
    /// ```
    #[must_use]
    pub fn paginate<T: Clone>(&self, items: &[T], page: NonZeroUsize) -> Page<T> {
        let (start, end) = self.bounds(page);
        let len = items.len();
        let slice = items.get(start.min(len)..end.min(len)).unwrap_or(&[]);
        Page {
            items: slice.to_vec(),
            page,
            total_pages: self.total_pages(len),
        }
    }

    /// Slice `page` out of a lazy sequence of known length `total_items`.
    ///
    /// Items before the page are skipped, never collected.
    #[must_use]
    pub fn paginate_iter<I: IntoIterator>(
        &self,
        items: I,
        total_items: usize,
        page: NonZeroUsize,
    ) -> Page<I::Item> {
        let (start, _) = self.bounds(page);
        Page {
            items: items
                .into_iter()
                .skip(start)
                .take(self.per_page.get())
                .collect(),
            page,
            total_pages: self.total_pages(total_items),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    fn page(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_default_is_five_per_page() {
        assert_eq!(Paginator::default().per_page().get(), 5);
    }

    #[test]
    fn test_empty_sequence_has_one_page() {
        let items: Vec<u8> = Vec::new();
        let p = Paginator::default().paginate(&items, page(1));
        assert!(p.items.is_empty());
        assert_eq!(p.total_pages.get(), 1);
    }

    #[test]
    fn test_twelve_items_make_three_pages() {
        let items: Vec<usize> = (0..12).collect();
        let pager = Paginator::default();
        let first = pager.paginate(&items, page(1));
        assert_eq!(first.items, vec![0, 1, 2, 3, 4]);
        assert_eq!(first.total_pages.get(), 3);

        let third = pager.paginate(&items, page(3));
        assert_eq!(third.items.len(), 2);
        assert_eq!(third.total_pages.get(), 3);
    }

    #[test]
    fn test_page_past_end_is_empty_not_error() {
        let items: Vec<usize> = (0..12).collect();
        let fourth = Paginator::default().paginate(&items, page(4));
        assert!(fourth.items.is_empty());
        assert_eq!(fourth.page.get(), 4);
        assert_eq!(fourth.total_pages.get(), 3);
    }

    #[test]
    fn test_huge_page_number_saturates() {
        let items = vec![1, 2, 3];
        let p = Paginator::default().paginate(&items, page(usize::MAX));
        assert!(p.items.is_empty());
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_page() {
        let pager = Paginator::new(page(5));
        assert_eq!(pager.total_pages(10).get(), 2);
        assert_eq!(pager.total_pages(11).get(), 3);
    }

    #[test]
    fn test_try_map_keeps_page_numbers() {
        let items: Vec<usize> = (0..7).collect();
        let p = Paginator::default().paginate(&items, page(2));
        let mapped: Page<String> = p.try_map(|n| Ok::<_, ()>(n.to_string())).unwrap();
        assert_eq!(mapped.items, vec!["5".to_string(), "6".to_string()]);
        assert_eq!(mapped.total_pages.get(), 2);
    }

    #[test]
    fn test_try_map_stops_at_first_error() {
        let items = vec![1, 2, 3];
        let p = Paginator::default().paginate(&items, page(1));
        let result: Result<Page<i32>, String> =
            p.try_map(|n| if n == 2 { Err(format!("bad {n}")) } else { Ok(n) });
        assert_eq!(result.unwrap_err(), "bad 2");
    }

    #[test]
    fn test_paginate_iter_matches_slice_pagination() {
        let items: Vec<usize> = (0..12).collect();
        let pager = Paginator::new(page(4));
        for n in 1..=4 {
            assert_eq!(
                pager.paginate_iter(items.iter().copied(), items.len(), page(n)),
                pager.paginate(&items, page(n))
            );
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::{AppError, AppResult};

/// Validated request for one bounded slice of a larger result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page_size: usize,
    page_index: usize,
}

impl PageRequest {
    /// Creates a page request with a positive page size and zero-based index.
    ///
    /// A zero page size is a contract violation, not a value to clamp.
    pub fn new(page_size: usize, page_index: usize) -> AppResult<Self> {
        if page_size == 0 {
            return Err(AppError::Validation(
                "page size must be at least 1".to_owned(),
            ));
        }

        Ok(Self {
            page_size,
            page_index,
        })
    }

    /// Returns the maximum number of items per page.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the zero-based page index.
    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Returns the number of items skipped before this page starts.
    ///
    /// The index is unbounded, so the multiplication saturates; an offset of
    /// `usize::MAX` still lands past every result set and yields an empty
    /// page rather than a panic.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }
}

/// A bounded, ordered slice of a result set plus total-count metadata.
///
/// Constructed fresh per query and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    items: Vec<T>,
    page_size: usize,
    page_index: usize,
    total_count: usize,
}

impl<T> Page<T> {
    /// Creates a page after checking the slice-length invariant.
    ///
    /// `items.len()` must equal `min(page_size, total_count - offset)` with
    /// the subtraction saturating at zero for an index past the last page.
    pub fn new(items: Vec<T>, request: &PageRequest, total_count: usize) -> AppResult<Self> {
        let expected = total_count
            .saturating_sub(request.offset())
            .min(request.page_size());

        if items.len() != expected {
            return Err(AppError::Validation(format!(
                "page slice holds {} items but {} were expected",
                items.len(),
                expected
            )));
        }

        Ok(Self {
            items,
            page_size: request.page_size(),
            page_index: request.page_index(),
            total_count,
        })
    }

    /// Returns the items on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page and returns its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Returns the maximum number of items per page.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the zero-based page index.
    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Returns the number of items matching the query across all pages.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns the number of pages needed to hold every matching item.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::{Page, PageRequest};

    fn request(page_size: usize, page_index: usize) -> PageRequest {
        PageRequest::new(page_size, page_index).unwrap_or_else(|_| unreachable!())
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(PageRequest::new(0, 0).is_err());
    }

    #[test]
    fn offset_multiplies_size_and_index() {
        assert_eq!(request(25, 3).offset(), 75);
    }

    #[test]
    fn full_page_passes_invariant_check() {
        let page = Page::new(vec![1, 2], &request(2, 0), 5);
        assert!(page.is_ok());

        let page = page.unwrap_or_else(|_| unreachable!());
        assert_eq!(page.total_count(), 5);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn trailing_page_holds_the_remainder() {
        let page = Page::new(vec![5], &request(2, 2), 5);
        assert!(page.is_ok());
        assert_eq!(page.unwrap_or_else(|_| unreachable!()).items().len(), 1);
    }

    #[test]
    fn huge_page_index_saturates_instead_of_overflowing() {
        assert_eq!(request(2, usize::MAX).offset(), usize::MAX);

        let page = Page::<i32>::new(Vec::new(), &request(2, usize::MAX), 5);
        assert!(page.is_ok());

        let page = page.unwrap_or_else(|_| unreachable!());
        assert!(page.items().is_empty());
        assert_eq!(page.total_count(), 5);
    }

    #[test]
    fn page_past_the_end_must_be_empty() {
        let page = Page::<i32>::new(Vec::new(), &request(2, 9), 5);
        assert!(page.is_ok());
        assert_eq!(page.unwrap_or_else(|_| unreachable!()).total_pages(), 3);
    }

    #[test]
    fn oversized_slice_is_rejected() {
        let page = Page::new(vec![1, 2, 3], &request(2, 0), 5);
        assert!(page.is_err());
    }

    #[test]
    fn empty_result_set_has_zero_pages() {
        let page = Page::<i32>::new(Vec::new(), &request(10, 0), 0);
        assert!(page.is_ok());

        let page = page.unwrap_or_else(|_| unreachable!());
        assert_eq!(page.total_pages(), 0);
        assert!(page.items().is_empty());
    }
}

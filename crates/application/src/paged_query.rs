//! Generic filter, sort, and slice engine behind every listing operation.

use atrium_core::{AppResult, Page, PageRequest};

/// Filters, counts, stably sorts, and slices a source collection.
///
/// `total_count` is the filtered length before slicing, so a page index past
/// the last page yields an empty slice with correct totals rather than an
/// error. The sort is stable: ties keep source order whether ascending or
/// descending. Pure over its inputs; enumeration failures of the underlying
/// store must be surfaced by the caller before invoking the engine, never
/// masked as an empty page.
pub fn query<T, K, P, F>(
    source: Vec<T>,
    predicate: P,
    order_key: F,
    descending: bool,
    request: &PageRequest,
) -> AppResult<Page<T>>
where
    P: Fn(&T) -> bool,
    F: Fn(&T) -> K,
    K: Ord,
{
    let mut matched: Vec<T> = source.into_iter().filter(|item| predicate(item)).collect();
    let total_count = matched.len();

    if descending {
        matched.sort_by(|left, right| order_key(right).cmp(&order_key(left)));
    } else {
        matched.sort_by(|left, right| order_key(left).cmp(&order_key(right)));
    }

    let items: Vec<T> = matched
        .into_iter()
        .skip(request.offset())
        .take(request.page_size())
        .collect();

    Page::new(items, request, total_count)
}

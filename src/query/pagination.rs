//! Offset pagination

use serde::Serialize;

/// Pagination metadata returned alongside every page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Number of items matching the query, before slicing
    pub total: usize,
    /// Number of items after the current page
    pub items_left: usize,
    pub has_more: bool,
    pub page: usize,
    pub size: usize,
}

/// Canonical page coordinates. `size` is always > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    /// Absent or negative page becomes 0; absent or non-positive size
    /// becomes `default_size`.
    pub fn normalize(page: Option<i64>, size: Option<i64>, default_size: usize) -> Self {
        let page = page
            .filter(|p| *p > 0)
            .and_then(|p| usize::try_from(p).ok())
            .unwrap_or(0);
        let size = size
            .filter(|s| *s > 0)
            .and_then(|s| usize::try_from(s).ok())
            .unwrap_or(default_size)
            .max(1);
        Self { page, size }
    }

    /// Index of the first item of the page
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

pub fn compute_page_info(page: usize, size: usize, total: usize) -> PageInfo {
    let from = page.saturating_mul(size);
    let to = from.saturating_add(size).min(total);
    let items_left = total.saturating_sub(to);
    PageInfo {
        total,
        items_left,
        has_more: items_left > 0,
        page,
        size,
    }
}

/// Slice one page out of `items` and describe it
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> (Vec<T>, PageInfo) {
    let info = compute_page_info(request.page, request.size, items.len());
    let page = items
        .into_iter()
        .skip(request.offset())
        .take(request.size)
        .collect();
    (page, info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_info_boundaries() {
        let size = 5;
        for total in [0, 1, size - 1, size, size + 1] {
            let info = compute_page_info(0, size, total);
            let to = size.min(total);
            assert_eq!(info.items_left, total - to, "total={}", total);
            assert_eq!(info.has_more, total > size, "total={}", total);
            assert_eq!(info.total, total);
        }
    }

    #[test]
    fn test_page_beyond_last() {
        let info = compute_page_info(4, 10, 25);
        assert_eq!(info.items_left, 0);
        assert!(!info.has_more);

        let (items, info) = paginate((0..25).collect::<Vec<_>>(), PageRequest { page: 3, size: 10 });
        assert!(items.is_empty());
        assert!(!info.has_more);
        assert_eq!(info.total, 25);
    }

    #[test]
    fn test_last_partial_page() {
        let (items, info) = paginate((0..25).collect::<Vec<_>>(), PageRequest { page: 2, size: 10 });
        assert_eq!(items, vec![20, 21, 22, 23, 24]);
        assert_eq!(info.items_left, 0);
        assert!(!info.has_more);
    }

    #[test]
    fn test_middle_page() {
        let (items, info) = paginate((0..25).collect::<Vec<_>>(), PageRequest { page: 1, size: 10 });
        assert_eq!(items.first(), Some(&10));
        assert_eq!(items.len(), 10);
        assert_eq!(info.items_left, 5);
        assert!(info.has_more);
    }

    #[test]
    fn test_huge_page_saturates() {
        let info = compute_page_info(usize::MAX, 10, 3);
        assert_eq!(info.items_left, 0);
        assert!(!info.has_more);
    }

    #[test]
    fn test_normalize_page_request() {
        assert_eq!(PageRequest::normalize(None, None, 10), PageRequest { page: 0, size: 10 });
        assert_eq!(PageRequest::normalize(Some(-2), Some(0), 10), PageRequest { page: 0, size: 10 });
        assert_eq!(PageRequest::normalize(Some(3), Some(25), 10), PageRequest { page: 3, size: 25 });
        assert_eq!(PageRequest::normalize(None, Some(-1), 0), PageRequest { page: 0, size: 1 });
    }
}

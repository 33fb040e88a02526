use serde::{Deserialize, Serialize};

/// Paginated response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Last reachable page. An empty result still has one (empty) page.
    pub fn last_page(&self) -> i64 {
        self.total_pages.max(1)
    }
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, page: i64, limit: i64, total: i64) -> Self {
        let total_pages = if limit > 0 {
            (total + limit - 1) / limit
        } else {
            1
        };
        let has_next = page < total_pages;
        let has_prev = page > 1;

        Self {
            data: items,
            meta: PaginationMeta {
                page,
                limit,
                total,
                total_pages,
                has_next,
                has_prev,
            },
        }
    }

    /// True only when the whole listing has no rows. A page past the end of
    /// a non-empty listing is not empty; see [`Self::overshoot`].
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.meta.total == 0
    }

    /// Last page to fall back to when this page came back empty although
    /// rows remain on earlier pages.
    pub fn overshoot(&self) -> Option<i64> {
        let past_end = self.data.is_empty()
            && self.meta.total > 0
            && self.meta.page > self.meta.last_page();
        past_end.then(|| self.meta.last_page())
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResponse<U> {
        PaginatedResponse {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

/// Bare `?page=&limit=` query for listings without other filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Helper to normalize pagination params with safe defaults.
pub fn normalize_pagination(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(20).clamp(1, 100);
    (page, limit)
}

/// Row offset for a normalized `(page, limit)` pair.
/// Saturates instead of overflowing for absurd `?page=` values.
pub fn page_offset(page: i64, limit: i64) -> i64 {
    (page.max(1) - 1).saturating_mul(limit)
}

/// Client-side page cursor. `next`/`prev` never leave `[1, last_page]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page: i64,
    pub last_page: i64,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            page: 1,
            last_page: 1,
        }
    }
}

impl PageCursor {
    pub fn new(page: i64, last_page: i64) -> Self {
        let last_page = last_page.max(1);
        Self {
            page: page.clamp(1, last_page),
            last_page,
        }
    }

    pub fn from_meta(meta: &PaginationMeta) -> Self {
        Self::new(meta.page, meta.last_page())
    }

    pub fn can_next(&self) -> bool {
        self.page < self.last_page
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn next(self) -> Self {
        Self::new(self.page + 1, self.last_page)
    }

    pub fn prev(self) -> Self {
        Self::new(self.page - 1, self.last_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huge_page_number_saturates_offset() {
        let (page, limit) = normalize_pagination(Some(i64::MAX), Some(100));
        assert_eq!(page, i64::MAX);
        assert_eq!(page_offset(page, limit), i64::MAX);
        assert!(page_offset(page, limit) >= 0);
    }

    #[test]
    fn page_past_the_end_is_not_empty() {
        let past_end: PaginatedResponse<i32> = PaginatedResponse::new(vec![], 3, 10, 20);
        assert!(!past_end.is_empty());
        assert_eq!(past_end.overshoot(), Some(2));

        let nothing: PaginatedResponse<i32> = PaginatedResponse::new(vec![], 1, 10, 0);
        assert!(nothing.is_empty());
        assert_eq!(nothing.overshoot(), None);

        let full = PaginatedResponse::new(vec![1], 2, 10, 11);
        assert_eq!(full.overshoot(), None);
    }

    #[test]
    fn paginated_response_computes_meta() {
        let resp = PaginatedResponse::new(vec![1, 2, 3], 2, 3, 7);
        assert_eq!(resp.meta.total_pages, 3);
        assert!(resp.meta.has_next);
        assert!(resp.meta.has_prev);
    }

    #[test]
    fn empty_result_still_has_one_last_page() {
        let resp: PaginatedResponse<i32> = PaginatedResponse::new(vec![], 1, 20, 0);
        assert_eq!(resp.meta.total_pages, 0);
        assert_eq!(resp.meta.last_page(), 1);
        assert!(!resp.meta.has_next);
        assert!(resp.is_empty());
    }

    #[test]
    fn normalize_pagination_applies_defaults_and_bounds() {
        assert_eq!(normalize_pagination(None, None), (1, 20));
        assert_eq!(normalize_pagination(Some(0), Some(0)), (1, 1));
        assert_eq!(normalize_pagination(Some(-4), Some(500)), (1, 100));
        assert_eq!(normalize_pagination(Some(3), Some(10)), (3, 10));
    }

    #[test]
    fn page_offset_is_zero_based() {
        assert_eq!(page_offset(1, 20), 0);
        assert_eq!(page_offset(3, 10), 20);
    }

    #[test]
    fn cursor_stops_at_last_page() {
        let cursor = PageCursor::new(2, 3);
        let last = cursor.next();
        assert_eq!(last.page, 3);
        assert!(!last.can_next());
        assert_eq!(last.next().page, 3);
    }

    #[test]
    fn cursor_stops_at_first_page() {
        let cursor = PageCursor::new(1, 5);
        assert!(!cursor.can_prev());
        assert_eq!(cursor.prev().page, 1);
    }

    #[test]
    fn cursor_clamps_out_of_range_input() {
        let cursor = PageCursor::new(9, 0);
        assert_eq!(cursor, PageCursor { page: 1, last_page: 1 });
    }

    #[test]
    fn map_preserves_meta() {
        let resp = PaginatedResponse::new(vec![1, 2], 1, 2, 4).map(|n| n * 10);
        assert_eq!(resp.data, vec![10, 20]);
        assert_eq!(resp.meta.total, 4);
    }
}

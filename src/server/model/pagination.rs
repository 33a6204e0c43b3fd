//! Page requests and paginated results.

use crate::model::api::{PaginatedDto, PaginationMetaDto};

pub const DEFAULT_LIMIT: u64 = 20;
pub const DEFAULT_TRANSACTION_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Requested page with a 1-indexed page number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
    /// When false the repository returns every matching row as a single page.
    pub paginate: bool,
}

impl PageRequest {
    /// Normalizes raw query values: page defaults to 1, limit is clamped to `1..=MAX_LIMIT`.
    pub fn new(page: Option<u64>, limit: Option<u64>, default_limit: u64) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(default_limit).clamp(1, MAX_LIMIT),
            paginate: true,
        }
    }

    /// Builds a request from `page`, `limit` and `paginate` query values.
    ///
    /// `paginate=false` returns every row; omitted or `true` pages normally.
    pub fn from_query(
        page: Option<u64>,
        limit: Option<u64>,
        paginate: Option<bool>,
        default_limit: u64,
    ) -> Self {
        if paginate == Some(false) {
            return Self::unpaginated();
        }
        Self::new(page, limit, default_limit)
    }

    pub fn unpaginated() -> Self {
        Self {
            page: 1,
            limit: MAX_LIMIT,
            paginate: false,
        }
    }

    /// Zero-indexed page for `Paginator::fetch_page`.
    pub fn page_index(&self) -> u64 {
        self.page - 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None, DEFAULT_LIMIT)
    }
}

/// One page of results plus the total number of matching rows.
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl<T> Paginated<T> {
    /// Wraps rows fetched without pagination as a single page.
    pub fn single_page(items: Vec<T>) -> Self {
        let total = items.len() as u64;
        Self {
            items,
            page: 1,
            limit: total.max(1),
            total,
        }
    }

    /// Builds the result of a repository query made with `request`.
    pub fn from_request(items: Vec<T>, total: u64, request: &PageRequest) -> Self {
        if !request.paginate {
            return Self::single_page(items);
        }

        Self {
            items,
            page: request.page,
            limit: request.limit,
            total,
        }
    }

    /// Pages through rows that were already loaded in full.
    pub fn from_vec(items: Vec<T>, request: &PageRequest) -> Self {
        if !request.paginate {
            return Self::single_page(items);
        }

        let total = items.len() as u64;
        let skip = request.page_index().saturating_mul(request.limit) as usize;
        let items = items
            .into_iter()
            .skip(skip)
            .take(request.limit as usize)
            .collect();

        Self {
            items,
            page: request.page,
            limit: request.limit,
            total,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.limit > 0 {
            self.total.div_ceil(self.limit)
        } else {
            0
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
        }
    }

    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PaginatedDto<D> {
        let total_pages = self.total_pages();
        let meta = PaginationMetaDto {
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages,
            has_next: self.page < total_pages,
            has_prev: self.page > 1,
        };

        PaginatedDto {
            items: self.items.into_iter().map(f).collect(),
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_page_and_limit() {
        let request = PageRequest::new(Some(0), Some(500), DEFAULT_LIMIT);
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, MAX_LIMIT);

        let request = PageRequest::new(None, Some(0), DEFAULT_LIMIT);
        assert_eq!(request.limit, 1);

        let request = PageRequest::new(None, None, DEFAULT_TRANSACTION_LIMIT);
        assert_eq!(request.limit, 10);
    }

    #[test]
    fn computes_meta() {
        let page = Paginated {
            items: vec![1, 2, 3],
            page: 2,
            limit: 3,
            total: 7,
        };
        let dto = page.into_dto(|n| n * 10);

        assert_eq!(dto.items, vec![10, 20, 30]);
        assert_eq!(dto.meta.total_pages, 3);
        assert!(dto.meta.has_next);
        assert!(dto.meta.has_prev);
    }

    #[test]
    fn slices_loaded_rows() {
        let request = PageRequest::new(Some(2), Some(2), DEFAULT_LIMIT);
        let page = Paginated::from_vec(vec![1, 2, 3, 4, 5], &request);

        assert_eq!(page.items, vec![3, 4]);
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn empty_result_has_no_pages() {
        let dto = Paginated::<i32>::single_page(vec![]).into_dto(|n| n);

        assert_eq!(dto.meta.total, 0);
        assert_eq!(dto.meta.total_pages, 0);
        assert!(!dto.meta.has_next);
        assert!(!dto.meta.has_prev);
    }
}

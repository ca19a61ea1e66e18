// src/domain/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Number of articles shown on a listing or search page.
pub const ARTICLES_PER_PAGE: u32 = 10;

/// One-based page number. Zero and negative values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 1 {
            return Err(DomainError::Validation(
                "page number must be a positive integer".into(),
            ));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::Validation("page number is out of range".into()))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: PageNumber,
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(page: PageNumber, per_page: u32) -> Self {
        Self {
            page,
            per_page: per_page.max(1),
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.get() - 1) * u64::from(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }

    /// Slices an already ordered collection, the way a store would apply
    /// `LIMIT`/`OFFSET`.
    pub fn slice<T: Clone>(&self, ordered: &[T]) -> Page<T> {
        let total = ordered.len() as u64;
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let items = ordered
            .iter()
            .skip(start)
            .take(self.per_page as usize)
            .cloned()
            .collect();
        Page::new(items, *self, total)
    }
}

/// One page of an ordered result set together with the size of the whole set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: PageNumber,
    pub per_page: u32,
    pub total_items: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        Self {
            items,
            page: request.page,
            per_page: request.per_page,
            total_items,
        }
    }

    pub fn total_pages(&self) -> u32 {
        let per_page = u64::from(self.per_page.max(1));
        let pages = self.total_items.div_ceil(per_page);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_next(&self) -> bool {
        self.page.get() < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page.get() > 1
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
        }
    }
}

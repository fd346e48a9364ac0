//! Lenient page-number pagination.

use serde::Serialize;

/// Page size of the public blog listing.
pub const PUBLIC_PAGE_SIZE: u64 = 5;

/// A requested page, as it arrived from the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    number: Option<i64>,
}

impl PageRequest {
    /// Parse a raw page parameter. Absent or non-integer input means page 1.
    pub fn parse(raw: Option<&str>) -> Self {
        Self {
            number: raw.and_then(|s| s.trim().parse().ok()),
        }
    }

    pub const fn number(number: i64) -> Self {
        Self {
            number: Some(number),
        }
    }

    /// Clamp the request onto `1..=num_pages`.
    ///
    /// Out-of-range numbers (below 1 or past the end) land on the last page.
    pub fn resolve(&self, num_pages: u64) -> u64 {
        let last = num_pages.max(1);
        match self.number {
            None => 1,
            Some(n) if n < 1 => last,
            Some(n) => u64::try_from(n).map_or(last, |n| n.min(last)),
        }
    }
}

/// Number of pages needed for `total_items`; an empty set still has one page.
pub fn num_pages(total_items: u64, per_page: u64) -> u64 {
    if total_items == 0 || per_page == 0 {
        return 1;
    }
    total_items.div_ceil(per_page)
}

/// One page of results.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually served.
    pub number: u64,
    pub num_pages: u64,
    pub total_items: u64,
}

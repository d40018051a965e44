//! Paged collections as returned by the list endpoints.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Page size used by the user list when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 3;

/// Query for one page of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 0-based page index
    pub page: u32,
    /// Page capacity, always positive
    pub size: u32,
}

impl PageRequest {
    /// Create a page request, rejecting a zero page size.
    pub fn new(page: u32, size: u32) -> Result<Self> {
        if size == 0 {
            return Err(CoreError::invalid_input("page size must be positive"));
        }
        Ok(Self { page, size })
    }
}

/// A bounded slice of a larger ordered collection.
///
/// Boundary flags follow the server: `first` is set on page 0 and `last` on
/// page `total_pages - 1`. An empty collection reports zero pages and is both
/// first and last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page, in collection order
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// 0-based page index
    #[serde(default)]
    pub number: u32,
    /// Page capacity
    pub size: u32,
    /// Set on page 0. Missing flags disable navigation in that direction
    #[serde(default = "flag_default")]
    pub first: bool,
    /// Set on the final page
    #[serde(default = "flag_default")]
    pub last: bool,
    /// Number of pages in the collection; 0 when it is empty
    #[serde(default)]
    pub total_pages: u32,
    /// Total element count, when the server reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<u64>,
}

fn flag_default() -> bool {
    true
}

impl<T> Page<T> {
    /// The page shown before anything has been loaded.
    pub fn empty(size: u32) -> Self {
        Self {
            content: Vec::new(),
            number: 0,
            size,
            first: true,
            last: true,
            total_pages: 0,
            total_elements: Some(0),
        }
    }

    /// Check the boundary-flag and capacity invariants.
    ///
    /// Pages requested past the end count as last.
    pub fn is_consistent(&self) -> bool {
        if self.size == 0 || self.content.len() > self.size as usize {
            return false;
        }
        if self.first != (self.number == 0) {
            return false;
        }
        if self.total_pages == 0 {
            self.last
        } else {
            self.last == (self.number.saturating_add(1) >= self.total_pages)
        }
    }
}

impl<T: Clone> Page<T> {
    /// Cut page `number` out of a full ordered collection.
    ///
    /// A zero `size` is treated as 1. Pages past the end are empty and last.
    pub fn slice(all: &[T], number: u32, size: u32) -> Self {
        let size = size.max(1);
        let total_pages = u32::try_from(all.len().div_ceil(size as usize)).unwrap_or(u32::MAX);
        let start = (number as usize).saturating_mul(size as usize);
        let content = all
            .iter()
            .skip(start)
            .take(size as usize)
            .cloned()
            .collect();

        Self {
            content,
            number,
            size,
            first: number == 0,
            last: total_pages == 0 || number.saturating_add(1) >= total_pages,
            total_pages,
            total_elements: Some(all.len() as u64),
        }
    }
}

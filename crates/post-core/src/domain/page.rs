/// Page size used when a caller asks for `0` items.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A resolved pagination window.
///
/// `page_number` is zero-based: page 0 is the first `page_size` rows,
/// page 1 skips them entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_size: u32,
    pub page_number: u32,
}

impl PageRequest {
    /// Apply the default page size when the caller sent `0`.
    pub fn resolve(page_size: u32, page_number: u32) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };

        Self {
            page_size,
            page_number,
        }
    }

    /// Number of rows to skip: `page_number * page_size`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number) * u64::from(self.page_size)
    }

    /// Maximum number of rows to return.
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

/// One page of a listing, echoing the window it was read with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_size: u32,
    pub page_number: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest) -> Self {
        Self {
            items,
            page_size: request.page_size,
            page_number: request.page_number,
        }
    }
}

use serde::{Deserialize, Serialize};

/// Fixed dashboard page size.
pub const ITEMS_PER_PAGE: usize = 6;

/// 1-indexed page request over a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
}

impl PageRequest {
    pub fn new(page: u32) -> Self {
        Self { page }
    }

    /// Offset of the first row, or `None` for page 0.
    pub fn offset(&self) -> Option<usize> {
        let zero_based = usize::try_from(self.page.checked_sub(1)?).ok()?;
        zero_based.checked_mul(ITEMS_PER_PAGE)
    }

    /// Slice out this page. Out-of-range pages yield an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match self.offset() {
            Some(offset) if offset < items.len() => {
                let end = (offset + ITEMS_PER_PAGE).min(items.len());
                &items[offset..end]
            }
            _ => &[],
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// Number of pages needed for `total` rows: ceil(total / page size).
pub fn page_count(total: usize) -> u32 {
    u32::try_from(total.div_ceil(ITEMS_PER_PAGE)).unwrap_or(u32::MAX)
}

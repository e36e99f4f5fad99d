use serde::{Deserialize, Serialize};

/// `?query=&page=` for the invoice table.
#[derive(Debug, Default, Deserialize)]
pub struct InvoiceTableQuery {
    #[serde(default)]
    pub query: String,
    pub page: Option<i64>,
}

impl InvoiceTableQuery {
    /// Requested page, defaulting to 1. Negative or oversized pages map to
    /// page 0, which is out of range and lists nothing.
    pub fn page(&self) -> u32 {
        match self.page {
            None => 1,
            Some(page) => u32::try_from(page).unwrap_or(0),
        }
    }
}

/// `?query=` for searches without pagination.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct PagesResponse {
    pub pages: u32,
}

/// `{"items": [...]}` envelope for list responses.
#[derive(Debug, Serialize)]
pub struct Items<T> {
    pub items: Vec<T>,
}

impl<T> From<Vec<T>> for Items<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_query(page: Option<i64>) -> InvoiceTableQuery {
        InvoiceTableQuery {
            query: String::new(),
            page,
        }
    }

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(table_query(None).page(), 1);
        assert_eq!(table_query(Some(3)).page(), 3);
    }

    #[test]
    fn negative_and_oversized_pages_are_out_of_range() {
        assert_eq!(table_query(Some(-1)).page(), 0);
        assert_eq!(table_query(Some(i64::from(u32::MAX) + 1)).page(), 0);
    }
}

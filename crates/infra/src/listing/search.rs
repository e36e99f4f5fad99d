use dashboard_customers::Customer;
use dashboard_invoicing::Invoice;

/// Free-text dashboard search.
///
/// The raw query is lowercased once. Customer name and email are lowercased
/// before comparison; amount, date and status are compared in their canonical
/// (already lowercase) renderings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Empty queries match everything.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    fn contains(&self, haystack: &str) -> bool {
        haystack.contains(self.needle.as_str())
    }

    fn contains_folded(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(self.needle.as_str())
    }

    /// Invoice predicate over the joined record. A missing customer contributes
    /// empty name and email.
    pub fn matches_invoice(&self, invoice: &Invoice, customer: Option<&Customer>) -> bool {
        if self.is_empty() {
            return true;
        }

        let (name, email) = customer.map_or(("", ""), |c| (c.name(), c.email()));

        self.contains_folded(name)
            || self.contains_folded(email)
            || self.contains(&invoice.amount().cents().to_string())
            || self.contains(&invoice.date_label())
            || self.contains(invoice.status().as_str())
    }

    /// Customer predicate: name or email.
    pub fn matches_customer(&self, customer: &Customer) -> bool {
        self.contains_folded(customer.name()) || self.contains_folded(customer.email())
    }
}

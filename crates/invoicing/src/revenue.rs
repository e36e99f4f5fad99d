use serde::{Deserialize, Serialize};

/// Monthly revenue point for the revenue chart.
///
/// `revenue` is in whole currency units, unlike invoice amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revenue {
    pub month: String,
    pub revenue: u64,
}

impl Revenue {
    pub fn new(month: impl Into<String>, revenue: u64) -> Self {
        Self {
            month: month.into(),
            revenue,
        }
    }
}

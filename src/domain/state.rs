use serde::{Deserialize, Serialize};

/// Snapshot of the single account - a flat record, O(1) memory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountState {
    /// Signed balance; may go negative when the overdraft policy allows it
    pub balance: f64,
    /// Outstanding loan amount; zero means no active loan
    pub loan: f64,
    /// Free-text label, meaningful only while `loan > 0`
    pub loan_purpose: String,
    /// True only while a currency conversion is in flight
    pub is_loading: bool,
}

impl AccountState {
    pub fn new() -> Self {
        Self {
            balance: 0.0,
            loan: 0.0,
            loan_purpose: String::new(),
            is_loading: false,
        }
    }

    pub fn has_loan(&self) -> bool {
        self.loan > 0.0
    }
}

impl Default for AccountState {
    fn default() -> Self {
        Self::new()
    }
}

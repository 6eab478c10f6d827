use serde::{Deserialize, Serialize};

/// Validation knobs for behavior that is product policy, not invariant.
///
/// Overdraft is allowed by default: withdrawals are never checked against
/// the balance and may drive it negative. Strict deployments can turn it
/// off and get an explicit rejection instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    pub allow_overdraft: bool,
}

impl ValidationPolicy {
    pub fn strict() -> Self {
        Self {
            allow_overdraft: false,
        }
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            allow_overdraft: true,
        }
    }
}

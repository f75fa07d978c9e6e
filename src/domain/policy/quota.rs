use crate::domain::models::user::Tier;

/// Per-tier upload limits.
///
/// Single source of truth for the quota rule; handlers never carry their
/// own limit constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaConfig {
    pub free: u64,
    pub paid: u64,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self { free: 2, paid: 100 }
    }
}

impl QuotaConfig {
    pub fn limit_for(&self, tier: Tier) -> u64 {
        match tier {
            Tier::Free => self.free,
            Tier::Paid => self.paid,
        }
    }

    /// True when one more upload still fits within the tier limit.
    ///
    /// The count is read before the insert without a transaction, so this
    /// is a soft limit: concurrent uploads at the boundary may briefly
    /// exceed it.
    pub fn can_upload(&self, current_count: u64, tier: Tier) -> bool {
        current_count < self.limit_for(tier)
    }
}

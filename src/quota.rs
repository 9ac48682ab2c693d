//! Creation quotas for non-upgraded owners.
//!
//! Quotas are checked once, synchronously, when a child entity is created.
//! The count and the insert are not atomic: two concurrent creates may both
//! see room under the limit and both succeed.

use crate::error::{CoreError, CoreResult};

/// Default number of projects a non-upgraded user may own.
pub const DEFAULT_PROJECTS_PER_USER: u64 = 2;

/// Default number of collections a non-upgraded owner may create per project.
pub const DEFAULT_COLLECTIONS_PER_PROJECT: u64 = 3;

/// Whether an owner may create one more child entity.
///
/// Upgraded owners are never limited; everyone else may create while
/// `current_count < limit`.
pub const fn allows(owner_is_upgraded: bool, current_count: u64, limit: u64) -> bool {
    owner_is_upgraded || current_count < limit
}

/// A creation cap for one kind of child entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaPolicy {
    kind: &'static str,
    limit: u64,
}

impl QuotaPolicy {
    /// Create a policy capping `kind` at `limit` per owner.
    pub const fn new(kind: &'static str, limit: u64) -> Self {
        Self { kind, limit }
    }

    /// The configured limit.
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Whether one more entity may be created.
    pub const fn allows(&self, owner_is_upgraded: bool, current_count: u64) -> bool {
        allows(owner_is_upgraded, current_count, self.limit)
    }

    /// Fail with `QuotaExceeded` when the owner is at the cap.
    pub fn check(&self, owner_is_upgraded: bool, current_count: u64) -> CoreResult<()> {
        if self.allows(owner_is_upgraded, current_count) {
            Ok(())
        } else {
            Err(CoreError::QuotaExceeded {
                kind: self.kind,
                current: current_count,
                limit: self.limit,
            })
        }
    }
}

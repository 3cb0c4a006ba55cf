//! Identity port resolving which user's task log is being viewed.

use crate::task_log::domain::OwnerId;

/// Supplies the identity of the user making the current request.
pub trait CurrentUserProvider: Send + Sync {
    /// Returns the owner whose tasks the current request operates on.
    fn current_user_id(&self) -> OwnerId;
}

/// Provider that always answers with one configured owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedUserProvider {
    owner_id: OwnerId,
}

impl FixedUserProvider {
    /// Creates a provider for a single owner.
    #[must_use]
    pub const fn new(owner_id: OwnerId) -> Self {
        Self { owner_id }
    }
}

impl CurrentUserProvider for FixedUserProvider {
    fn current_user_id(&self) -> OwnerId {
        self.owner_id
    }
}

pub mod articles;
pub mod comments;
pub mod users;

pub(crate) mod capability;

/// Result of a CSRF-protected deletion. A rejected token is reported to the
/// user and leaves the store untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOutcome {
    Deleted,
    InvalidCsrfToken,
}

impl DeletionOutcome {
    pub fn is_deleted(self) -> bool {
        matches!(self, DeletionOutcome::Deleted)
    }
}

pub mod users;

pub use users::UserService;

use crate::storage::Session;

/// Service layer composed once at startup and provided to pages through
/// context.
#[derive(Clone, Debug, PartialEq)]
pub struct Services {
    /// User-facing REST operations.
    pub users: UserService,
    /// Per-tab session accessors.
    pub session: Session,
}

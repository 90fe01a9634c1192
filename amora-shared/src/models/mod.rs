pub mod interests;
pub mod profile;
pub mod user;

pub use interests::InterestsUpdate;
pub use profile::ProfileUpdate;
pub use user::{CreateUserRequest, CreateUserResponse, LoginRequest, LoginResponse};

pub mod api;
pub mod user;

pub use api::{ErrorResponse, SuccessResponse};
pub use user::{CreateUserRequest, User};

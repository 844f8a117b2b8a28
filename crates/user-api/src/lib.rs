mod api;
mod error;
mod store;

pub use api::docs::ApiDoc;
pub use api::server::start_server;
pub use api::server::ServerConfig;
pub use api::server::API_BASE_PATH;
pub use error::ApiError;
pub use store::user_store::MockUserStore;

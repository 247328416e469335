pub mod auth;
pub mod request_id;

pub use auth::{AuthMiddleware, AuthUser};
pub use request_id::{RequestId, RequestIdExt, RequestIdMiddleware};

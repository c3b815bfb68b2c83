pub mod auth;
pub mod response;

pub use auth::{authenticate, require_auth, AuthContext};
pub use response::{cors_layer, expose_error_detail, security_headers, with_security_headers};

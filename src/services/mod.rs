pub mod brewery_service;
pub mod user_service;

pub use brewery_service::{BreweryService, ACCESS_FORBIDDEN, BREWERY_NOT_FOUND};
pub use user_service::{UserService, CREDENTIALS_MISMATCH};

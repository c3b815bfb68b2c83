pub mod brewery;
pub mod format;
pub mod user;

pub use brewery::{CreateBreweryRequest, UpdateBreweryRequest};
pub use format::{escape_html, BreweryView, UserView};
pub use user::{CredentialsRequest, SessionResponse};

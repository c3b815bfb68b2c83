pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use manager::{open_store, DatabaseError, DatabaseManager};
pub use memory::MemoryStore;
pub use models::{Brewery, BreweryPatch, NewBrewery, NewUser, Rating, User};
pub use postgres::PgStore;
pub use store::Store;

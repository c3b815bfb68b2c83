pub mod brewery;
pub mod user;

pub use brewery::{Brewery, BreweryPatch, InvalidRating, NewBrewery, Rating};
pub use user::{NewUser, User};

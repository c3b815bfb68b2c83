use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// Row of the `breweries` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Brewery {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub comments: Option<String>,
    /// One of `"1"`..`"5"`, enforced by a CHECK constraint
    pub rating: Option<String>,
    /// Owner; `None` means visible to every caller
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBrewery {
    pub name: String,
    pub address: String,
    pub comments: Option<String>,
    pub user_id: Option<i64>,
}

/// Partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreweryPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub comments: Option<String>,
    pub rating: Option<Rating>,
}

impl BreweryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none() && self.comments.is_none() && self.rating.is_none()
    }

    /// Copy supplied fields onto an existing row.
    pub fn apply_to(self, brewery: &mut Brewery) {
        if let Some(name) = self.name {
            brewery.name = name;
        }
        if let Some(address) = self.address {
            brewery.address = address;
        }
        if let Some(comments) = self.comments {
            brewery.comments = Some(comments);
        }
        if let Some(rating) = self.rating {
            brewery.rating = Some(rating.as_str().to_string());
        }
    }
}

/// Star rating, stored as its digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRating;

impl Rating {
    pub const ALL: [Rating; 5] = [Rating::One, Rating::Two, Rating::Three, Rating::Four, Rating::Five];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::One => "1",
            Rating::Two => "2",
            Rating::Three => "3",
            Rating::Four => "4",
            Rating::Five => "5",
        }
    }

    /// "1, 2, 3, 4, 5"
    pub fn valid_values() -> String {
        Rating::ALL.iter().map(Rating::as_str).collect::<Vec<_>>().join(", ")
    }
}

impl FromStr for Rating {
    type Err = InvalidRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rating::ALL
            .into_iter()
            .find(|rating| rating.as_str() == s)
            .ok_or(InvalidRating)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

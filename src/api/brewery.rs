use serde::Deserialize;
use serde_json::Value;

use crate::database::{BreweryPatch, NewBrewery, Rating};
use crate::error::ApiError;
use crate::middleware::AuthContext;

/// Fields accepted by `PATCH /api/breweries/:id`, in message order.
pub const UPDATABLE_FIELDS: [&str; 4] = ["name", "address", "comments", "rating"];

/// Body of `POST /api/breweries`. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBreweryRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub comments: Option<String>,
    /// Integer or numeric string
    pub user_id: Option<Value>,
}

/// Body of `PATCH /api/breweries/:id`. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBreweryRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub comments: Option<String>,
    /// Any JSON value; only the strings `"1"`..`"5"` are accepted.
    pub rating: Option<Value>,
}

pub fn missing_field(field: &str) -> ApiError {
    ApiError::validation(format!("Missing '{}' in request body", field))
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn owner_id(value: &Value) -> Result<i64, ApiError> {
    let id = match value {
        Value::Number(number) => number.as_i64(),
        Value::String(digits) => digits.trim().parse().ok(),
        _ => None,
    };
    id.ok_or_else(|| ApiError::validation("'user_id' must be an integer"))
}

/// `None` for an absent, null or empty rating.
fn rating(value: Option<Value>) -> Result<Option<Rating>, ApiError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => s.parse::<Rating>().map(Some).map_err(|_| invalid_rating()),
        Some(_) => Err(invalid_rating()),
    }
}

fn invalid_rating() -> ApiError {
    ApiError::validation(format!("Rating must be one of {}", Rating::valid_values()))
}

impl CreateBreweryRequest {
    /// Check required fields and attribute ownership.
    ///
    /// The caller's own id wins over a `user_id` in the body; the body value
    /// is required only for callers without a user identity.
    pub fn into_new_brewery(self, auth: &AuthContext) -> Result<NewBrewery, ApiError> {
        let name = present(self.name).ok_or_else(|| missing_field("name"))?;
        let address = present(self.address).ok_or_else(|| missing_field("address"))?;
        let comments = present(self.comments);
        let user_id = match auth.user_id {
            Some(id) => Some(id),
            None => match self.user_id {
                None | Some(Value::Null) => return Err(missing_field("user_id")),
                Some(value) => Some(owner_id(&value)?),
            },
        };

        Ok(NewBrewery {
            name,
            address,
            comments,
            user_id,
        })
    }
}

impl UpdateBreweryRequest {
    pub fn into_patch(self) -> Result<BreweryPatch, ApiError> {
        let patch = BreweryPatch {
            name: present(self.name),
            address: present(self.address),
            comments: present(self.comments),
            rating: rating(self.rating)?,
        };

        if patch.is_empty() {
            return Err(ApiError::validation(format!(
                "Request body must contain at least one of {}",
                UPDATABLE_FIELDS.join(", ")
            )));
        }
        Ok(patch)
    }
}

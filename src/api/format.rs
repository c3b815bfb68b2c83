use serde::{Deserialize, Serialize};

use crate::database::{Brewery, User};

/// Escape HTML tag delimiters in stored free text.
///
/// Only `<` and `>` are rewritten; quotes and ampersands pass through, so
/// `<script>alert("xss");</script>` becomes
/// `&lt;script&gt;alert("xss");&lt;/script&gt;`.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Public wire format of a brewery, with text fields escaped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreweryView {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub comments: Option<String>,
    pub rating: Option<String>,
    pub user_id: Option<i64>,
}

impl From<&Brewery> for BreweryView {
    fn from(brewery: &Brewery) -> Self {
        Self {
            id: brewery.id,
            name: escape_html(&brewery.name),
            address: escape_html(&brewery.address),
            comments: brewery.comments.as_deref().map(escape_html),
            rating: brewery.rating.clone(),
            user_id: brewery.user_id,
        }
    }
}

/// Public wire format of a user. The password hash is never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: i64,
    pub email: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: escape_html(&user.email),
        }
    }
}

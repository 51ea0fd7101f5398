use serde::{Deserialize, Serialize};

/// A registered user. Also the shape returned by `/user/me` for the
/// authenticated profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

impl User {
    /// Display name, tolerating an empty last name (the backend leaves it
    /// blank for profiles derived from Basic auth usernames).
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

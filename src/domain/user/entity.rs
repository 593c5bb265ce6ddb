// src/domain/user/entity.rs
use crate::domain::user::value_objects::{EmailAddress, UserId};
use chrono::{DateTime, Utc};

/// Read model of an account owned by the external identity provider.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub date_joined: DateTime<Utc>,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

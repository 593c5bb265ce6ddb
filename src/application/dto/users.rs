// src/application/dto/users.rs
use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfileDto {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(with = "serde_time")]
    pub date_joined: DateTime<Utc>,
}

impl From<User> for UserProfileDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            display_name: user.display_name(),
            email: user.email.into_inner(),
            first_name: user.first_name,
            last_name: user.last_name,
            bio: user.bio,
            profile_image_url: user.profile_image_url,
            date_joined: user.date_joined,
        }
    }
}

// src/application/dto/auth.rs
use crate::domain::user::UserId;

/// Caller identity as asserted by the upstream identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
}

impl AuthenticatedUser {
    pub const fn new(id: UserId) -> Self {
        Self { id }
    }
}

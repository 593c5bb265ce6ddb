use crate::domain::post::entity::Post;
use crate::domain::user::UserId;

pub trait PostSpecification {
    fn is_satisfied(&self) -> bool;
}

/// Only the author may edit a post.
pub struct CanUpdatePostSpec<'a> {
    post: &'a Post,
    user_id: UserId,
}

impl<'a> CanUpdatePostSpec<'a> {
    pub fn new(post: &'a Post, user_id: UserId) -> Self {
        Self { post, user_id }
    }
}

impl PostSpecification for CanUpdatePostSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.post.is_authored_by(self.user_id)
    }
}

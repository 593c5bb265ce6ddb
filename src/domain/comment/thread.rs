// src/domain/comment/thread.rs
use std::collections::HashMap;

use crate::domain::comment::entity::{Comment, CommentId};

#[derive(Debug, Clone)]
pub struct CommentNode {
    pub comment: Comment,
    pub replies: Vec<CommentNode>,
}

/// Rebuilds the reply tree of one post from a flat comment list.
///
/// Only approved comments are kept. Roots are the top-level comments; a reply
/// whose parent is hidden or missing is dropped together with its subtree.
/// Siblings are ordered oldest first.
pub fn build_thread(comments: Vec<Comment>) -> Vec<CommentNode> {
    let mut children: HashMap<Option<CommentId>, Vec<Comment>> = HashMap::new();
    for comment in comments.into_iter().filter(|c| c.is_approved) {
        children.entry(comment.parent_id).or_default().push(comment);
    }
    for siblings in children.values_mut() {
        siblings.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    }

    attach(None, &mut children)
}

// Each comment is removed from the index once attached, so a parent cycle in
// the stored data cannot recurse forever.
fn attach(
    parent: Option<CommentId>,
    children: &mut HashMap<Option<CommentId>, Vec<Comment>>,
) -> Vec<CommentNode> {
    let Some(level) = children.remove(&parent) else {
        return Vec::new();
    };

    level
        .into_iter()
        .map(|comment| {
            let replies = attach(Some(comment.id), children);
            CommentNode { comment, replies }
        })
        .collect()
}

use crate::types::CommentId;
use serde::{Deserialize, Serialize};

/// A single comment pulled out of an uploaded table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
}

impl Comment {
    pub fn new<I: Into<CommentId>, T: Into<String>>(id: I, text: T) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

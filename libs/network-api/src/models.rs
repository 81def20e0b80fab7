//! Wire models for the network JSON endpoints
//!
//! The client treats every field as server-owned: counts and flags are
//! displayed as received and never recomputed locally.

use serde::{Deserialize, Serialize};

/// Post identifier as issued by the backend
pub type PostId = i64;

// ============================================================================
// POSTS
// ============================================================================

/// A single post as it appears in any listing
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub author: String,
    pub content: String,
    /// Display timestamp, already formatted by the server
    pub timestamp: String,
    pub likes_count: u64,
    #[serde(default)]
    pub liked_by_user: bool,
}

/// One page of posts plus pagination flags
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub page: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Body of a create-post or edit-post request
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostContent<'a> {
    pub content: &'a str,
}

/// Response to a like toggle
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikeToggle {
    pub liked: bool,
    pub likes_count: u64,
}

/// Response to an edit request
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditPostResponse {
    pub post: EditedPost,
}

/// Post state after an edit; only the content is consumed
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditedPost {
    #[serde(default)]
    pub id: Option<PostId>,
    pub content: String,
}

// ============================================================================
// PROFILE
// ============================================================================

/// Follower/following counts for a profile owner
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileStats {
    pub followers_count: u64,
    pub following_count: u64,
}

/// Combined profile payload: counts, follow flag and a page of posts
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfilePage {
    pub user: ProfileStats,
    #[serde(default)]
    pub is_following: bool,
    #[serde(flatten)]
    pub listing: PostPage,
}

/// Response to a follow toggle
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FollowToggle {
    pub following: bool,
    pub followers_count: u64,
}

// ============================================================================
// ERRORS
// ============================================================================

/// Error body returned by rejected write requests
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

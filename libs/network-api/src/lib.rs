//! Network API Library
//!
//! Wire models and a typed HTTP client for the social network's JSON
//! endpoints. Every request is tagged as a programmatic fetch so the server
//! answers with JSON instead of a rendered page.

pub mod client;
pub mod error;
pub mod models;

pub use client::{HttpNetworkApi, NetworkApi, REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE};
pub use error::{ApiError, Result};

pub use models::{
    EditPostResponse, EditedPost, ErrorBody, FollowToggle, LikeToggle, Post, PostId, PostPage,
    ProfilePage, ProfileStats,
};

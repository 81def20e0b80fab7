//! Data-loading flows behind each page
//!
//! Loaders fetch a page of JSON, hand the posts to the shared renderer and
//! rebind pagination to themselves. A failed fetch is logged and leaves the
//! displayed view untouched.

pub mod feed;
pub mod following;
pub mod profile;

pub use feed::{FeedLoader, EMPTY_FEED_MESSAGE, EMPTY_POST_MESSAGE, SUBMIT_FAILED_MESSAGE};
pub use following::{FollowingLoader, EMPTY_FOLLOWING_MESSAGE};
pub use profile::{ProfileLoader, ProfileRequest, EMPTY_PROFILE_MESSAGE};

//! Shared fixtures for page controller tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;
use network_api::{
    ApiError, EditPostResponse, FollowToggle, LikeToggle, NetworkApi, Post, PostId, PostPage,
    ProfilePage, ProfileStats,
};
use network_client::{Alerts, PageContext, Viewer};

// ============================================
// Mock API
// ============================================

mock! {
    pub Api {}

    #[async_trait]
    impl NetworkApi for Api {
        async fn list_posts(&self, page: u32) -> Result<PostPage, ApiError>;
        async fn create_post(&self, content: &str) -> Result<(), ApiError>;
        async fn toggle_like(&self, post_id: PostId) -> Result<LikeToggle, ApiError>;
        async fn edit_post(&self, post_id: PostId, content: &str) -> Result<EditPostResponse, ApiError>;
        async fn list_following(&self, page: u32) -> Result<PostPage, ApiError>;
        async fn load_profile(&self, username: &str, page: u32) -> Result<ProfilePage, ApiError>;
        async fn toggle_follow(&self, username: &str) -> Result<FollowToggle, ApiError>;
    }
}

// ============================================
// Alerts
// ============================================

/// Records every alert instead of blocking
#[derive(Default)]
pub struct RecordingAlerts {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlerts {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Alerts for RecordingAlerts {
    fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

// ============================================
// Fixtures
// ============================================

pub fn post(id: PostId, author: &str, content: &str) -> Post {
    Post {
        id,
        author: author.to_string(),
        content: content.to_string(),
        timestamp: "Oct 17 2026, 10:00 AM".to_string(),
        likes_count: 0,
        liked_by_user: false,
    }
}

pub fn listing(posts: Vec<Post>, page: u32, has_next: bool, has_previous: bool) -> PostPage {
    PostPage {
        posts,
        page,
        has_next,
        has_previous,
    }
}

pub fn profile(
    posts: Vec<Post>,
    page: u32,
    has_next: bool,
    has_previous: bool,
    followers_count: u64,
    following_count: u64,
    is_following: bool,
) -> ProfilePage {
    ProfilePage {
        user: ProfileStats {
            followers_count,
            following_count,
        },
        is_following,
        listing: listing(posts, page, has_next, has_previous),
    }
}

pub fn server_error(status: u16, message: Option<&str>) -> ApiError {
    ApiError::Status {
        status,
        message: message.map(str::to_string),
    }
}

pub fn context(api: MockApi, viewer: Viewer) -> (PageContext, Arc<RecordingAlerts>) {
    let alerts = Arc::new(RecordingAlerts::default());
    let ctx = PageContext::new(Arc::new(api), viewer, alerts.clone());
    (ctx, alerts)
}

pub fn context_with_alerts(api: MockApi, viewer: Viewer, alerts: Arc<dyn Alerts>) -> PageContext {
    PageContext::new(Arc::new(api), viewer, alerts)
}

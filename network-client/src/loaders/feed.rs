use std::sync::Arc;

use network_api::NetworkApi;
use tracing::{error, info};

use crate::context::Alerts;
use crate::error::{ClientError, ClientResult};
use crate::renderer::Renderer;
use crate::view::{Composer, PostsView};

pub const EMPTY_FEED_MESSAGE: &str = "No posts to display.";
pub const EMPTY_POST_MESSAGE: &str = "Post content cannot be empty.";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to create post. Please try again.";

/// All posts, newest first, plus new-post submission
#[derive(Clone)]
pub struct FeedLoader {
    api: Arc<dyn NetworkApi>,
    renderer: Renderer,
}

impl FeedLoader {
    pub fn new(api: Arc<dyn NetworkApi>, renderer: Renderer) -> Self {
        Self { api, renderer }
    }

    pub async fn load(&self, view: &mut PostsView<u32>, page: u32) -> ClientResult<()> {
        let listing = match self.api.list_posts(page).await {
            Ok(listing) => listing,
            Err(e) => {
                error!(page, "Error loading posts: {}", e);
                return Err(e.into());
            }
        };

        info!(
            page = listing.page,
            posts = listing.posts.len(),
            "Loaded feed page"
        );
        view.show(&self.renderer, &listing, EMPTY_FEED_MESSAGE, |page| page);
        Ok(())
    }

    /// Validate and create a post from the composer, then show page 1.
    ///
    /// Empty input is rejected locally without a request. Any failure alerts
    /// the viewer and leaves the composer text in place for a retry.
    pub async fn submit(
        &self,
        composer: &mut Composer,
        view: &mut PostsView<u32>,
        alerts: &dyn Alerts,
    ) -> ClientResult<()> {
        let content = composer.text().trim().to_string();
        if content.is_empty() {
            alerts.alert(EMPTY_POST_MESSAGE);
            return Err(ClientError::Validation(EMPTY_POST_MESSAGE.to_string()));
        }

        if let Err(e) = self.api.create_post(&content).await {
            match e.server_message() {
                Some(message) => alerts.alert(&format!("Error: {}", message)),
                None => {
                    error!("Error creating post: {}", e);
                    alerts.alert(SUBMIT_FAILED_MESSAGE);
                }
            }
            return Err(e.into());
        }

        info!("Post created");
        composer.clear();
        self.load(view, 1).await
    }
}

use std::sync::Arc;

use network_api::NetworkApi;
use tracing::{error, info};

use crate::error::ClientResult;
use crate::renderer::Renderer;
use crate::view::PostsView;

pub const EMPTY_FOLLOWING_MESSAGE: &str =
    "No posts to display. Follow some users to see their posts here!";

/// Posts from followed users only; nothing can be composed here
#[derive(Clone)]
pub struct FollowingLoader {
    api: Arc<dyn NetworkApi>,
    renderer: Renderer,
}

impl FollowingLoader {
    pub fn new(api: Arc<dyn NetworkApi>, renderer: Renderer) -> Self {
        Self { api, renderer }
    }

    pub async fn load(&self, view: &mut PostsView<u32>, page: u32) -> ClientResult<()> {
        let listing = match self.api.list_following(page).await {
            Ok(listing) => listing,
            Err(e) => {
                error!(page, "Error loading following posts: {}", e);
                return Err(e.into());
            }
        };

        info!(
            page = listing.page,
            posts = listing.posts.len(),
            "Loaded following page"
        );
        view.show(&self.renderer, &listing, EMPTY_FOLLOWING_MESSAGE, |page| page);
        Ok(())
    }
}

//! Shared renderer used by every page controller
//!
//! Builds post cards for the current viewer and carries out the card-level
//! actions (like, edit, save). Failures are logged here and returned; the
//! card is left exactly as it was.

use std::sync::Arc;

use network_api::{NetworkApi, Post};
use tracing::{debug, error, warn};

use crate::context::Viewer;
use crate::error::{ClientError, ClientResult};
use crate::view::{PostCard, PostList};

#[derive(Clone)]
pub struct Renderer {
    api: Arc<dyn NetworkApi>,
    viewer: Viewer,
}

impl Renderer {
    pub fn new(api: Arc<dyn NetworkApi>, viewer: Viewer) -> Self {
        Self { api, viewer }
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn build_card(&self, post: &Post) -> PostCard {
        PostCard::new(post, &self.viewer)
    }

    /// One card per post in server order, or the empty message
    pub fn render_posts(&self, posts: &[Post], empty_message: &'static str) -> PostList {
        if posts.is_empty() {
            return PostList::Empty {
                message: empty_message,
            };
        }
        PostList::Cards(posts.iter().map(|post| self.build_card(post)).collect())
    }

    pub async fn toggle_like(&self, card: &mut PostCard) -> ClientResult<()> {
        let ticket = card
            .begin_like()
            .ok_or(ClientError::ControlUnavailable("like"))?;

        let response = match self.api.toggle_like(ticket.post_id).await {
            Ok(response) => response,
            Err(e) => {
                error!(post_id = ticket.post_id, "Failed to update like: {}", e);
                return Err(e.into());
            }
        };

        if card.apply_like(ticket, &response) {
            debug!(
                post_id = ticket.post_id,
                liked = response.liked,
                likes_count = response.likes_count,
                "Like updated"
            );
        } else {
            warn!(post_id = ticket.post_id, "Discarded stale like response");
        }
        Ok(())
    }

    /// Flip between viewing and editing; no network involved
    pub fn toggle_edit(&self, card: &mut PostCard) -> ClientResult<()> {
        if card.toggle_edit() {
            Ok(())
        } else {
            Err(ClientError::ControlUnavailable("edit"))
        }
    }

    /// Submit the in-place text. On failure the card stays in editing state
    /// with the text untouched.
    pub async fn save_edit(&self, card: &mut PostCard) -> ClientResult<()> {
        let ticket = card
            .begin_save()
            .ok_or(ClientError::ControlUnavailable("save"))?;

        let response = match self.api.edit_post(ticket.post_id, &ticket.content).await {
            Ok(response) => response,
            Err(e) => {
                error!(post_id = ticket.post_id, "Failed to update post: {}", e);
                return Err(e.into());
            }
        };

        if card.apply_save(&ticket, response.post.content) {
            debug!(post_id = ticket.post_id, "Post content updated");
        } else {
            warn!(post_id = ticket.post_id, "Discarded stale edit response");
        }
        Ok(())
    }
}

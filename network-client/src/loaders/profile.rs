use std::sync::Arc;

use network_api::NetworkApi;
use tracing::{error, info};

use crate::error::{ClientError, ClientResult};
use crate::renderer::Renderer;
use crate::view::{PostsView, ProfileHeader};

pub const EMPTY_PROFILE_MESSAGE: &str = "No posts to display.";

/// Arguments the profile pagination controls re-invoke the loader with
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileRequest {
    pub username: String,
    pub page: u32,
}

/// A single user's posts plus follower counts and the follow toggle
#[derive(Clone)]
pub struct ProfileLoader {
    api: Arc<dyn NetworkApi>,
    renderer: Renderer,
}

impl ProfileLoader {
    pub fn new(api: Arc<dyn NetworkApi>, renderer: Renderer) -> Self {
        Self { api, renderer }
    }

    pub async fn load(
        &self,
        header: &mut ProfileHeader,
        view: &mut PostsView<ProfileRequest>,
        username: &str,
        page: u32,
    ) -> ClientResult<()> {
        let profile = match self.api.load_profile(username, page).await {
            Ok(profile) => profile,
            Err(e) => {
                error!(username, page, "Error loading profile: {}", e);
                return Err(e.into());
            }
        };

        info!(
            username,
            page = profile.listing.page,
            posts = profile.listing.posts.len(),
            "Loaded profile page"
        );

        header.apply_stats(&profile.user);
        header.set_following(profile.is_following);

        let owner = username.to_string();
        view.show(
            &self.renderer,
            &profile.listing,
            EMPTY_PROFILE_MESSAGE,
            move |page| ProfileRequest {
                username: owner.clone(),
                page,
            },
        );
        Ok(())
    }

    /// Follow or unfollow `username`. The control only changes once the
    /// server has answered.
    pub async fn toggle_follow(
        &self,
        header: &mut ProfileHeader,
        username: &str,
    ) -> ClientResult<()> {
        if header.follow_control().is_none() {
            return Err(ClientError::ControlUnavailable("follow"));
        }

        let toggle = match self.api.toggle_follow(username).await {
            Ok(toggle) => toggle,
            Err(e) => {
                error!(username, "Error updating follow status: {}", e);
                return Err(e.into());
            }
        };

        info!(username, following = toggle.following, "Follow status updated");
        header.apply_follow(&toggle);
        Ok(())
    }
}

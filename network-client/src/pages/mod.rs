//! Page controllers
//!
//! Each page bootstraps the shared renderer from a [`PageContext`], loads
//! page 1 with its loader and then reacts to control activations. These are
//! the event-handler boundary: failures have already been logged by the
//! renderer or loader and leave the page as it was.
//!
//! [`PageContext`]: crate::context::PageContext

pub mod feed;
pub mod following;
pub mod profile;

pub use feed::FeedPage;
pub use following::FollowingPage;
pub use profile::ProfilePage;

use async_trait::async_trait;
use network_api::PostId;

use crate::error::{ClientError, ClientResult};

/// Controls every page exposes, plus page-specific ones that default to
/// "not available here"
#[async_trait]
pub trait PageController: Send {
    /// Activate the "next" pagination control
    async fn next(&mut self) -> ClientResult<()>;

    /// Activate the "previous" pagination control
    async fn previous(&mut self) -> ClientResult<()>;

    async fn toggle_like(&mut self, post_id: PostId) -> ClientResult<()>;

    fn toggle_edit(&mut self, post_id: PostId) -> ClientResult<()>;

    /// Replace the in-place text of a card being edited
    fn edit_text(&mut self, post_id: PostId, text: &str) -> ClientResult<()>;

    async fn save_edit(&mut self, post_id: PostId) -> ClientResult<()>;

    /// Fill the new-post input and submit it
    async fn submit_post(&mut self, _content: &str) -> ClientResult<()> {
        Err(ClientError::ControlUnavailable("new post"))
    }

    async fn toggle_follow(&mut self) -> ClientResult<()> {
        Err(ClientError::ControlUnavailable("follow"))
    }

    /// Text rendering of the whole page
    fn render(&self) -> String;
}

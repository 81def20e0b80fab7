use async_trait::async_trait;
use network_api::PostId;

use super::PageController;
use crate::context::PageContext;
use crate::error::{ClientError, ClientResult};
use crate::loaders::{ProfileLoader, ProfileRequest};
use crate::renderer::Renderer;
use crate::view::{PostsView, ProfileHeader};

/// A single user's profile and posts
pub struct ProfilePage {
    renderer: Renderer,
    loader: ProfileLoader,
    header: ProfileHeader,
    view: PostsView<ProfileRequest>,
}

impl ProfilePage {
    pub fn new(ctx: &PageContext, username: &str) -> Self {
        let renderer = Renderer::new(ctx.api.clone(), ctx.viewer.clone());
        let loader = ProfileLoader::new(ctx.api.clone(), renderer.clone());

        Self {
            renderer,
            loader,
            header: ProfileHeader::new(username, &ctx.viewer),
            view: PostsView::new(),
        }
    }

    /// Build the page for `username` and load page 1
    pub async fn bootstrap(ctx: &PageContext, username: &str) -> Self {
        let mut page = Self::new(ctx, username);
        // failure is logged by the loader; the page stays in its loading state
        let _ = page.load(username, 1).await;
        page
    }

    pub async fn load(&mut self, username: &str, page: u32) -> ClientResult<()> {
        self.loader
            .load(&mut self.header, &mut self.view, username, page)
            .await
    }

    pub fn header(&self) -> &ProfileHeader {
        &self.header
    }

    pub fn view(&self) -> &PostsView<ProfileRequest> {
        &self.view
    }

    async fn dispatch(&mut self, request: ProfileRequest) -> ClientResult<()> {
        self.load(&request.username, request.page).await
    }
}

#[async_trait]
impl PageController for ProfilePage {
    async fn next(&mut self) -> ClientResult<()> {
        let request = self
            .view
            .pagination
            .activate_next()
            .ok_or(ClientError::ControlUnavailable("next page"))?;
        self.dispatch(request).await
    }

    async fn previous(&mut self) -> ClientResult<()> {
        let request = self
            .view
            .pagination
            .activate_previous()
            .ok_or(ClientError::ControlUnavailable("previous page"))?;
        self.dispatch(request).await
    }

    async fn toggle_like(&mut self, post_id: PostId) -> ClientResult<()> {
        self.view.toggle_like(&self.renderer, post_id).await
    }

    fn toggle_edit(&mut self, post_id: PostId) -> ClientResult<()> {
        self.view.toggle_edit(&self.renderer, post_id)
    }

    fn edit_text(&mut self, post_id: PostId, text: &str) -> ClientResult<()> {
        self.view.edit_text(post_id, text)
    }

    async fn save_edit(&mut self, post_id: PostId) -> ClientResult<()> {
        self.view.save_edit(&self.renderer, post_id).await
    }

    async fn toggle_follow(&mut self) -> ClientResult<()> {
        let username = self.header.username().to_string();
        self.loader.toggle_follow(&mut self.header, &username).await
    }

    fn render(&self) -> String {
        format!("== Profile ==\n\n{}\n{}", self.header, self.view)
    }
}

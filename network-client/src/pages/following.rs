use async_trait::async_trait;
use network_api::PostId;

use super::PageController;
use crate::context::PageContext;
use crate::error::{ClientError, ClientResult};
use crate::loaders::FollowingLoader;
use crate::renderer::Renderer;
use crate::view::PostsView;

/// Posts from users the viewer follows
pub struct FollowingPage {
    renderer: Renderer,
    loader: FollowingLoader,
    view: PostsView<u32>,
}

impl FollowingPage {
    pub fn new(ctx: &PageContext) -> Self {
        let renderer = Renderer::new(ctx.api.clone(), ctx.viewer.clone());
        let loader = FollowingLoader::new(ctx.api.clone(), renderer.clone());

        Self {
            renderer,
            loader,
            view: PostsView::new(),
        }
    }

    /// Build the page and load page 1
    pub async fn bootstrap(ctx: &PageContext) -> Self {
        let mut page = Self::new(ctx);
        // failure is logged by the loader; the page stays in its loading state
        let _ = page.load(1).await;
        page
    }

    pub async fn load(&mut self, page: u32) -> ClientResult<()> {
        self.loader.load(&mut self.view, page).await
    }

    pub fn view(&self) -> &PostsView<u32> {
        &self.view
    }
}

#[async_trait]
impl PageController for FollowingPage {
    async fn next(&mut self) -> ClientResult<()> {
        let page = self
            .view
            .pagination
            .activate_next()
            .ok_or(ClientError::ControlUnavailable("next page"))?;
        self.load(page).await
    }

    async fn previous(&mut self) -> ClientResult<()> {
        let page = self
            .view
            .pagination
            .activate_previous()
            .ok_or(ClientError::ControlUnavailable("previous page"))?;
        self.load(page).await
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

    fn render(&self) -> String {
        format!("== Following ==\n\n{}", self.view)
    }
}

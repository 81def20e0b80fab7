use std::sync::Arc;

use async_trait::async_trait;
use network_api::PostId;

use super::PageController;
use crate::context::{Alerts, PageContext};
use crate::error::{ClientError, ClientResult};
use crate::loaders::FeedLoader;
use crate::renderer::Renderer;
use crate::view::{Composer, PostsView};

/// "All posts" page
pub struct FeedPage {
    renderer: Renderer,
    loader: FeedLoader,
    alerts: Arc<dyn Alerts>,
    view: PostsView<u32>,
    /// New-post form, offered to authenticated viewers only
    composer: Option<Composer>,
}

impl FeedPage {
    pub fn new(ctx: &PageContext) -> Self {
        let renderer = Renderer::new(ctx.api.clone(), ctx.viewer.clone());
        let loader = FeedLoader::new(ctx.api.clone(), renderer.clone());

        Self {
            renderer,
            loader,
            alerts: ctx.alerts.clone(),
            view: PostsView::new(),
            composer: ctx.viewer.is_authenticated().then(Composer::new),
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

    pub fn composer(&self) -> Option<&Composer> {
        self.composer.as_ref()
    }

    pub fn composer_mut(&mut self) -> Option<&mut Composer> {
        self.composer.as_mut()
    }

    /// Submit whatever is currently in the new-post input
    pub async fn submit(&mut self) -> ClientResult<()> {
        let composer = self
            .composer
            .as_mut()
            .ok_or(ClientError::ControlUnavailable("new post"))?;
        self.loader
            .submit(composer, &mut self.view, self.alerts.as_ref())
            .await
    }
}

#[async_trait]
impl PageController for FeedPage {
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

    async fn submit_post(&mut self, content: &str) -> ClientResult<()> {
        self.composer
            .as_mut()
            .ok_or(ClientError::ControlUnavailable("new post"))?
            .set_text(content);
        self.submit().await
    }

    fn render(&self) -> String {
        let mut out = String::from("== All Posts ==\n\n");
        if let Some(composer) = &self.composer {
            out.push_str(&format!("New post: {}\n\n", composer.text()));
        }
        out.push_str(&self.view.to_string());
        out
    }
}

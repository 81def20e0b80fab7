//! Post list container and the listing view that pairs it with pagination

use std::fmt;

use network_api::{PostId, PostPage};

use super::card::PostCard;
use super::pagination::Pagination;
use crate::error::{ClientError, ClientResult};
use crate::renderer::Renderer;

/// Contents of the posts container
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PostList {
    /// Nothing loaded yet
    #[default]
    Unloaded,
    /// The loaded page had no posts
    Empty { message: &'static str },
    Cards(Vec<PostCard>),
}

impl PostList {
    pub fn cards(&self) -> &[PostCard] {
        match self {
            Self::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.cards().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            Self::Empty { message } => Some(*message),
            _ => None,
        }
    }

    pub fn card(&self, post_id: PostId) -> Option<&PostCard> {
        self.cards().iter().find(|card| card.post_id() == post_id)
    }

    pub fn card_mut(&mut self, post_id: PostId) -> ClientResult<&mut PostCard> {
        match self {
            Self::Cards(cards) => cards
                .iter_mut()
                .find(|card| card.post_id() == post_id)
                .ok_or(ClientError::UnknownPost(post_id)),
            _ => Err(ClientError::UnknownPost(post_id)),
        }
    }
}

impl fmt::Display for PostList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unloaded => writeln!(f, "Loading..."),
            Self::Empty { message } => writeln!(f, "{}", message),
            Self::Cards(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", card)?;
                }
                Ok(())
            }
        }
    }
}

/// A paginated listing: the posts container plus its navigation controls.
/// `A` is what the navigation controls re-invoke the loader with.
#[derive(Clone, Debug)]
pub struct PostsView<A> {
    pub posts: PostList,
    pub pagination: Pagination<A>,
}

impl<A: Clone> PostsView<A> {
    pub fn new() -> Self {
        Self {
            posts: PostList::Unloaded,
            pagination: Pagination::new(),
        }
    }

    /// Replace the displayed page and rebind navigation to `loader`
    pub fn show<F>(
        &mut self,
        renderer: &Renderer,
        listing: &PostPage,
        empty_message: &'static str,
        loader: F,
    ) where
        F: Fn(u32) -> A,
    {
        self.posts = renderer.render_posts(&listing.posts, empty_message);
        self.pagination.update(
            listing.page,
            listing.has_next,
            listing.has_previous,
            loader,
        );
    }

    pub async fn toggle_like(&mut self, renderer: &Renderer, post_id: PostId) -> ClientResult<()> {
        let card = self.posts.card_mut(post_id)?;
        renderer.toggle_like(card).await
    }

    pub fn toggle_edit(&mut self, renderer: &Renderer, post_id: PostId) -> ClientResult<()> {
        let card = self.posts.card_mut(post_id)?;
        renderer.toggle_edit(card)
    }

    pub fn edit_text(&mut self, post_id: PostId, text: &str) -> ClientResult<()> {
        let card = self.posts.card_mut(post_id)?;
        if card.set_draft(text) {
            Ok(())
        } else {
            Err(ClientError::ControlUnavailable("editable content"))
        }
    }

    pub async fn save_edit(&mut self, renderer: &Renderer, post_id: PostId) -> ClientResult<()> {
        let card = self.posts.card_mut(post_id)?;
        renderer.save_edit(card).await
    }
}

impl<A: Clone> Default for PostsView<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Display for PostsView<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.posts)?;
        writeln!(f)?;
        write!(f, "{}", self.pagination)
    }
}

/// New-post input field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composer {
    input: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.input
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }
}

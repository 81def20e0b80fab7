//! Post card: one post plus its like and edit controls
//!
//! Mutations follow a begin/apply split. `begin_*` hands out a ticket carrying
//! a per-card request token; `apply_*` only takes effect when the ticket is
//! still the latest one issued, so a slow response can never overwrite a
//! newer one.

use std::fmt;

use network_api::{LikeToggle, Post, PostId};

use super::Emphasis;
use crate::context::Viewer;

/// `"1 like"`, otherwise `"{n} likes"`
pub fn likes_text(count: u64) -> String {
    if count == 1 {
        format!("{} like", count)
    } else {
        format!("{} likes", count)
    }
}

/// Like/unlike toggle, shown to authenticated viewers only
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LikeControl {
    liked: bool,
}

impl LikeControl {
    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn label(&self) -> &'static str {
        if self.liked {
            "Unlike"
        } else {
            "Like"
        }
    }

    pub fn emphasis(&self) -> Emphasis {
        Emphasis::from_active(self.liked)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditState {
    Viewing,
    /// Content is editable in place; `draft` holds the in-place text
    Editing { draft: String },
}

/// Outstanding like request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LikeTicket {
    pub post_id: PostId,
    token: u64,
}

/// Outstanding save request with the text being submitted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveTicket {
    pub post_id: PostId,
    pub content: String,
    token: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostCard {
    post_id: PostId,
    author: String,
    timestamp: String,
    content: String,
    likes_count: u64,
    like: Option<LikeControl>,
    /// `None` when the viewer is not the author
    edit: Option<EditState>,
    like_token: u64,
    edit_token: u64,
}

impl PostCard {
    pub fn new(post: &Post, viewer: &Viewer) -> Self {
        let like = viewer.is_authenticated().then(|| LikeControl {
            liked: post.liked_by_user,
        });
        let edit = viewer.is(&post.author).then_some(EditState::Viewing);

        Self {
            post_id: post.id,
            author: post.author.clone(),
            timestamp: post.timestamp.clone(),
            content: post.content.clone(),
            likes_count: post.likes_count,
            like,
            edit,
            like_token: 0,
            edit_token: 0,
        }
    }

    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Link to the author's profile page, with the username percent-encoded
    pub fn profile_href(&self) -> String {
        format!("/profile/{}", urlencoding::encode(&self.author))
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Text currently shown: the in-place draft while editing
    pub fn content(&self) -> &str {
        match &self.edit {
            Some(EditState::Editing { draft }) => draft,
            _ => &self.content,
        }
    }

    pub fn likes_count(&self) -> u64 {
        self.likes_count
    }

    pub fn likes_text(&self) -> String {
        likes_text(self.likes_count)
    }

    pub fn like_control(&self) -> Option<&LikeControl> {
        self.like.as_ref()
    }

    pub fn has_edit_control(&self) -> bool {
        self.edit.is_some()
    }

    pub fn edit_state(&self) -> Option<&EditState> {
        self.edit.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.edit, Some(EditState::Editing { .. }))
    }

    /// "Edit" while viewing, "Cancel" while editing
    pub fn edit_label(&self) -> Option<&'static str> {
        self.edit.as_ref().map(|state| match state {
            EditState::Viewing => "Edit",
            EditState::Editing { .. } => "Cancel",
        })
    }

    pub fn has_save_control(&self) -> bool {
        self.is_editing()
    }

    /// Activate the edit control. Entering edit mode seeds the draft with the
    /// shown text; leaving it discards the draft and invalidates any save
    /// still in flight. Returns false when the card has no edit control.
    pub fn toggle_edit(&mut self) -> bool {
        match self.edit.take() {
            None => false,
            Some(EditState::Viewing) => {
                self.edit = Some(EditState::Editing {
                    draft: self.content.clone(),
                });
                true
            }
            Some(EditState::Editing { .. }) => {
                self.edit_token += 1;
                self.edit = Some(EditState::Viewing);
                true
            }
        }
    }

    /// Replace the in-place text; ignored unless editing
    pub fn set_draft(&mut self, text: impl Into<String>) -> bool {
        match &mut self.edit {
            Some(EditState::Editing { draft }) => {
                *draft = text.into();
                true
            }
            _ => false,
        }
    }

    pub fn begin_like(&mut self) -> Option<LikeTicket> {
        self.like?;
        self.like_token += 1;
        Some(LikeTicket {
            post_id: self.post_id,
            token: self.like_token,
        })
    }

    /// Overwrite label, emphasis and count from the server's answer.
    /// Returns false if a newer like request superseded this one.
    pub fn apply_like(&mut self, ticket: LikeTicket, response: &LikeToggle) -> bool {
        if ticket.token != self.like_token {
            return false;
        }
        if let Some(control) = self.like.as_mut() {
            control.liked = response.liked;
        }
        self.likes_count = response.likes_count;
        true
    }

    pub fn begin_save(&mut self) -> Option<SaveTicket> {
        let content = match &self.edit {
            Some(EditState::Editing { draft }) => draft.clone(),
            _ => return None,
        };
        self.edit_token += 1;
        Some(SaveTicket {
            post_id: self.post_id,
            content,
            token: self.edit_token,
        })
    }

    /// Commit the server's content and return to viewing. Returns false if the
    /// edit was cancelled or re-saved after this ticket was issued.
    pub fn apply_save(&mut self, ticket: &SaveTicket, content: String) -> bool {
        if ticket.token != self.edit_token || !self.is_editing() {
            return false;
        }
        self.content = content;
        self.edit = Some(EditState::Viewing);
        true
    }
}

impl fmt::Display for PostCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#{} {} <{}>", self.post_id, self.author, self.profile_href())?;
        if self.is_editing() {
            writeln!(f, "  ✎ {}", self.content())?;
        } else {
            writeln!(f, "  {}", self.content())?;
        }
        writeln!(f, "  {}", self.timestamp)?;

        write!(f, "  {}", self.likes_text())?;
        if let Some(control) = &self.like {
            write!(f, " {}", control.emphasis().decorate(control.label()))?;
        }
        if let Some(label) = self.edit_label() {
            write!(f, " ({})", label)?;
        }
        if self.has_save_control() {
            write!(f, " [Save]")?;
        }
        writeln!(f)
    }
}

//! View models for everything a page displays
//!
//! These are plain state machines; rendering to text happens through their
//! `Display` impls so the same state drives the terminal and the tests.

pub mod card;
pub mod list;
pub mod pagination;
pub mod profile;

pub use card::{EditState, LikeTicket, PostCard, SaveTicket};
pub use list::{Composer, PostList, PostsView};
pub use pagination::Pagination;
pub use profile::{FollowControl, ProfileHeader};

/// Visual weight of a toggle control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    /// Filled: the toggle is on (liked, following)
    Primary,
    /// Outlined: the toggle is off
    Outline,
}

impl Emphasis {
    pub fn from_active(active: bool) -> Self {
        if active {
            Self::Primary
        } else {
            Self::Outline
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Outline => "btn-outline-primary",
        }
    }

    /// `[Label]` for filled controls, `(Label)` for outlined ones
    pub fn decorate(&self, label: &str) -> String {
        match self {
            Self::Primary => format!("[{}]", label),
            Self::Outline => format!("({})", label),
        }
    }
}

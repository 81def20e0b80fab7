//! Profile header: follower counts and the follow/unfollow control

use std::fmt;

use network_api::{FollowToggle, ProfileStats};

use super::Emphasis;
use crate::context::Viewer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FollowControl {
    following: bool,
}

impl FollowControl {
    pub fn following(&self) -> bool {
        self.following
    }

    pub fn label(&self) -> &'static str {
        if self.following {
            "Unfollow"
        } else {
            "Follow"
        }
    }

    pub fn emphasis(&self) -> Emphasis {
        Emphasis::from_active(self.following)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileHeader {
    username: String,
    followers_count: Option<u64>,
    following_count: Option<u64>,
    /// Present for authenticated viewers looking at someone else's profile
    follow: Option<FollowControl>,
}

impl ProfileHeader {
    pub fn new(username: impl Into<String>, viewer: &Viewer) -> Self {
        let username = username.into();
        let follow = (viewer.is_authenticated() && !viewer.is(&username))
            .then_some(FollowControl { following: false });

        Self {
            username,
            followers_count: None,
            following_count: None,
            follow,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn followers_count(&self) -> Option<u64> {
        self.followers_count
    }

    pub fn following_count(&self) -> Option<u64> {
        self.following_count
    }

    pub fn follow_control(&self) -> Option<&FollowControl> {
        self.follow.as_ref()
    }

    /// Overwrite both count displays verbatim
    pub fn apply_stats(&mut self, stats: &ProfileStats) {
        self.followers_count = Some(stats.followers_count);
        self.following_count = Some(stats.following_count);
    }

    /// Set the follow control from the server's flag; no-op without a control
    pub fn set_following(&mut self, following: bool) {
        if let Some(control) = self.follow.as_mut() {
            control.following = following;
        }
    }

    pub fn apply_follow(&mut self, toggle: &FollowToggle) {
        self.set_following(toggle.following);
        self.followers_count = Some(toggle.followers_count);
    }
}

impl fmt::Display for ProfileHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = |value: Option<u64>| value.map_or_else(|| "-".to_string(), |v| v.to_string());

        write!(
            f,
            "{}  Followers: {}  Following: {}",
            self.username,
            count(self.followers_count),
            count(self.following_count)
        )?;
        if let Some(control) = &self.follow {
            write!(f, "  {}", control.emphasis().decorate(control.label()))?;
        }
        writeln!(f)
    }
}

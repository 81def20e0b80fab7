//! Explicit page context shared by every page controller
//!
//! The viewer identity, the API handle and the alert sink are injected here
//! instead of being discovered from rendered markup.

use std::sync::Arc;

use network_api::NetworkApi;

/// The authenticated user operating the session, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    username: Option<String>,
}

impl Viewer {
    pub fn anonymous() -> Self {
        Self { username: None }
    }

    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }

    /// Blank names are treated as anonymous
    pub fn from_username(username: Option<String>) -> Self {
        match username {
            Some(name) if !name.trim().is_empty() => Self::authenticated(name),
            _ => Self::anonymous(),
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    /// Exact string comparison against an author or profile name
    pub fn is(&self, name: &str) -> bool {
        self.username.as_deref() == Some(name)
    }
}

/// Blocking, user-facing notices
pub trait Alerts: Send + Sync {
    fn alert(&self, message: &str);
}

/// Everything a page controller needs at bootstrap
#[derive(Clone)]
pub struct PageContext {
    pub api: Arc<dyn NetworkApi>,
    pub viewer: Viewer,
    pub alerts: Arc<dyn Alerts>,
}

impl PageContext {
    pub fn new(api: Arc<dyn NetworkApi>, viewer: Viewer, alerts: Arc<dyn Alerts>) -> Self {
        Self {
            api,
            viewer,
            alerts,
        }
    }
}

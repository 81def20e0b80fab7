//! Network Client
//!
//! Front end for the social network: renders post cards, paginates the feed,
//! following and profile listings, and submits like/edit/follow/post actions
//! through the JSON API in `network_api`.

pub mod config;
pub mod context;
pub mod error;
pub mod loaders;
pub mod pages;
pub mod renderer;
pub mod telemetry;
pub mod terminal;
pub mod view;

pub use context::{Alerts, PageContext, Viewer};
pub use error::{ClientError, ClientResult};
pub use renderer::Renderer;

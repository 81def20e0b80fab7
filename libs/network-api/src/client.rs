//! HTTP client for the network JSON endpoints
//!
//! `NetworkApi` is the seam the front end depends on; `HttpNetworkApi` is the
//! reqwest-backed implementation. No timeout or retry is applied here, the
//! transport defaults decide.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, COOKIE};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::models::{
    EditPostResponse, ErrorBody, FollowToggle, LikeToggle, PostContent, PostId, PostPage,
    ProfilePage,
};

/// Header marking a request as a programmatic fetch rather than a navigation
pub const REQUESTED_WITH_HEADER: &str = "x-requested-with";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

const CSRF_HEADER: &str = "X-CSRFToken";

/// Operations the front end performs against the backend
#[async_trait]
pub trait NetworkApi: Send + Sync {
    /// `GET /posts/{page}`
    async fn list_posts(&self, page: u32) -> Result<PostPage>;

    /// `POST /posts/new`
    async fn create_post(&self, content: &str) -> Result<()>;

    /// `PUT /posts/{id}/like`
    async fn toggle_like(&self, post_id: PostId) -> Result<LikeToggle>;

    /// `PUT /posts/{id}/edit`
    async fn edit_post(&self, post_id: PostId, content: &str) -> Result<EditPostResponse>;

    /// `GET /following/{page}`
    async fn list_following(&self, page: u32) -> Result<PostPage>;

    /// `GET /profile/{username}/{page}`
    async fn load_profile(&self, username: &str, page: u32) -> Result<ProfilePage>;

    /// `PUT /profile/{username}/follow`
    async fn toggle_follow(&self, username: &str) -> Result<FollowToggle>;
}

/// reqwest-backed implementation of [`NetworkApi`]
#[derive(Clone)]
pub struct HttpNetworkApi {
    client: Client,
    base_url: String,
    csrf_token: Option<String>,
}

impl HttpNetworkApi {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        Self::builder(base_url).build()
    }

    pub fn builder(base_url: &str) -> HttpNetworkApiBuilder {
        HttpNetworkApiBuilder {
            base_url: base_url.to_string(),
            session_cookie: None,
            csrf_token: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("GET {}", path);
        let body = self.execute(self.client.get(self.url(path))).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn send_json<B>(&self, method: Method, path: &str, payload: &B) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        debug!("{} {}", method, path);
        let mut request = self
            .client
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .json(payload);

        if let Some(token) = &self.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }

        self.execute(request).await
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Vec<u8>> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .bytes()
                .await
                .ok()
                .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
                .map(|body| body.error);

            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl NetworkApi for HttpNetworkApi {
    async fn list_posts(&self, page: u32) -> Result<PostPage> {
        self.get_json(&format!("/posts/{}", page)).await
    }

    async fn create_post(&self, content: &str) -> Result<()> {
        // success body is an empty object; nothing to decode
        self.send_json(Method::POST, "/posts/new", &PostContent { content })
            .await
            .map(|_| ())
    }

    async fn toggle_like(&self, post_id: PostId) -> Result<LikeToggle> {
        let body = self
            .send_json(
                Method::PUT,
                &format!("/posts/{}/like", post_id),
                &serde_json::json!({}),
            )
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn edit_post(&self, post_id: PostId, content: &str) -> Result<EditPostResponse> {
        let body = self
            .send_json(
                Method::PUT,
                &format!("/posts/{}/edit", post_id),
                &PostContent { content },
            )
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn list_following(&self, page: u32) -> Result<PostPage> {
        self.get_json(&format!("/following/{}", page)).await
    }

    async fn load_profile(&self, username: &str, page: u32) -> Result<ProfilePage> {
        self.get_json(&format!(
            "/profile/{}/{}",
            urlencoding::encode(username),
            page
        ))
        .await
    }

    async fn toggle_follow(&self, username: &str) -> Result<FollowToggle> {
        let body = self
            .send_json(
                Method::PUT,
                &format!("/profile/{}/follow", urlencoding::encode(username)),
                &serde_json::json!({}),
            )
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Builder for [`HttpNetworkApi`]
pub struct HttpNetworkApiBuilder {
    base_url: String,
    session_cookie: Option<String>,
    csrf_token: Option<String>,
}

impl HttpNetworkApiBuilder {
    /// Cookie header value forwarded with every request
    pub fn session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    /// Token sent as `X-CSRFToken` on write requests
    pub fn csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    pub fn build(self) -> Result<HttpNetworkApi> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL {}: {}", self.base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "unsupported URL scheme: {}",
                url.scheme()
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(REQUESTED_WITH_HEADER),
            HeaderValue::from_static(REQUESTED_WITH_VALUE),
        );

        if let Some(cookie) = &self.session_cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| ApiError::Config(format!("invalid session cookie: {}", e)))?;
            headers.insert(COOKIE, value);
        }

        if let Some(token) = &self.csrf_token {
            HeaderValue::from_str(token)
                .map_err(|e| ApiError::Config(format!("invalid CSRF token: {}", e)))?;
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(HttpNetworkApi {
            client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            csrf_token: self.csrf_token,
        })
    }
}

//! API client for communicating with the Postboard REST API.
//!
//! This module provides the `ApiClient` struct for making requests against
//! the user, post, and AI-summary endpoints. Requests are authenticated with
//! HTTP Basic auth when the client carries credentials.

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::auth::Credentials;
use crate::config::Config;
use crate::models::{AiSummary, Comment, Post, PostBrief, User};

use super::ApiError;

/// API client for the Postboard backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl ApiClient {
    /// Create a new unauthenticated API client from the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials: None,
        })
    }

    /// Create a new ApiClient carrying the given credentials, sharing the
    /// connection pool. Every request sent by the returned client includes
    /// the credentials as HTTP Basic auth.
    pub fn with_credentials(&self, credentials: Credentials) -> Self {
        Self {
            client: self.client.clone(), // Cheap clone, shares connection pool
            base_url: self.base_url.clone(),
            credentials: Some(credentials),
        }
    }

    /// Whether this client carries credentials for outgoing requests.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the client's credentials as Basic auth, if present.
    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some(creds) => request.basic_auth(&creds.username, Some(&creds.password)),
            None => request,
        }
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = self
            .apply_auth(self.client.get(&url))
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        let response = self
            .apply_auth(self.client.post(&url))
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    // ===== Endpoint Wrappers =====

    /// Fetch the plain-text greeting from the backend
    pub async fn hello(&self) -> Result<String> {
        let url = self.url("/hello");
        let response = self
            .apply_auth(self.client.get(&url))
            .send()
            .await
            .context("Failed to send hello request")?;

        let response = Self::check_response(response).await?;
        response.text().await.context("Failed to read hello response body")
    }

    /// Verify credentials against the secured endpoint.
    ///
    /// Sends the supplied username/password explicitly, regardless of any
    /// credentials this client already carries. Succeeds only on a 2xx
    /// response; a 401 surfaces as `ApiError::Unauthorized`.
    pub async fn get_secured(&self, username: &str, password: &str) -> Result<String> {
        let url = self.url("/secured/");
        let response = self
            .client
            .get(&url)
            .basic_auth(username, Some(password))
            .send()
            .await
            .context("Failed to send credential verification request")?;

        let response = Self::check_response(response).await?;
        response
            .text()
            .await
            .context("Failed to read verification response body")
    }

    /// Fetch the profile of the currently authenticated user.
    /// Requires a client carrying credentials (see `with_credentials`).
    pub async fn get_current_user(&self) -> Result<User> {
        debug!("Fetching current user profile");
        self.get("/user/me").await
    }

    /// Fetch a user by id
    pub async fn get_user(&self, user_id: i64) -> Result<User> {
        self.get(&format!("/user/{}", user_id)).await
    }

    /// Create a user, returning the new user's id
    pub async fn create_user(&self, first_name: &str, last_name: &str) -> Result<i64> {
        let url = self.url(&format!("/user/{}/{}", first_name, last_name));
        let response = self
            .apply_auth(self.client.post(&url))
            .send()
            .await
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .context("Failed to parse created user id")
    }

    /// Fetch all posts
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        self.get("/posts").await
    }

    /// Fetch a single post by id
    pub async fn get_post(&self, post_id: i64) -> Result<Post> {
        self.get(&format!("/posts/{}", post_id)).await
    }

    /// Search posts whose title or content matches the query
    pub async fn search_posts(&self, q: &str) -> Result<Vec<Post>> {
        let url = self.url("/posts/search");
        let response = self
            .apply_auth(self.client.get(&url))
            .query(&[("q", q)])
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .context("Failed to parse post search response")
    }

    /// Create a post, returning the stored post (backend replies 201 with the entity)
    pub async fn create_post(&self, title: &str, content: &str) -> Result<Post> {
        let body = CreatePostRequest { title, content };
        self.post("/posts", &body).await
    }

    /// Fetch all posts authored by a user
    pub async fn posts_by_user(&self, user_id: i64) -> Result<Vec<Post>> {
        self.get(&format!("/user/{}/posts", user_id)).await
    }

    /// Fetch all comments on a post
    pub async fn list_comments(&self, post_id: i64) -> Result<Vec<Comment>> {
        self.get(&format!("/posts/{}/comments", post_id)).await
    }

    /// Count the comments on a post
    pub async fn comment_count(&self, post_id: i64) -> Result<i64> {
        self.get(&format!("/posts/{}/comments/count", post_id)).await
    }

    /// Create a comment on a post. Pass `reply_to` to answer another
    /// comment instead of the post itself.
    pub async fn create_comment(
        &self,
        post_id: i64,
        text: &str,
        reply_to: Option<i64>,
    ) -> Result<Comment> {
        let body = CommentRequest {
            text,
            reply_to_id: reply_to,
        };
        self.post(&format!("/posts/{}/comments", post_id), &body).await
    }

    /// Update a comment's text
    pub async fn update_comment(
        &self,
        post_id: i64,
        comment_id: i64,
        text: &str,
        reply_to: Option<i64>,
    ) -> Result<Comment> {
        let url = self.url(&format!("/posts/{}/comments/{}", post_id, comment_id));
        let body = CommentRequest {
            text,
            reply_to_id: reply_to,
        };
        let response = self
            .apply_auth(self.client.put(&url))
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Failed to send PUT request to {}", url))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .context("Failed to parse updated comment")
    }

    /// Delete a comment. The backend replies 204 with no body.
    pub async fn delete_comment(&self, post_id: i64, comment_id: i64) -> Result<()> {
        let url = self.url(&format!("/posts/{}/comments/{}", post_id, comment_id));
        let response = self
            .apply_auth(self.client.delete(&url))
            .send()
            .await
            .with_context(|| format!("Failed to send DELETE request to {}", url))?;

        Self::check_response(response).await?;
        Ok(())
    }

    /// Request an AI summary for a query over a set of post briefs
    pub async fn ai_summary(&self, q: &str, briefs: &[PostBrief]) -> Result<AiSummary> {
        debug!(query = q, briefs = briefs.len(), "Requesting AI summary");
        let body = AiSummaryRequest { q, posts: briefs };
        self.post("/ai-summary", &body).await
    }
}

// Internal request types for serialization

#[derive(Debug, Serialize)]
struct CreatePostRequest<'a> {
    title: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CommentRequest<'a> {
    text: &'a str,
    #[serde(rename = "replyToId", skip_serializing_if = "Option::is_none")]
    reply_to_id: Option<i64>,
}

#[derive(Debug, Serialize)]
struct AiSummaryRequest<'a> {
    q: &'a str,
    posts: &'a [PostBrief],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> ApiClient {
        let config = Config {
            base_url: base_url.to_string(),
            timeout_ms: 5000,
        };
        ApiClient::new(&config).expect("Failed to build test client")
    }

    #[test]
    fn test_url_joining_strips_trailing_slash() {
        let client = test_client("http://localhost:8088/api/");
        assert_eq!(client.url("/posts"), "http://localhost:8088/api/posts");
        assert_eq!(client.url("/secured/"), "http://localhost:8088/api/secured/");
    }

    #[test]
    fn test_with_credentials_marks_client() {
        let client = test_client("http://localhost:8088/api");
        assert!(!client.has_credentials());

        let authed = client.with_credentials(Credentials::new("alice", "secret123"));
        assert!(authed.has_credentials());
        // The original client is untouched
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_ai_summary_request_shape() {
        let briefs = vec![PostBrief {
            title: "Rust tips".to_string(),
            excerpt: "Ownership in practice".to_string(),
        }];
        let body = AiSummaryRequest {
            q: "rust",
            posts: &briefs,
        };
        let json = serde_json::to_value(&body).expect("Failed to serialize AI summary request");
        assert_eq!(json["q"], "rust");
        assert_eq!(json["posts"][0]["title"], "Rust tips");
        assert_eq!(json["posts"][0]["excerpt"], "Ownership in practice");
    }
}

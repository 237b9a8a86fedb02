//! Thin reqwest wrapper around the newsletter REST endpoints.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde_json::json;

use crate::config::ApiConfig;
use crate::model::{Article, Newsletter};

use super::error::ApiError;

/// Client for the newsletter persistence API.
///
/// Cheap to clone; every in-flight persistence task holds its own copy.
#[derive(Clone)]
pub struct NewsletterClient {
    http: Client,
    base_url: String,
    token: Option<String>,
    request_timeout: Duration,
}

impl NewsletterClient {
    /// Build a client from configuration, reading the bearer token from the
    /// configured environment variable. An empty `auth_env_var` means the
    /// backend is unauthenticated (local development).
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let token = if config.auth_env_var.is_empty() {
            None
        } else {
            match std::env::var(&config.auth_env_var) {
                Ok(token) => Some(token),
                Err(_) => {
                    return Err(ApiError::MissingToken {
                        var: config.auth_env_var.clone(),
                    })
                }
            }
        };

        Ok(Self::new(
            &config.base_url,
            token,
            Duration::from_secs(config.timeout_seconds),
            Duration::from_secs(config.connect_timeout_seconds),
        ))
    }

    pub fn new(
        base_url: &str,
        token: Option<String>,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Self {
        let http = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            request_timeout,
        }
    }

    /// Fetch one newsletter with its populated categories and articles.
    pub async fn fetch_newsletter(&self, newsletter_id: &str) -> Result<Newsletter, ApiError> {
        let response = self
            .send(self.request(Method::GET, &format!("/api/newsletters/{newsletter_id}")))
            .await?;
        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { source })
    }

    /// Persist the article order of one category.
    pub async fn update_order(
        &self,
        newsletter_id: &str,
        category_id: &str,
        article_ids: &[String],
    ) -> Result<(), ApiError> {
        self.send(
            self.request(
                Method::PATCH,
                &format!("/api/newsletters/{newsletter_id}/update-order"),
            )
            .json(&json!({
                "categoryId": category_id,
                "articleIds": article_ids,
            })),
        )
        .await?;
        Ok(())
    }

    /// Move one article to another category.
    pub async fn update_category(
        &self,
        newsletter_id: &str,
        article_id: &str,
        to_category_id: &str,
    ) -> Result<(), ApiError> {
        self.send(
            self.request(
                Method::PATCH,
                &format!("/api/newsletters/{newsletter_id}/update-category/{article_id}"),
            )
            .json(&json!({ "toCategoryId": to_category_id })),
        )
        .await?;
        Ok(())
    }

    /// Replace an article's title; returns the updated article.
    pub async fn update_title(&self, article_id: &str, title: &str) -> Result<Article, ApiError> {
        let response = self
            .send(
                self.request(Method::PATCH, &format!("/api/articles/{article_id}/title"))
                    .json(&json!({ "title": title })),
            )
            .await?;
        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { source })
    }

    /// Replace an article's description; returns the updated article.
    pub async fn update_description(
        &self,
        article_id: &str,
        description: &str,
    ) -> Result<Article, ApiError> {
        let response = self
            .send(
                self.request(
                    Method::PATCH,
                    &format!("/api/articles/{article_id}/description"),
                )
                .json(&json!({ "description": description })),
            )
            .await?;
        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { source })
    }

    /// Delete an article.
    pub async fn delete_article(&self, article_id: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &format!("/api/articles/{article_id}")))
            .await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{path}", self.base_url));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = tokio::time::timeout(self.request_timeout, request.send())
            .await
            .map_err(|_| ApiError::Timeout {
                duration: self.request_timeout.as_secs(),
            })?
            .map_err(|source| ApiError::Connection { source })?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_response(response).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = NewsletterClient::new(
            "http://localhost:3000/",
            None,
            Duration::from_secs(5),
            Duration::from_secs(2),
        );
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}

#![allow(dead_code)]

pub mod mock_backend;

use std::time::Duration;

use newsdesk::api::NewsletterClient;

/// Client pointed at a mock backend, with test-friendly timeouts.
pub fn test_client(base_url: &str, token: Option<&str>) -> NewsletterClient {
    NewsletterClient::new(
        base_url,
        token.map(String::from),
        Duration::from_secs(5),
        Duration::from_secs(2),
    )
}

/// Newsletter payload with categories A:[1,2,3] and B:[4,5].
pub fn newsletter_payload() -> &'static str {
    r#"{
        "id": "nl-1",
        "status": "DRAFT",
        "summary": "Weekly digest",
        "categories": [
            {
                "id": "cat-a",
                "name": "A",
                "articles": [
                    {"id": "1", "title": "One", "link": "https://example.com/1", "categoryId": "cat-a"},
                    {"id": "2", "title": "Two", "link": "https://example.com/2", "categoryId": "cat-a"},
                    {"id": "3", "title": "Three", "link": "https://example.com/3", "categoryId": "cat-a"}
                ]
            },
            {
                "id": "cat-b",
                "name": "B",
                "articles": [
                    {"id": "4", "title": "Four", "link": "https://example.com/4", "categoryId": "cat-b"},
                    {"id": "5", "title": "Five", "link": "https://example.com/5", "categoryId": "cat-b"}
                ]
            }
        ]
    }"#
}

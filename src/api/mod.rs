//! HTTP client for the newsletter persistence API.

mod client;
mod error;

pub use client::NewsletterClient;
pub use error::ApiError;

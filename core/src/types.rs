//! Payload types for the Fake Store API.
//!
//! # Design
//! The client passes catalog data through untouched. A product is whatever
//! JSON object the server returns; its usual fields are `id`, `title`,
//! `price`, `category`, `description` and `image`, but none of them are
//! required or checked here. Keeping the payload as `serde_json::Value`
//! preserves numbers and unknown fields exactly as they arrived.

/// A catalog item as returned by the server.
pub type Product = serde_json::Value;

/// A category label, e.g. `"electronics"`.
pub type Category = String;

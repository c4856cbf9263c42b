//! Stateless request builder and response parser for the products API.
//!
//! # Design
//! `ProductsEndpoint` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Whoever sits in between executes the HTTP round-trip,
//! which keeps this layer deterministic and free of I/O.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::FetchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Category, Product};

#[derive(Debug, Clone)]
pub struct ProductsEndpoint {
    base_url: String,
}

impl ProductsEndpoint {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_products(&self) -> HttpRequest {
        self.get("/products")
    }

    /// `id` is rendered with `Display` and spliced into the path as-is.
    pub fn build_get_product(&self, id: impl Display) -> HttpRequest {
        self.get(&format!("/products/{id}"))
    }

    pub fn build_list_categories(&self) -> HttpRequest {
        self.get("/products/categories")
    }

    pub fn build_create_product<T>(&self, data: &T) -> Result<HttpRequest, FetchError>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_string(data).map_err(|e| FetchError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/products", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Read parsers ignore the status and decode the body; only an
    /// undecodable body fails.
    pub fn parse_list_products(&self, response: HttpResponse) -> Result<Vec<Product>, FetchError> {
        decode_body(&response)
    }

    pub fn parse_get_product(&self, response: HttpResponse) -> Result<Product, FetchError> {
        decode_body(&response)
    }

    pub fn parse_list_categories(&self, response: HttpResponse) -> Result<Vec<Category>, FetchError> {
        decode_body(&response)
    }

    /// Non-2xx statuses become `FetchError::Rejected` with the body kept.
    pub fn parse_create_product(&self, response: HttpResponse) -> Result<Product, FetchError> {
        if !response.is_success() {
            return Err(FetchError::Rejected {
                status: response.status,
                body: response.body,
            });
        }
        decode_body(&response)
    }

    fn get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }
}

fn decode_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, FetchError> {
    serde_json::from_str(&response.body).map_err(|e| FetchError::Decode(e.to_string()))
}

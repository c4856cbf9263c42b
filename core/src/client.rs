//! Async client for the Fake Store products API.
//!
//! # Design
//! `ProductsClient` pairs a `ProductsEndpoint` with a `Transport`. Each
//! operation is one request/response exchange with no retry. The read
//! operations decode the body whatever the status; a transport or decode
//! failure is logged and handed back to the caller. `create_product`
//! logs a failure and returns `None` instead; `try_create_product` is the
//! same call with the error kept.

use std::fmt::Display;

use serde::Serialize;

use crate::endpoint::ProductsEndpoint;
use crate::error::FetchError;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{Category, Product};

/// Base URL of the public Fake Store API.
pub const FAKE_STORE_BASE_URL: &str = "https://fakestoreapi.com";

#[derive(Debug, Clone)]
pub struct ProductsClient<T = ReqwestTransport> {
    endpoint: ProductsEndpoint,
    transport: T,
}

impl ProductsClient<ReqwestTransport> {
    pub fn new() -> Self {
        Self::with_base_url(FAKE_STORE_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_transport(base_url, ReqwestTransport::new())
    }
}

impl Default for ProductsClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> ProductsClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            endpoint: ProductsEndpoint::new(base_url),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.endpoint.base_url()
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        let request = self.endpoint.build_list_products();
        let result = match self.transport.execute(request).await {
            Ok(response) => self.endpoint.parse_list_products(response),
            Err(e) => Err(e),
        };
        result.inspect_err(|e| tracing::error!(error = %e, "error fetching products"))
    }

    pub async fn get_product(&self, id: impl Display) -> Result<Product, FetchError> {
        let request = self.endpoint.build_get_product(id);
        let result = match self.transport.execute(request).await {
            Ok(response) => self.endpoint.parse_get_product(response),
            Err(e) => Err(e),
        };
        result.inspect_err(|e| tracing::error!(error = %e, "error fetching product by id"))
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
        let request = self.endpoint.build_list_categories();
        let result = match self.transport.execute(request).await {
            Ok(response) => self.endpoint.parse_list_categories(response),
            Err(e) => Err(e),
        };
        result.inspect_err(|e| tracing::error!(error = %e, "error fetching product categories"))
    }

    /// Create a product, returning `None` on any failure.
    ///
    /// The failure is logged and dropped. Use `try_create_product` to see
    /// the status and body of a rejection.
    pub async fn create_product<D>(&self, data: &D) -> Option<Product>
    where
        D: Serialize + ?Sized,
    {
        match self.try_create_product(data).await {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::error!(error = %e, status = ?e.status(), "failed to create product");
                None
            }
        }
    }

    pub async fn try_create_product<D>(&self, data: &D) -> Result<Product, FetchError>
    where
        D: Serialize + ?Sized,
    {
        let request = self.endpoint.build_create_product(data)?;
        let response = self.transport.execute(request).await?;
        self.endpoint.parse_create_product(response)
    }
}

//! Client for the Fake Store products API.
//!
//! # Overview
//! Four operations against `https://fakestoreapi.com`: list products, get a
//! product by id, list categories, and create a product. Payloads are passed
//! through as JSON without schema checks.
//!
//! # Design
//! - `ProductsEndpoint` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network, so the wire contract is testable
//!   on its own.
//! - `Transport` executes one request. `ReqwestTransport` is the default.
//! - `ProductsClient` combines the two. Read operations return
//!   `Result<_, FetchError>`; `create_product` returns `Option` and logs
//!   the failure, while `try_create_product` keeps the error.
//! - Nothing is cached or retried, and no client holds mutable state.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{ProductsClient, FAKE_STORE_BASE_URL};
pub use endpoint::ProductsEndpoint;
pub use error::{FetchError, FetchErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use types::{Category, Product};

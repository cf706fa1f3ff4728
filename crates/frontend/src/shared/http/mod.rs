//! HTTP client wrapper: authenticated JSON requests with a uniform error.

mod client;
mod error;
mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{ApiClient, RequestOptions};
pub use error::ApiError;
pub use transport::{default_transport, HttpRequest, HttpResponse, Method, Transport};

#[cfg(target_arch = "wasm32")]
pub use transport::GlooTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use transport::ReqwestTransport;

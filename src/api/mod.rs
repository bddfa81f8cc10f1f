//! Backend API Module
//!
//! Route table, name-keyed registry, transport seam and the client wrapper.

pub mod endpoints;
pub mod registry;
mod client;
mod error;
mod http;
mod transport;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use http::HttpTransport;
pub use registry::{EndpointDescriptor, Route};
pub use transport::{ApiRequest, ApiResponse, ApiTransport};

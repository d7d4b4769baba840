//! Lifecycle management of an arbitrary remote object over plain HTTP.
//!
//! # Overview
//! The orchestrator declares a resource (URL, headers, body) and asks for one
//! of four lifecycle operations; the dispatcher turns that into exactly one
//! synchronous HTTP call, classifies the response, and tracks the object's
//! identity through an opaque string returned by the remote service.
//!
//! # Design
//! - `Dispatcher` is the only place protocol semantics live: header policy,
//!   status classification, identity extraction, header capture.
//! - Request building and response classification are pure; only the
//!   `transport` module performs I/O, with a fresh agent per call.
//! - Two classification policies (`Policy::Lenient`, `Policy::Strict`)
//!   preserve the two incompatible contracts in the wild; the choice is made
//!   at resource construction time and never merged.
//! - Every error is terminal for its call; retry is the orchestrator's job.

pub mod dispatcher;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use dispatcher::{Dispatcher, Policy};
pub use error::DispatchError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{ResourceSpec, ResourceState};

//! Declared resource attributes and tracked remote state.
//!
//! # Design
//! `ResourceSpec` is what the orchestrator declares; it is read-only input to
//! every dispatch call. `ResourceState` is what the dispatcher learns from the
//! remote service; the orchestrator persists it between runs but never writes
//! it directly. Both derive serde traits so the schema-binding layer can
//! populate a spec from declared configuration and round-trip state through
//! whatever store the orchestrator uses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Declared attributes of one remote resource, immutable for the duration of
/// a dispatch call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceSpec {
    /// Target endpoint for every lifecycle operation.
    pub url: String,

    /// Headers sent with every request. No keys are required; iteration
    /// order is not significant.
    #[serde(default)]
    pub request_headers: BTreeMap<String, String>,

    /// Raw request payload. Empty means "no body".
    #[serde(default)]
    pub body: String,
}

impl ResourceSpec {
    /// Spec with only a URL, no headers and no body.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            request_headers: BTreeMap::new(),
            body: String::new(),
        }
    }
}

/// What the dispatcher currently believes about the remote object.
///
/// An empty `id` means the object is absent (never created, or deleted).
/// `response_headers` is only populated by the strict dispatch policy, from
/// the last fully successful response; repeated header values are joined
/// with `", "`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceState {
    pub id: String,

    #[serde(default)]
    pub response_headers: BTreeMap<String, String>,
}

impl ResourceState {
    /// True when the object is believed to exist remotely.
    pub fn exists(&self) -> bool {
        !self.id.is_empty()
    }
}

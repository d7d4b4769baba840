//! Resource lifecycle dispatcher: one HTTP call per lifecycle operation.
//!
//! # Design
//! All four operations funnel into a single build-and-send routine. Request
//! construction (`build_request`) and response classification (`interpret`)
//! are pure and exposed separately so tests can drive them with synthetic
//! responses; `dispatch` composes them around the transport.
//!
//! Two response-classification policies exist because two incompatible
//! contracts are in active use. They are selected at construction time and
//! never mixed:
//!
//! - [`Policy::Lenient`]: a default `Content-Type: application/json` is
//!   injected (caller headers may override it), 200 and 201 are accepted,
//!   and a 404 on GET or DELETE means "already absent" rather than failure.
//! - [`Policy::Strict`]: only caller headers are sent, only 200 is accepted,
//!   the response must carry a recognized text content type, and response
//!   headers are captured into the state on success.

use crate::error::DispatchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport;
use crate::types::{ResourceSpec, ResourceState};

/// Response-classification policy, fixed at resource construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Content-typed requests, tolerant statuses, 404-means-absent on
    /// GET/DELETE.
    Lenient,
    /// Content-negotiated: 200 only, text content type required, response
    /// headers captured.
    Strict,
}

/// Drives the lifecycle of one remote resource over HTTP.
///
/// Each operation sends exactly one synchronous request and either mutates
/// the given [`ResourceState`] or returns a classified error. Errors are
/// terminal for the call; the orchestrator owns any higher-level retry.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    policy: Policy,
}

impl Dispatcher {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Create the remote object. On success the response body becomes the
    /// tracked identifier.
    pub fn create(
        &self,
        spec: &ResourceSpec,
        state: &mut ResourceState,
    ) -> Result<(), DispatchError> {
        self.dispatch(spec, HttpMethod::Post, state)
    }

    /// Refresh the tracked identifier from the remote object. Under the
    /// lenient policy a 404 clears the identifier and succeeds.
    pub fn read(
        &self,
        spec: &ResourceSpec,
        state: &mut ResourceState,
    ) -> Result<(), DispatchError> {
        self.dispatch(spec, HttpMethod::Get, state)
    }

    /// Push the declared body to the remote object. The identifier is never
    /// touched by an update.
    pub fn update(
        &self,
        spec: &ResourceSpec,
        state: &mut ResourceState,
    ) -> Result<(), DispatchError> {
        self.dispatch(spec, HttpMethod::Put, state)
    }

    /// Delete the remote object. The identifier is cleared unconditionally
    /// on success, including the lenient already-gone 404 case.
    pub fn delete(
        &self,
        spec: &ResourceSpec,
        state: &mut ResourceState,
    ) -> Result<(), DispatchError> {
        self.dispatch(spec, HttpMethod::Delete, state)?;
        state.id.clear();
        Ok(())
    }

    fn dispatch(
        &self,
        spec: &ResourceSpec,
        method: HttpMethod,
        state: &mut ResourceState,
    ) -> Result<(), DispatchError> {
        let request = self.build_request(spec, method);
        let response = transport::execute(&request)?;
        self.interpret(method, response, state)
    }

    /// Turn declared attributes into an outgoing request for `method`.
    ///
    /// Header policy: the lenient variant seeds `Content-Type:
    /// application/json` before overlaying the caller's headers, so a caller
    /// header with the same name replaces the default. The strict variant
    /// sends the caller's headers and nothing else.
    pub fn build_request(&self, spec: &ResourceSpec, method: HttpMethod) -> HttpRequest {
        let mut headers: Vec<(String, String)> = Vec::new();
        if self.policy == Policy::Lenient {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        for (name, value) in &spec.request_headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            headers.push((name.clone(), value.clone()));
        }

        let body = if spec.body.is_empty() {
            None
        } else {
            Some(spec.body.clone())
        };

        HttpRequest {
            method,
            url: spec.url.clone(),
            headers,
            body,
        }
    }

    /// Classify a drained response and apply its state effects.
    ///
    /// Identity rules hold for both policies: POST and GET require a
    /// non-empty body which is taken verbatim as the identifier; PUT and
    /// DELETE ignore the body. On any error the state is left unchanged,
    /// except the lenient 404 path which clears the identifier and succeeds.
    pub fn interpret(
        &self,
        method: HttpMethod,
        response: HttpResponse,
        state: &mut ResourceState,
    ) -> Result<(), DispatchError> {
        match self.policy {
            Policy::Lenient => {
                if matches!(method, HttpMethod::Get | HttpMethod::Delete)
                    && response.status == 404
                {
                    tracing::warn!(
                        method = method.as_str(),
                        "remote object not found; clearing tracked identity"
                    );
                    state.id.clear();
                    return Ok(());
                }
                if response.status != 200 && response.status != 201 {
                    return Err(DispatchError::Request {
                        status: response.status,
                        method,
                        body: response.body,
                    });
                }
            }
            Policy::Strict => {
                if response.status != 200 {
                    return Err(DispatchError::Request {
                        status: response.status,
                        method,
                        body: response.body,
                    });
                }
                match response.content_type() {
                    Some(value) if is_text_media_type(value) => {}
                    other => {
                        return Err(DispatchError::ContentType(other.map(String::from)));
                    }
                }
            }
        }

        if matches!(method, HttpMethod::Get | HttpMethod::Post) {
            if response.body.is_empty() {
                return Err(DispatchError::IdentityMissing);
            }
            state.id = response.body.clone();
        }

        if self.policy == Policy::Strict {
            state.response_headers = response.folded_headers();
        }

        Ok(())
    }
}

/// True for media types whose top-level type is `text`, ignoring parameters
/// such as `; charset=utf-8` and ASCII case.
fn is_text_media_type(value: &str) -> bool {
    let essence = value.split(';').next().unwrap_or("").trim();
    essence.to_ascii_lowercase().starts_with("text/")
}

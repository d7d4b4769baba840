//! Error taxonomy for lifecycle dispatch.
//!
//! # Design
//! Every variant is terminal for the call that produced it; the dispatcher
//! never retries. `Request` carries the status, method, and response body
//! because the orchestrator surfaces the message to an end user who cannot
//! see the wire traffic. `ContentType` is distinct from `Request` since the
//! status was acceptable and only the negotiated representation was not.

use std::fmt;

use crate::http::HttpMethod;

/// Errors returned by `Dispatcher` operations.
#[derive(Debug)]
pub enum DispatchError {
    /// The request could not be sent or the response could not be received
    /// (DNS, connection refused, TLS, timeout).
    Transport(ureq::Error),

    /// A response arrived with a status outside the accepted set.
    Request {
        status: u16,
        method: HttpMethod,
        body: String,
    },

    /// Strict policy only: the response carried no `Content-Type`, or one
    /// that is not a recognized text type. `None` means the header was
    /// absent.
    ContentType(Option<String>),

    /// Create/read succeeded at the status level but the body was empty
    /// where the object's identifier was required.
    IdentityMissing,
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Transport(err) => write!(f, "transport failure: {err}"),
            DispatchError::Request {
                status,
                method,
                body,
            } => {
                write!(
                    f,
                    "unexpected HTTP {status} for {} request: {body}",
                    method.as_str()
                )
            }
            DispatchError::ContentType(Some(value)) => {
                write!(f, "response content type {value:?} is not a text type")
            }
            DispatchError::ContentType(None) => {
                write!(f, "response is missing a content type")
            }
            DispatchError::IdentityMissing => {
                write!(f, "the endpoint did not return the object's unique id")
            }
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

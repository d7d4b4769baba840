//! Synchronous execution of one `HttpRequest` via ureq.
//!
//! # Design
//! Each call builds a fresh agent, so a dispatch owns a private transport
//! handle for exactly one round-trip; no connection pool outlives the call.
//! Status-as-error is disabled so 4xx/5xx responses come back as data for
//! the dispatcher to classify. The body is read to completion on every path
//! before this function returns, which also releases the connection.

use std::time::Duration;

use crate::error::DispatchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Upper bound on one round-trip. The transport would otherwise block until
/// the OS gives up, which can be minutes on a dropped route.
const CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// Send `request` and drain the response. Transport-level failures map to
/// `DispatchError::Transport`; any received status is returned as data.
pub fn execute(request: &HttpRequest) -> Result<HttpResponse, DispatchError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(CALL_TIMEOUT))
        .build()
        .new_agent();

    tracing::debug!(
        method = request.method.as_str(),
        url = %request.url,
        "sending request"
    );

    // GET and DELETE go out body-less; only POST and PUT carry the payload.
    let result = match (request.method, &request.body) {
        (HttpMethod::Get, _) => {
            let mut builder = agent.get(&request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            builder.call()
        }
        (HttpMethod::Delete, _) => {
            let mut builder = agent.delete(&request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            builder.call()
        }
        (HttpMethod::Post, body) => {
            let mut builder = agent.post(&request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            match body {
                Some(body) => builder.send(body.as_bytes()),
                None => builder.send_empty(),
            }
        }
        (HttpMethod::Put, body) => {
            let mut builder = agent.put(&request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            match body {
                Some(body) => builder.send(body.as_bytes()),
                None => builder.send_empty(),
            }
        }
    };

    let mut response = result.map_err(DispatchError::Transport)?;

    let status = response.status().as_u16();
    let headers: Vec<(String, String)> = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    // Drained even when the status is an error, so the classifier can quote
    // the body in its message.
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(DispatchError::Transport)?;

    tracing::debug!(status, "received response");

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

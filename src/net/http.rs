//! HTTP gateway wrapping all calls to the remote auth API.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`, with the bearer
//! credential attached to protected paths and every request raced against a
//! bounded timeout. Server-side (SSR): stubs returning an error, matching
//! the rest of the crate's browser-only surfaces.
//!
//! Responses are decoded into the uniform [`Envelope`] regardless of HTTP
//! status since the server reports domain errors with 4xx status codes and
//! a JSON error body.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::Envelope;
#[cfg(feature = "hydrate")]
use crate::config;

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

/// `GET` a resource.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or timeout.
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<Envelope<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Get, path, None::<&()>).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::unavailable())
    }
}

/// `POST` a JSON body.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or timeout.
pub async fn post<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<Envelope<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Post, path, Some(body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::unavailable())
    }
}

/// `PATCH` a JSON body.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or timeout.
pub async fn patch<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<Envelope<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Patch, path, Some(body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::unavailable())
    }
}

/// `DELETE` a resource.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or timeout.
pub async fn delete<T: DeserializeOwned>(path: &str) -> Result<Envelope<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Delete, path, None::<&()>).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::unavailable())
    }
}

#[cfg(feature = "hydrate")]
async fn send<B: Serialize, T: DeserializeOwned>(
    verb: Verb,
    path: &str,
    body: Option<&B>,
) -> Result<Envelope<T>, ApiError> {
    use futures::future::{Either, select};
    use gloo_net::http::Request;
    use gloo_timers::future::TimeoutFuture;

    let url = format!("{}{path}", config::API_BASE_URL);
    let mut builder = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Patch => Request::patch(&url),
        Verb::Delete => Request::delete(&url),
    };

    if config::is_protected_path(path) {
        if let Some(token) = config::API_BEARER_TOKEN.filter(|t| !t.is_empty()) {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
    }

    let request = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::transport(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| ApiError::transport(e.to_string()))?,
    };

    let response = {
        let pending = request.send();
        futures::pin_mut!(pending);
        let deadline = TimeoutFuture::new(config::REQUEST_TIMEOUT_MS);
        futures::pin_mut!(deadline);
        match select(pending, deadline).await {
            Either::Left((result, _)) => {
                result.map_err(|e| ApiError::transport(e.to_string()))?
            }
            Either::Right(_) => return Err(ApiError::timeout()),
        }
    };

    match response.json::<Envelope<T>>().await {
        Ok(envelope) => Ok(envelope),
        Err(_) if !response.ok() => Err(ApiError::transport(format!(
            "request failed with status {}",
            response.status()
        ))),
        Err(e) => Err(ApiError::transport(e.to_string())),
    }
}

//! HTTP gateway for the recipe API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`. Native builds get stubs
//! that fail with a connectivity error, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<serde_json::Value, ApiError>` with one
//! normalized error shape: HTTP failures carry the server's `msg`/`message`
//! when the body parses as JSON, transport failures carry status `0` and a
//! triage message, and a 204 resolves to `Value::Null`. Nothing is retried
//! or cached; two identical calls issue two independent requests.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;
use thiserror::Error;

use crate::net::types::TokenResponse;
use crate::security::store;

/// Base path of the remote API, fixed at build time.
pub const BASE_URL: &str = "http://localhost:7070/api/";

const LOGIN_ENDPOINT: &str = "auth/login";
const REGISTER_ENDPOINT: &str = "auth/register";

/// HTTP methods used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Normalized failure for any API call.
///
/// `status == 0` means the request never produced an HTTP response
/// (connectivity, CORS, or a response body that could not be interpreted);
/// any other value is the server's status code.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    /// Parsed error body, when the server sent JSON.
    pub body: Option<Value>,
}

impl ApiError {
    /// Transport-level failure with remediation hints. The triage list is a
    /// usability feature carried over from years of debugging mis-set CORS
    /// headers; keep it.
    pub fn connectivity(url: &str) -> Self {
        Self {
            status: 0,
            message: format!(
                "Unable to connect to the server at {url}. This is usually caused by:\n\
                 1. CORS issues - make sure the API server allows requests from this origin\n\
                 2. Server not running - verify the API server is running at {BASE_URL}\n\
                 3. Network/firewall blocking the connection"
            ),
            body: None,
        }
    }

    /// A 2xx response whose body did not have the expected shape.
    pub fn unexpected_shape(detail: &str) -> Self {
        Self {
            status: 0,
            message: format!("Unexpected response from the server: {detail}"),
            body: None,
        }
    }

    /// Message suitable for direct display, falling back to `context` when
    /// the server gave nothing useful.
    pub fn user_message(&self, context: &str) -> String {
        if !self.message.is_empty() {
            return self.message.clone();
        }
        if self.status == 0 {
            return "Unable to connect to the server. Please make sure the API server is running."
                .to_owned();
        }
        format!("Error {}: {context}", self.status)
    }
}

/// Build a full request URL from a templated endpoint.
///
/// Each `{name}` placeholder is substituted verbatim from `path_params`
/// (placeholders are assumed to be safe identifiers such as numeric IDs).
/// Query parameters are percent-encoded key and value independently; the `?`
/// is omitted entirely when `query_params` is empty.
pub fn build_url(endpoint: &str, path_params: &[(&str, &str)], query_params: &[(&str, &str)]) -> String {
    let mut url = format!("{BASE_URL}{endpoint}");
    for (name, value) in path_params {
        url = url.replace(&format!("{{{name}}}"), value);
    }

    if !query_params.is_empty() {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in query_params {
            serializer.append_pair(key, value);
        }
        url.push('?');
        url.push_str(&serializer.finish());
    }

    url
}

/// Normalize an HTTP response into the uniform success/error shape.
///
/// 204 and empty 2xx bodies resolve to `Value::Null`; other 2xx bodies must
/// be JSON. Non-2xx statuses become an [`ApiError`] whose message prefers the
/// body's `msg`/`message` field and falls back to `"HTTP <status> Error"`.
pub fn normalize_response(status: u16, body: &str) -> Result<Value, ApiError> {
    if !(200..300).contains(&status) {
        return Err(http_error(status, body));
    }
    if status == 204 || body.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body)
        .map_err(|err| ApiError::unexpected_shape(&format!("invalid JSON body: {err}")))
}

fn http_error(status: u16, body: &str) -> ApiError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|value| {
            value
                .get("msg")
                .or_else(|| value.get("message"))
                .and_then(Value::as_str)
        })
        .map_or_else(|| format!("HTTP {status} Error"), str::to_owned);
    ApiError {
        status,
        message,
        body: parsed,
    }
}

/// Issue one API call described by its method, endpoint template, parameters
/// and optional JSON body.
///
/// When `attach_token` is set and the session store holds a token, an
/// `Authorization: Bearer` header is added. The call gives no ordering
/// guarantee relative to other in-flight calls.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] for transport failures and non-2xx
/// responses.
pub async fn call(
    method: Method,
    endpoint: &str,
    path_params: &[(&str, &str)],
    query_params: &[(&str, &str)],
    body: Option<&Value>,
    attach_token: bool,
) -> Result<Value, ApiError> {
    let url = build_url(endpoint, path_params, query_params);
    #[cfg(feature = "csr")]
    {
        log::debug!("api call: {} {url}", method.as_str());

        let mut builder = match method {
            Method::Get => gloo_net::http::Request::get(&url),
            Method::Post => gloo_net::http::Request::post(&url),
            Method::Put => gloo_net::http::Request::put(&url),
            Method::Delete => gloo_net::http::Request::delete(&url),
        }
        .header("Content-Type", "application/json")
        .header("Accept", "application/json");

        if attach_token
            && let Some(token) = store::get_token()
        {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let request = match body {
            Some(payload) => builder
                .json(payload)
                .map_err(|err| ApiError::unexpected_shape(&err.to_string()))?,
            None => builder
                .build()
                .map_err(|err| ApiError::unexpected_shape(&err.to_string()))?,
        };

        let response = request.send().await.map_err(|err| {
            log::error!("api transport failure for {url}: {err}");
            ApiError::connectivity(&url)
        })?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        normalize_response(status, &text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (method, body, attach_token);
        Err(ApiError::connectivity(&url))
    }
}

/// Deserialize a normalized response value into a typed DTO.
///
/// # Errors
///
/// Returns [`ApiError::unexpected_shape`] when the value does not match `T`.
pub fn from_value<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|err| ApiError::unexpected_shape(&err.to_string()))
}

/// Authenticate against `auth/login` and hand the returned token to the
/// session store. No token is attached to the request itself.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`] unchanged so the caller decides
/// how to present it.
pub async fn login(username: &str, password: &str) -> Result<(), ApiError> {
    authenticate(LOGIN_ENDPOINT, username, password).await
}

/// Create an account via `auth/register`; the server logs the new user in
/// and returns a token, which lands in the session store like a login.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`] unchanged.
pub async fn register(username: &str, password: &str) -> Result<(), ApiError> {
    authenticate(REGISTER_ENDPOINT, username, password).await
}

async fn authenticate(endpoint: &str, username: &str, password: &str) -> Result<(), ApiError> {
    let credentials = serde_json::json!({"username": username, "password": password});
    let value = call(Method::Post, endpoint, &[], &[], Some(&credentials), false).await?;
    let response: TokenResponse = from_value(value)?;
    store::set_token(&response.token);
    Ok(())
}

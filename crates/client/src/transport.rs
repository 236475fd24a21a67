//! HTTP transport seam.
//!
//! Store modules talk to the API through the [`Transport`] trait so tests can
//! script failures; [`HttpTransport`] is the real `reqwest`-backed
//! implementation. The transport owns the bearer token slot — the client's
//! persisted "local key" — and attaches it to every request once installed.

use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ClientError;

/// A single API call: verb, path relative to the base URL, optional JSON
/// body. Implementations unwrap the `{success, data|error}` envelope and
/// return the bare `data` payload.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ClientError>;

    /// Install or clear the bearer token used on subsequent requests.
    fn set_token(&self, token: Option<String>);

    async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.request("GET", path, None).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        self.request("POST", path, Some(body)).await
    }

    async fn patch(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        self.request("PATCH", path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value, ClientError> {
        self.request("DELETE", path, None).await
    }
}

/// `reqwest`-backed transport against a base URL.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token: RwLock::new(None),
        }
    }

    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let method: reqwest::Method = method
            .parse()
            .unwrap_or(reqwest::Method::GET);

        let mut builder = self.client.request(method, &url);
        if let Some(token) = self.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let parsed: Value = match response.json().await {
            Ok(value) => value,
            // Non-JSON body (e.g. a proxy error page): report the status.
            Err(_) => return Err(ClientError::Status(status.as_u16())),
        };

        // Envelope-shaped responses carry their own success flag.
        if let Some(success) = parsed.get("success").and_then(Value::as_bool) {
            if !success {
                let message = parsed
                    .get("error")
                    .and_then(Value::as_str)
                    .map(String::from)
                    .unwrap_or_else(|| format!("Request failed with status {status}"));
                return Err(ClientError::Api(message));
            }
            return Ok(parsed.get("data").cloned().unwrap_or(Value::Null));
        }

        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }
        Ok(parsed)
    }

    fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Scripted transport for store tests.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// A recorded call: `(method, path, body)`.
    pub type Call = (String, String, Option<Value>);

    /// Pops pre-scripted results in order and records every call.
    #[derive(Default)]
    pub struct MockTransport {
        responses: Mutex<VecDeque<Result<Value, ClientError>>>,
        pub calls: Mutex<Vec<Call>>,
        pub token: Mutex<Option<String>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn push_ok(&self, data: Value) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(data));
        }

        pub fn push_err(&self, message: &str) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Err(ClientError::Api(message.to_string())));
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn request(
            &self,
            method: &str,
            path: &str,
            body: Option<Value>,
        ) -> Result<Value, ClientError> {
            self.calls
                .lock()
                .unwrap()
                .push((method.to_string(), path.to_string(), body));

            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| panic!("unexpected call: {method} {path}"))
        }

        fn set_token(&self, token: Option<String>) {
            *self.token.lock().unwrap() = token;
        }
    }
}

use std::time::Instant;

use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Method, StatusCode};
use indexmap::IndexMap;
use serde_json::{Value, json};
use tracing::{debug, debug_span};
use url::Url;

use crate::config::ServerConfig;
use crate::errors::Result;

/// Request body as handed to the transport: either a structured value that
/// still needs JSON encoding, or text passed through byte-for-byte.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    Text(String),
}

impl Body {
    pub fn encode(&self) -> Result<String> {
        match self {
            Body::Json(value) => Ok(serde_json::to_string(value)?),
            Body::Text(text) => Ok(text.clone()),
        }
    }
}

/// One fully assembled request: method, absolute path on the server under
/// test, optional body, and the exact headers to transmit. The header map
/// keeps insertion order, so merge results are deterministic.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Body>,
    pub headers: IndexMap<String, String>,
}

/// Decode a response body. Anything `serde_json` rejects (plain text,
/// redirect stubs, empty bodies) comes back as `{"message": <raw text>}`
/// rather than a parse error; callers always receive a structured value.
pub fn decode_body(raw: &str) -> Value {
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => json!({ "message": raw }),
    }
}

/// Seam between the endpoint facade and the wire.
pub trait Dispatch {
    fn send(&self, req: &ApiRequest) -> Result<(StatusCode, Value)>;
}

/// Blocking transport against the server under test. Each `send` opens one
/// connection, issues one request, reads the full response, and releases
/// the connection; nothing is kept alive across calls and nothing is
/// retried.
#[derive(Debug, Clone)]
pub struct Transport {
    host: String,
    port: u16,
}

impl Transport {
    pub fn new(server: &ServerConfig) -> Self {
        Self {
            host: server.host.clone(),
            port: server.port,
        }
    }

    fn header_map(headers: &IndexMap<String, String>) -> Result<HeaderMap> {
        let mut map = HeaderMap::new();
        for (key, value) in headers {
            let name = HeaderName::from_bytes(key.as_bytes())?;
            let value = HeaderValue::from_str(value)?;
            map.insert(name, value);
        }
        Ok(map)
    }
}

impl Dispatch for Transport {
    fn send(&self, req: &ApiRequest) -> Result<(StatusCode, Value)> {
        let span = debug_span!("http.request", method = %req.method, path = %req.url);
        let _g = span.enter();
        let started = Instant::now();

        let url = Url::parse(&format!("http://{}:{}{}", self.host, self.port, req.url))?;
        let headers = Self::header_map(&req.headers)?;

        // pool_max_idle_per_host(0): the pool retains no idle connections,
        // so every call runs on a fresh one. Redirects are returned to the
        // caller verbatim, never followed.
        let client = reqwest::blocking::Client::builder()
            .pool_max_idle_per_host(0)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        let mut request = client.request(req.method.clone(), url).headers(headers);
        if let Some(body) = &req.body {
            request = request.body(body.encode()?);
        }

        let response = request.send()?;
        let status = response.status();
        let content = response.text()?;

        debug!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "http response received"
        );

        Ok((status, decode_body(&content)))
    }
}

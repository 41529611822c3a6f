use http::{Method, StatusCode};
use indexmap::IndexMap;
use serde_json::Value;

use crate::auth::{AuthContext, Role};
use crate::config::{ApiSpec, HarnessConfig};
use crate::errors::Result;
use crate::http::{ApiRequest, Body, Dispatch, Transport};

mod endpoints;

/// Per-call options. Defaults match the common case: JSON content type,
/// Basic auth for the client's bound role, no extra headers.
#[derive(Debug, Clone)]
pub struct CallOpts {
    pub headers: IndexMap<String, String>,
    pub as_json: bool,
    pub with_auth: bool,
}

impl Default for CallOpts {
    fn default() -> Self {
        Self {
            headers: IndexMap::new(),
            as_json: true,
            with_auth: true,
        }
    }
}

impl CallOpts {
    /// Advertise `text/plain` and skip JSON encoding of the body.
    pub fn plain_text() -> Self {
        Self {
            as_json: false,
            ..Self::default()
        }
    }

    /// Issue the call without an Authorization header.
    pub fn anonymous() -> Self {
        Self {
            with_auth: false,
            ..Self::default()
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// Client over the control-plane API. Holds the transport, the loaded API
/// specification (for the base path), the auth context, and the role every
/// authenticated call is issued under.
pub struct ApiClient<D: Dispatch = Transport> {
    dispatch: D,
    spec: ApiSpec,
    auth: AuthContext,
    role: Role,
}

impl ApiClient {
    pub fn new(config: &HarnessConfig, spec: ApiSpec, auth: AuthContext, role: Role) -> Self {
        Self {
            dispatch: Transport::new(&config.server),
            spec,
            auth,
            role,
        }
    }
}

impl<D: Dispatch> ApiClient<D> {
    /// Build a client over an alternative transport. Lets tests record the
    /// assembled requests instead of putting them on the wire.
    pub fn with_dispatch(dispatch: D, spec: ApiSpec, auth: AuthContext, role: Role) -> Self {
        Self {
            dispatch,
            spec,
            auth,
            role,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Same client, different role.
    pub fn with_role(&self, role: Role) -> Self
    where
        D: Clone,
    {
        Self {
            dispatch: self.dispatch.clone(),
            spec: self.spec.clone(),
            auth: self.auth.clone(),
            role,
        }
    }

    /// Assemble an API request without sending it: base-path prefix, content
    /// type chosen by `as_json`, Basic auth for the bound role, and caller
    /// headers merged last so they win on collision.
    pub fn api_request(
        &self,
        method: Method,
        url: &str,
        body: Option<Body>,
        opts: &CallOpts,
    ) -> Result<ApiRequest> {
        let content_type = if opts.as_json {
            "application/json"
        } else {
            "text/plain"
        };

        let mut headers = IndexMap::new();
        headers.insert("Content-Type".to_string(), content_type.to_string());

        if opts.with_auth {
            let token = self.auth.token_for(self.role)?;
            headers.insert("Authorization".to_string(), format!("Basic {token}"));
        }

        for (key, value) in &opts.headers {
            headers.insert(key.clone(), value.clone());
        }

        Ok(ApiRequest {
            method,
            url: format!("{}{}", self.spec.base_path, url),
            body,
            headers,
        })
    }

    pub fn api_call(
        &self,
        method: Method,
        url: &str,
        body: Option<Body>,
        opts: &CallOpts,
    ) -> Result<(StatusCode, Value)> {
        self.dispatch.send(&self.api_request(method, url, body, opts)?)
    }

    /// Assemble a web-asset request: always GET, no body, no content type,
    /// path used verbatim with no base-path prefix.
    pub fn web_request(&self, url: &str, with_auth: bool) -> Result<ApiRequest> {
        let mut headers = IndexMap::new();

        if with_auth {
            let token = self.auth.token_for(self.role)?;
            headers.insert("Authorization".to_string(), format!("Basic {token}"));
        }

        Ok(ApiRequest {
            method: Method::GET,
            url: url.to_string(),
            body: None,
            headers,
        })
    }

    pub fn web_call(&self, url: &str, with_auth: bool) -> Result<(StatusCode, Value)> {
        self.dispatch.send(&self.web_request(url, with_auth)?)
    }
}

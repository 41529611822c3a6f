//! Blocking HTTP driver for a document database's REST control plane.
//!
//! One transport primitive normalizes method, URL, body encoding, auth
//! headers, and response decoding; a flat catalogue of endpoint helpers on
//! [`ApiClient`] covers database, namespace, index, item, and query
//! management plus the static-asset redirects. Test drivers own all
//! assertions; this crate only builds and dispatches requests.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod http;
pub mod log;

pub use api::{ApiClient, CallOpts};
pub use auth::{AuthContext, Role};
pub use config::{
    ApiSpec, Credential, HarnessConfig, ServerConfig, load_config_from_path, load_spec_from_path,
};
pub use errors::{DbtapError, Result};

pub use crate::http::{ApiRequest, Body, Dispatch, Transport, decode_body};
pub use ::http::{Method, StatusCode};

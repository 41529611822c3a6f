//! Resource-specific endpoint helpers. Each one is pure URL/body assembly
//! over the two request builders; inspecting the produced `ApiRequest` is
//! enough to test any of them.

use http::{Method, StatusCode};
use serde_json::{Value, json};
use url::form_urlencoded;

use super::{ApiClient, CallOpts};
use crate::errors::Result;
use crate::http::{Body, Dispatch};

type Reply = Result<(StatusCode, Value)>;

fn query_string(pairs: &[(&str, &str)]) -> String {
    let mut ser = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        ser.append_pair(key, value);
    }
    ser.finish()
}

impl<D: Dispatch> ApiClient<D> {
    pub fn check(&self) -> Reply {
        self.api_call(Method::GET, "/check", None, &CallOpts::default())
    }

    // ---------------------------- databases ----------------------------

    pub fn list_databases(&self) -> Reply {
        self.api_call(Method::GET, "/db", None, &CallOpts::default())
    }

    pub fn list_databases_sorted(&self, order: &str) -> Reply {
        let url = format!("/db?sort_order={order}");
        self.api_call(Method::GET, &url, None, &CallOpts::default())
    }

    pub fn create_database(&self, name: &str) -> Reply {
        let body = Body::Json(json!({ "name": name }));
        self.api_call(Method::POST, "/db", Some(body), &CallOpts::default())
    }

    pub fn delete_database(&self, name: &str) -> Reply {
        let url = format!("/db/{name}");
        self.api_call(Method::DELETE, &url, None, &CallOpts::default())
    }

    // ---------------------------- namespaces ----------------------------

    pub fn list_namespaces(&self, db: &str) -> Reply {
        let url = format!("/db/{db}/namespaces");
        self.api_call(Method::GET, &url, None, &CallOpts::default())
    }

    pub fn list_namespaces_sorted(&self, db: &str, order: &str) -> Reply {
        let url = format!("/db/{db}/namespaces?sort_order={order}");
        self.api_call(Method::GET, &url, None, &CallOpts::default())
    }

    pub fn get_namespace(&self, db: &str, ns: &str) -> Reply {
        let url = format!("/db/{db}/namespaces/{ns}");
        self.api_call(Method::GET, &url, None, &CallOpts::default())
    }

    /// Storage is always enabled on creation; the `indexes` key is only
    /// present when the caller supplies a non-empty definition list.
    pub fn create_namespace(&self, db: &str, ns: &str, indexes: &[Value]) -> Reply {
        let mut body = json!({
            "name": ns,
            "storage": { "enabled": true }
        });
        if !indexes.is_empty() {
            body["indexes"] = Value::Array(indexes.to_vec());
        }

        let url = format!("/db/{db}/namespaces");
        self.api_call(Method::POST, &url, Some(Body::Json(body)), &CallOpts::default())
    }

    pub fn delete_namespace(&self, db: &str, ns: &str) -> Reply {
        let url = format!("/db/{db}/namespaces/{ns}");
        self.api_call(Method::DELETE, &url, None, &CallOpts::default())
    }

    // ----------------------------- indexes ------------------------------

    pub fn list_indexes(&self, db: &str, ns: &str) -> Reply {
        let url = format!("/db/{db}/namespaces/{ns}/indexes");
        self.api_call(Method::GET, &url, None, &CallOpts::default())
    }

    pub fn create_index(&self, db: &str, ns: &str, index: Value) -> Reply {
        let url = format!("/db/{db}/namespaces/{ns}/indexes");
        self.api_call(Method::POST, &url, Some(Body::Json(index)), &CallOpts::default())
    }

    pub fn update_index(&self, db: &str, ns: &str, index: Value) -> Reply {
        let url = format!("/db/{db}/namespaces/{ns}/indexes");
        self.api_call(Method::PUT, &url, Some(Body::Json(index)), &CallOpts::default())
    }

    pub fn delete_index(&self, db: &str, ns: &str, name: &str) -> Reply {
        let url = format!("/db/{db}/namespaces/{ns}/indexes/{name}");
        self.api_call(Method::DELETE, &url, None, &CallOpts::default())
    }

    // ------------------------------ items -------------------------------

    pub fn list_items(&self, db: &str, ns: &str) -> Reply {
        let url = format!("/db/{db}/namespaces/{ns}/items");
        self.api_call(Method::GET, &url, None, &CallOpts::default())
    }

    pub fn create_item(&self, db: &str, ns: &str, item: Value) -> Reply {
        let url = format!("/db/{db}/namespaces/{ns}/items");
        self.api_call(Method::POST, &url, Some(Body::Json(item)), &CallOpts::default())
    }

    pub fn update_item(&self, db: &str, ns: &str, item: Value) -> Reply {
        let url = format!("/db/{db}/namespaces/{ns}/items");
        self.api_call(Method::PUT, &url, Some(Body::Json(item)), &CallOpts::default())
    }

    /// Deletion goes by the full item body, not by id in the path.
    pub fn delete_item(&self, db: &str, ns: &str, item: Value) -> Reply {
        let url = format!("/db/{db}/namespaces/{ns}/items");
        self.api_call(Method::DELETE, &url, Some(Body::Json(item)), &CallOpts::default())
    }

    pub fn list_items_paginated(&self, db: &str, ns: &str, limit: u32, offset: u32) -> Reply {
        let query = query_string(&[
            ("limit", limit.to_string().as_str()),
            ("offset", offset.to_string().as_str()),
        ]);
        let url = format!("/db/{db}/namespaces/{ns}/items?{query}");
        self.api_call(Method::GET, &url, None, &CallOpts::default())
    }

    pub fn list_items_sorted(&self, db: &str, ns: &str, field: &str, order: &str) -> Reply {
        let query = query_string(&[("sort_field", field), ("sort_order", order)]);
        let url = format!("/db/{db}/namespaces/{ns}/items?{query}");
        self.api_call(Method::GET, &url, None, &CallOpts::default())
    }

    // ------------------------------ queries ------------------------------

    pub fn exec_sql(&self, db: &str, query: &str) -> Reply {
        let url = format!("/db/{db}/query?{}", query_string(&[("q", query)]));
        self.api_call(Method::GET, &url, None, &CallOpts::default())
    }

    /// Raw SQL in the body, advertised as `text/plain`.
    pub fn post_sql(&self, db: &str, query: &str) -> Reply {
        let url = format!("/db/{db}/sqlquery");
        let body = Body::Text(query.to_string());
        self.api_call(Method::POST, &url, Some(body), &CallOpts::plain_text())
    }

    pub fn query_dsl(&self, db: &str, query: Value) -> Reply {
        let url = format!("/db/{db}/query");
        self.api_call(Method::POST, &url, Some(Body::Json(query)), &CallOpts::default())
    }

    // ---------------------------- web assets ----------------------------

    pub fn face_redirect(&self) -> Reply {
        self.web_call("/face", true)
    }

    pub fn face(&self) -> Reply {
        self.web_call("/face/", true)
    }

    pub fn facestaging_redirect(&self) -> Reply {
        self.web_call("/facestaging", true)
    }

    pub fn facestaging(&self) -> Reply {
        self.web_call("/facestaging/", true)
    }

    pub fn swagger_redirect(&self) -> Reply {
        self.web_call("/swagger", true)
    }

    pub fn swagger(&self) -> Reply {
        self.web_call("/swagger/", true)
    }
}

//! REST API helpers for the preview and asset endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics: a failed preview fetch
//! leaves a bookmark without metadata and a failed upload is reported as
//! absent, neither takes the page down.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::UrlPreview;

#[cfg(any(test, feature = "hydrate"))]
fn unfurl_endpoint(encoded_url: &str) -> String {
    format!("/api/unfurl?url={encoded_url}")
}

fn upload_endpoint(object_name: &str) -> String {
    format!("/api/uploads/{object_name}")
}

/// Object name for a newly uploaded asset. The fresh UUID prefix keeps
/// concurrent uploads of identically named files from colliding.
#[must_use]
pub fn asset_object_name(file_name: &str) -> String {
    format!("{}-{}", uuid::Uuid::new_v4(), sanitize_file_name(file_name))
}

/// Resolve an uploaded asset's object name back to its retrieval URL.
#[must_use]
pub fn asset_url(object_name: &str) -> String {
    upload_endpoint(object_name)
}

fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Fetch preview metadata for an external URL from `/api/unfurl`.
/// Returns `None` on any failure or on the server.
pub async fn fetch_url_preview(url: &str) -> Option<UrlPreview> {
    #[cfg(feature = "hydrate")]
    {
        let encoded = String::from(js_sys::encode_uri_component(url));
        let resp = gloo_net::http::Request::get(&unfurl_endpoint(&encoded))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UrlPreview>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        None
    }
}

/// Upload a binary asset via `PUT /api/uploads/<objectName>`.
/// Returns the URL the asset is retrievable from.
#[cfg(feature = "hydrate")]
pub async fn upload_asset(file: &web_sys::File) -> Option<String> {
    let endpoint = upload_endpoint(&asset_object_name(&file.name()));
    let request = gloo_net::http::Request::put(&endpoint)
        .body(wasm_bindgen::JsValue::from(file.clone()))
        .ok()?;
    let resp = request.send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    Some(endpoint)
}

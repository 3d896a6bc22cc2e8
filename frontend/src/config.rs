//! Runtime configuration.
//!
//! Base URLs are resolved once per session, in priority order:
//! `window.__SSG_ENV` (env.js), `window.__SSG_CONFIG`, then `./config.json`
//! fetched at startup, then compiled-in defaults.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_QURAN_API_BASE_URL: &str = "https://api.banghasan.com/quran";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub quran_api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static QURAN_API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;

    fn global_string(object_key: &str, field: &str) -> Option<String> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &object_key.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        js_sys::Reflect::get(&obj, &field.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    }

    pub fn snapshot() -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: global_string("__SSG_ENV", "API_BASE_URL")
                .or_else(|| global_string("__SSG_CONFIG", "api_base_url")),
            quran_api_base_url: global_string("__SSG_ENV", "QURAN_API_BASE_URL")
                .or_else(|| global_string("__SSG_CONFIG", "quran_api_base_url")),
        }
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let resp = reqwest::get("./config.json").await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

fn cache(slot: &OnceLock<String>, value: &str) -> String {
    let value = value.to_string();
    let _ = slot.set(value.clone());
    value
}

#[cfg(target_arch = "wasm32")]
async fn resolve(
    slot: &OnceLock<String>,
    pick: fn(&RuntimeConfig) -> Option<&String>,
    default: &str,
) -> String {
    if let Some(cached) = slot.get() {
        return cached.clone();
    }
    let from_globals = globals::snapshot();
    if let Some(url) = pick(&from_globals) {
        return cache(slot, url);
    }
    if let Some(cfg) = globals::fetch_runtime_config().await {
        if let Some(url) = pick(&cfg) {
            return cache(slot, url);
        }
    }
    cache(slot, default)
}

#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    resolve(
        &API_BASE_URL,
        |cfg| cfg.api_base_url.as_ref(),
        DEFAULT_API_BASE_URL,
    )
    .await
}

#[cfg(target_arch = "wasm32")]
pub async fn await_quran_base_url() -> String {
    resolve(
        &QURAN_API_BASE_URL,
        |cfg| cfg.quran_api_base_url.as_ref(),
        DEFAULT_QURAN_API_BASE_URL,
    )
    .await
}

// Host builds (SSR tests) never talk to a real backend through the ambient
// config; tests construct clients with an explicit base URL.
#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_quran_base_url() -> String {
    QURAN_API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_QURAN_API_BASE_URL.to_string())
}

pub async fn init() {
    let _ = await_api_base_url().await;
    let _ = await_quran_base_url().await;
}

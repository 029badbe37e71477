use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "https://task-api-eight-flax.vercel.app/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global(global: &str, keys: &[&str]) -> Option<String> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

/// `window.__DONEZO_ENV` (env.js) wins over `window.__DONEZO_CONFIG`.
#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    read_global("__DONEZO_ENV", &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global("__DONEZO_CONFIG", &["api_base_url", "API_BASE_URL"]))
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    use anyhow::Context;

    let resp = reqwest::get("./config.json")
        .await
        .context("fetching ./config.json")?;
    if !resp.status().is_success() {
        anyhow::bail!("./config.json answered {}", resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("parsing ./config.json")
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    Ok(RuntimeConfig::default())
}

fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals().as_deref().and_then(normalize_base_url) {
        return cache_base_url(&existing);
    }
    match fetch_runtime_config().await {
        Ok(cfg) => {
            if let Some(url) = cfg.api_base_url.as_deref().and_then(normalize_base_url) {
                return cache_base_url(&url);
            }
        }
        Err(err) => log::debug!("runtime config unavailable: {:#}", err),
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL: {}", base);
}

//! Location helpers. Guard redirects replace the history entry so the back
//! button cannot land on a protected page again.

/// Replaces the current history entry with `path`.
pub fn replace_location(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if location.pathname().ok().as_deref() == Some(path) {
                return;
            }
            if let Err(err) = location.replace(path) {
                log::error!("Failed to navigate to {}: {:?}", path, err);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("navigation to {} skipped outside the browser", path);
}

/// Pushes `path` as a new history entry.
pub fn assign_location(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(path) {
                log::error!("Failed to navigate to {}: {:?}", path, err);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("navigation to {} skipped outside the browser", path);
}

/// Full-page navigation via `window.location`. No-op on the host build so
/// SSR component tests can render guarded views without a browser.
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = path;
}

/// Current `window.location.pathname`, when a browser is present.
pub fn current_pathname() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.location().pathname().ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Scrolls the element with the given id into view.
pub fn scroll_into_view(element_id: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(element_id) {
            element.scroll_into_view();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = element_id;
}

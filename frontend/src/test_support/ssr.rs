//! Host-side rendering helpers. View tests render components to a string
//! inside a throwaway reactive runtime instead of a browser.

use leptos::*;
use leptos_router::{Router, RouterIntegrationContext, ServerIntegration};
use std::rc::Rc;

/// Run `f` inside a fresh leptos runtime and tear it down afterwards.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let value = f();
    runtime.dispose();
    value
}

/// Render a view to HTML without letting resources fire network requests.
/// The view is mounted under a `<Router>` backed by a fixed server
/// location so components using `<A>` and the router hooks render too.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| {
        provide_context(RouterIntegrationContext(Rc::new(ServerIntegration {
            path: "http://localhost/".to_string(),
        })));
        view! { <Router>{view()}</Router> }
            .into_view()
            .render_to_string()
            .to_string()
    });
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Drive an async test body on a single-threaded runtime so that
/// `spawn_local` calls made by view models actually run.
pub fn with_local_runtime_async<F, Fut>(f: F)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = ()>,
{
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = tokio::task::LocalSet::new();
    local.block_on(&rt, async move {
        let runtime = create_runtime();
        f().await;
        runtime.dispose();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_router::A;

    #[test]
    fn renders_router_aware_views_to_html() {
        let html = render_to_string(|| view! { <A href="/dashboard">"Beranda"</A> });
        assert!(html.contains("href=\"/dashboard\""));
        assert!(html.contains("Beranda"));
    }
}

use crate::components::layout::LoadingSpinner;
use crate::state::auth::use_auth;
use crate::utils::browser;
use leptos::*;

/// Landing route: no content of its own, just a bounce to the dashboard
/// or the login form depending on the session.
#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = if state.is_authenticated {
            "/dashboard"
        } else {
            "/login"
        };
        browser::redirect_to(target);
    });
    view! { <LoadingSpinner /> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_auth;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_spinner_while_deciding() {
        let html = render_to_string(|| {
            provide_auth(None);
            view! { <HomePage /> }
        });
        assert!(html.contains("animate-spin"));
    }
}

use crate::{
    api::UserResponse, components::layout::LoadingSpinner, state::auth::use_auth, utils::browser,
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated {
            return;
        }
        browser::redirect_to("/login");
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    let is_admin = create_memo(move |_| is_admin_user(auth.get().user.as_ref()));
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = if !state.is_authenticated {
            "/login"
        } else if !is_admin_user(state.user.as_ref()) {
            "/dashboard"
        } else {
            return;
        };
        browser::redirect_to(target);
    });
    view! {
        <Show
            when=move || {
                should_render_admin_children(is_authenticated.get(), is_loading.get(), is_admin.get())
            }
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Public pages like the login form bounce logged-in visitors straight
/// to the dashboard.
#[component]
pub fn RedirectIfAuthenticated(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    create_effect(move |_| {
        if auth.get().is_authenticated {
            browser::redirect_to("/dashboard");
        }
    });
    view! {
        <Show when=move || !is_authenticated.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

fn is_admin_user(user: Option<&UserResponse>) -> bool {
    user.map(|u| u.role == "admin").unwrap_or(false)
}

fn should_render_admin_children(is_authenticated: bool, is_loading: bool, is_admin: bool) -> bool {
    is_authenticated && is_admin && !is_loading
}

#[cfg(test)]
mod tests {
    use super::{is_admin_user, should_render_admin_children, should_render_children};
    use crate::api::UserResponse;

    #[test]
    fn guard_blocks_until_authenticated() {
        assert!(!should_render_children(false, true));
        assert!(!should_render_children(false, false));
        assert!(!should_render_children(true, true));
        assert!(should_render_children(true, false));
    }

    #[test]
    fn admin_guard_requires_admin_role() {
        let santri = UserResponse {
            id: "u1".into(),
            nama: "Santri".into(),
            telepon: "0812000002".into(),
            role: "user".into(),
            pleton: Some("Pleton 3".into()),
        };
        let admin = UserResponse {
            role: "admin".into(),
            ..santri.clone()
        };
        assert!(!is_admin_user(None));
        assert!(!is_admin_user(Some(&santri)));
        assert!(is_admin_user(Some(&admin)));
    }

    #[test]
    fn admin_guard_blocks_non_admins() {
        assert!(!should_render_admin_children(false, false, true));
        assert!(!should_render_admin_children(true, true, true));
        assert!(!should_render_admin_children(true, false, false));
        assert!(should_render_admin_children(true, false, true));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserResponse;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn admin_user() -> UserResponse {
        UserResponse {
            id: "u-admin".into(),
            nama: "Pengurus".into(),
            telepon: "0812000001".into(),
            role: "admin".into(),
            pleton: None,
        }
    }

    pub fn regular_user() -> UserResponse {
        UserResponse {
            id: "u-santri".into(),
            nama: "Santri".into(),
            telepon: "0812000002".into(),
            role: "user".into(),
            pleton: Some("Pleton 12".into()),
        }
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let is_authenticated = user.is_some();
        let (auth, set_auth) = create_signal(AuthState {
            user,
            is_authenticated,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}

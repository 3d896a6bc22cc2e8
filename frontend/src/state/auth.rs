use crate::{
    api::{ApiClient, ApiError, LoginRequest, UserResponse},
    pages::login::repository::LoginRepository,
    utils::storage as storage_utils,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

/// Rebuilds the auth state from the session store. Both token and profile
/// must be present; a half-written session counts as logged out.
pub fn session_snapshot(token: Option<String>, user_json: Option<String>) -> AuthState {
    let user = user_json.and_then(|json| serde_json::from_str::<UserResponse>(&json).ok());
    match (token, user) {
        (Some(token), Some(user)) if !token.is_empty() => AuthState {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        },
        _ => AuthState::default(),
    }
}

fn create_auth_context() -> AuthContext {
    let initial = session_snapshot(
        storage_utils::stored_token(),
        storage_utils::stored_user_json(),
    );
    create_signal(initial)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(response) => {
            set_auth_state.update(|state| {
                state.user = Some(response.user);
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub fn logout(api: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    api.logout();
    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(std::rc::Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |_: &()| {
        let api = api.clone();
        async move { logout(&api, set_auth) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
        });
    }

    #[test]
    fn session_snapshot_requires_token_and_profile() {
        let user_json = r#"{"id":"u1","nama":"Ahmad","telepon":"0812","role":"user"}"#;
        let state = session_snapshot(Some("tok".into()), Some(user_json.into()));
        assert!(state.is_authenticated);
        assert_eq!(state.user.unwrap().nama, "Ahmad");

        assert!(!session_snapshot(None, Some(user_json.into())).is_authenticated);
        assert!(!session_snapshot(Some("tok".into()), None).is_authenticated);
        assert!(!session_snapshot(Some(String::new()), Some(user_json.into())).is_authenticated);
        assert!(!session_snapshot(Some("tok".into()), Some("not-json".into())).is_authenticated);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::ssr::with_local_runtime_async;

    #[test]
    fn login_and_logout_update_auth_state() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(POST).path("/api/users/login");
                then.status(200).json_body(serde_json::json!({
                    "token": "tok-1",
                    "user": {
                        "id": "u1",
                        "nama": "Ahmad",
                        "telepon": "0812000111",
                        "role": "admin"
                    }
                }));
            });

            let (state, set_state) = create_signal(AuthState::default());
            let api = ApiClient::new_with_base_url(server.url("/api"));
            let repo = LoginRepository::new_with_client(std::rc::Rc::new(api.clone()));

            login_request(
                LoginRequest {
                    telepon: "0812000111".into(),
                    password: "rahasia".into(),
                },
                &repo,
                set_state,
            )
            .await
            .unwrap();

            let snapshot = state.get();
            assert!(snapshot.is_authenticated);
            assert_eq!(snapshot.user.as_ref().unwrap().role, "admin");
            assert!(crate::utils::storage::stored_token().is_some());

            logout(&api, set_state);
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(crate::utils::storage::stored_token().is_none());
        });
    }

    #[test]
    fn failed_login_keeps_state_logged_out() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(POST).path("/api/users/login");
                then.status(401)
                    .json_body(serde_json::json!({ "message": "telepon atau kata sandi salah" }));
            });

            let (state, set_state) = create_signal(AuthState::default());
            let api = ApiClient::new_with_base_url(server.url("/api"));
            let repo = LoginRepository::new_with_client(std::rc::Rc::new(api));

            let error = login_request(
                LoginRequest {
                    telepon: "0812000111".into(),
                    password: "salah".into(),
                },
                &repo,
                set_state,
            )
            .await
            .unwrap_err();

            assert_eq!(error.error, "telepon atau kata sandi salah");
            assert!(!state.get().is_authenticated);
        });
    }
}

use crate::api::{ApiError, LoginRequest};
use crate::pages::login::utils;
use crate::state::auth;
use crate::utils::browser;
use leptos::*;

#[derive(Clone)]
pub struct LoginViewModel {
    pub telepon: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let telepon = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    browser::redirect_to("/dashboard");
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        telepon,
        password,
        error,
        login_action,
    }
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }

        let telepon = self.telepon.get_untracked();
        let password = self.password.get_untracked();

        if let Err(message) = utils::validate_credentials(&telepon, &password) {
            self.error.set(Some(ApiError::validation(message)));
            return;
        }

        self.error.set(None);
        self.login_action.dispatch(LoginRequest { telepon, password });
    }
}

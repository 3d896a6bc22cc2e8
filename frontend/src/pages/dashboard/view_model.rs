use super::repository::DashboardRepository;
use crate::api::{ApiClient, ApiError, PresensiRecord};
use crate::state::auth::use_auth;
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardViewModel {
    pub history: RwSignal<Vec<PresensiRecord>>,
    pub error: RwSignal<Option<String>>,
    pub fetch_action: Action<String, Result<Vec<PresensiRecord>, ApiError>>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = DashboardRepository::new_with_client(Rc::new(api));

    let history = create_rw_signal(Vec::new());
    let error = create_rw_signal(None::<String>);

    let fetch_action = create_action(move |user_id: &String| {
        let repository = repository.clone();
        let user_id = user_id.clone();
        async move {
            let result = repository.fetch_history(&user_id).await;
            match &result {
                Ok(items) => {
                    history.set(items.clone());
                    error.set(None);
                }
                Err(err) => error.set(Some(err.error.clone())),
            }
            result
        }
    });

    DashboardViewModel {
        history,
        error,
        fetch_action,
    }
}

impl DashboardViewModel {
    /// Fetches the signed-in member's own history. A missing profile
    /// (guard race on first paint) is a no-op rather than an error.
    pub fn load(&self) {
        let (auth, _) = use_auth();
        if let Some(user) = auth.get_untracked().user {
            self.fetch_action.dispatch(user.id);
        }
    }
}

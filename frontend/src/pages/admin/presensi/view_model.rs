use super::repository::PresensiAdminRepository;
use super::utils::{apply_filters, FilterState, STATUS_ALL};
use crate::api::{ApiClient, ApiError, PresensiRecord};
use leptos::*;
use std::rc::Rc;

/// Detail panel state for one selected member. Independent of the list
/// filters: it stays open while filters change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
    pub user_id: Option<String>,
    pub nama: String,
    pub records: Vec<PresensiRecord>,
}

#[derive(Clone)]
pub struct PresensiAdminViewModel {
    pub records: RwSignal<Vec<PresensiRecord>>,
    pub search: RwSignal<String>,
    pub date: RwSignal<String>,
    pub status: RwSignal<String>,
    pub filtered: Memo<Vec<PresensiRecord>>,
    pub detail: RwSignal<DetailState>,
    pub error: RwSignal<Option<String>>,
    pub fetch_action: Action<(), Result<Vec<PresensiRecord>, ApiError>>,
    pub detail_action: Action<(String, String), Result<Vec<PresensiRecord>, ApiError>>,
}

pub fn use_presensi_admin_view_model() -> PresensiAdminViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = PresensiAdminRepository::new_with_client(Rc::new(api));

    let records = create_rw_signal(Vec::new());
    let search = create_rw_signal(String::new());
    let date = create_rw_signal(String::new());
    let status = create_rw_signal(STATUS_ALL.to_string());
    let detail = create_rw_signal(DetailState::default());
    let error = create_rw_signal(None::<String>);

    let filtered = create_memo(move |_| {
        let filters = FilterState {
            search: search.get(),
            date: date.get(),
            status: status.get(),
        };
        apply_filters(&records.get(), &filters)
    });

    let repo = repository.clone();
    let fetch_action = create_action(move |_: &()| {
        let repo = repo.clone();
        async move {
            let result = repo.fetch_all().await;
            match &result {
                Ok(items) => {
                    records.set(items.clone());
                    error.set(None);
                }
                Err(err) => error.set(Some(err.error.clone())),
            }
            result
        }
    });

    let repo = repository;
    let detail_action = create_action(move |(user_id, nama): &(String, String)| {
        let repo = repo.clone();
        let user_id = user_id.clone();
        let nama = nama.clone();
        async move {
            let result = repo.fetch_by_user(&user_id).await;
            match &result {
                Ok(items) => {
                    detail.set(DetailState {
                        user_id: Some(user_id),
                        nama,
                        records: items.clone(),
                    });
                }
                Err(err) => error.set(Some(err.error.clone())),
            }
            result
        }
    });

    PresensiAdminViewModel {
        records,
        search,
        date,
        status,
        filtered,
        detail,
        error,
        fetch_action,
        detail_action,
    }
}

impl PresensiAdminViewModel {
    pub fn load(&self) {
        self.fetch_action.dispatch(());
    }

    pub fn select(&self, record: &PresensiRecord) {
        if self.detail_action.pending().get_untracked() {
            return;
        }
        self.detail_action
            .dispatch((record.user_id.clone(), record.nama.clone()));
    }

    pub fn close_detail(&self) {
        self.detail.set(DetailState::default());
    }

    pub fn reset_filters(&self) {
        self.search.set(String::new());
        self.date.set(String::new());
        self.status.set(STATUS_ALL.to_string());
    }
}

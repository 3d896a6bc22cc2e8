use super::repository::KegiatanRepository;
use super::utils;
use crate::api::{
    ApiClient, ApiError, CreateKegiatanRequest, Kegiatan, MessageResponse, UpdateKegiatanRequest,
};
use crate::utils::browser;
use leptos::*;
use std::rc::Rc;

pub const FORM_ELEMENT_ID: &str = "kegiatan-form";

/// One form serves both modes; edit mode is keyed by the presence of
/// an id.
#[derive(Clone, Copy)]
pub struct KegiatanFormState {
    pub id: RwSignal<Option<i64>>,
    pub judul: RwSignal<String>,
    pub deskripsi: RwSignal<String>,
    pub tanggal: RwSignal<String>,
    pub status: RwSignal<String>,
}

impl KegiatanFormState {
    fn new() -> Self {
        Self {
            id: create_rw_signal(None),
            judul: create_rw_signal(String::new()),
            deskripsi: create_rw_signal(String::new()),
            tanggal: create_rw_signal(String::new()),
            status: create_rw_signal("Open".to_string()),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.get().is_some()
    }

    pub fn load(&self, kegiatan: &Kegiatan) {
        self.id.set(Some(kegiatan.id));
        self.judul.set(kegiatan.judul.clone());
        self.deskripsi.set(kegiatan.deskripsi.clone());
        self.tanggal.set(kegiatan.tanggal.format("%Y-%m-%d").to_string());
        self.status.set(kegiatan.status.clone());
    }

    pub fn clear(&self) {
        self.id.set(None);
        self.judul.set(String::new());
        self.deskripsi.set(String::new());
        self.tanggal.set(String::new());
        self.status.set("Open".to_string());
    }
}

#[derive(Clone)]
pub enum SaveRequest {
    Create(CreateKegiatanRequest),
    Update(UpdateKegiatanRequest),
}

#[derive(Clone)]
pub struct KegiatanViewModel {
    pub list: RwSignal<Vec<Kegiatan>>,
    pub form: KegiatanFormState,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub fetch_action: Action<(), Result<Vec<Kegiatan>, ApiError>>,
    pub save_action: Action<SaveRequest, Result<MessageResponse, ApiError>>,
}

pub fn use_kegiatan_view_model() -> KegiatanViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = KegiatanRepository::new_with_client(Rc::new(api));

    let list = create_rw_signal(Vec::new());
    let form = KegiatanFormState::new();
    let error = create_rw_signal(None::<String>);
    let success = create_rw_signal(None::<String>);

    let repo = repository.clone();
    let fetch_action = create_action(move |_: &()| {
        let repo = repo.clone();
        async move {
            let result = repo.fetch_all().await;
            match &result {
                Ok(items) => {
                    list.set(items.clone());
                    error.set(None);
                }
                Err(err) => error.set(Some(err.error.clone())),
            }
            result
        }
    });

    // A saved form resets to add mode and triggers a full re-fetch
    // rather than patching the list locally.
    let repo = repository;
    let save_action = create_action(move |request: &SaveRequest| {
        let repo = repo.clone();
        let request = request.clone();
        async move {
            let result = match request {
                SaveRequest::Create(req) => repo.create(req).await,
                SaveRequest::Update(req) => repo.update(req).await,
            };
            match &result {
                Ok(response) => {
                    success.set(Some(response.message.clone()));
                    error.set(None);
                    form.clear();
                    fetch_action.dispatch(());
                }
                Err(err) => {
                    error.set(Some(err.error.clone()));
                    success.set(None);
                }
            }
            result
        }
    });

    KegiatanViewModel {
        list,
        form,
        error,
        success,
        fetch_action,
        save_action,
    }
}

impl KegiatanViewModel {
    /// Initial fetch, dispatched by the panel once on mount.
    pub fn load(&self) {
        self.fetch_action.dispatch(());
    }

    pub fn start_edit(&self, kegiatan: &Kegiatan) {
        self.form.load(kegiatan);
        self.success.set(None);
        browser::scroll_into_view(FORM_ELEMENT_ID);
    }

    pub fn cancel_edit(&self) {
        self.form.clear();
        self.error.set(None);
    }

    pub fn save(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let judul = self.form.judul.get_untracked();
        let deskripsi = self.form.deskripsi.get_untracked();
        let status = self.form.status.get_untracked();
        let tanggal = match utils::validate_form(
            &judul,
            &deskripsi,
            &self.form.tanggal.get_untracked(),
            &status,
        ) {
            Ok(date) => date,
            Err(message) => {
                self.error.set(Some(message));
                return;
            }
        };

        self.error.set(None);
        let request = match self.form.id.get_untracked() {
            Some(id) => SaveRequest::Update(UpdateKegiatanRequest {
                id,
                judul,
                deskripsi,
                tanggal,
                status,
            }),
            None => SaveRequest::Create(CreateKegiatanRequest {
                judul,
                deskripsi,
                tanggal,
                status,
            }),
        };
        self.save_action.dispatch(request);
    }
}

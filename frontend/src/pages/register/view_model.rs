use super::repository::RegisterRepository;
use super::utils::{self, RegisterStep};
use crate::api::{ApiClient, ApiError, MessageResponse, RegisterRequest};
use crate::components::postal_code::RegionFields;
use crate::utils::browser;
use leptos::*;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
const REDIRECT_DELAY_MS: u32 = 2_000;

#[derive(Clone)]
pub struct RegisterViewModel {
    pub step: RwSignal<RegisterStep>,
    pub nama: RwSignal<String>,
    pub telepon: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub alamat: RwSignal<String>,
    pub kode_pos: RwSignal<String>,
    pub region: RegionFields,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub register_action: Action<RegisterRequest, Result<MessageResponse, ApiError>>,
}

pub fn use_register_view_model() -> RegisterViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = RegisterRepository::new_with_client(Rc::new(api));

    let step = create_rw_signal(RegisterStep::Account);
    let nama = create_rw_signal(String::new());
    let telepon = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let alamat = create_rw_signal(String::new());
    let kode_pos = create_rw_signal(String::new());
    let region = RegionFields::new();
    let error = create_rw_signal(None::<String>);
    let success = create_rw_signal(None::<String>);

    let register_action = create_action(move |request: &RegisterRequest| {
        let repository = repository.clone();
        let request = request.clone();
        async move {
            let result = repository.register(request).await;
            match &result {
                Ok(response) => {
                    error.set(None);
                    success.set(Some(response.message.clone()));
                    // Grace period so the confirmation is readable
                    // before leaving the page.
                    #[cfg(target_arch = "wasm32")]
                    gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    browser::redirect_to("/login");
                }
                Err(err) => {
                    success.set(None);
                    error.set(Some(err.error.clone()));
                }
            }
            result
        }
    });

    RegisterViewModel {
        step,
        nama,
        telepon,
        password,
        confirm_password,
        alamat,
        kode_pos,
        region,
        error,
        success,
        register_action,
    }
}

impl RegisterViewModel {
    pub fn next_from_account(&self) {
        let check = utils::validate_account(
            &self.nama.get_untracked(),
            &self.telepon.get_untracked(),
            &self.password.get_untracked(),
            &self.confirm_password.get_untracked(),
        );
        if let Err(message) = check {
            self.error.set(Some(message));
            return;
        }
        self.error.set(None);
        self.step.set(RegisterStep::Address);
    }

    pub fn next_from_address(&self) {
        let check = utils::validate_address(
            &self.alamat.get_untracked(),
            &self.kode_pos.get_untracked(),
            &self.region.kelurahan.get_untracked(),
            &self.region.kecamatan.get_untracked(),
            &self.region.kota.get_untracked(),
            &self.region.provinsi.get_untracked(),
        );
        if let Err(message) = check {
            self.error.set(Some(message));
            return;
        }
        self.error.set(None);
        self.step.set(RegisterStep::Confirm);
    }

    pub fn back(&self) {
        self.error.set(None);
        self.step.set(self.step.get_untracked().back());
    }

    pub fn build_request(&self) -> RegisterRequest {
        RegisterRequest {
            nama: self.nama.get_untracked().trim().to_string(),
            telepon: self.telepon.get_untracked().trim().to_string(),
            password: self.password.get_untracked(),
            alamat: self.alamat.get_untracked().trim().to_string(),
            kode_pos: self.kode_pos.get_untracked(),
            kelurahan: self.region.kelurahan.get_untracked(),
            kecamatan: self.region.kecamatan.get_untracked(),
            kota: self.region.kota.get_untracked(),
            provinsi: self.region.provinsi.get_untracked(),
        }
    }

    pub fn submit(&self) {
        if self.register_action.pending().get_untracked() {
            return;
        }
        self.register_action.dispatch(self.build_request());
    }
}

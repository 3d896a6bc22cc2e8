use super::repository::ForgotPasswordRepository;
use super::utils::{self, ResetStep, OTP_LEN};
use crate::api::{ApiClient, ApiError, MessageResponse, ResetPasswordRequest};
use crate::utils::browser;
use leptos::*;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
const REDIRECT_DELAY_MS: u32 = 2_000;

#[derive(Clone)]
pub struct ForgotPasswordViewModel {
    pub step: RwSignal<ResetStep>,
    pub telepon: RwSignal<String>,
    pub otp_cells: Rc<[RwSignal<String>; OTP_LEN]>,
    pub new_password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub send_otp_action: Action<String, Result<MessageResponse, ApiError>>,
    pub verify_action: Action<(String, String), Result<MessageResponse, ApiError>>,
    pub reset_action: Action<ResetPasswordRequest, Result<MessageResponse, ApiError>>,
}

pub fn use_forgot_password_view_model() -> ForgotPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ForgotPasswordRepository::new_with_client(Rc::new(api));

    let step = create_rw_signal(ResetStep::PhoneEntry);
    let telepon = create_rw_signal(String::new());
    let otp_cells: Rc<[RwSignal<String>; OTP_LEN]> =
        Rc::new(std::array::from_fn(|_| create_rw_signal(String::new())));
    let new_password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let success = create_rw_signal(None::<String>);

    let repo = repository.clone();
    let send_otp_action = create_action(move |telepon: &String| {
        let repo = repo.clone();
        let telepon = telepon.clone();
        async move {
            let result = repo.send_otp(telepon).await;
            match &result {
                Ok(_) => {
                    error.set(None);
                    step.set(ResetStep::OtpEntry);
                }
                Err(err) => error.set(Some(err.error.clone())),
            }
            result
        }
    });

    let repo = repository.clone();
    let verify_action = create_action(move |(telepon, otp): &(String, String)| {
        let repo = repo.clone();
        let telepon = telepon.clone();
        let otp = otp.clone();
        async move {
            let result = repo.verify_otp(telepon, otp).await;
            match &result {
                Ok(_) => {
                    error.set(None);
                    step.set(ResetStep::NewPassword);
                }
                Err(err) => error.set(Some(err.error.clone())),
            }
            result
        }
    });

    let repo = repository;
    let reset_action = create_action(move |request: &ResetPasswordRequest| {
        let repo = repo.clone();
        let request = request.clone();
        async move {
            let result = repo.reset_password(request).await;
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

    ForgotPasswordViewModel {
        step,
        telepon,
        otp_cells,
        new_password,
        confirm_password,
        error,
        success,
        send_otp_action,
        verify_action,
        reset_action,
    }
}

impl ForgotPasswordViewModel {
    pub fn submit_phone(&self) {
        if self.send_otp_action.pending().get_untracked() {
            return;
        }
        let telepon = self.telepon.get_untracked();
        if let Err(message) = utils::validate_phone(&telepon) {
            self.error.set(Some(message));
            return;
        }
        self.error.set(None);
        self.send_otp_action.dispatch(telepon.trim().to_string());
    }

    pub fn otp_values(&self) -> Vec<String> {
        self.otp_cells
            .iter()
            .map(|cell| cell.get_untracked())
            .collect()
    }

    pub fn submit_otp(&self) {
        if self.verify_action.pending().get_untracked() {
            return;
        }
        let cells = self.otp_values();
        if !utils::otp_complete(&cells) {
            self.error.set(Some("Kode OTP belum lengkap".into()));
            return;
        }
        self.error.set(None);
        self.verify_action
            .dispatch((self.telepon.get_untracked(), utils::join_otp(&cells)));
    }

    /// Going back re-requests the phone step and wipes whatever OTP
    /// digits were entered.
    pub fn back_to_phone(&self) {
        for cell in self.otp_cells.iter() {
            cell.set(String::new());
        }
        self.error.set(None);
        self.step.set(ResetStep::PhoneEntry);
    }

    pub fn submit_new_password(&self) {
        if self.reset_action.pending().get_untracked() {
            return;
        }
        let password = self.new_password.get_untracked();
        let confirmation = self.confirm_password.get_untracked();
        if let Err(message) = utils::validate_new_password(&password, &confirmation) {
            self.error.set(Some(message));
            return;
        }
        self.error.set(None);
        self.reset_action.dispatch(ResetPasswordRequest {
            telepon: self.telepon.get_untracked(),
            otp: utils::join_otp(&self.otp_values()),
            password_baru: password,
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::ssr::{with_local_runtime_async, with_runtime};

    #[test]
    fn starts_at_phone_entry() {
        with_runtime(|| {
            let vm = use_forgot_password_view_model();
            assert_eq!(vm.step.get(), ResetStep::PhoneEntry);
            assert!(vm.error.get().is_none());
        });
    }

    #[test]
    fn empty_phone_blocks_advance_without_network() {
        with_runtime(|| {
            let vm = use_forgot_password_view_model();
            vm.submit_phone();
            assert_eq!(vm.step.get(), ResetStep::PhoneEntry);
            assert_eq!(vm.error.get(), Some("Nomor telepon wajib diisi".into()));
            assert!(vm.send_otp_action.value().get().is_none());
        });
    }

    #[test]
    fn incomplete_otp_blocks_advance_without_network() {
        with_runtime(|| {
            let vm = use_forgot_password_view_model();
            vm.otp_cells[0].set("1".into());
            vm.otp_cells[1].set("2".into());
            vm.submit_otp();
            assert_eq!(vm.error.get(), Some("Kode OTP belum lengkap".into()));
            assert!(vm.verify_action.value().get().is_none());
        });
    }

    #[test]
    fn short_password_blocks_reset_without_network() {
        with_runtime(|| {
            let vm = use_forgot_password_view_model();
            vm.new_password.set("1234567".into());
            vm.confirm_password.set("1234567".into());
            vm.submit_new_password();
            assert_eq!(vm.error.get(), Some("Kata sandi minimal 8 karakter".into()));
            assert!(vm.reset_action.value().get().is_none());
        });
    }

    #[test]
    fn mismatched_confirmation_blocks_reset_without_network() {
        with_runtime(|| {
            let vm = use_forgot_password_view_model();
            vm.new_password.set("rahasia-baru".into());
            vm.confirm_password.set("rahasia-lain".into());
            vm.submit_new_password();
            assert_eq!(
                vm.error.get(),
                Some("Konfirmasi kata sandi tidak cocok".into())
            );
            assert!(vm.reset_action.value().get().is_none());
        });
    }

    #[test]
    fn back_from_otp_resets_cells() {
        with_runtime(|| {
            let vm = use_forgot_password_view_model();
            vm.step.set(ResetStep::OtpEntry);
            for (i, cell) in vm.otp_cells.iter().enumerate() {
                cell.set(i.to_string());
            }
            vm.back_to_phone();
            assert_eq!(vm.step.get(), ResetStep::PhoneEntry);
            assert!(vm.otp_cells.iter().all(|cell| cell.get().is_empty()));
        });
    }

    #[test]
    fn full_wizard_walks_through_all_steps() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(POST).path("/api/users/send-otp");
                then.status(200)
                    .json_body(serde_json::json!({ "message": "OTP terkirim" }));
            });
            server.mock(|when, then| {
                when.method(POST).path("/api/users/verify-otp");
                then.status(200)
                    .json_body(serde_json::json!({ "message": "OTP valid" }));
            });
            server.mock(|when, then| {
                when.method(POST).path("/api/users/reset-password");
                then.status(200)
                    .json_body(serde_json::json!({ "message": "Kata sandi diperbarui" }));
            });

            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            let vm = use_forgot_password_view_model();

            vm.telepon.set("0812345678".into());
            vm.submit_phone();
            tokio::task::yield_now().await;
            assert_eq!(vm.step.get_untracked(), ResetStep::OtpEntry);

            for (i, cell) in vm.otp_cells.iter().enumerate() {
                cell.set(((i + 1) % 10).to_string());
            }
            vm.submit_otp();
            tokio::task::yield_now().await;
            assert_eq!(vm.step.get_untracked(), ResetStep::NewPassword);

            vm.new_password.set("rahasia-baru".into());
            vm.confirm_password.set("rahasia-baru".into());
            vm.submit_new_password();
            tokio::task::yield_now().await;
            assert_eq!(
                vm.success.get_untracked(),
                Some("Kata sandi diperbarui".into())
            );
            assert_eq!(server.hits(POST, "/api/users/reset-password"), 1);
        });
    }

    #[test]
    fn failed_verify_keeps_otp_step() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(POST).path("/api/users/send-otp");
                then.status(200)
                    .json_body(serde_json::json!({ "message": "OTP terkirim" }));
            });
            server.mock(|when, then| {
                when.method(POST).path("/api/users/verify-otp");
                then.status(400)
                    .json_body(serde_json::json!({ "message": "Kode OTP salah" }));
            });

            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            let vm = use_forgot_password_view_model();

            vm.telepon.set("0812345678".into());
            vm.submit_phone();
            tokio::task::yield_now().await;

            for cell in vm.otp_cells.iter() {
                cell.set("1".into());
            }
            vm.submit_otp();
            tokio::task::yield_now().await;

            assert_eq!(vm.step.get_untracked(), ResetStep::OtpEntry);
            assert_eq!(vm.error.get_untracked(), Some("Kode OTP salah".into()));
        });
    }
}

use super::utils::{otp_complete, sanitize_otp_cell, ResetStep, OTP_LEN};
use super::view_model::{use_forgot_password_view_model, ForgotPasswordViewModel};
use crate::components::forms::{PasswordField, TextField};
use crate::components::progress::StepProgress;
use leptos::*;
use leptos_router::*;

#[component]
pub fn ForgotPasswordPanel() -> impl IntoView {
    let vm = use_forgot_password_view_model();
    let step = vm.step;
    let error = vm.error;
    let success = vm.success;
    let step_number = Signal::derive(move || step.get().number());

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Atur Ulang Kata Sandi"
                    </h2>
                </div>

                <StepProgress labels=vec!["Telepon", "OTP", "Sandi Baru"] current=step_number />

                {move || {
                    error
                        .get()
                        .map(|msg| {
                            view! {
                                <div class="rounded-md bg-status-error-bg p-4 text-status-error-text">
                                    <p class="text-sm">{msg}</p>
                                </div>
                            }
                        })
                }}

                {
                    let vm = vm.clone();
                    move || {
                        if let Some(msg) = success.get() {
                            view! { <SuccessStep message=msg /> }.into_view()
                        } else {
                            match step.get() {
                                ResetStep::PhoneEntry => {
                                    view! { <PhoneStep vm=vm.clone() /> }.into_view()
                                }
                                ResetStep::OtpEntry => view! { <OtpStep vm=vm.clone() /> }.into_view(),
                                ResetStep::NewPassword => {
                                    view! { <PasswordStep vm=vm.clone() /> }.into_view()
                                }
                            }
                        }
                    }
                }

                <div class="text-sm text-center">
                    <A href="/login" class="font-medium text-link hover:text-link-hover">
                        "Kembali ke halaman masuk"
                    </A>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PhoneStep(vm: ForgotPasswordViewModel) -> impl IntoView {
    let telepon = vm.telepon;
    let pending = vm.send_otp_action.pending();
    let submit_vm = vm.clone();
    view! {
        <form
            class="space-y-6"
            on:submit=move |ev| {
                ev.prevent_default();
                submit_vm.submit_phone();
            }
        >
            <TextField
                label="Nomor Telepon"
                value=telepon
                placeholder="08123456789"
                input_type="tel".to_string()
            />
            <button
                type="submit"
                disabled=move || pending.get()
                class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
            >
                {move || if pending.get() { "Mengirim OTP..." } else { "Kirim Kode OTP" }}
            </button>
        </form>
    }
}

#[component]
fn OtpStep(vm: ForgotPasswordViewModel) -> impl IntoView {
    let cells = vm.otp_cells.clone();
    let pending = vm.verify_action.pending();
    let complete = {
        let cells = cells.clone();
        create_memo(move |_| otp_complete(&cells.iter().map(|cell| cell.get()).collect::<Vec<_>>()))
    };
    let refs: Vec<NodeRef<html::Input>> = (0..OTP_LEN).map(|_| create_node_ref()).collect();

    let inputs = cells
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            let cell = *cell;
            let node_ref = refs[index];
            let next_ref = refs.get(index + 1).copied();
            view! {
                <input
                    type="text"
                    inputmode="numeric"
                    maxlength="1"
                    node_ref=node_ref
                    class="w-10 h-12 text-center text-lg font-bold rounded-md border border-form-control-border bg-form-control-bg text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus"
                    prop:value=move || cell.get()
                    on:input=move |ev| {
                        let digit = sanitize_otp_cell(&event_target_value(&ev));
                        let filled = !digit.is_empty();
                        cell.set(digit);
                        if filled {
                            if let Some(next) = next_ref.and_then(|r| r.get()) {
                                let _ = next.focus();
                            }
                        }
                    }
                />
            }
        })
        .collect_view();

    let submit_vm = vm.clone();
    let back_vm = vm.clone();
    view! {
        <form
            class="space-y-6"
            on:submit=move |ev| {
                ev.prevent_default();
                submit_vm.submit_otp();
            }
        >
            <p class="text-sm text-fg-muted text-center">
                "Masukkan 6 digit kode yang dikirim ke nomor Anda"
            </p>
            <div class="flex justify-center gap-2">{inputs}</div>
            <button
                type="submit"
                disabled=move || pending.get() || !complete.get()
                class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
            >
                {move || if pending.get() { "Memeriksa..." } else { "Verifikasi" }}
            </button>
            <button
                type="button"
                class="w-full text-sm text-fg-muted hover:text-fg"
                on:click=move |_| back_vm.back_to_phone()
            >
                "Ganti nomor telepon"
            </button>
        </form>
    }
}

#[component]
fn PasswordStep(vm: ForgotPasswordViewModel) -> impl IntoView {
    let new_password = vm.new_password;
    let confirm_password = vm.confirm_password;
    let pending = vm.reset_action.pending();
    let submit_vm = vm.clone();
    view! {
        <form
            class="space-y-6"
            on:submit=move |ev| {
                ev.prevent_default();
                submit_vm.submit_new_password();
            }
        >
            <PasswordField label="Kata Sandi Baru" value=new_password />
            <PasswordField label="Konfirmasi Kata Sandi" value=confirm_password />
            <button
                type="submit"
                disabled=move || pending.get()
                class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
            >
                {move || if pending.get() { "Menyimpan..." } else { "Simpan Kata Sandi" }}
            </button>
        </form>
    }
}

#[component]
fn SuccessStep(message: String) -> impl IntoView {
    view! {
        <div class="rounded-md bg-status-success-bg p-4 text-status-success-text text-center space-y-2">
            <i class="fas fa-check-circle text-2xl"></i>
            <p class="text-sm font-medium">{message}</p>
            <p class="text-xs">"Anda akan diarahkan ke halaman masuk..."</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn first_step_shows_phone_form() {
        let html = render_to_string(|| view! { <ForgotPasswordPanel /> });
        assert!(html.contains("Nomor Telepon"));
        assert!(html.contains("Kirim Kode OTP"));
        assert!(html.contains("Telepon"));
    }

    fn has_disabled_attr(html: &str) -> bool {
        // Boolean attributes serialize as the bare name; the class list
        // only ever holds "disabled:" variants.
        html.contains(" disabled ") || html.contains(" disabled>") || html.contains(" disabled=")
    }

    #[test]
    fn otp_submit_stays_disabled_until_all_cells_are_filled() {
        let empty = render_to_string(|| {
            let vm = use_forgot_password_view_model();
            view! { <OtpStep vm=vm /> }
        });
        assert!(has_disabled_attr(&empty));

        let filled = render_to_string(|| {
            let vm = use_forgot_password_view_model();
            for (i, cell) in vm.otp_cells.iter().enumerate() {
                cell.set(((i + 1) % 10).to_string());
            }
            view! { <OtpStep vm=vm /> }
        });
        assert!(!has_disabled_attr(&filled));
    }
}

use super::utils::RegisterStep;
use super::view_model::{use_register_view_model, RegisterViewModel};
use crate::components::forms::{PasswordField, TextAreaField, TextField};
use crate::components::postal_code::PostalCodeLookup;
use crate::components::progress::StepProgress;
use leptos::*;
use leptos_router::*;

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let step = vm.step;
    let error = vm.error;
    let success = vm.success;
    let step_number = Signal::derive(move || step.get().number());

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Daftar Santri Siap Guna"
                    </h2>
                </div>

                <StepProgress labels=vec!["Akun", "Alamat", "Konfirmasi"] current=step_number />

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
                            view! { <RegisteredStep message=msg /> }.into_view()
                        } else {
                            match step.get() {
                                RegisterStep::Account => {
                                    view! { <AccountStep vm=vm.clone() /> }.into_view()
                                }
                                RegisterStep::Address => {
                                    view! { <AddressStep vm=vm.clone() /> }.into_view()
                                }
                                RegisterStep::Confirm => {
                                    view! { <ConfirmStep vm=vm.clone() /> }.into_view()
                                }
                            }
                        }
                    }
                }

                <div class="text-sm text-center">
                    <span class="text-fg-muted">"Sudah punya akun? "</span>
                    <A href="/login" class="font-medium text-link hover:text-link-hover">
                        "Masuk"
                    </A>
                </div>
            </div>
        </div>
    }
}

#[component]
fn AccountStep(vm: RegisterViewModel) -> impl IntoView {
    let nama = vm.nama;
    let telepon = vm.telepon;
    let password = vm.password;
    let confirm_password = vm.confirm_password;
    let next_vm = vm.clone();
    view! {
        <form
            class="space-y-4"
            on:submit=move |ev| {
                ev.prevent_default();
                next_vm.next_from_account();
            }
        >
            <TextField label="Nama Lengkap" value=nama placeholder="Nama sesuai KTP" />
            <TextField
                label="Nomor Telepon"
                value=telepon
                placeholder="08123456789"
                input_type="tel".to_string()
            />
            <PasswordField label="Kata Sandi" value=password />
            <PasswordField label="Konfirmasi Kata Sandi" value=confirm_password />
            <button
                type="submit"
                class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
            >
                "Lanjut"
            </button>
        </form>
    }
}

#[component]
fn AddressStep(vm: RegisterViewModel) -> impl IntoView {
    let alamat = vm.alamat;
    let kode_pos = vm.kode_pos;
    let region = vm.region;
    let next_vm = vm.clone();
    let back_vm = vm.clone();
    view! {
        <form
            class="space-y-4"
            on:submit=move |ev| {
                ev.prevent_default();
                next_vm.next_from_address();
            }
        >
            <TextAreaField
                label="Alamat"
                value=alamat
                placeholder="Nama jalan, nomor rumah, RT/RW"
                rows=3
            />
            <PostalCodeLookup kode_pos=kode_pos fields=region />
            <div class="flex gap-3">
                <button
                    type="button"
                    class="flex-1 py-2 px-4 border border-border text-sm font-medium rounded-md text-fg bg-surface-elevated hover:bg-surface-muted"
                    on:click=move |_| back_vm.back()
                >
                    "Kembali"
                </button>
                <button
                    type="submit"
                    class="flex-1 flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
                >
                    "Lanjut"
                </button>
            </div>
        </form>
    }
}

#[component]
fn ConfirmStep(vm: RegisterViewModel) -> impl IntoView {
    let pending = vm.register_action.pending();
    let submit_vm = vm.clone();
    let back_vm = vm.clone();
    let summary = move || {
        let request = vm.build_request();
        vec![
            ("Nama Lengkap", request.nama),
            ("Nomor Telepon", request.telepon),
            ("Alamat", request.alamat),
            ("Kode Pos", request.kode_pos),
            ("Kelurahan", request.kelurahan),
            ("Kecamatan", request.kecamatan),
            ("Kota/Kabupaten", request.kota),
            ("Provinsi", request.provinsi),
        ]
    };
    view! {
        <div class="space-y-6">
            <dl class="rounded-lg border border-border bg-surface-elevated divide-y divide-border">
                {summary()
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="flex justify-between gap-4 px-4 py-2 text-sm">
                                <dt class="text-fg-muted">{label}</dt>
                                <dd class="text-fg text-right font-medium">{value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
            <div class="flex gap-3">
                <button
                    type="button"
                    class="flex-1 py-2 px-4 border border-border text-sm font-medium rounded-md text-fg bg-surface-elevated hover:bg-surface-muted"
                    on:click=move |_| back_vm.back()
                >
                    "Kembali"
                </button>
                <button
                    type="button"
                    disabled=move || pending.get()
                    class="flex-1 flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    on:click=move |_| submit_vm.submit()
                >
                    {move || if pending.get() { "Mendaftar..." } else { "Daftar" }}
                </button>
            </div>
        </div>
    }
}

#[component]
fn RegisteredStep(message: String) -> impl IntoView {
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
    fn first_step_shows_account_form() {
        let html = render_to_string(|| view! { <RegisterPanel /> });
        assert!(html.contains("Daftar Santri Siap Guna"));
        assert!(html.contains("Nama Lengkap"));
        assert!(html.contains("Konfirmasi Kata Sandi"));
        assert!(html.contains("Lanjut"));
    }
}

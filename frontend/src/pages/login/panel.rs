use super::view_model::use_login_view_model;
use crate::components::error::InlineErrorMessage;
use crate::components::forms::{PasswordField, TextField};
use leptos::*;
use leptos_router::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let telepon = vm.telepon;
    let password = vm.password;
    let error = vm.error;
    let pending = vm.login_action.pending();

    let submit_vm = vm.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit_vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Masuk Santri Siap Guna"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Gunakan nomor telepon yang terdaftar"
                    </p>
                </div>

                <form class="mt-8 space-y-6" on:submit=on_submit>
                    <TextField
                        label="Nomor Telepon"
                        value=telepon
                        placeholder="08123456789"
                        input_type="tel".to_string()
                    />
                    <PasswordField label="Kata Sandi" value=password />

                    <InlineErrorMessage error=Signal::derive(move || error.get()) />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                    >
                        {move || if pending.get() { "Memproses..." } else { "Masuk" }}
                    </button>

                    <div class="flex items-center justify-between text-sm">
                        <A href="/register" class="font-medium text-link hover:text-link-hover">
                            "Daftar akun baru"
                        </A>
                        <A href="/forgot-password" class="font-medium text-link hover:text-link-hover">
                            "Lupa kata sandi?"
                        </A>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_credential_fields_and_links() {
        let html = render_to_string(|| view! { <LoginPanel /> });
        assert!(html.contains("Nomor Telepon"));
        assert!(html.contains("Kata Sandi"));
        assert!(html.contains("Daftar akun baru"));
        assert!(html.contains("Lupa kata sandi?"));
    }
}

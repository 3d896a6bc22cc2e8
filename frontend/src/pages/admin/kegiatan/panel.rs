use super::components::{form::KegiatanForm, list::KegiatanList};
use super::view_model::use_kegiatan_view_model;
use crate::components::layout::{ErrorMessage, Layout, SuccessMessage};
use leptos::*;

#[component]
pub fn KegiatanAdminPanel() -> impl IntoView {
    let vm = use_kegiatan_view_model();
    let error = vm.error;
    let success = vm.success;
    let loading = vm.fetch_action.pending();

    {
        let vm = vm.clone();
        create_effect(move |_| {
            vm.load();
        });
    }

    view! {
        <Layout>
            <div class="max-w-3xl mx-auto space-y-6 px-4">
                <h2 class="text-2xl font-bold text-fg">"Kelola Kegiatan"</h2>

                {move || error.get().map(|msg| view! { <ErrorMessage message=msg /> })}
                {move || success.get().map(|msg| view! { <SuccessMessage message=msg /> })}

                <KegiatanForm vm=vm.clone() />

                <Show when=move || loading.get()>
                    <p class="text-sm text-fg-muted">"Memuat daftar kegiatan..."</p>
                </Show>

                <KegiatanList vm=vm.clone() />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_form_and_list_sections() {
        let html = render_to_string(|| {
            provide_auth(Some(admin_user()));
            view! { <KegiatanAdminPanel /> }
        });
        assert!(html.contains("Kelola Kegiatan"));
        assert!(html.contains("Tambah Kegiatan"));
        assert!(html.contains("Daftar Kegiatan"));
    }
}

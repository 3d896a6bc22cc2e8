use super::components::{detail::PresensiDetail, filters::PresensiFilters};
use super::view_model::use_presensi_admin_view_model;
use crate::components::empty_state::EmptyState;
use crate::components::layout::{ErrorMessage, Layout};
use leptos::*;

#[component]
pub fn PresensiAdminPanel() -> impl IntoView {
    let vm = use_presensi_admin_view_model();
    let filtered = vm.filtered;
    let error = vm.error;
    let loading = vm.fetch_action.pending();

    {
        let vm = vm.clone();
        create_effect(move |_| {
            vm.load();
        });
    }

    let select_vm = vm.clone();

    view! {
        <Layout>
            <div class="max-w-5xl mx-auto space-y-6 px-4">
                <h2 class="text-2xl font-bold text-fg">"Data Presensi"</h2>

                {move || error.get().map(|msg| view! { <ErrorMessage message=msg /> })}

                <PresensiFilters vm=vm.clone() />
                <PresensiDetail vm=vm.clone() />

                <Show when=move || loading.get()>
                    <p class="text-sm text-fg-muted">"Memuat data presensi..."</p>
                </Show>

                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=move || {
                        view! {
                            <EmptyState
                                title="Tidak ada data presensi"
                                description="Coba ubah filter pencarian"
                            />
                        }
                    }
                >
                    <div class="rounded-lg border border-border bg-surface-elevated overflow-x-auto">
                        <table class="min-w-full text-sm">
                            <thead>
                                <tr class="text-left text-fg-muted border-b border-border">
                                    <th class="py-2 px-4">"Nama"</th>
                                    <th class="py-2 px-4">"Kode QR"</th>
                                    <th class="py-2 px-4">"Jenis"</th>
                                    <th class="py-2 px-4">"Status"</th>
                                    <th class="py-2 px-4">"Waktu"</th>
                                    <th class="py-2 px-4"></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || filtered.get()
                                    key=|record| record.id
                                    children={
                                        let select_vm = select_vm.clone();
                                        move |record| {
                                            let select_vm = select_vm.clone();
                                            let for_select = record.clone();
                                            view! {
                                                <tr class="border-b border-border last:border-b-0">
                                                    <td class="py-2 px-4 font-medium text-fg">{record.nama.clone()}</td>
                                                    <td class="py-2 px-4 font-mono">{record.qrcode_text.clone()}</td>
                                                    <td class="py-2 px-4">{record.jenis.clone()}</td>
                                                    <td class="py-2 px-4">{record.status.clone()}</td>
                                                    <td class="py-2 px-4">{record.waktu_presensi.clone()}</td>
                                                    <td class="py-2 px-4 text-right">
                                                        <button
                                                            class="text-sm font-medium text-link hover:text-link-hover"
                                                            on:click=move |_| select_vm.select(&for_select)
                                                        >
                                                            "Riwayat"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
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
    fn renders_filters_and_empty_state() {
        let html = render_to_string(|| {
            provide_auth(Some(admin_user()));
            view! { <PresensiAdminPanel /> }
        });
        assert!(html.contains("Data Presensi"));
        assert!(html.contains("Semua Status"));
        assert!(html.contains("Tidak ada data presensi"));
    }
}

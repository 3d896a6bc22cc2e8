use crate::pages::admin::presensi::view_model::PresensiAdminViewModel;
use leptos::*;

#[component]
pub fn PresensiDetail(vm: PresensiAdminViewModel) -> impl IntoView {
    let detail = vm.detail;
    let loading = vm.detail_action.pending();
    let close_vm = vm.clone();

    view! {
        <Show when=move || detail.get().user_id.is_some()>
            <div class="rounded-lg border border-border bg-surface-elevated p-4 space-y-3">
                <div class="flex items-center justify-between">
                    <h3 class="text-lg font-semibold text-fg">
                        {move || format!("Riwayat: {}", detail.get().nama)}
                    </h3>
                    <button
                        class="text-sm text-fg-muted hover:text-fg"
                        on:click={
                            let close_vm = close_vm.clone();
                            move |_| close_vm.close_detail()
                        }
                    >
                        "Tutup"
                    </button>
                </div>
                <Show when=move || loading.get()>
                    <p class="text-sm text-fg-muted">"Memuat riwayat..."</p>
                </Show>
                <table class="min-w-full text-sm">
                    <thead>
                        <tr class="text-left text-fg-muted">
                            <th class="py-1 pr-4">"Waktu"</th>
                            <th class="py-1 pr-4">"Jenis"</th>
                            <th class="py-1">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || detail.get().records
                            key=|record| record.id
                            children=move |record| {
                                view! {
                                    <tr class="border-t border-border">
                                        <td class="py-1 pr-4">{record.waktu_presensi.clone()}</td>
                                        <td class="py-1 pr-4">{record.jenis.clone()}</td>
                                        <td class="py-1">{record.status.clone()}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

use crate::components::badge::KegiatanStatusBadge;
use crate::components::empty_state::EmptyState;
use crate::pages::admin::kegiatan::view_model::KegiatanViewModel;
use leptos::*;

#[component]
pub fn KegiatanList(vm: KegiatanViewModel) -> impl IntoView {
    let list = vm.list;
    let edit_vm = vm.clone();

    view! {
        <div class="space-y-3">
            <h3 class="text-lg font-semibold text-fg">"Daftar Kegiatan"</h3>
            <Show
                when=move || !list.get().is_empty()
                fallback=|| {
                    view! {
                        <EmptyState
                            title="Belum ada kegiatan"
                            description="Tambahkan kegiatan melalui formulir di atas"
                        />
                    }
                }
            >
                <ul class="divide-y divide-border rounded-lg border border-border bg-surface-elevated">
                    <For
                        each=move || list.get()
                        key=|kegiatan| kegiatan.id
                        children={
                            let edit_vm = edit_vm.clone();
                            move |kegiatan| {
                                let edit_vm = edit_vm.clone();
                                let status = create_rw_signal(kegiatan.status.clone());
                                let for_edit = kegiatan.clone();
                                view! {
                                    <li class="p-4 flex items-start justify-between gap-4">
                                        <div class="space-y-1">
                                            <p class="font-semibold text-fg">{kegiatan.judul.clone()}</p>
                                            <p class="text-sm text-fg-muted">{kegiatan.deskripsi.clone()}</p>
                                            <p class="text-xs text-fg-muted">
                                                {kegiatan.tanggal.format("%d-%m-%Y").to_string()}
                                            </p>
                                        </div>
                                        <div class="flex flex-col items-end gap-2">
                                            <KegiatanStatusBadge status=status />
                                            <button
                                                class="text-sm font-medium text-link hover:text-link-hover"
                                                on:click=move |_| edit_vm.start_edit(&for_edit)
                                            >
                                                "Ubah"
                                            </button>
                                        </div>
                                    </li>
                                }
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::admin::kegiatan::view_model::use_kegiatan_view_model;
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    #[test]
    fn empty_list_shows_empty_state() {
        let html = render_to_string(|| {
            let vm = use_kegiatan_view_model();
            view! { <KegiatanList vm=vm /> }
        });
        assert!(html.contains("Belum ada kegiatan"));
    }

    #[test]
    fn entries_render_with_status_badge() {
        let html = render_to_string(|| {
            let vm = use_kegiatan_view_model();
            vm.list.set(vec![crate::api::Kegiatan {
                id: 1,
                judul: "Kajian Rutin".into(),
                deskripsi: "Kajian mingguan".into(),
                tanggal: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
                status: "Open".into(),
            }]);
            view! { <KegiatanList vm=vm /> }
        });
        assert!(html.contains("Kajian Rutin"));
        assert!(html.contains("Open"));
        assert!(html.contains("01-05-2025"));
    }
}

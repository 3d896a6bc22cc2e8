use super::view_model::use_quran_list_view_model;
use crate::components::empty_state::EmptyState;
use crate::components::layout::{ErrorMessage, Layout};
use leptos::*;
use leptos_router::*;

#[component]
pub fn QuranListPanel() -> impl IntoView {
    let vm = use_quran_list_view_model();
    let filtered = vm.filtered;
    let search = vm.search;
    let error = vm.error;
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
                <h2 class="text-2xl font-bold text-fg">"Al-Quran"</h2>

                <input
                    type="text"
                    class="appearance-none rounded-md block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm"
                    placeholder="Cari surah..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />

                {move || error.get().map(|msg| view! { <ErrorMessage message=msg /> })}

                <Show when=move || loading.get()>
                    <p class="text-sm text-fg-muted">"Memuat daftar surah..."</p>
                </Show>

                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=move || {
                        view! {
                            <EmptyState
                                title="Surah tidak ditemukan"
                                description="Coba kata kunci lain"
                            />
                        }
                    }
                >
                    <ul class="rounded-lg border border-border bg-surface-elevated divide-y divide-border">
                        <For
                            each=move || filtered.get()
                            key=|surah| surah.nomor
                            children=move |surah| {
                                let href = format!("/quran/{}", surah.nomor);
                                view! {
                                    <li>
                                        <A
                                            href=href
                                            class="flex items-center justify-between px-4 py-3 hover:bg-surface-muted"
                                        >
                                            <div class="flex items-center gap-3">
                                                <span class="w-8 h-8 flex items-center justify-center rounded-full bg-surface-muted text-sm font-bold text-fg-muted">
                                                    {surah.nomor}
                                                </span>
                                                <div>
                                                    <p class="text-sm font-medium text-fg">
                                                        {surah.nama_latin.clone()}
                                                    </p>
                                                    <p class="text-xs text-fg-muted">
                                                        {format!("{} ayat", surah.jumlah_ayat)}
                                                        {(!surah.arti.is_empty())
                                                            .then(|| format!(" · {}", surah.arti))}
                                                    </p>
                                                </div>
                                            </div>
                                            <span class="text-lg text-fg">{surah.nama.clone()}</span>
                                        </A>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>
        </Layout>
    }
}

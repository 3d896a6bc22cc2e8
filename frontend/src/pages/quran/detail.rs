use super::view_model::{use_quran_detail_view_model, QuranDetailViewModel};
use crate::components::layout::{ErrorMessage, Layout};
use leptos::*;
use leptos_router::*;

#[component]
pub fn QuranDetailPage() -> impl IntoView {
    let params = use_params_map();
    let nomor = create_memo(move |_| {
        params.with(|p| {
            p.get("id")
                .and_then(|raw| raw.parse::<i32>().ok())
                .unwrap_or(0)
        })
    });
    view! { <QuranDetailPanel nomor=nomor /> }
}

#[component]
pub fn QuranDetailPanel(#[prop(into)] nomor: Signal<i32>) -> impl IntoView {
    let vm = use_quran_detail_view_model();
    let surah = vm.surah;
    let ayat = vm.ayat;
    let error = vm.error;
    let loading = vm.fetch_action.pending();

    {
        let vm = vm.clone();
        create_effect(move |_| {
            vm.load(nomor.get());
        });
    }

    let tafsir_vm = vm.clone();

    view! {
        <Layout>
            <div class="max-w-3xl mx-auto space-y-6 px-4">
                <div class="text-sm">
                    <A href="/quran" class="font-medium text-link hover:text-link-hover">
                        "← Daftar Surah"
                    </A>
                </div>

                {move || error.get().map(|msg| view! { <ErrorMessage message=msg /> })}

                <Show when=move || loading.get()>
                    <p class="text-sm text-fg-muted">"Memuat surah..."</p>
                </Show>

                {move || {
                    surah
                        .get()
                        .map(|detail| {
                            view! {
                                <div class="rounded-lg border border-border bg-surface-elevated p-6 text-center space-y-1">
                                    <h2 class="text-3xl font-bold text-fg">{detail.nama.clone()}</h2>
                                    <p class="text-lg font-semibold text-fg">
                                        {detail.nama_latin.clone()}
                                    </p>
                                    <p class="text-sm text-fg-muted">
                                        {format!("{} ayat", detail.jumlah_ayat)}
                                        {(!detail.arti.is_empty())
                                            .then(|| format!(" · {}", detail.arti))}
                                    </p>
                                </div>
                            }
                        })
                }}

                <ol class="space-y-4">
                    <For
                        each=move || ayat.get()
                        key=|verse| verse.nomor
                        children={
                            let vm = tafsir_vm.clone();
                            move |verse| {
                                let vm = vm.clone();
                                let verse_nomor = verse.nomor;
                                view! {
                                    <li class="rounded-lg border border-border bg-surface-elevated p-4 space-y-2">
                                        <div class="flex items-start justify-between gap-3">
                                            <span class="w-7 h-7 flex items-center justify-center rounded-full bg-surface-muted text-xs font-bold text-fg-muted">
                                                {verse.nomor}
                                            </span>
                                            <p class="flex-1 text-right text-2xl leading-loose text-fg" dir="rtl">
                                                {verse.ar.clone()}
                                            </p>
                                        </div>
                                        {verse
                                            .tr
                                            .clone()
                                            .map(|latin| {
                                                view! {
                                                    <p class="text-sm italic text-fg-muted" inner_html=latin></p>
                                                }
                                            })}
                                        {verse
                                            .terjemahan
                                            .clone()
                                            .map(|arti| view! { <p class="text-sm text-fg">{arti}</p> })}
                                        <button
                                            class="text-sm font-medium text-link hover:text-link-hover"
                                            on:click=move |_| vm.show_tafsir(verse_nomor)
                                        >
                                            "Lihat Tafsir"
                                        </button>
                                    </li>
                                }
                            }
                        }
                    />
                </ol>

                <TafsirModal vm=vm.clone() />
            </div>
        </Layout>
    }
}

#[component]
fn TafsirModal(vm: QuranDetailViewModel) -> impl IntoView {
    let tafsir = vm.tafsir;
    let pending = vm.tafsir_action.pending();
    let close_vm = vm.clone();
    view! {
        <Show when=move || pending.get()>
            <p class="text-sm text-fg-muted text-center">"Memuat tafsir..."</p>
        </Show>
        <Show when=move || tafsir.get().is_some()>
            <div class="fixed inset-0 bg-overlay-backdrop flex items-center justify-center z-50 p-4">
                <div class="max-w-lg w-full max-h-[80vh] overflow-y-auto rounded-lg border border-border bg-surface-elevated p-6 space-y-4">
                    {move || {
                        tafsir
                            .get()
                            .map(|found| {
                                view! {
                                    <div class="space-y-3">
                                        <h3 class="text-lg font-semibold text-fg">
                                            {format!("Tafsir Ayat {}", found.ayat)}
                                        </h3>
                                        <p class="text-sm text-fg leading-relaxed">{found.teks}</p>
                                    </div>
                                }
                            })
                    }}
                    <button
                        class="w-full py-2 px-4 border border-border text-sm font-medium rounded-md text-fg bg-surface-muted hover:bg-surface"
                        on:click={
                            let vm = close_vm.clone();
                            move |_| vm.close_tafsir()
                        }
                    >
                        "Tutup"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_back_link_without_data() {
        let html = render_to_string(|| {
            provide_auth(Some(regular_user()));
            let nomor = create_rw_signal(1);
            view! { <QuranDetailPanel nomor=nomor /> }
        });
        assert!(html.contains("Daftar Surah"));
    }
}

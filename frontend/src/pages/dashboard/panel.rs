use super::utils::{greeting, kind_label};
use super::view_model::use_dashboard_view_model;
use crate::components::empty_state::EmptyState;
use crate::components::layout::{ErrorMessage, Layout};
use crate::state::auth::use_auth;
use crate::utils::time;
use leptos::*;
use leptos_router::*;

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let (auth, _) = use_auth();
    let vm = use_dashboard_view_model();
    let history = vm.history;
    let error = vm.error;
    let loading = vm.fetch_action.pending();

    {
        let vm = vm.clone();
        create_effect(move |_| {
            vm.load();
        });
    }

    let greeting_line = move || greeting(auth.get().user.as_ref().map(|u| u.nama.as_str()));
    let pleton_line = move || auth.get().user.as_ref().and_then(|u| u.pleton.clone());
    let current_kind = kind_label(time::attendance_kind_now());

    view! {
        <Layout>
            <div class="max-w-3xl mx-auto space-y-6 px-4">
                <div class="rounded-lg border border-border bg-surface-elevated p-6 space-y-1">
                    <h2 class="text-2xl font-bold text-fg">{greeting_line}</h2>
                    {move || {
                        pleton_line()
                            .map(|pleton| view! { <p class="text-sm text-fg-muted">{pleton}</p> })
                    }}
                    <p class="text-sm text-fg-muted">
                        "Jadwal presensi saat ini: "
                        <span class="font-semibold text-fg">{current_kind.clone()}</span>
                    </p>
                    <div class="pt-3">
                        <A
                            href="/presensi"
                            class="inline-flex items-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
                        >
                            "Pindai QR Presensi"
                        </A>
                    </div>
                </div>

                {move || error.get().map(|msg| view! { <ErrorMessage message=msg /> })}

                <div class="space-y-3">
                    <h3 class="text-lg font-semibold text-fg">"Riwayat Presensi Saya"</h3>

                    <Show when=move || loading.get()>
                        <p class="text-sm text-fg-muted">"Memuat riwayat..."</p>
                    </Show>

                    <Show
                        when=move || !history.get().is_empty()
                        fallback=move || {
                            view! {
                                <EmptyState
                                    title="Belum ada riwayat presensi"
                                    description="Riwayat akan muncul setelah presensi pertama Anda"
                                />
                            }
                        }
                    >
                        <ul class="rounded-lg border border-border bg-surface-elevated divide-y divide-border">
                            <For
                                each=move || history.get()
                                key=|record| record.id
                                children=move |record| {
                                    view! {
                                        <li class="flex items-center justify-between px-4 py-3 text-sm">
                                            <div>
                                                <p class="font-medium text-fg">
                                                    {kind_label(&record.jenis)}
                                                </p>
                                                <p class="text-fg-muted">{record.waktu_presensi.clone()}</p>
                                            </div>
                                            <span class="text-fg-muted">{record.status.clone()}</span>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </div>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_greeting_and_history_section() {
        let html = render_to_string(|| {
            provide_auth(Some(regular_user()));
            view! { <DashboardPanel /> }
        });
        assert!(html.contains("Assalamu&#x27;alaikum, Santri") || html.contains("Assalamu'alaikum, Santri"));
        assert!(html.contains("Riwayat Presensi Saya"));
        assert!(html.contains("Jadwal presensi saat ini"));
    }
}

use super::utils::{pleton_from_code, ScanPhase};
use super::view_model::{use_presensi_view_model, PresensiViewModel};
use crate::components::layout::Layout;
use crate::utils::time;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
type ScannerHolder = Rc<RefCell<Option<super::scanner::CameraScanner>>>;
#[cfg(not(target_arch = "wasm32"))]
type ScannerHolder = Rc<RefCell<Option<()>>>;

#[cfg(target_arch = "wasm32")]
fn start_camera(
    holder: &ScannerHolder,
    video_ref: NodeRef<html::Video>,
    canvas_ref: NodeRef<html::Canvas>,
    vm: PresensiViewModel,
) {
    let scanner = super::scanner::CameraScanner::start(video_ref, canvas_ref, move |code| {
        vm.on_decoded(code);
    });
    *holder.borrow_mut() = Some(scanner);
}

#[cfg(not(target_arch = "wasm32"))]
fn start_camera(
    _holder: &ScannerHolder,
    _video_ref: NodeRef<html::Video>,
    _canvas_ref: NodeRef<html::Canvas>,
    _vm: PresensiViewModel,
) {
}

fn stop_camera(holder: &ScannerHolder) {
    // Dropping the handle stops the capture loop and the camera tracks.
    holder.borrow_mut().take();
}

#[component]
pub fn PresensiPanel() -> impl IntoView {
    let vm = use_presensi_view_model();
    let phase = vm.phase;
    let scanned_code = vm.scanned_code;
    let outcome = vm.outcome;
    let submitting = vm.submit_action.pending();

    let video_ref = create_node_ref::<html::Video>();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let holder: ScannerHolder = Rc::new(RefCell::new(None));

    {
        let holder = holder.clone();
        on_cleanup(move || stop_camera(&holder));
    }

    // The camera loop stops itself on the first decode; the handle is
    // dropped here so a cancelled session releases tracks too.
    {
        let holder = holder.clone();
        create_effect(move |_| {
            if phase.get() != ScanPhase::Scanning {
                stop_camera(&holder);
            }
        });
    }

    let on_start = {
        let holder = holder.clone();
        let vm = vm.clone();
        move |_| {
            vm.start_scanning();
            start_camera(&holder, video_ref, canvas_ref, vm.clone());
        }
    };

    let on_cancel = {
        let vm = vm.clone();
        move |_| vm.cancel_scanning()
    };

    let on_submit = {
        let vm = vm.clone();
        move |_| vm.submit()
    };

    let on_reset = {
        let holder = holder.clone();
        let vm = vm.clone();
        move |_| {
            vm.rescan();
            start_camera(&holder, video_ref, canvas_ref, vm.clone());
        }
    };

    view! {
        <Layout>
            <div class="max-w-lg mx-auto space-y-6 px-4">
                <h2 class="text-2xl font-bold text-fg">"Presensi QR"</h2>
                <p class="text-sm text-fg-muted">
                    {move || format!("Sesi saat ini: presensi {}", time::attendance_kind_now())}
                </p>

                <div class=move || {
                    if phase.get() == ScanPhase::Scanning { "block" } else { "hidden" }
                }>
                    <video
                        node_ref=video_ref
                        autoplay=true
                        playsinline=true
                        class="w-full rounded-lg border border-border bg-black aspect-video"
                    ></video>
                    <canvas node_ref=canvas_ref class="hidden"></canvas>
                    <button
                        class="mt-4 w-full py-2 px-4 rounded-md border border-border text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        on:click=on_cancel
                    >
                        "Batalkan"
                    </button>
                </div>

                <Show when=move || phase.get() == ScanPhase::Idle>
                    <button
                        class="w-full flex justify-center py-3 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
                        on:click=on_start.clone()
                    >
                        <i class="fas fa-qrcode mr-2"></i>
                        "Mulai Pindai"
                    </button>
                </Show>

                <Show when=move || {
                    matches!(phase.get(), ScanPhase::Scanned | ScanPhase::Submitting)
                }>
                    <div class="rounded-lg border border-border bg-surface-elevated p-4 space-y-3">
                        <p class="text-sm text-fg-muted">"Kode terbaca:"</p>
                        <p class="text-lg font-mono font-bold text-fg">
                            {move || scanned_code.get().unwrap_or_default()}
                        </p>
                        {move || {
                            scanned_code
                                .get()
                                .and_then(|code| pleton_from_code(&code))
                                .map(|pleton| {
                                    view! { <p class="text-sm text-fg-muted">{pleton}</p> }
                                })
                        }}
                        <button
                            class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                            disabled=move || submitting.get()
                            on:click=on_submit.clone()
                        >
                            {move || {
                                if submitting.get() { "Mengirim..." } else { "Kirim Presensi" }
                            }}
                        </button>
                    </div>
                </Show>

                <Show when=move || phase.get() == ScanPhase::Result>
                    {move || {
                        outcome
                            .get()
                            .map(|result| {
                                let classes = if result.success {
                                    "rounded-md bg-status-success-bg border border-status-success-border text-status-success-text p-4"
                                } else {
                                    "rounded-md bg-status-error-bg border border-status-error-border text-status-error-text p-4"
                                };
                                view! {
                                    <div class=classes>
                                        <p class="text-sm font-medium">{result.message}</p>
                                    </div>
                                }
                            })
                    }}
                    <button
                        class="w-full py-2 px-4 rounded-md border border-border text-sm font-medium text-fg hover:bg-action-ghost-bg-hover"
                        on:click=on_reset.clone()
                    >
                        "Pindai Lagi"
                    </button>
                </Show>
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
    fn idle_session_offers_scan_button() {
        let html = render_to_string(|| {
            provide_auth(Some(regular_user()));
            view! { <PresensiPanel /> }
        });
        assert!(html.contains("Mulai Pindai"));
        assert!(html.contains("Presensi QR"));
    }
}

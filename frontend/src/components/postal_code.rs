use crate::api::{ApiClient, ApiError, KodeposResponse};
use leptos::*;
use std::rc::Rc;

const FIELD_CLASSES: &str = "appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border sm:text-sm";

/// Region fields auto-filled from a postal-code lookup. They stay
/// editable so the user can correct a wrong match by hand.
#[derive(Clone, Copy)]
pub struct RegionFields {
    pub kelurahan: RwSignal<String>,
    pub kecamatan: RwSignal<String>,
    pub kota: RwSignal<String>,
    pub provinsi: RwSignal<String>,
}

impl RegionFields {
    pub fn new() -> Self {
        Self {
            kelurahan: create_rw_signal(String::new()),
            kecamatan: create_rw_signal(String::new()),
            kota: create_rw_signal(String::new()),
            provinsi: create_rw_signal(String::new()),
        }
    }

    pub fn apply(&self, response: &KodeposResponse) {
        self.kelurahan.set(response.kelurahan.clone());
        self.kecamatan.set(response.kecamatan.clone());
        self.kota.set(response.kota.clone());
        self.provinsi.set(response.provinsi.clone());
    }
}

/// Postal codes are exactly five digits. Everything else a user types
/// is dropped, and input past the fifth digit is ignored.
pub fn sanitize_postal_code(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(5).collect()
}

/// A lookup fires exactly once per complete code: when the sanitized
/// value reaches five digits and differs from the last code queried.
pub fn should_lookup(sanitized: &str, last_queried: Option<&str>) -> bool {
    sanitized.len() == 5 && last_queried != Some(sanitized)
}

#[component]
pub fn PostalCodeLookup(
    #[prop(into)] kode_pos: RwSignal<String>,
    fields: RegionFields,
) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let api = Rc::new(api);
    let last_queried = create_rw_signal(None::<String>);
    let lookup_error = create_rw_signal(None::<String>);

    let lookup_action = {
        let api = api.clone();
        create_action(move |code: &String| {
            let api = api.clone();
            let code = code.clone();
            async move {
                // Failure leaves already-filled fields untouched.
                match api.lookup_kodepos(&code).await {
                    Ok(response) => {
                        fields.apply(&response);
                        lookup_error.set(None);
                    }
                    Err(err) => {
                        lookup_error.set(Some(lookup_failure_message(&err)));
                    }
                }
            }
        })
    };
    let looking_up = lookup_action.pending();

    let on_input = move |ev: leptos::ev::Event| {
        let sanitized = sanitize_postal_code(&event_target_value(&ev));
        kode_pos.set(sanitized.clone());
        if should_lookup(&sanitized, last_queried.get_untracked().as_deref()) {
            last_queried.set(Some(sanitized.clone()));
            lookup_action.dispatch(sanitized);
        } else if sanitized.len() < 5 {
            // Incomplete code clears the status line but keeps whatever
            // region values were already filled in.
            lookup_error.set(None);
        }
    };

    view! {
        <div class="space-y-4">
            <div class="flex flex-col gap-1.5 w-full">
                <label class="text-sm font-bold text-fg-muted ml-1">"Kode Pos"</label>
                <input
                    type="text"
                    inputmode="numeric"
                    class=FIELD_CLASSES
                    placeholder="40286"
                    prop:value=move || kode_pos.get()
                    on:input=on_input
                />
                <Show when=move || looking_up.get()>
                    <p class="text-xs text-fg-muted ml-1">"Mencari wilayah..."</p>
                </Show>
                {move || {
                    lookup_error
                        .get()
                        .map(|msg| view! { <p class="text-xs text-status-error-text ml-1">{msg}</p> })
                }}
            </div>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <RegionField label="Kelurahan" value=fields.kelurahan />
                <RegionField label="Kecamatan" value=fields.kecamatan />
                <RegionField label="Kota/Kabupaten" value=fields.kota />
                <RegionField label="Provinsi" value=fields.provinsi />
            </div>
        </div>
    }
}

#[component]
fn RegionField(#[prop(into)] label: String, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <label class="text-sm font-bold text-fg-muted ml-1">{label}</label>
            <input
                type="text"
                class=FIELD_CLASSES
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

fn lookup_failure_message(error: &ApiError) -> String {
    if error.code == "NOT_FOUND" {
        "Kode pos tidak ditemukan, isi wilayah secara manual".to_string()
    } else {
        error.error.clone()
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_postal_and_region_fields() {
        let html = render_to_string(|| {
            let kode_pos = create_rw_signal(String::new());
            let fields = RegionFields::new();
            view! { <PostalCodeLookup kode_pos=kode_pos fields=fields /> }
        });
        assert!(html.contains("Kode Pos"));
        assert!(html.contains("Kelurahan"));
        assert!(html.contains("Provinsi"));
    }
}

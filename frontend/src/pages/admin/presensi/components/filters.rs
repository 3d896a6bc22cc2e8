use crate::components::forms::{DateField, SelectField, TextField};
use crate::pages::admin::presensi::view_model::PresensiAdminViewModel;
use leptos::*;

const STATUS_CHOICES: [(&str, &str); 4] = [
    ("all", "Semua Status"),
    ("Hadir", "Hadir"),
    ("Izin", "Izin"),
    ("Alpa", "Alpa"),
];

#[component]
pub fn PresensiFilters(vm: PresensiAdminViewModel) -> impl IntoView {
    let reset_vm = vm.clone();
    view! {
        <div class="rounded-lg border border-border bg-surface-elevated p-4 grid grid-cols-1 sm:grid-cols-3 gap-4 items-end">
            <TextField
                label="Cari"
                value=vm.search
                placeholder="Nama atau kode QR"
            />
            <DateField label="Tanggal" value=vm.date />
            <div class="flex items-end gap-2">
                <SelectField
                    label="Status"
                    value=vm.status
                    options=STATUS_CHOICES.to_vec()
                />
                <button
                    class="py-2 px-3 rounded-md border border-border text-sm text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                    on:click=move |_| reset_vm.reset_filters()
                >
                    "Reset"
                </button>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::admin::presensi::view_model::use_presensi_admin_view_model;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_all_three_filter_controls() {
        let html = render_to_string(|| {
            let vm = use_presensi_admin_view_model();
            view! { <PresensiFilters vm=vm /> }
        });
        assert!(html.contains("Cari"));
        assert!(html.contains("Tanggal"));
        assert!(html.contains("Semua Status"));
    }
}

use crate::components::forms::{DateField, SelectField, TextAreaField, TextField};
use crate::pages::admin::kegiatan::utils::STATUS_OPTIONS;
use crate::pages::admin::kegiatan::view_model::{KegiatanViewModel, FORM_ELEMENT_ID};
use leptos::*;

#[component]
pub fn KegiatanForm(vm: KegiatanViewModel) -> impl IntoView {
    let form = vm.form;
    let saving = vm.save_action.pending();
    let is_edit = create_memo(move |_| form.is_edit());

    let submit_vm = vm.clone();
    let cancel_vm = vm.clone();

    view! {
        <form
            id=FORM_ELEMENT_ID
            class="rounded-lg border border-border bg-surface-elevated p-6 space-y-4"
            on:submit=move |ev| {
                ev.prevent_default();
                submit_vm.save();
            }
        >
            <h3 class="text-lg font-semibold text-fg">
                {move || if is_edit.get() { "Ubah Kegiatan" } else { "Tambah Kegiatan" }}
            </h3>
            <TextField label="Judul" value=form.judul placeholder="Kajian Rutin" />
            <TextAreaField
                label="Deskripsi"
                value=form.deskripsi
                placeholder="Kajian mingguan"
            />
            <DateField label="Tanggal" value=form.tanggal />
            <SelectField label="Status" value=form.status options=STATUS_OPTIONS.to_vec() />
            <div class="flex gap-3">
                <button
                    type="submit"
                    disabled=move || saving.get()
                    class="flex-1 py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                >
                    {move || {
                        if saving.get() {
                            "Menyimpan..."
                        } else if is_edit.get() {
                            "Simpan Perubahan"
                        } else {
                            "Tambah"
                        }
                    }}
                </button>
                <Show when=move || is_edit.get()>
                    {
                        let cancel_vm = cancel_vm.clone();
                        view! {
                            <button
                                type="button"
                                class="py-2 px-4 rounded-md border border-border text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                                on:click=move |_| cancel_vm.cancel_edit()
                            >
                                "Batal"
                            </button>
                        }
                    }
                </Show>
            </div>
        </form>
    }
}

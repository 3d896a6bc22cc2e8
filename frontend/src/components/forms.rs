use leptos::*;

const FIELD_CLASSES: &str = "appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border sm:text-sm";

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".into());
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <label class="text-sm font-bold text-fg-muted ml-1">{label}</label>
            <input
                type=input_type
                class=FIELD_CLASSES
                placeholder=placeholder
                disabled=disabled
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn PasswordField(
    #[prop(into)] label: String,
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <label class="text-sm font-bold text-fg-muted ml-1">{label}</label>
            <div class="relative">
                <input
                    type=move || if visible.get() { "text" } else { "password" }
                    class=FIELD_CLASSES
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 px-3 flex items-center text-fg-muted hover:text-fg"
                    aria-label=move || if visible.get() { "Sembunyikan kata sandi" } else { "Tampilkan kata sandi" }
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    <i class=move || if visible.get() { "fas fa-eye-slash" } else { "fas fa-eye" }></i>
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] value: RwSignal<String>,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <label class="text-sm font-bold text-fg-muted ml-1">{label}</label>
            <select
                class=FIELD_CLASSES
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(val, text)| {
                        view! {
                            <option value=val selected=move || value.get() == val>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <label class="text-sm font-bold text-fg-muted ml-1">{label}</label>
            <textarea
                class=FIELD_CLASSES
                rows=rows.unwrap_or(3)
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

#[component]
pub fn DateField(
    #[prop(into)] label: String,
    #[prop(into)] value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <label class="text-sm font-bold text-fg-muted ml-1">{label}</label>
            <input
                type="date"
                class=FIELD_CLASSES
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

use leptos::*;

/// Horizontal step indicator for multi-step wizards (registration,
/// password reset). Steps are 1-based.
#[component]
pub fn StepProgress(
    labels: Vec<&'static str>,
    #[prop(into)] current: Signal<usize>,
) -> impl IntoView {
    let total = labels.len();
    view! {
        <ol class="flex items-center justify-between w-full mb-6">
            {labels
                .into_iter()
                .enumerate()
                .map(|(index, label)| {
                    let step = index + 1;
                    view! {
                        <li class="flex-1 flex flex-col items-center gap-1">
                            <span class=move || {
                                let base = "w-8 h-8 flex items-center justify-center rounded-full text-sm font-bold border-2";
                                if step < current.get() {
                                    format!("{} bg-status-success-bg border-status-success-border text-status-success-text", base)
                                } else if step == current.get() {
                                    format!("{} bg-action-primary-bg border-action-primary-border text-action-primary-text", base)
                                } else {
                                    format!("{} bg-surface-muted border-border text-fg-muted", base)
                                }
                            }>
                                {step}
                            </span>
                            <span class="text-xs text-fg-muted">{label}</span>
                        </li>
                    }
                })
                .collect_view()}
            {(total == 0).then(|| view! { <li class="hidden"></li> })}
        </ol>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_all_step_labels() {
        let html = render_to_string(|| {
            let current = create_rw_signal(2usize);
            view! {
                <StepProgress
                    labels=vec!["Akun", "Alamat", "Konfirmasi"]
                    current=current
                />
            }
        });
        assert!(html.contains("Akun"));
        assert!(html.contains("Alamat"));
        assert!(html.contains("Konfirmasi"));
    }
}

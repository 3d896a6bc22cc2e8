use leptos::*;

/// Kegiatan status values come from the server as free text. Anything
/// outside the two known states renders with the neutral style.
pub fn status_badge_classes(status: &str) -> &'static str {
    match status {
        "Open" => "bg-status-success-bg text-status-success-text border-status-success-border",
        "Closed" => "bg-status-error-bg text-status-error-text border-status-error-border",
        _ => "bg-surface-muted text-fg-muted border-border",
    }
}

#[component]
pub fn KegiatanStatusBadge(#[prop(into)] status: Signal<String>) -> impl IntoView {
    view! {
        <span class=move || {
            format!(
                "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium border {}",
                status_badge_classes(&status.get())
            )
        }>{move || status.get()}</span>
    }
}

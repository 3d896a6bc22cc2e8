use crate::components::empty_state::EmptyState;
use crate::components::layout::Layout;
use leptos::*;

/// Placeholder until the activity rundown feed goes live.
#[component]
pub fn RundownPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="max-w-3xl mx-auto space-y-6 px-4">
                <h2 class="text-2xl font-bold text-fg">"Rundown Kegiatan"</h2>
                <EmptyState
                    title="Rundown belum tersedia"
                    description="Jadwal kegiatan akan tampil di sini"
                />
            </div>
        </Layout>
    }
}

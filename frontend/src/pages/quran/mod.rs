use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod detail;
mod panel;

pub use detail::QuranDetailPage;
pub use panel::QuranListPanel;

#[component]
pub fn QuranListPage() -> impl IntoView {
    view! { <QuranListPanel /> }
}

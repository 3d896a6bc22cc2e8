use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::KegiatanAdminPanel;

#[component]
pub fn KegiatanAdminPage() -> impl IntoView {
    view! { <KegiatanAdminPanel /> }
}

use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::PresensiAdminPanel;

#[component]
pub fn PresensiAdminPage() -> impl IntoView {
    view! { <PresensiAdminPanel /> }
}

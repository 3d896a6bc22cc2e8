use leptos::*;

pub mod repository;
pub mod scanner;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::PresensiPanel;

#[component]
pub fn PresensiPage() -> impl IntoView {
    view! { <PresensiPanel /> }
}

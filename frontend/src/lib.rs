use leptos::*;
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

use pages::{
    admin::kegiatan::KegiatanAdminPage, admin::presensi::PresensiAdminPage,
    dashboard::DashboardPage, forgot_password::ForgotPasswordPage, home::HomePage,
    login::LoginPage, presensi::PresensiPage, quran::QuranDetailPage, quran::QuranListPage,
    register::RegisterPage, rundown::RundownPage,
};

/// Boots the CSR app: logging, runtime config, then mount.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting Santri Siap Guna portal (wasm)");

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__SSG_ENV is present (env.js), it takes precedence.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    mount_to_body(App);
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <crate::state::auth::AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=PublicLogin/>
                    <Route path="/register" view=PublicRegister/>
                    <Route path="/forgot-password" view=PublicForgotPassword/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/presensi" view=ProtectedPresensi/>
                    <Route path="/rundown" view=ProtectedRundown/>
                    <Route path="/quran" view=ProtectedQuranList/>
                    <Route path="/quran/:id" view=ProtectedQuranDetail/>
                    <Route path="/admin/kegiatan" view=ProtectedKegiatanAdmin/>
                    <Route path="/admin/presensi" view=ProtectedPresensiAdmin/>
                </Routes>
            </Router>
        </crate::state::auth::AuthProvider>
    }
}

#[component]
fn PublicLogin() -> impl IntoView {
    view! { <crate::components::guard::RedirectIfAuthenticated><LoginPage/></crate::components::guard::RedirectIfAuthenticated> }
}

#[component]
fn PublicRegister() -> impl IntoView {
    view! { <crate::components::guard::RedirectIfAuthenticated><RegisterPage/></crate::components::guard::RedirectIfAuthenticated> }
}

#[component]
fn PublicForgotPassword() -> impl IntoView {
    view! { <crate::components::guard::RedirectIfAuthenticated><ForgotPasswordPage/></crate::components::guard::RedirectIfAuthenticated> }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><DashboardPage/></crate::components::guard::RequireAuth> }
}

#[component]
fn ProtectedPresensi() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><PresensiPage/></crate::components::guard::RequireAuth> }
}

#[component]
fn ProtectedRundown() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><RundownPage/></crate::components::guard::RequireAuth> }
}

#[component]
fn ProtectedQuranList() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><QuranListPage/></crate::components::guard::RequireAuth> }
}

#[component]
fn ProtectedQuranDetail() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><QuranDetailPage/></crate::components::guard::RequireAuth> }
}

#[component]
fn ProtectedKegiatanAdmin() -> impl IntoView {
    view! { <crate::components::guard::RequireAdmin><KegiatanAdminPage/></crate::components::guard::RequireAdmin> }
}

#[component]
fn ProtectedPresensiAdmin() -> impl IntoView {
    view! { <crate::components::guard::RequireAdmin><PresensiAdminPage/></crate::components::guard::RequireAdmin> }
}

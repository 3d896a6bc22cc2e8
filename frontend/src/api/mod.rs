mod auth;
pub mod client;
mod kegiatan;
mod kodepos;
mod presensi;
mod quran;
pub mod types;

pub use client::ApiClient;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;

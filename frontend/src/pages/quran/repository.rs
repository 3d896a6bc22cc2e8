use crate::api::{ApiClient, ApiError, Ayat, Surah, SurahDetail, Tafsir};
use std::rc::Rc;

#[derive(Clone)]
pub struct QuranRepository {
    client: Rc<ApiClient>,
}

impl QuranRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_surah_list(&self) -> Result<Vec<Surah>, ApiError> {
        self.client.get_surah_list().await
    }

    pub async fn fetch_surah(&self, nomor: i32) -> Result<SurahDetail, ApiError> {
        self.client.get_surah(nomor).await
    }

    pub async fn fetch_ayat(&self, nomor: i32) -> Result<Vec<Ayat>, ApiError> {
        self.client.get_ayat_window(nomor).await
    }

    pub async fn fetch_tafsir(&self, nomor: i32, ayat: i32) -> Result<Tafsir, ApiError> {
        self.client.get_tafsir(nomor, ayat).await
    }
}

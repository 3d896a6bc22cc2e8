use super::{
    client::ApiClient,
    types::{ApiError, Ayat, Surah, SurahDetail, Tafsir},
};

/// Number of verses fetched per surah; no surah exceeds this window.
const AYAT_WINDOW: u32 = 300;

impl ApiClient {
    pub async fn get_surah_list(&self) -> Result<Vec<Surah>, ApiError> {
        let base_url = self.resolved_quran_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/surah", base_url)))
            .await?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Gagal membaca respons: {}", e)))
        } else {
            Err(Self::parse_error(response).await)
        }
    }

    pub async fn get_surah(&self, nomor: i32) -> Result<SurahDetail, ApiError> {
        let base_url = self.resolved_quran_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/surah/{}", base_url, nomor)))
            .await?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Gagal membaca respons: {}", e)))
        } else {
            Err(Self::parse_error(response).await)
        }
    }

    pub async fn get_ayat_window(&self, nomor: i32) -> Result<Vec<Ayat>, ApiError> {
        let base_url = self.resolved_quran_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/ayatweb/{}/0/0/{}",
                base_url, nomor, AYAT_WINDOW
            )))
            .await?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Gagal membaca respons: {}", e)))
        } else {
            Err(Self::parse_error(response).await)
        }
    }

    pub async fn get_tafsir(&self, nomor: i32, ayat: i32) -> Result<Tafsir, ApiError> {
        let base_url = self.resolved_quran_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/tafsir/{}/{}", base_url, nomor, ayat)),
            )
            .await?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Gagal membaca respons: {}", e)))
        } else {
            Err(Self::parse_error(response).await)
        }
    }
}

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{
    client::ApiClient,
    types::{ApiError, MessageResponse, PresensiListResponse, PresensiRecord, PresensiSubmission},
};

impl ApiClient {
    /// Records a scanned attendance. The server message is surfaced verbatim
    /// either way: success bodies carry `{ message }`, failures go through
    /// the shared error path.
    pub async fn submit_presensi(
        &self,
        payload: PresensiSubmission,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/users/presensi", base_url))
                    .headers(self.auth_headers())
                    .json(&payload),
            )
            .await?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Gagal membaca respons: {}", e)))
        } else {
            Err(Self::parse_error(response).await)
        }
    }

    pub async fn get_all_presensi(&self) -> Result<Vec<PresensiRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/admin/get-presensi", base_url))
                    .headers(self.auth_headers()),
            )
            .await?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            let body: PresensiListResponse = response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Gagal membaca respons: {}", e)))?;
            if body.success {
                Ok(body.data)
            } else {
                Err(ApiError::unknown(body.message.unwrap_or_else(|| {
                    "Gagal memuat daftar presensi.".to_string()
                })))
            }
        } else {
            Err(Self::parse_error(response).await)
        }
    }

    pub async fn get_presensi_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<PresensiRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let encoded = utf8_percent_encode(user_id, NON_ALPHANUMERIC);
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/users/get-presensi?user_id={}", base_url, encoded))
                    .headers(self.auth_headers()),
            )
            .await?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            let body: PresensiListResponse = response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Gagal membaca respons: {}", e)))?;
            if body.success {
                Ok(body.data)
            } else {
                Err(ApiError::unknown(body.message.unwrap_or_else(|| {
                    "Gagal memuat riwayat presensi.".to_string()
                })))
            }
        } else {
            Err(Self::parse_error(response).await)
        }
    }
}

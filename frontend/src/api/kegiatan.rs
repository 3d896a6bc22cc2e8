use super::{
    client::ApiClient,
    types::{
        ApiError, CreateKegiatanRequest, Kegiatan, KegiatanListResponse, MessageResponse,
        UpdateKegiatanRequest,
    },
};

impl ApiClient {
    pub async fn get_kegiatan(&self) -> Result<Vec<Kegiatan>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/admin/get-kegiatan", base_url))
                    .headers(self.auth_headers()),
            )
            .await?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            let body: KegiatanListResponse = response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Gagal membaca respons: {}", e)))?;
            if body.success {
                Ok(body.data)
            } else {
                Err(ApiError::unknown(body.message.unwrap_or_else(|| {
                    "Gagal memuat daftar kegiatan.".to_string()
                })))
            }
        } else {
            Err(Self::parse_error(response).await)
        }
    }

    pub async fn create_kegiatan(
        &self,
        request: CreateKegiatanRequest,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/admin/create-kegiatan", base_url))
                    .headers(self.auth_headers())
                    .json(&request),
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

    pub async fn update_kegiatan(
        &self,
        request: UpdateKegiatanRequest,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/admin/update-kegiatan", base_url))
                    .headers(self.auth_headers())
                    .json(&request),
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
}

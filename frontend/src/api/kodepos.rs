use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{
    client::ApiClient,
    types::{ApiError, KodeposResponse},
};

impl ApiClient {
    /// Looks up the four dependent address fields for a 5-digit postal code.
    pub async fn lookup_kodepos(&self, kode_pos: &str) -> Result<KodeposResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let encoded = utf8_percent_encode(kode_pos, NON_ALPHANUMERIC);
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/users/kodepos?kode_pos={}", base_url, encoded)),
            )
            .await?;

        let status = response.status();
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

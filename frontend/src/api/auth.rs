use super::{
    client::ApiClient,
    types::{
        ApiError, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
        ResetPasswordRequest, SendOtpRequest, VerifyOtpRequest,
    },
};
use crate::utils::storage as storage_utils;

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/users/login", base_url))
                    .json(&request),
            )
            .await?;

        if response.status().is_success() {
            let login_response: LoginResponse = response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Gagal membaca respons: {}", e)))?;
            persist_session(&login_response)?;
            Ok(login_response)
        } else {
            Err(Self::parse_error(response).await)
        }
    }

    /// Logout is a client-side operation: the backend holds no session state
    /// for this token, so clearing both stores is all there is to it.
    pub fn logout(&self) {
        storage_utils::clear_token();
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/users/register", base_url))
                    .json(&request),
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

    pub async fn send_otp(&self, telepon: String) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/users/send-otp", base_url))
                    .json(&SendOtpRequest { telepon }),
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

    pub async fn verify_otp(&self, telepon: String, otp: String) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/users/verify-otp", base_url))
                    .json(&VerifyOtpRequest { telepon, otp }),
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

    pub async fn reset_password(
        &self,
        request: ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/users/reset-password", base_url))
                    .json(&request),
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

fn persist_session(response: &LoginResponse) -> Result<(), ApiError> {
    storage_utils::persist_token(&response.token)
        .map_err(|_| ApiError::unknown("Gagal menyimpan token sesi"))?;
    let user_json = serde_json::to_string(&response.user)
        .map_err(|_| ApiError::unknown("Gagal menyimpan profil pengguna"))?;
    storage_utils::persist_user_json(&user_json)
        .map_err(|_| ApiError::unknown("Gagal menyimpan profil pengguna"))?;
    Ok(())
}

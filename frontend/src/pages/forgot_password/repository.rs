use crate::api::{ApiClient, ApiError, MessageResponse, ResetPasswordRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct ForgotPasswordRepository {
    client: Rc<ApiClient>,
}

impl ForgotPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn send_otp(&self, telepon: String) -> Result<MessageResponse, ApiError> {
        self.client.send_otp(telepon).await
    }

    pub async fn verify_otp(
        &self,
        telepon: String,
        otp: String,
    ) -> Result<MessageResponse, ApiError> {
        self.client.verify_otp(telepon, otp).await
    }

    pub async fn reset_password(
        &self,
        request: ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.reset_password(request).await
    }
}

use crate::api::{ApiClient, ApiError, MessageResponse, PresensiSubmission};
use std::rc::Rc;

#[derive(Clone)]
pub struct PresensiRepository {
    client: Rc<ApiClient>,
}

impl PresensiRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn submit(
        &self,
        submission: PresensiSubmission,
    ) -> Result<MessageResponse, ApiError> {
        self.client.submit_presensi(submission).await
    }
}

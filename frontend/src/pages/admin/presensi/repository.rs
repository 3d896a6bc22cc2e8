use crate::api::{ApiClient, ApiError, PresensiRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct PresensiAdminRepository {
    client: Rc<ApiClient>,
}

impl PresensiAdminRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_all(&self) -> Result<Vec<PresensiRecord>, ApiError> {
        self.client.get_all_presensi().await
    }

    pub async fn fetch_by_user(&self, user_id: &str) -> Result<Vec<PresensiRecord>, ApiError> {
        self.client.get_presensi_by_user(user_id).await
    }
}

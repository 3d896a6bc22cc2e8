use crate::api::{ApiClient, ApiError, PresensiRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_history(&self, user_id: &str) -> Result<Vec<PresensiRecord>, ApiError> {
        self.client.get_presensi_by_user(user_id).await
    }
}

use crate::api::{
    ApiClient, ApiError, CreateKegiatanRequest, Kegiatan, MessageResponse, UpdateKegiatanRequest,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct KegiatanRepository {
    client: Rc<ApiClient>,
}

impl KegiatanRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_all(&self) -> Result<Vec<Kegiatan>, ApiError> {
        self.client.get_kegiatan().await
    }

    pub async fn create(
        &self,
        request: CreateKegiatanRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.create_kegiatan(request).await
    }

    pub async fn update(
        &self,
        request: UpdateKegiatanRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.update_kegiatan(request).await
    }
}

use crate::api::{ApiClient, ApiError, MessageResponse, RegisterRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct RegisterRepository {
    client: Rc<ApiClient>,
}

impl RegisterRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<MessageResponse, ApiError> {
        self.client.register(request).await
    }
}

use common::error::ApiError;
use common::model::template::Template;
use common::requests::{endpoints, TemplatePayload};

use super::ApiClient;

pub async fn list(client: &ApiClient) -> Result<Vec<Template>, ApiError> {
    client.get_json(endpoints::TEMPLATES).await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<Template, ApiError> {
    client.get_json(&endpoints::template(id)).await
}

pub async fn create(client: &ApiClient, payload: &TemplatePayload) -> Result<Template, ApiError> {
    client.post_json(endpoints::TEMPLATES, payload).await
}

pub async fn update(client: &ApiClient, id: &str, payload: &TemplatePayload) -> Result<Template, ApiError> {
    client.put_json(&endpoints::template(id), payload).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&endpoints::template(id)).await
}

/// Empty `.xlsx` workbook with the template's columns as headers.
pub async fn download(client: &ApiClient, id: &str) -> Result<Vec<u8>, ApiError> {
    client.get_bytes(&endpoints::template_download(id)).await
}

use web_sys::{File, FormData};

use common::error::ApiError;
use common::model::data_file::{DataFile, DataFileDetail, DataPreview, UploadReceipt};
use common::requests::endpoints;

use super::ApiClient;

pub async fn list(client: &ApiClient) -> Result<Vec<DataFile>, ApiError> {
    client.get_json(endpoints::DATA).await
}

pub async fn analysis(client: &ApiClient, id: &str) -> Result<DataFileDetail, ApiError> {
    client.get_json(&endpoints::data_analysis(id)).await
}

pub async fn preview(client: &ApiClient, id: &str, rows: usize) -> Result<DataPreview, ApiError> {
    client.get_json(&endpoints::data_preview(id, rows)).await
}

/// Uploads a spreadsheet to be parsed and validated against a template.
pub async fn upload(client: &ApiClient, template_id: &str, file: &File) -> Result<UploadReceipt, ApiError> {
    let form = FormData::new().map_err(|_| ApiError::Decode("no se pudo crear el formulario".to_string()))?;
    form.append_with_str("template_id", template_id)
        .and_then(|_| form.append_with_blob_and_filename("file", file, &file.name()))
        .map_err(|_| ApiError::Decode("no se pudo adjuntar el archivo".to_string()))?;
    client.post_multipart(endpoints::DATA_UPLOAD, form).await
}

use common::error::ApiError;
use common::model::dashboard::{Dashboard, DashboardDataRaw};
use common::requests::{endpoints, CreateDashboardPayload};
use common::widgets::payload::DashboardView;

use super::ApiClient;

pub async fn list(client: &ApiClient) -> Result<Vec<Dashboard>, ApiError> {
    client.get_json(endpoints::DASHBOARDS).await
}

pub async fn create(client: &ApiClient, payload: &CreateDashboardPayload) -> Result<Dashboard, ApiError> {
    client.post_json(endpoints::DASHBOARDS, payload).await
}

/// Computed widget data, decoded per widget before it reaches any renderer.
pub async fn data(client: &ApiClient, id: &str) -> Result<DashboardView, ApiError> {
    let raw: DashboardDataRaw = client.get_json(&endpoints::dashboard_data(id)).await?;
    let view = DashboardView::from(raw);
    for widget in &view.widgets {
        if let Err(err) = &widget.payload {
            gloo_console::warn!(format!("Widget \"{}\" (posición {}): {}", widget.title, widget.position, err));
        }
    }
    Ok(view)
}
